//! nebachiv-profile - command-line front end for the rider profile engine.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use nebachiv_profile::adapters::{FsRiderProfileRepository, InMemoryEventBus};
use nebachiv_profile::application::{
    ListSubmissionsHandler, ListSubmissionsQuery, SubmitQuestionnaireCommand,
    SubmitQuestionnaireHandler,
};
use nebachiv_profile::config::AppConfig;
use nebachiv_profile::domain::foundation::{CommandMetadata, UserId};
use nebachiv_profile::domain::questionnaire::{
    compute_beginner_profile, describe_profile, fixtures, BeginnerProfile, Profile3D,
    ProfileCalculator, QuestionnaireAnswers, QuestionnaireKind,
};

#[derive(Debug, Parser)]
#[command(name = "nebachiv-profile", version, about = "Rider risk profile calculator")]
struct Args {
    /// Reference year for experience calculations (overrides configuration)
    #[arg(long, global = true)]
    reference_year: Option<i32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score an answers JSON file ("-" reads stdin)
    Score { file: PathBuf },

    /// Describe an archetype by label or key
    Describe { profile_type: String },

    /// Print the profiles of the built-in reference answer sets
    Fixtures,

    /// Score, store and publish a rider's submission
    Submit {
        #[arg(long)]
        user: String,

        /// Storage directory (overrides configuration)
        #[arg(long)]
        data_dir: Option<PathBuf>,

        file: PathBuf,
    },

    /// List a rider's stored submissions
    History {
        #[arg(long)]
        user: String,

        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Only the official submission
        #[arg(long)]
        official: bool,
    },
}

#[derive(Debug, Serialize)]
struct ScoreReport {
    kind: QuestionnaireKind,
    profile: Profile3D,
    #[serde(skip_serializing_if = "Option::is_none")]
    beginner: Option<BeginnerProfile>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(year) = args.reference_year {
        config.scoring.reference_year = Some(year);
    }
    config.validate().context("Invalid configuration")?;
    config.logging.init_tracing();

    let calculator = config.scoring.calculator();

    match args.command {
        Commands::Score { file } => {
            let answers = load_answers(&file)?;
            print_json(&score_report(&calculator, &answers))?;
        }
        Commands::Describe { profile_type } => {
            print_json(&describe_profile(&profile_type))?;
        }
        Commands::Fixtures => {
            let reports: Vec<JsonValue> = fixtures::fixtures()
                .into_iter()
                .map(|(name, answers)| {
                    serde_json::json!({
                        "fixture": name,
                        "profile": calculator.compute(&answers),
                    })
                })
                .collect();
            print_json(&reports)?;
        }
        Commands::Submit {
            user,
            data_dir,
            file,
        } => {
            let answers = load_answers(&file)?;
            let user_id = UserId::new(user).context("Invalid user id")?;
            let repository = Arc::new(FsRiderProfileRepository::new(
                data_dir.unwrap_or(config.storage.data_dir),
            ));
            let handler =
                SubmitQuestionnaireHandler::new(repository, Arc::new(InMemoryEventBus::new()), calculator);

            let result = handler
                .handle(
                    SubmitQuestionnaireCommand { answers },
                    CommandMetadata::new(user_id).with_source("cli"),
                )
                .await
                .context("Submission failed")?;
            print_json(&result.submission)?;
        }
        Commands::History {
            user,
            data_dir,
            official,
        } => {
            let user_id = UserId::new(user).context("Invalid user id")?;
            let repository = Arc::new(FsRiderProfileRepository::new(
                data_dir.unwrap_or(config.storage.data_dir),
            ));
            let query = if official {
                ListSubmissionsQuery::official(user_id)
            } else {
                ListSubmissionsQuery::all(user_id)
            };

            let submissions = ListSubmissionsHandler::new(repository)
                .handle(query)
                .await
                .context("Failed to read submissions")?;
            print_json(&submissions)?;
        }
    }

    Ok(())
}

fn score_report(calculator: &ProfileCalculator, answers: &QuestionnaireAnswers) -> ScoreReport {
    let kind = answers.kind();
    ScoreReport {
        kind,
        profile: calculator.compute(answers),
        beginner: (kind == QuestionnaireKind::Beginner).then(|| compute_beginner_profile(answers)),
    }
}

/// Reads answers from a JSON file, or stdin for "-".
fn load_answers(path: &Path) -> Result<QuestionnaireAnswers> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read answers from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read answers file {}", path.display()))?
    };
    parse_answers(&content).with_context(|| format!("Invalid answers JSON in {}", path.display()))
}

fn parse_answers(content: &str) -> Result<QuestionnaireAnswers> {
    let value: JsonValue = serde_json::from_str(content)?;
    anyhow::ensure!(value.is_object(), "answers must be a JSON object");
    Ok(QuestionnaireAnswers::from_json(value))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
