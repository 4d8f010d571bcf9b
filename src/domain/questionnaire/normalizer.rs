//! Answer Normalizer - raw answers to named sub-scores and rider facts.
//!
//! Every rule reads through the tolerant accessors on
//! [`QuestionnaireAnswers`], so a missing or malformed answer simply adds
//! nothing. The normalizer is total: it never fails and never panics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::answers::QuestionnaireAnswers;
use super::vocabulary::*;

/// Which axis a dimension feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Risk,
    Skill,
    /// Overestimation adjustments; subtracted from the adequacy axis.
    Adequacy,
    SafetyKnowledge,
}

/// Canonical sub-score dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    // Risk-taking
    Demographics,
    Machine,
    CitySpeed,
    GearUsage,
    RidingStyle,
    LaneFiltering,
    NearMisses,
    CrashHistory,
    RiskAttitude,
    LanePosition,
    IncidentPattern,

    // Technical skill
    Experience,
    LaneFilteringSkill,
    Training,
    BrakingDistanceAccuracy,
    BrakingTechnique,
    Maneuvering,
    EmergencyResponse,
    HandlebarGrip,
    LanePositioning,
    CorneringTheory,
    WetBraking,
    IncidentExperience,

    // Adequacy (overestimation adjustments)
    SelfAssessmentBias,
    ExperienceCalibration,
    RiskRecognition,

    // Safety knowledge
    HazardAwareness,
}

impl Dimension {
    pub const COUNT: usize = 27;

    pub const ALL: [Dimension; Dimension::COUNT] = [
        Dimension::Demographics,
        Dimension::Machine,
        Dimension::CitySpeed,
        Dimension::GearUsage,
        Dimension::RidingStyle,
        Dimension::LaneFiltering,
        Dimension::NearMisses,
        Dimension::CrashHistory,
        Dimension::RiskAttitude,
        Dimension::LanePosition,
        Dimension::IncidentPattern,
        Dimension::Experience,
        Dimension::LaneFilteringSkill,
        Dimension::Training,
        Dimension::BrakingDistanceAccuracy,
        Dimension::BrakingTechnique,
        Dimension::Maneuvering,
        Dimension::EmergencyResponse,
        Dimension::HandlebarGrip,
        Dimension::LanePositioning,
        Dimension::CorneringTheory,
        Dimension::WetBraking,
        Dimension::IncidentExperience,
        Dimension::SelfAssessmentBias,
        Dimension::ExperienceCalibration,
        Dimension::RiskRecognition,
        Dimension::HazardAwareness,
    ];

    /// Position in [`Dimension::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn axis(self) -> Axis {
        use Dimension::*;
        match self {
            Demographics | Machine | CitySpeed | GearUsage | RidingStyle | LaneFiltering
            | NearMisses | CrashHistory | RiskAttitude | LanePosition | IncidentPattern => {
                Axis::Risk
            }
            Experience | LaneFilteringSkill | Training | BrakingDistanceAccuracy
            | BrakingTechnique | Maneuvering | EmergencyResponse | HandlebarGrip
            | LanePositioning | CorneringTheory | WetBraking | IncidentExperience => Axis::Skill,
            SelfAssessmentBias | ExperienceCalibration | RiskRecognition => Axis::Adequacy,
            HazardAwareness => Axis::SafetyKnowledge,
        }
    }
}

/// Signed points per dimension. Absent dimensions read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubScores(BTreeMap<Dimension, f64>);

impl SubScores {
    pub fn get(&self, dimension: Dimension) -> f64 {
        self.0.get(&dimension).copied().unwrap_or(0.0)
    }

    /// Adds points to a dimension. Zero contributions are not recorded.
    pub fn add(&mut self, dimension: Dimension, points: f64) {
        if points != 0.0 {
            *self.0.entry(dimension).or_insert(0.0) += points;
        }
    }

    pub fn set(&mut self, dimension: Dimension, points: f64) {
        self.0.insert(dimension, points);
    }
}

/// Skill claims that a knowledge question can contradict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillClaims {
    pub brake_from_60: bool,
    pub brake_from_100: bool,
    pub brake_from_150: bool,
    pub trail_braking: bool,
    pub knee_down: bool,
    pub u_turn_without_feet: bool,
}

impl SkillClaims {
    fn braking_claim(&self, claim: &str) -> bool {
        match claim {
            CLAIM_BRAKE_60 => self.brake_from_60,
            CLAIM_BRAKE_100 => self.brake_from_100,
            CLAIM_BRAKE_150 => self.brake_from_150,
            _ => false,
        }
    }
}

/// Facts about the rider read straight from the answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiderFacts {
    pub experience_years: f64,
    /// Self rating 1..=10, `None` if missing or malformed.
    pub self_rating: Option<f64>,
    pub crashes: u32,
    /// Number of lived situations, `None` if the question was not submitted.
    pub lived_situations: Option<usize>,
    /// Number of worried-about situations, `None` if not submitted.
    pub worried_situations: Option<usize>,
    pub training_count: usize,
    pub has_track_training: bool,
    pub fall_count: usize,
    pub answered_questions: usize,
    pub claims: SkillClaims,
    /// Per braking question (60/100/150): `None` if unanswered, else the credit.
    pub braking_credits: [Option<f64>; 3],
}

impl RiderFacts {
    /// Sum of braking credits over answered questions.
    pub fn braking_credit_total(&self) -> f64 {
        self.braking_credits.iter().flatten().sum()
    }

    /// True when at least one braking answer missed the correct band.
    pub fn has_wrong_braking_answer(&self) -> bool {
        self.braking_credits.iter().flatten().any(|c| *c < 1.0)
    }

    pub fn is_first_season(&self) -> bool {
        self.experience_years < 1.0
    }
}

/// Output of normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedAnswers {
    pub facts: RiderFacts,
    pub scores: SubScores,
}

/// Converts raw answers into sub-scores against a reference year.
#[derive(Debug, Clone, Copy)]
pub struct AnswerNormalizer {
    reference_year: i32,
}

impl AnswerNormalizer {
    pub fn new(reference_year: i32) -> Self {
        Self { reference_year }
    }

    pub fn normalize(&self, answers: &QuestionnaireAnswers) -> NormalizedAnswers {
        let facts = self.facts(answers);
        let mut scores = SubScores::default();

        risk_scores(answers, &facts, &mut scores);
        skill_scores(answers, &facts, &mut scores);
        adequacy_adjustments(answers, &facts, &mut scores);
        scores.set(Dimension::HazardAwareness, hazard_awareness(answers));

        NormalizedAnswers { facts, scores }
    }

    fn facts(&self, answers: &QuestionnaireAnswers) -> RiderFacts {
        let claims = SkillClaims {
            brake_from_60: answers.contains(BRAKING_CLAIMS, CLAIM_BRAKE_60),
            brake_from_100: answers.contains(BRAKING_CLAIMS, CLAIM_BRAKE_100),
            brake_from_150: answers.contains(BRAKING_CLAIMS, CLAIM_BRAKE_150),
            trail_braking: answers.contains(BRAKING_CLAIMS, CLAIM_TRAIL_BRAKING),
            knee_down: answers.contains(MANEUVERING_CLAIMS, CLAIM_KNEE_DOWN),
            u_turn_without_feet: answers.contains(MANEUVERING_CLAIMS, CLAIM_U_TURN),
        };
        let self_rating = answers
            .number(SELF_RATING)
            .map(|r| r.clamp(1.0, 10.0));
        let training = answers.list(TRAINING);
        let lived = answers.list(LIVED_SITUATIONS);

        let braking_credits = BRAKING_QUESTIONS.map(|q| {
            answers.text(q.key).map(|answer| {
                braking_credit(&q, answer, claims.braking_claim(q.claim), self_rating)
            })
        });

        RiderFacts {
            experience_years: self.experience_years(answers),
            self_rating,
            crashes: answers
                .leading_integer(CRASHES)
                .map(|n| n.clamp(0, i64::from(u32::MAX)) as u32)
                .unwrap_or(0),
            lived_situations: answers.selection_count(LIVED_SITUATIONS),
            worried_situations: answers.selection_count(WORRIED_SITUATIONS),
            training_count: training
                .iter()
                .filter(|t| {
                    [
                        TRAINING_GYMKHANA,
                        TRAINING_TRACK,
                        TRAINING_MOTOCROSS,
                        TRAINING_ENDURO,
                        TRAINING_PITBIKE,
                    ]
                    .contains(*t)
                })
                .count(),
            has_track_training: training.contains(&TRAINING_TRACK),
            fall_count: FALL_SITUATIONS
                .iter()
                .filter(|s| lived.contains(*s))
                .count(),
            answered_questions: SCORING_QUESTIONS
                .iter()
                .filter(|k| answers.is_answered(**k))
                .count(),
            claims,
            braking_credits,
        }
    }

    /// Years on a motorcycle: from a start year if given, else season buckets.
    fn experience_years(&self, answers: &QuestionnaireAnswers) -> f64 {
        let start_year = [START_YEAR, RIDING_SINCE_YEAR]
            .iter()
            .filter_map(|k| answers.number(k))
            .find(|y| y.fract() == 0.0 && (1000.0..=9999.0).contains(y));

        if let Some(year) = start_year {
            let years = f64::from(self.reference_year) - year;
            return years.clamp(0.5, 15.0);
        }

        match answers.text(SEASONS) {
            Some("Перший сезон") => 0.5,
            Some("2-3 сезони") => 2.5,
            Some("3-7 сезонів") => 5.0,
            Some("7+ сезонів") => 8.0,
            // Beginner questionnaire buckets (b1_5)
            Some("Ще не маю мотоцикла, мотошколу не пройшов")
            | Some("В мотошколі зараз")
            | Some("Перший місяць їжджу")
            | Some("Більше 3 місяців") => 0.5,
            Some("Більше року їжджу") => 1.5,
            _ => 1.0,
        }
    }
}

/// Credit for one braking-distance answer.
///
/// Exact band 1.0, adjacent band 0.5, further 0.0. "Don't know" is -0.5
/// when the rider claims that braking skill or rates themselves 8+.
fn braking_credit(
    question: &BrakingBands,
    answer: &str,
    claimed: bool,
    self_rating: Option<f64>,
) -> f64 {
    if answer == question.dont_know {
        let confident = self_rating.is_some_and(|r| r >= 8.0);
        return if claimed || confident { -0.5 } else { 0.0 };
    }
    match question.position(answer) {
        Some(p) if p == question.correct => 1.0,
        Some(p) if p.abs_diff(question.correct) == 1 => 0.5,
        _ => 0.0,
    }
}

fn risk_scores(answers: &QuestionnaireAnswers, facts: &RiderFacts, scores: &mut SubScores) {
    let exp = facts.experience_years;

    let age = match answers.text(AGE) {
        Some("20-30") => 0.5,
        Some("40-50") => -0.3,
        Some("50+") => -0.5,
        _ => 0.0,
    };
    let profession = match answers.text(PROFESSION) {
        Some("Військовий") => 0.5,
        Some("Лікар") => -0.3,
        Some("Підприємець") => 0.2,
        _ => 0.0,
    };
    scores.add(Dimension::Demographics, age + profession);

    if let Some(moto) = answers.text(MOTORCYCLE) {
        if !moto.to_lowercase().contains("abs") {
            scores.add(Dimension::Machine, 1.5);
        }
    }

    let city_speed = answers.text(CITY_SPEED);
    scores.add(
        Dimension::CitySpeed,
        match city_speed {
            Some(SPEED_LOW) => -2.0,
            Some(SPEED_MEDIUM) => 1.0,
            Some(SPEED_HIGH) => 3.0,
            _ => 0.0,
        },
    );

    scores.add(
        Dimension::GearUsage,
        match answers.text(GEAR) {
            Some("В повному екіпі") => -1.0,
            Some("В легкому екіпі") => 0.5,
            Some("Шолом, футболка, шльопкі") => 2.0,
            _ => 0.0,
        },
    );

    scores.add(
        Dimension::RidingStyle,
        match answers.text(RIDING_STYLE) {
            Some("Агресивний") => 2.0,
            Some("Спокійний") => -1.0,
            _ => 0.0,
        },
    );

    scores.add(
        Dimension::LaneFiltering,
        match answers.text(LANE_FILTERING) {
            Some(LANE_FILTERING_LOVES) => 1.5,
            Some(LANE_FILTERING_NEVER) => -1.0,
            _ => 0.0,
        },
    );

    // Frequent scary situations reflect poor strategy, worse the longer one rides.
    scores.add(
        Dimension::NearMisses,
        match answers.text(NEAR_MISSES) {
            Some("0-3 ситуації") if city_speed == Some(SPEED_HIGH) => 1.0,
            Some("0-3 ситуації") => -0.5,
            Some("4-6 ситуацій") => 1.0 + exp * 0.2,
            Some("Більше 6 ситуацій") => 2.0 + exp * 0.3,
            _ => 0.0,
        },
    );

    let crashes = f64::from(facts.crashes);
    let expected_crashes = exp * 0.7;
    let crash_points = if !answers.is_answered(CRASHES) {
        0.0
    } else if facts.crashes == 0 && exp < 2.0 {
        -0.5
    } else if facts.crashes == 0 && exp > 5.0 {
        -2.0
    } else if crashes > expected_crashes + 2.0 {
        2.0
    } else if crashes > expected_crashes {
        1.0
    } else {
        0.0
    };
    scores.add(Dimension::CrashHistory, crash_points);

    scores.add(
        Dimension::RiskAttitude,
        match answers.text(RISK_ATTITUDE) {
            Some(a) if a.starts_with("Не думав про це") => 2.0,
            Some(a) if a.starts_with("Думав про це") => -1.0,
            Some(a) if a.starts_with("Постійно думаю") => -1.5,
            _ => 0.0,
        },
    );

    if answers.is(LANE_POSITION, POSITION_CENTER) {
        scores.add(Dimension::LanePosition, 1.0);
    }

    let mut incidents = 0.0;
    if answers.contains(LIVED_SITUATIONS, CORNER_RUNOFF)
        || answers.contains(LIVED_SITUATIONS, CORNER_RUNOFF_SHORT)
    {
        incidents += 0.5;
    }
    if answers.contains(LIVED_SITUATIONS, CAUGHT_UP_WITH_CAR) {
        incidents += 1.0;
    }
    if answers.contains(LIVED_SITUATIONS, PASSENGER_FALL) {
        incidents += 0.5;
    }
    if facts.fall_count >= 3 {
        incidents += 1.5;
    }
    scores.add(Dimension::IncidentPattern, incidents);
}

fn skill_scores(answers: &QuestionnaireAnswers, facts: &RiderFacts, scores: &mut SubScores) {
    let exp = facts.experience_years;

    scores.add(
        Dimension::Experience,
        if exp < 1.0 {
            0.5
        } else if exp < 3.0 {
            2.0
        } else if exp < 7.0 {
            3.0
        } else {
            4.0
        },
    );

    // Avoiding traffic after a couple of seasons means the skill never developed.
    if exp >= 2.0 {
        scores.add(
            Dimension::LaneFilteringSkill,
            match answers.text(LANE_FILTERING) {
                Some(LANE_FILTERING_NEVER) => -(exp * 0.4).min(2.0),
                Some(LANE_FILTERING_UNEASY) => -(exp * 0.2).min(1.0),
                Some(LANE_FILTERING_LOVES) => (exp * 0.15).min(1.0),
                _ => 0.0,
            },
        );
    }

    let training: f64 = [
        (TRAINING_GYMKHANA, 1.0),
        (TRAINING_TRACK, 1.0),
        (TRAINING_MOTOCROSS, 0.5),
        (TRAINING_ENDURO, 0.5),
    ]
    .iter()
    .filter(|(t, _)| answers.contains(TRAINING, t))
    .map(|(_, points)| points)
    .sum();
    scores.add(Dimension::Training, training);

    scores.add(
        Dimension::BrakingDistanceAccuracy,
        0.5 * facts.braking_credit_total(),
    );

    let mut technique = 0.0;
    if facts.claims.trail_braking && exp >= 1.0 {
        technique += 0.5;
    }
    if answers.contains(BRAKING_CLAIMS, CLAIM_FRONT_LOCK) {
        technique += 0.3;
    }
    if answers.contains(BRAKING_CLAIMS, CLAIM_REAR_LOCK) {
        technique += 0.2;
    }
    scores.add(Dimension::BrakingTechnique, technique);

    let mut maneuvering = 0.0;
    if facts.claims.knee_down && facts.has_track_training {
        maneuvering += 0.5;
    }
    if facts.claims.u_turn_without_feet {
        maneuvering += if exp < 1.0 { -0.5 } else { 0.3 };
    }
    if answers.contains(MANEUVERING_CLAIMS, CLAIM_RAIN_CORNERING) {
        if exp < 2.0 {
            maneuvering -= 0.3;
        } else if exp > 3.0 && facts.crashes == 0 {
            maneuvering += 0.5;
        }
    }
    scores.add(Dimension::Maneuvering, maneuvering);

    scores.add(
        Dimension::EmergencyResponse,
        match answers.text(WOBBLE_RESPONSE) {
            Some(WOBBLE_RELAX) => 1.0,
            Some(WOBBLE_BRAKE) => -1.0,
            _ => 0.0,
        },
    );

    scores.add(
        Dimension::HandlebarGrip,
        match answers.text(GRIP) {
            Some(GRIP_LIGHT) => 0.5,
            Some(GRIP_TIGHT) => -2.0,
            _ => 0.0,
        },
    );

    scores.add(
        Dimension::LanePositioning,
        match answers.text(LANE_POSITION) {
            Some(POSITION_DYNAMIC) => 0.5,
            Some(POSITION_CENTER) => -0.5,
            _ => 0.0,
        },
    );

    scores.add(
        Dimension::CorneringTheory,
        match answers.text(TRAJECTORY) {
            Some("Так, широкий вхід") | Some("Широкий вхід") => 0.5,
            Some("Так, їжджу по центру") | Some("Рівноудаленно від загроз, їжджу по центру") => {
                -0.5
            }
            _ => 0.0,
        },
    );

    if matches!(
        answers.text(WET_BRAKING),
        Some("В 1.5-2 рази") | Some("На 75%-90%")
    ) {
        scores.add(Dimension::WetBraking, 0.5);
    }

    let lived = |s: &str| answers.contains(LIVED_SITUATIONS, s);
    let mut incidents = 0.0;
    if lived(FRONT_WHEEL_LOCK) {
        incidents += 1.0;
    }
    if lived(LEFT_TURNER) {
        incidents += 0.5;
    }
    if lived(SIDE_ROAD_PULLOUT) {
        incidents += 0.3;
    }
    if lived(CORNER_RUNOFF) || lived(CORNER_RUNOFF_SHORT) {
        incidents -= 0.5;
    }
    if lived(CAUGHT_UP_WITH_CAR) {
        incidents -= 0.3;
    }
    if lived(BALANCE_FALL) || lived(BALANCE_FALL_ALT) {
        incidents -= 0.3;
    }
    if lived(PASSENGER_FALL) {
        incidents -= 0.4;
    }
    if lived(RAILS_FALL) {
        incidents -= 0.2;
    }
    if lived(MUD_SLIP) {
        incidents -= 0.2;
    }
    if lived(REAR_ENDED) {
        incidents += 0.1;
    }
    if lived(SIDE_IMPACT) {
        incidents -= 0.1;
    }
    scores.add(Dimension::IncidentExperience, incidents);
}

/// Overestimation adjustments. Positive points push adequacy negative.
fn adequacy_adjustments(answers: &QuestionnaireAnswers, facts: &RiderFacts, scores: &mut SubScores) {
    let exp = facts.experience_years;

    let age = match answers.text(AGE) {
        Some("20-30") => 0.5,
        Some("40-50") => -0.3,
        Some("50+") => -0.5,
        _ => 0.0,
    };
    let profession = match answers.text(PROFESSION) {
        Some("Військовий") => 0.3,
        Some("Айтішник") => -0.3,
        Some("Творча професія") => 0.3,
        Some("Фінансист") => -0.2,
        _ => 0.0,
    };
    scores.add(Dimension::SelfAssessmentBias, age + profession);

    let mut calibration = 0.0;
    if let Some(rating) = facts.self_rating {
        if exp < 1.0 && rating >= 9.0 {
            calibration += 2.0;
        } else if exp < 1.0 && rating >= 7.0 {
            calibration += 1.5;
        } else if exp > 7.0 && rating < 5.0 {
            calibration -= 2.0;
        }
    }
    if let Some(lived) = facts.lived_situations {
        let expected = (exp * 2.0).min(10.0);
        if (lived as f64) < expected * 0.5 && exp > 2.0 {
            calibration += 1.0;
        }
    }
    if let Some(fears) = facts.worried_situations {
        let expected = (10.0 - exp).max(2.0);
        if fears as f64 > expected && exp > 5.0 {
            calibration -= 1.0;
        } else if fears < 2 && exp < 2.0 {
            calibration += 1.0;
        }
    }
    scores.add(Dimension::ExperienceCalibration, calibration);

    let mut recognition = 0.0;
    if answers.contains(LIVED_SITUATIONS, CAUGHT_UP_WITH_CAR) {
        recognition += 0.5;
    }
    if answers.contains(LIVED_SITUATIONS, PASSENGER_FALL) && exp < 2.0 {
        recognition += 1.0;
    }
    if facts.fall_count >= 2 && facts.self_rating.is_some_and(|r| r >= 7.0) {
        recognition += 1.0;
    }
    scores.add(Dimension::RiskRecognition, recognition);
}

/// One point per distinct recognized hazard, minus critical misses, 0..=10.
fn hazard_awareness(answers: &QuestionnaireAnswers) -> f64 {
    let mut recognized: Vec<&str> = answers
        .list(WORRIED_SITUATIONS)
        .into_iter()
        .filter(|h| HAZARDS.contains(h))
        .collect();
    recognized.sort_unstable();
    recognized.dedup();

    let mut points = recognized.len() as f64;
    if answers.contains(LIVED_SITUATIONS, CAUGHT_UP_WITH_CAR) {
        points -= 2.0;
    }
    if answers.contains(LIVED_SITUATIONS, CORNER_RUNOFF)
        || answers.contains(LIVED_SITUATIONS, CORNER_RUNOFF_SHORT)
    {
        points -= 1.0;
    }
    points.clamp(0.0, 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2025;

    fn normalize(answers: &QuestionnaireAnswers) -> NormalizedAnswers {
        AnswerNormalizer::new(YEAR).normalize(answers)
    }

    #[test]
    fn empty_answers_yield_defaults() {
        let n = normalize(&QuestionnaireAnswers::new());

        assert_eq!(n.facts.experience_years, 1.0);
        assert_eq!(n.facts.self_rating, None);
        assert_eq!(n.facts.answered_questions, 0);
        assert_eq!(n.scores.get(Dimension::Experience), 2.0);
        assert_eq!(n.scores.get(Dimension::HazardAwareness), 0.0);
        assert_eq!(n.scores.get(Dimension::ExperienceCalibration), 0.0);
    }

    #[test]
    fn experience_from_start_year_is_clamped() {
        let recent = QuestionnaireAnswers::new().with(START_YEAR, 2025.0);
        let ancient = QuestionnaireAnswers::new().with(START_YEAR, "1980");
        let mid = QuestionnaireAnswers::new().with(RIDING_SINCE_YEAR, 2020.0);

        assert_eq!(normalize(&recent).facts.experience_years, 0.5);
        assert_eq!(normalize(&ancient).facts.experience_years, 15.0);
        assert_eq!(normalize(&mid).facts.experience_years, 5.0);
    }

    #[test]
    fn experience_from_season_buckets() {
        for (bucket, years) in [
            ("Перший сезон", 0.5),
            ("2-3 сезони", 2.5),
            ("3-7 сезонів", 5.0),
            ("7+ сезонів", 8.0),
            ("щось інше", 1.0),
        ] {
            let answers = QuestionnaireAnswers::new().with(SEASONS, bucket);
            assert_eq!(normalize(&answers).facts.experience_years, years, "{bucket}");
        }
    }

    #[test]
    fn malformed_start_year_falls_back_to_seasons() {
        let answers = QuestionnaireAnswers::new()
            .with(START_YEAR, "давно")
            .with(SEASONS, "7+ сезонів");
        assert_eq!(normalize(&answers).facts.experience_years, 8.0);
    }

    #[test]
    fn braking_credit_bands() {
        let q = BRAKING_FROM_60;
        assert_eq!(braking_credit(&q, "14-16 м", false, None), 1.0);
        assert_eq!(braking_credit(&q, "12-14 м", false, None), 0.5);
        assert_eq!(braking_credit(&q, "16-17 м", false, None), 0.5);
        assert_eq!(braking_credit(&q, "8-10 м", false, None), 0.0);
        assert_eq!(braking_credit(&q, "сто метрів", false, None), 0.0);
    }

    #[test]
    fn dont_know_is_penalized_only_with_claim_or_high_confidence() {
        let q = BRAKING_FROM_100;
        assert_eq!(braking_credit(&q, "Хз не заміряв", false, Some(5.0)), 0.0);
        assert_eq!(braking_credit(&q, "Хз не заміряв", true, Some(5.0)), -0.5);
        assert_eq!(braking_credit(&q, "Хз не заміряв", false, Some(8.0)), -0.5);
    }

    #[test]
    fn braking_accuracy_feeds_skill_at_half_weight() {
        let answers = QuestionnaireAnswers::new()
            .with(BRAKING_60, "14-16 м")
            .with(BRAKING_100, "35-40 м");
        let n = normalize(&answers);

        assert_eq!(n.facts.braking_credits, [Some(1.0), Some(0.5), None]);
        assert_eq!(n.scores.get(Dimension::BrakingDistanceAccuracy), 0.75);
    }

    #[test]
    fn hazard_awareness_counts_distinct_known_hazards() {
        let answers = QuestionnaireAnswers::new().with(
            WORRIED_SITUATIONS,
            vec![
                "Лівий поворот автівки в мене",
                "Лівий поворот автівки в мене",
                "Проїзд автівки на червоний",
                "Інше",
            ],
        );
        assert_eq!(normalize(&answers).scores.get(Dimension::HazardAwareness), 2.0);
    }

    #[test]
    fn hazard_awareness_subtracts_critical_misses() {
        let answers = QuestionnaireAnswers::new()
            .with(
                WORRIED_SITUATIONS,
                vec![
                    "Лівий поворот автівки в мене",
                    "Проїзд автівки на червоний",
                    "Неочікуванний пішохід",
                    "Ями, Люки, Рейки, Бугри",
                ],
            )
            .with(LIVED_SITUATIONS, vec![CAUGHT_UP_WITH_CAR, CORNER_RUNOFF_SHORT]);
        assert_eq!(normalize(&answers).scores.get(Dimension::HazardAwareness), 1.0);
    }

    #[test]
    fn hazard_awareness_never_goes_negative() {
        let answers = QuestionnaireAnswers::new().with(LIVED_SITUATIONS, vec![CAUGHT_UP_WITH_CAR]);
        assert_eq!(normalize(&answers).scores.get(Dimension::HazardAwareness), 0.0);
    }

    #[test]
    fn motorcycle_without_abs_adds_risk() {
        let no_abs = QuestionnaireAnswers::new().with(MOTORCYCLE, "Kawasaki Z650");
        let abs = QuestionnaireAnswers::new().with(MOTORCYCLE, "Honda CB650R ABS");

        assert_eq!(normalize(&no_abs).scores.get(Dimension::Machine), 1.5);
        assert_eq!(normalize(&abs).scores.get(Dimension::Machine), 0.0);
    }

    #[test]
    fn crash_history_relative_to_experience() {
        let veteran_clean = QuestionnaireAnswers::new()
            .with(SEASONS, "7+ сезонів")
            .with(CRASHES, "0");
        let novice_crashes = QuestionnaireAnswers::new()
            .with(SEASONS, "Перший сезон")
            .with(CRASHES, "4");

        assert_eq!(normalize(&veteran_clean).scores.get(Dimension::CrashHistory), -2.0);
        assert_eq!(normalize(&novice_crashes).scores.get(Dimension::CrashHistory), 2.0);
    }

    #[test]
    fn unanswered_crash_question_contributes_nothing() {
        let answers = QuestionnaireAnswers::new().with(SEASONS, "Перший сезон");
        assert_eq!(normalize(&answers).scores.get(Dimension::CrashHistory), 0.0);
    }

    #[test]
    fn missing_self_rating_skips_rating_calibration() {
        let answers = QuestionnaireAnswers::new().with(SEASONS, "Перший сезон");
        let n = normalize(&answers);
        assert_eq!(n.facts.self_rating, None);
        assert_eq!(n.scores.get(Dimension::ExperienceCalibration), 0.0);
    }

    #[test]
    fn overrated_first_season_is_calibrated_by_rating_band() {
        let calibration = |rating: f64| {
            let answers = QuestionnaireAnswers::new()
                .with(SEASONS, "Перший сезон")
                .with(SELF_RATING, rating);
            normalize(&answers).scores.get(Dimension::ExperienceCalibration)
        };

        assert_eq!(calibration(10.0), 2.0);
        assert_eq!(calibration(9.0), 2.0);
        assert_eq!(calibration(8.0), 1.5);
        assert_eq!(calibration(7.0), 1.5);
        assert_eq!(calibration(6.0), 0.0);
    }

    #[test]
    fn beginner_answers_reach_experienced_rules_through_aliases() {
        let answers = QuestionnaireAnswers::new()
            .with("b4_1", SPEED_HIGH)
            .with("b4_2", GRIP_TIGHT);
        let n = normalize(&answers);

        assert_eq!(n.scores.get(Dimension::CitySpeed), 3.0);
        assert_eq!(n.scores.get(Dimension::HandlebarGrip), -2.0);
        assert_eq!(n.facts.answered_questions, 2);
    }

    #[test]
    fn dimensions_map_to_expected_axes() {
        assert_eq!(Dimension::CitySpeed.axis(), Axis::Risk);
        assert_eq!(Dimension::BrakingDistanceAccuracy.axis(), Axis::Skill);
        assert_eq!(Dimension::RiskRecognition.axis(), Axis::Adequacy);
        assert_eq!(Dimension::HazardAwareness.axis(), Axis::SafetyKnowledge);
        assert!(Dimension::ALL
            .iter()
            .enumerate()
            .all(|(i, d)| d.index() == i));
    }
}
