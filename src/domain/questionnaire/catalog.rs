//! Archetype catalog.
//!
//! Profile types form a closed sum type; display labels and descriptions
//! live in a static lookup keyed by the variant.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Fallback text for an unrecognized profile type.
pub const UNKNOWN_PROFILE_DESCRIPTION: &str = "Унікальний профіль райдера.";

/// Named rider archetypes.
///
/// Declaration order is the classifier's priority order: when a point
/// satisfies several archetypes, the one declared first (the more
/// cautionary label) wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileType {
    #[serde(rename = "Dangerous Novice")]
    DangerousNovice,
    #[serde(rename = "Dunning-Kruger Rider")]
    DunningKruger,
    #[serde(rename = "Overconfident Intermediate")]
    OverconfidentIntermediate,
    #[serde(rename = "Lucky Survivor")]
    LuckySurvivor,
    #[serde(rename = "Calculated Risk-Taker")]
    CalculatedRisk,
    #[serde(rename = "Nervous Beginner")]
    NervousBeginner,
    #[serde(rename = "Impostor Syndrome")]
    ImpostorSyndrome,
    #[serde(rename = "Skilled Pessimist")]
    SkilledPessimist,
    #[serde(rename = "Cautious Expert")]
    CautiousExpert,
    #[serde(rename = "Balanced Rider")]
    BalancedRider,
    #[serde(rename = "Insufficient Data")]
    InsufficientData,
}

struct CatalogEntry {
    profile_type: ProfileType,
    key: &'static str,
    label: &'static str,
    description: &'static str,
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        profile_type: ProfileType::DangerousNovice,
        key: "dangerous_novice",
        label: "Dangerous Novice",
        description: "Небезпечна комбінація: високі ризики без відповідних навичок. Потребує негайної корекції стилю їзди.",
    },
    CatalogEntry {
        profile_type: ProfileType::DunningKruger,
        key: "dunning_kruger",
        label: "Dunning-Kruger Rider",
        description: "Класичний приклад ефекту Даннінга-Крюгера: переоцінює свої можливості через брак досвіду.",
    },
    CatalogEntry {
        profile_type: ProfileType::OverconfidentIntermediate,
        key: "overconfident_intermediate",
        label: "Overconfident Intermediate",
        description: "Надмірно впевнений: середні навички, але думає що знає більше. Потребує об'єктивної оцінки.",
    },
    CatalogEntry {
        profile_type: ProfileType::LuckySurvivor,
        key: "lucky_survivor",
        label: "Lucky Survivor",
        description: "Щасливчик: поки що вдається уникати наслідків ризикованої їзди. Варто бути обережнішим.",
    },
    CatalogEntry {
        profile_type: ProfileType::CalculatedRisk,
        key: "calculated_risk",
        label: "Calculated Risk-Taker",
        description: "Усвідомлений ризик: високі навички дозволяють контролювати підвищені ризики.",
    },
    CatalogEntry {
        profile_type: ProfileType::NervousBeginner,
        key: "nervous_beginner",
        label: "Nervous Beginner",
        description: "Нервовий початківець: правильна обережність, але потребує більше впевненості та практики.",
    },
    CatalogEntry {
        profile_type: ProfileType::ImpostorSyndrome,
        key: "impostor_syndrome",
        label: "Impostor Syndrome",
        description: "Синдром самозванця: має хороші навички, але недооцінює себе. Може набагато більше.",
    },
    CatalogEntry {
        profile_type: ProfileType::SkilledPessimist,
        key: "skilled_pessimist",
        label: "Skilled Pessimist",
        description: "Кваліфікований песиміст: недооцінює свої реальні можливості. Може дозволити собі більше.",
    },
    CatalogEntry {
        profile_type: ProfileType::CautiousExpert,
        key: "cautious_expert",
        label: "Cautious Expert",
        description: "Обережний експерт: високі навички поєднані з розумною обережністю. Приклад для наслідування.",
    },
    CatalogEntry {
        profile_type: ProfileType::BalancedRider,
        key: "balanced_rider",
        label: "Balanced Rider",
        description: "Збалансований райдер: помірні ризики, адекватна самооцінка, є простір для розвитку.",
    },
    CatalogEntry {
        profile_type: ProfileType::InsufficientData,
        key: "insufficient_data",
        label: "Insufficient Data",
        description: "Недостатньо відповідей для побудови профілю. Дайте відповідь на більше запитань.",
    },
];

impl ProfileType {
    /// All archetypes in priority order.
    pub const ALL: [ProfileType; 11] = [
        ProfileType::DangerousNovice,
        ProfileType::DunningKruger,
        ProfileType::OverconfidentIntermediate,
        ProfileType::LuckySurvivor,
        ProfileType::CalculatedRisk,
        ProfileType::NervousBeginner,
        ProfileType::ImpostorSyndrome,
        ProfileType::SkilledPessimist,
        ProfileType::CautiousExpert,
        ProfileType::BalancedRider,
        ProfileType::InsufficientData,
    ];

    fn entry(&self) -> &'static CatalogEntry {
        // CATALOG is declared in the same order as ALL.
        &CATALOG[*self as usize]
    }

    /// Display label ("Dunning-Kruger Rider").
    pub fn label(&self) -> &'static str {
        self.entry().label
    }

    /// Machine key ("dunning_kruger").
    pub fn key(&self) -> &'static str {
        self.entry().key
    }

    pub fn description(&self) -> &'static str {
        self.entry().description
    }

    /// Looks up an archetype by label or key, ignoring case and punctuation.
    pub fn parse(input: &str) -> Option<ProfileType> {
        let wanted = fold(input);
        if wanted.is_empty() {
            return None;
        }
        CATALOG
            .iter()
            .find(|e| fold(e.label) == wanted || fold(e.key) == wanted)
            .map(|e| e.profile_type)
    }
}

impl fmt::Display for ProfileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn fold(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Human-readable description of an archetype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDescription {
    /// `None` when the requested type is not in the catalog.
    pub profile_type: Option<ProfileType>,
    pub title: String,
    pub description: String,
}

/// Describes a profile type; unknown types get the fallback description.
pub fn describe_profile(profile_type: &str) -> ProfileDescription {
    match ProfileType::parse(profile_type) {
        Some(found) => ProfileDescription {
            profile_type: Some(found),
            title: found.label().to_string(),
            description: found.description().to_string(),
        },
        None => {
            warn!(profile_type, "unknown profile type, using fallback description");
            ProfileDescription {
                profile_type: None,
                title: profile_type.to_string(),
                description: UNKNOWN_PROFILE_DESCRIPTION.to_string(),
            }
        }
    }
}
