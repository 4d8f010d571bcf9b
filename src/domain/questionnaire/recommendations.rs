//! Recommendation Generator - characteristics, prioritized recommendations
//! and red flags.
//!
//! Every list is built in a fixed order so output is stable for
//! golden-file comparison.

use serde::{Deserialize, Serialize};

use super::aggregator::Axes;
use super::catalog::ProfileType;
use super::metrics::{DangerLevel, Metrics};
use super::normalizer::RiderFacts;

/// Priority level for a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

/// A recommendation with its priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub text: String,
}

impl Recommendation {
    fn new(priority: Priority, text: &str) -> Self {
        Self {
            priority,
            text: text.to_string(),
        }
    }
}

/// Characteristics by axis band, then archetype-specific lines.
pub fn characteristics(axes: &Axes, profile_type: ProfileType) -> Vec<String> {
    let risk = axes.risk_taking;
    let skill = axes.technical_skills;
    let over = -axes.adequacy;
    let mut lines: Vec<&str> = Vec::new();

    if risk > 7.0 {
        lines.push("Дуже високий апетит до ризику");
    } else if risk > 5.0 {
        lines.push("Схильність до ризику");
    } else if risk < 3.0 {
        lines.push("Обережний підхід");
    }

    if skill > 7.0 {
        lines.push("Високі технічні навички");
    } else if skill > 5.0 {
        lines.push("Хороші базові навички");
    } else if skill < 3.0 {
        lines.push("Початковий рівень навичок");
    }

    if over > 3.0 {
        lines.push("Значна переоцінка своїх можливостей");
    } else if over > 1.0 {
        lines.push("Трохи переоцінює себе");
    } else if over < -3.0 {
        lines.push("Значна недооцінка своїх можливостей");
    } else if over < -1.0 {
        lines.push("Трохи недооцінює себе");
    } else {
        lines.push("Адекватна самооцінка");
    }

    match profile_type {
        ProfileType::DangerousNovice => {
            lines.push("Небезпечна комбінація факторів");
            lines.push("Потребує негайного втручання");
        }
        ProfileType::ImpostorSyndrome => {
            lines.push("Прихований потенціал");
            lines.push("Може більше, ніж думає");
        }
        ProfileType::CalculatedRisk => {
            lines.push("Усвідомлені ризики");
            lines.push("Знає свої межі");
        }
        ProfileType::InsufficientData => {
            lines.push("Профіль попередній: замало відповідей");
        }
        _ => {}
    }

    lines.into_iter().map(str::to_string).collect()
}

/// Recommendations collected with priorities, most critical first.
///
/// Sorting is stable, so equal priorities keep their collection order.
/// Duplicate texts keep only their first (highest priority) occurrence.
pub fn prioritized_recommendations(axes: &Axes, trap_failures: &[String]) -> Vec<Recommendation> {
    use Priority::*;

    let risk = axes.risk_taking;
    let skill = axes.technical_skills;
    let over = -axes.adequacy;
    let mut recs = Vec::new();

    if risk > 7.0 {
        recs.push(Recommendation::new(High, "ТЕРМІНОВО знизити швидкість їзди в місті"));
        recs.push(Recommendation::new(High, "Обов'язково використовувати повну екіпіровку"));
    } else if risk > 5.0 {
        recs.push(Recommendation::new(Medium, "Переглянути своє ставлення до ризиків"));
        recs.push(Recommendation::new(Medium, "Практикувати більш обережний стиль"));
    }

    if skill < 4.0 {
        recs.push(Recommendation::new(High, "Пройти курс контраварійного водіння"));
        recs.push(Recommendation::new(
            High,
            "Регулярно практикувати базові навички на майданчику",
        ));
        recs.push(Recommendation::new(Medium, "Вивчити теорію гальмування та маневрування"));
    } else if skill < 6.0 {
        recs.push(Recommendation::new(
            Medium,
            "Розглянути додаткові тренування (джимхана, трек)",
        ));
        recs.push(Recommendation::new(Medium, "Практикувати екстренне гальмування"));
    }

    if over > 3.0 {
        recs.push(Recommendation::new(High, "Чесно переоцінити свої навички"));
        recs.push(Recommendation::new(
            Medium,
            "Вивчити відео аварій для розуміння реальних ризиків",
        ));
        recs.push(Recommendation::new(Medium, "Пройти об'єктивну оцінку інструктором"));
    } else if over < -3.0 {
        recs.push(Recommendation::new(Low, "Повірити в свої навички"));
        recs.push(Recommendation::new(Low, "Поступово підвищувати складність завдань"));
        recs.push(Recommendation::new(Low, "Записати свої успіхи для мотивації"));
    }

    if !trap_failures.is_empty() {
        recs.push(Recommendation::new(High, "Вивчити теорію перед практикою"));
        recs.push(Recommendation::new(High, "Не заявляти навички, яких немає"));
    }

    if risk > 6.0 && skill < 4.0 {
        recs.push(Recommendation::new(
            Critical,
            "⚠️ КРИТИЧНО: Негайно знизити ризики до набуття навичок!",
        ));
    }

    if skill > 7.0 && over < -2.0 {
        recs.push(Recommendation::new(
            Low,
            "Ваші навички вищі, ніж ви думаєте - використовуйте їх",
        ));
    }

    recs.sort_by_key(|r| r.priority);
    let mut seen = std::collections::HashSet::new();
    recs.retain(|r| seen.insert(r.text.clone()));
    recs
}

/// Red flags in fixed order: trap failures, skill-growth warnings, then
/// the pattern and threshold flags.
pub fn red_flags(
    axes: &Axes,
    metrics: &Metrics,
    facts: &RiderFacts,
    trap_failures: Vec<String>,
    growth_warnings: Vec<String>,
) -> Vec<String> {
    let mut flags = trap_failures;
    flags.extend(growth_warnings);

    if facts.has_wrong_braking_answer() && facts.self_rating.is_some_and(|r| r >= 8.0) {
        flags.push("Неправильна гальмівна дистанція при високій самооцінці".to_string());
    }
    if metrics.danger_level == DangerLevel::Critical {
        flags.push("⚠️ КРИТИЧНИЙ РІВЕНЬ НЕБЕЗПЕКИ".to_string());
    }
    if axes.risk_taking > 8.0 {
        flags.push("Екстремально високий рівень ризику".to_string());
    }
    if axes.adequacy < -4.0 {
        flags.push("Небезпечна переоцінка своїх можливостей".to_string());
    }
    if axes.technical_skills < 3.0 && axes.risk_taking > 6.0 {
        flags.push("Недостатні навички для такого рівня ризику".to_string());
    }

    flags
}
