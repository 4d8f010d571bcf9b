//! Beginner Profile Calculator.
//!
//! The beginner questionnaire (`b*` keys) has its own classification:
//! red flags first, then careful / fast / romantic tallies.

use serde::{Deserialize, Serialize};

use super::answers::QuestionnaireAnswers;

/// Beginner archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeginnerArchetype {
    #[serde(rename = "BEGINNER_CAREFUL")]
    CarefulStudent,
    #[serde(rename = "BEGINNER_FAST")]
    FastProgress,
    #[serde(rename = "BEGINNER_ROMANTIC")]
    RomanticDreamer,
    #[serde(rename = "BEGINNER_RED_FLAG")]
    RedFlag,
}

impl BeginnerArchetype {
    pub fn label(&self) -> &'static str {
        match self {
            BeginnerArchetype::CarefulStudent => "Careful Student",
            BeginnerArchetype::FastProgress => "Fast Progress",
            BeginnerArchetype::RomanticDreamer => "Romantic Dreamer",
            BeginnerArchetype::RedFlag => "Red Flag",
        }
    }

    fn recommendations(&self) -> &'static [&'static str] {
        match self {
            BeginnerArchetype::CarefulStudent => &[
                "Продовжуйте поступовий розвиток навичок",
                "Приєднайтесь до структурованої навчальної програми",
                "Практикуйтеся в безпечному середовищі",
                "Фокус на техніці проходження поворотів",
                "Освойте екстрене гальмування на закритому майданчику",
            ],
            BeginnerArchetype::FastProgress => &[
                "Рекомендується просунуте навчання",
                "Трек-дні для безпечної практики швидкості",
                "Розгляньте програму менторства",
                "Курс контраварійного водіння",
                "Вивчення техніки спортивної їзди в безпечних умовах",
            ],
            BeginnerArchetype::RomanticDreamer => &[
                "Базовий курс безпеки обов'язковий",
                "Фокус на технічних навичках",
                "Приєднайтесь до спільноти райдерів",
                "Вивчіть теорію керування мотоциклом",
                "Практика базових маневрів на майданчику",
            ],
            BeginnerArchetype::RedFlag => &[
                "Обов'язковий курс безпеки перед продовженням їзди",
                "Перегляд статистики аварій початківців",
                "Індивідуальний ментор обов'язковий",
                "Психологічна консультація щодо сприйняття ризиків",
                "Заборона їзди в групі до проходження курсу",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeginnerRiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeginnerScores {
    pub careful: u32,
    pub fast: u32,
    pub romantic: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeginnerProfile {
    pub archetype: BeginnerArchetype,
    pub scores: BeginnerScores,
    pub risk_level: BeginnerRiskLevel,
    pub red_flags: Vec<String>,
    pub risk_factors: Vec<String>,
    pub characteristics: Vec<String>,
    pub recommendations: Vec<String>,
}

const NOVICE_STAGES: &[&str] = &["Перший місяць їжджу", "В мотошколі зараз"];

/// Classifies a beginner submission. Total over any input.
pub fn compute_beginner_profile(answers: &QuestionnaireAnswers) -> BeginnerProfile {
    let mut red_flags: Vec<String> = Vec::new();
    let mut risk_factors: Vec<String> = Vec::new();
    let mut flag = |text: &str, factor: &str| {
        red_flags.push(text.to_string());
        risk_factors.push(factor.to_string());
    };

    let stage = answers.text("b1_5");

    if answers
        .text("b3_1")
        .is_some_and(|a| a.starts_with("Не думав про це"))
    {
        flag("Ігнорує ризики", "no_risk_awareness");
    }
    if answers.contains("b3_2", "Ні") {
        flag("Відсутні дії з безпеки", "no_safety_preparation");
    }
    if answers.is("b3_3", "Не хочу дивитись. Зі мною таке не трапиться") {
        flag("Заперечення небезпеки", "danger_denial");
    }
    if answers.is("b4_1", "90-150 км/год") && stage.is_some_and(|s| NOVICE_STAGES.contains(&s)) {
        flag("Надмірна швидкість для досвіду", "excessive_speed");
    }
    if answers.is("b2_1", "Так, впевнено") && stage == Some("Перший місяць їжджу") {
        flag("Небезпечна поведінка для початківця", "risky_lane_splitting");
    }
    if answers.is("b4_2", "Міцно, щоб контролювати") {
        risk_factors.push("tight_grip".to_string());
    }

    if red_flags.len() >= 3 || (red_flags.len() >= 2 && risk_factors.len() >= 2) {
        let archetype = BeginnerArchetype::RedFlag;
        return BeginnerProfile {
            archetype,
            scores: BeginnerScores::default(),
            risk_level: BeginnerRiskLevel::Critical,
            red_flags,
            risk_factors,
            characteristics: vec![
                "Високий рівень ризику".to_string(),
                "Потребує негайного навчання безпеці".to_string(),
                "Схильність до небезпечної поведінки".to_string(),
            ],
            recommendations: to_strings(archetype.recommendations()),
        };
    }

    let mut scores = BeginnerScores::default();
    let mut characteristics: Vec<&str> = Vec::new();
    let training = answers.list("b4_3");
    let safety_actions = answers.list("b3_2");
    let motivation = answers.text("b1_3").unwrap_or_default();

    // Careful student
    if answers
        .text("b3_1")
        .is_some_and(|a| a.contains("Постійно думаю") || a.contains("Періодично думаю"))
    {
        scores.careful += 3;
        characteristics.push("Усвідомлює ризики");
    }
    if answers.list("b2_3").len() > 8 {
        scores.careful += 2;
        characteristics.push("Розуміє свої обмеження");
    }
    if answers.is("b4_1", "40-70 км/год") {
        scores.careful += 2;
        characteristics.push("Консервативна швидкість");
    }
    if answers.is("b2_1", "Ще ні. Страшно подряпати автівки") {
        scores.careful += 1;
        characteristics.push("Обережний у трафіку");
    }
    if safety_actions.contains(&"Пройшов додаткове навчання") {
        scores.careful += 3;
        characteristics.push("Інвестує в навчання");
    }

    // Fast progress
    if safety_actions
        .iter()
        .any(|a| a.starts_with("Самостійно тренував гальмування"))
    {
        scores.fast += 3;
        characteristics.push("Активне навчання");
    }
    if safety_actions.contains(&"Дивився аварії в YouTube") {
        scores.fast += 2;
        characteristics.push("Вчиться на помилках інших");
    }
    if training.len() > 3 {
        scores.fast += 3;
        characteristics.push("Працює над багатьма навичками");
    }
    if matches!(answers.text("b1_4"), Some("Айтішник") | Some("Військовий")) {
        scores.fast += 1;
        characteristics.push("Аналітичний підхід");
    }
    if matches!(
        answers.text("b5_1"),
        Some("Кілька досвідчених") | Some("Велика спільнота")
    ) {
        scores.fast += 2;
        characteristics.push("Має підтримку спільноти");
    }
    if training.contains(&"Екстрене гальмування") {
        scores.fast += 3;
        characteristics.push("Фокус на критичних навичках");
    }

    // Romantic dreamer
    if motivation.contains("мрія") || motivation.contains("можна померти") {
        scores.romantic += 3;
        characteristics.push("Емоційна мотивація");
    }
    if !training.contains(&"Екстрене гальмування") && !training.contains(&"Повороти") {
        scores.romantic += 2;
        characteristics.push("Ігнорує технічні навички");
    }
    if answers.is("b5_2", "Регулярно в групі") {
        scores.romantic += 2;
        characteristics.push("Соціальний райдер");
    }
    if answers.is("b3_3", "Не дивився, якось навіть не думав про це") {
        scores.romantic += 1;
    }
    if motivation.contains("свобода") || motivation.contains("адреналін") {
        scores.romantic += 2;
        characteristics.push("Шукає відчуттів");
    }

    let risk_level = if !red_flags.is_empty() {
        BeginnerRiskLevel::High
    } else if risk_factors.len() > 2 || scores.careful <= 5 {
        BeginnerRiskLevel::Moderate
    } else {
        BeginnerRiskLevel::Low
    };

    // Ties resolve careful > fast > romantic.
    let max = scores.careful.max(scores.fast).max(scores.romantic);
    let archetype = if scores.careful == max && scores.careful > 0 {
        BeginnerArchetype::CarefulStudent
    } else if scores.fast == max && scores.fast > 0 {
        BeginnerArchetype::FastProgress
    } else {
        BeginnerArchetype::RomanticDreamer
    };

    BeginnerProfile {
        archetype,
        scores,
        risk_level,
        red_flags,
        risk_factors,
        characteristics: to_strings(&characteristics),
        recommendations: to_strings(archetype.recommendations()),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
