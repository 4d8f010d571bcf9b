//! Reference answer sets covering four distinct archetypes.
//!
//! Used by the CLI `fixtures` command and by scenario tests.

use serde_json::json;

use super::answers::QuestionnaireAnswers;

/// All fixtures with their names, in a stable order.
pub fn fixtures() -> Vec<(&'static str, QuestionnaireAnswers)> {
    vec![
        ("dangerous_novice", dangerous_novice()),
        ("cautious_expert", cautious_expert()),
        ("impostor_syndrome", impostor_syndrome()),
        ("lucky_survivor", lucky_survivor()),
    ]
}

/// High self-rating, first season, wrong braking distances, brakes on wobble.
pub fn dangerous_novice() -> QuestionnaireAnswers {
    QuestionnaireAnswers::from_json(json!({
        "e1_1": "20-30",
        "e1_3": 9,
        "e1_5": "Творча професія",
        "e1_6": "Перший сезон",
        "e1_7": "Yamaha R1 (no ABS)",
        "e2_1": "Вільно почуваю, люблю затори",
        "e2_2": ["Втрата балансу -> падіння", "Я догнав автівку"],
        "e2_3": [],
        "e2_4": "4-6 ситуацій",
        "e2_5": "2",
        "e3_1": "Не думав про це, я просто хотів кататись",
        "e4_2": "Шолом, футболка, шльопкі",
        "e4_3": [],
        "e4_4": "Агресивний",
        "e5_1": ["Можу впевнено екстренно відгальмуватись зі 150", "Трейлбрейкінг - впевнено практикую"],
        "e5_2": "8-10 м",
        "e5_3": "20-30 м",
        "e5_4": "40-50 м",
        "e6_1": ["Можу поїхати в коліно"],
        "e6_trajectory": "Так, їжджу по центру",
        "e7_1": "90-150 км/год",
        "e7_2": "Міцно, щоб контролювати",
        "e7_3": "По центру",
        "e9_1": "Гальмувати",
        "e9_2": "Не знаю"
    }))
}

/// Long experience, track training, every knowledge answer correct.
pub fn cautious_expert() -> QuestionnaireAnswers {
    QuestionnaireAnswers::from_json(json!({
        "e1_1": "40-50",
        "e1_3": 7,
        "e1_5": "Лікар",
        "e1_6": "7+ сезонів",
        "e1_7": "BMW R1250GS ABS",
        "e2_1": "Вільно почуваю, люблю затори",
        "e2_2": ["Блокування переднього колеса при гальмуванні", "Лівий поворот автівки в мене", "Виїзд автівки з другорядної в мене"],
        "e2_3": ["Необхідність екстренно гальмувати і маневрувати в повороті"],
        "e2_4": "0-3 ситуації",
        "e2_5": "1",
        "e3_1": "Думав про це, прийняв що небезпечно, роблю все щоб підготуватись",
        "e4_2": "В повному екіпі",
        "e4_3": ["Джимхана", "Трек виїзди"],
        "e4_4": "Спокійний",
        "e5_1": ["Можу впевнено екстренно відгальмуватись з 60", "Можу впевнено екстренно відгальмуватись з 100", "Трейлбрейкінг - впевнено практикую"],
        "e5_2": "14-16 м",
        "e5_3": "30-35 м",
        "e5_4": "70-80 м",
        "e6_1": ["Впевнено їжджу в поворотах", "Впевнено можу розвернутись на вузькій дорозі без ніг", "Впевнено можу їхати в дощ в повороті"],
        "e6_trajectory": "Так, широкий вхід",
        "e7_1": "40-70 км/год",
        "e7_2": "Легко, як філіжанку кави",
        "e7_3": "Постійно змінюю позицію",
        "e9_1": "Розслабити руки, не гальмувати",
        "e9_2": "В 1.5-2 рази"
    }))
}

/// Solid skills with a modest self-rating.
pub fn impostor_syndrome() -> QuestionnaireAnswers {
    QuestionnaireAnswers::from_json(json!({
        "e1_1": "30-40",
        "e1_3": 4,
        "e1_5": "Айтішник",
        "e1_6": "3-7 сезонів",
        "e1_7": "Honda CB650R ABS",
        "e2_1": "Дискомфортно, але їжджу",
        "e2_2": ["Блокування заднього колеса при гальмуванні", "Виїзд автівки з другорядної в мене"],
        "e2_3": ["Лівий поворот автівки в мене", "Необхідність екстренно гальмувати зі швидкості 80+", "Необхідність екстренно гальмувати на слизькому або поганому покритті"],
        "e2_4": "0-3 ситуації",
        "e2_5": "0",
        "e3_1": "Періодично думаю про це, бо не розумію всіх потенційних небезпек",
        "e4_2": "В повному екіпі",
        "e4_3": ["Джимхана"],
        "e4_4": "Спокійний",
        "e5_1": ["Можу впевнено екстренно відгальмуватись з 60", "Можу справитись з блоком заднього колеса"],
        "e5_2": "14-16 м",
        "e5_3": "30-35 м",
        "e5_4": "Хз не заміряв",
        "e6_1": ["Впевнено їжджу в поворотах", "Впевнено можу розвернутись на вузькій дорозі без ніг"],
        "e6_trajectory": "Так, широкий вхід",
        "e7_1": "40-70 км/год",
        "e7_2": "Легко, як філіжанку кави",
        "e7_3": "Постійно змінюю позицію",
        "e9_1": "Розслабити руки, не гальмувати",
        "e9_2": "В 1.5-2 рази"
    }))
}

/// Several crashes and falls, no training, one wrong braking distance.
pub fn lucky_survivor() -> QuestionnaireAnswers {
    QuestionnaireAnswers::from_json(json!({
        "e1_1": "20-30",
        "e1_3": 6,
        "e1_5": "Підприємець",
        "e1_6": "2-3 сезони",
        "e1_7": "Kawasaki Z650",
        "e2_1": "Вільно почуваю, люблю затори",
        "e2_2": ["Виліт з повороту", "Втратив баланс і впав", "Впав на рейках"],
        "e2_3": ["Лівий поворот автівки в мене"],
        "e2_4": "Більше 6 ситуацій",
        "e2_5": "3",
        "e3_1": "Не думав про це, я просто хотів кататись",
        "e4_2": "В легкому екіпі",
        "e4_3": [],
        "e4_4": "Змішаний",
        "e5_1": ["Можу впевнено екстренно відгальмуватись з 60", "Можу впевнено екстренно відгальмуватись з 100"],
        "e5_2": "14-16 м",
        "e5_3": "45-53 м",
        "e5_4": "Хз не заміряв",
        "e6_1": ["Впевнено їжджу в поворотах"],
        "e6_trajectory": "Не знаю, просто їжджу",
        "e7_1": "70-90 км/год",
        "e7_2": "Залежить від дороги",
        "e7_3": "Лівий край",
        "e9_1": "Розслабити руки, не гальмувати",
        "e9_2": "На 20-30%"
    }))
}
