//! Property tests for the profile calculator.
//!
//! Answers are generated from the real option texts of each question so
//! the rules actually fire, plus random self ratings and start years.

use nebachiv_profile::domain::questionnaire::vocabulary::{
    BRAKING_QUESTIONS, HAZARDS, SCORING_QUESTIONS,
};
use nebachiv_profile::domain::questionnaire::{
    AnswerNormalizer, Axes, DangerLevel, ProfileCalculator, ProfileClassifier, ProfileType, QuestionnaireAnswers,
    ADEQUACY_RANGE, GROWTH_RANGE, RISK_RANGE, SAFETY_RANGE, SKILL_RANGE,
};
use proptest::prelude::*;

const SINGLE_CHOICE: &[(&str, &[&str])] = &[
    ("e1_1", &["20-30", "30-40", "40-50", "50+"]),
    (
        "e1_5",
        &["Військовий", "Лікар", "Підприємець", "Айтішник", "Творча професія", "Фінансист"],
    ),
    ("e1_6", &["Перший сезон", "2-3 сезони", "3-7 сезонів", "7+ сезонів"]),
    ("e1_7", &["Yamaha R1 (no ABS)", "BMW R1250GS ABS", "Kawasaki Z650"]),
    (
        "e2_1",
        &["Не їжджу", "Дискомфортно, але їжджу", "Вільно почуваю, люблю затори"],
    ),
    ("e2_4", &["0-3 ситуації", "4-6 ситуацій", "Більше 6 ситуацій"]),
    ("e2_5", &["0", "1", "2", "3", "5+"]),
    (
        "e3_1",
        &[
            "Не думав про це, я просто хотів кататись",
            "Думав про це, прийняв що небезпечно, роблю все щоб підготуватись",
            "Постійно думаю про це перед виїздом, тривожусь",
            "Періодично думаю про це, бо не розумію всіх потенційних небезпек",
        ],
    ),
    ("e4_2", &["В повному екіпі", "В легкому екіпі", "Шолом, футболка, шльопкі"]),
    ("e4_4", &["Агресивний", "Спокійний", "Змішаний"]),
    ("e5_2", &["8-10 м", "12-14 м", "14-16 м", "16-17 м", "Не знаю"]),
    ("e5_3", &["20-30 м", "30-35 м", "35-40 м", "45-53 м", "Хз не заміряв"]),
    ("e5_4", &["40-50 м", "70-80 м", "90-100 м", "120-130 м", "Хз не заміряв"]),
    (
        "e6_trajectory",
        &["Так, широкий вхід", "Так, їжджу по центру", "Не знаю, просто їжджу"],
    ),
    ("e7_1", &["40-70 км/год", "70-90 км/год", "90-150 км/год"]),
    (
        "e7_2",
        &["Легко, як філіжанку кави", "Міцно, щоб контролювати", "Залежить від дороги"],
    ),
    ("e7_3", &["По центру", "Постійно змінюю позицію", "Лівий край"]),
    ("e9_1", &["Розслабити руки, не гальмувати", "Гальмувати"]),
    ("e9_2", &["В 1.5-2 рази", "На 20-30%", "Не знаю"]),
];

const MULTI_SELECT: &[(&str, &[&str])] = &[
    (
        "e2_2",
        &[
            "Втрата балансу -> падіння",
            "Я догнав автівку",
            "Виліт з повороту",
            "Втратив баланс і впав",
            "Впав на рейках",
            "Підсковзнувся на бруді",
            "Блокування переднього колеса при гальмуванні",
            "Лівий поворот автівки в мене",
            "Втратив баланс з пасажиркою і впав",
        ],
    ),
    ("e2_3", HAZARDS),
    ("e4_3", &["Джимхана", "Трек виїзди", "Мотокрос", "Ендуро", "Пітбайки"]),
    (
        "e5_1",
        &[
            "Можу впевнено екстренно відгальмуватись з 60",
            "Можу впевнено екстренно відгальмуватись з 100",
            "Можу впевнено екстренно відгальмуватись зі 150",
            "Трейлбрейкінг - впевнено практикую",
            "Можу справитись з блоком переднього колеса",
        ],
    ),
    (
        "e6_1",
        &[
            "Можу поїхати в коліно",
            "Впевнено можу розвернутись на вузькій дорозі без ніг",
            "Впевнено можу їхати в дощ в повороті",
        ],
    ),
];

fn answers_strategy() -> impl Strategy<Value = QuestionnaireAnswers> {
    (
        proptest::collection::vec(proptest::option::of(0usize..16), SINGLE_CHOICE.len()),
        proptest::collection::vec(
            proptest::option::of(proptest::collection::vec(any::<bool>(), 24)),
            MULTI_SELECT.len(),
        ),
        proptest::option::of(1u8..=10),
        proptest::option::of(1995i32..=2025),
    )
        .prop_map(|(singles, multis, rating, start_year)| {
            let mut answers = QuestionnaireAnswers::new();
            for ((key, options), choice) in SINGLE_CHOICE.iter().zip(singles) {
                if let Some(i) = choice {
                    answers.insert(*key, options[i % options.len()]);
                }
            }
            for ((key, options), mask) in MULTI_SELECT.iter().zip(multis) {
                if let Some(mask) = mask {
                    let picked: Vec<&str> = options
                        .iter()
                        .zip(mask)
                        .filter(|(_, on)| *on)
                        .map(|(o, _)| *o)
                        .collect();
                    answers.insert(*key, picked);
                }
            }
            if let Some(rating) = rating {
                answers.insert("e1_3", f64::from(rating));
            }
            if let Some(year) = start_year {
                answers.insert("e1_start_year", f64::from(year));
            }
            answers
        })
}

fn calculator() -> ProfileCalculator {
    ProfileCalculator::with_reference_year(2025)
}

fn within(value: f64, (min, max): (f64, f64)) -> bool {
    (min..=max).contains(&value)
}

proptest! {
    #[test]
    fn computation_is_deterministic(answers in answers_strategy()) {
        prop_assert_eq!(calculator().compute(&answers), calculator().compute(&answers));
    }

    #[test]
    fn every_value_stays_in_range(answers in answers_strategy()) {
        let p = calculator().compute(&answers);

        prop_assert!(within(p.risk_taking, RISK_RANGE));
        prop_assert!(within(p.technical_skills, SKILL_RANGE));
        prop_assert!(within(p.adequacy, ADEQUACY_RANGE));
        prop_assert!(within(p.safety_index, SAFETY_RANGE));
        prop_assert!(within(p.growth_potential, GROWTH_RANGE));
    }

    #[test]
    fn values_are_rounded_to_one_decimal(answers in answers_strategy()) {
        let p = calculator().compute(&answers);
        for v in [p.risk_taking, p.technical_skills, p.adequacy, p.safety_index, p.growth_potential] {
            prop_assert!(((v * 10.0).round() - v * 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn profile_type_is_a_function_of_the_point(answers in answers_strategy()) {
        let p = calculator().compute(&answers);
        prop_assume!(p.profile_type != ProfileType::InsufficientData);

        let axes = Axes {
            risk_taking: p.risk_taking,
            technical_skills: p.technical_skills,
            adequacy: p.adequacy,
        };
        prop_assert_eq!(ProfileClassifier::classify(&axes, SCORING_QUESTIONS.len()), p.profile_type);
    }

    #[test]
    fn correct_braking_answer_never_lowers_safety(
        answers in answers_strategy(),
        question in 0usize..3,
    ) {
        let bands = BRAKING_QUESTIONS[question];
        let corrected = answers.clone().with(bands.key, bands.correct_band());

        let before = calculator().compute(&answers);
        let after = calculator().compute(&corrected);
        prop_assert!(after.safety_index >= before.safety_index);
    }

    #[test]
    fn braking_bands_order_by_distance_from_correct(
        answers in answers_strategy(),
        question in 0usize..3,
    ) {
        let bands = BRAKING_QUESTIONS[question];
        let far = bands
            .bands
            .iter()
            .enumerate()
            .max_by_key(|(i, _)| i.abs_diff(bands.correct))
            .map(|(_, band)| *band)
            .unwrap();
        let adjacent = bands.bands[bands.correct - 1];
        let with_band = |band: &str| answers.clone().with(bands.key, band);

        let credit = |band: &str| {
            AnswerNormalizer::new(2025).normalize(&with_band(band)).facts.braking_credits[question]
        };
        prop_assert!(credit(far) < credit(adjacent));
        prop_assert!(credit(adjacent) < credit(bands.correct_band()));

        let safety = |band: &str| calculator().compute(&with_band(band)).safety_index;
        prop_assert!(safety(far) <= safety(adjacent));
        prop_assert!(safety(adjacent) <= safety(bands.correct_band()));
    }

    #[test]
    fn critical_always_needs_high_risk_and_low_safety(answers in answers_strategy()) {
        let p = calculator().compute(&answers);
        if p.danger_level == DangerLevel::Critical {
            prop_assert!(p.risk_taking > 7.0);
            prop_assert!(p.safety_index < -5.0);
        }
    }

    #[test]
    fn danger_ladder_is_conjunctive_for_critical(
        risk in 0.0f64..=10.0,
        skill in 0.0f64..=10.0,
        adequacy in -5.0f64..=5.0,
        safety in -20.0f64..=20.0,
    ) {
        let axes = Axes { risk_taking: risk, technical_skills: skill, adequacy };
        let level = DangerLevel::assess(&axes, safety);

        if risk <= 7.0 || safety >= -5.0 {
            prop_assert_ne!(level, DangerLevel::Critical);
        } else {
            prop_assert_eq!(level, DangerLevel::Critical);
        }
    }

    #[test]
    fn arbitrary_json_objects_never_panic(
        entries in proptest::collection::btree_map("[be][0-9]_[0-9]", "[a-zа-я0-9 ]{0,12}", 0..20)
    ) {
        let value = serde_json::to_value(entries).unwrap();
        let answers = QuestionnaireAnswers::from_json(value);
        let p = calculator().compute(&answers);
        prop_assert!(within(p.risk_taking, RISK_RANGE));
    }
}
