//! Trap Question Detector and Skill Growth Analyzer.
//!
//! A trap pairs a skill claim with a knowledge question. Claiming the
//! skill while failing the question is a red flag on its own, whatever
//! the axes say.

use super::answers::QuestionnaireAnswers;
use super::normalizer::RiderFacts;
use super::vocabulary::*;

/// Claims contradicted by the rider's own knowledge answers, in fixed order.
pub fn trap_failures(answers: &QuestionnaireAnswers, facts: &RiderFacts) -> Vec<String> {
    let mut failures = Vec::new();

    let braking_traps = [
        (facts.claims.brake_from_60, BRAKING_FROM_60, "60"),
        (facts.claims.brake_from_100, BRAKING_FROM_100, "100"),
        (facts.claims.brake_from_150, BRAKING_FROM_150, "150"),
    ];
    for (claimed, question, speed) in braking_traps {
        let wrong = answers
            .text(question.key)
            .is_some_and(|a| a != question.correct_band());
        if claimed && wrong {
            failures.push(format!(
                "Заявляє вміння гальмувати з {speed}, але не знає дистанцію"
            ));
        }
    }

    if facts.claims.trail_braking {
        if facts.is_first_season() {
            failures.push("Заявляє трейлбрейкінг в перший сезон - малоймовірно".to_string());
        } else if !facts.has_track_training && facts.experience_years < 5.0 {
            failures.push("Заявляє трейлбрейкінг без треку і достатнього досвіду".to_string());
        }
    }

    if facts.claims.knee_down && !facts.has_track_training {
        failures.push("Заявляє їзду в коліно без треку - сумнівно".to_string());
    }

    if facts.claims.u_turn_without_feet && facts.is_first_season() {
        failures.push("Заявляє розворот без ніг в перший сезон - малоймовірно".to_string());
    }

    if answers.is(WOBBLE_RESPONSE, WOBBLE_BRAKE) {
        failures.push("⚠️ КРИТИЧНА ПОМИЛКА: гальмування при wobble = падіння!".to_string());
    }

    if answers.is(GRIP, GRIP_TIGHT) {
        failures.push("Базова помилка: міцний хват керма погіршує контроль".to_string());
    }

    failures
}

/// Warnings when demonstrated skill lags behind years of riding.
pub fn skill_growth_warnings(facts: &RiderFacts, technical_skills: f64) -> Vec<String> {
    let mut warnings = Vec::new();
    let experience = facts.experience_years;
    let expected_min_skill = (2.0 + experience * 0.8).min(8.0);

    if technical_skills < expected_min_skill - 1.0 {
        warnings.push(format!(
            "⚠️ Навички не ростуть з досвідом ({experience:.1} років, але skills {technical_skills:.1})"
        ));

        if experience > 5.0 && technical_skills < 5.0 {
            warnings.push("🔴 КРИТИЧНО: Після 5+ років навички повинні бути вищими!".to_string());
        }

        if facts.self_rating.is_some_and(|r| r > 6.0) && technical_skills < 5.0 {
            warnings.push("Переоцінка своїх можливостей при низьких реальних навичках".to_string());
        }
    }

    if experience > 3.0 && technical_skills < 4.0 {
        warnings.push("Стагнація навичок - потрібне додаткове навчання".to_string());
    }

    warnings
}
