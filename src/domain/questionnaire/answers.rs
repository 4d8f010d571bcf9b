//! Raw questionnaire answers and tolerant accessors over them.
//!
//! Answers arrive as an arbitrary JSON object. Nothing is required and
//! nothing is rejected: every accessor returns `Option` (or an empty list)
//! and the normalizer decides the default.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// A single answer value as submitted by the questionnaire UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
    List(Vec<String>),
    /// Anything else (booleans, nulls, objects, mixed arrays). Tolerated, never scored.
    Other(JsonValue),
}

impl AnswerValue {
    /// True when the value carries something a rider actually chose or typed.
    pub fn is_answered(&self) -> bool {
        match self {
            AnswerValue::Number(n) => n.is_finite(),
            AnswerValue::Text(s) => !s.trim().is_empty(),
            AnswerValue::List(items) => !items.is_empty(),
            AnswerValue::Other(v) => !v.is_null(),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Text(s.to_string())
    }
}

impl From<f64> for AnswerValue {
    fn from(n: f64) -> Self {
        AnswerValue::Number(n)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(items: Vec<&str>) -> Self {
        AnswerValue::List(items.into_iter().map(str::to_string).collect())
    }
}

/// Which questionnaire a submission came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionnaireKind {
    Experienced,
    Beginner,
    Unknown,
}

/// Experienced-questionnaire keys that fall back to a beginner question
/// asking the same thing.
const BEGINNER_ALIASES: &[(&str, &str)] = &[
    ("e1_1", "b1_1"),
    ("e1_5", "b1_4"),
    ("e1_6", "b1_5"),
    ("e2_3", "b2_3"),
    ("e3_1", "b3_1"),
    ("e7_1", "b4_1"),
    ("e7_2", "b4_2"),
    ("e7_3", "b4_4"),
];

/// Mapping from question key to answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionnaireAnswers(BTreeMap<String, AnswerValue>);

impl QuestionnaireAnswers {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds answers from any JSON value. Non-objects yield an empty set.
    pub fn from_json(value: JsonValue) -> Self {
        match value {
            JsonValue::Object(map) => Self(
                map.into_iter()
                    .map(|(key, v)| {
                        let answer = serde_json::from_value(v.clone())
                            .unwrap_or(AnswerValue::Other(v));
                        (key, answer)
                    })
                    .collect(),
            ),
            _ => Self::default(),
        }
    }

    /// Builder: set an answer.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets an answer, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AnswerValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Number of keys present (answered or not).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up a key, falling back to its beginner alias.
    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.0
            .get(key)
            .filter(|v| v.is_answered())
            .or_else(|| {
                BEGINNER_ALIASES
                    .iter()
                    .find(|(experienced, _)| *experienced == key)
                    .and_then(|(_, beginner)| self.0.get(*beginner))
                    .filter(|v| v.is_answered())
            })
    }

    /// True when the key (or its alias) carries an answer.
    pub fn is_answered(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Single-choice text answer.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            AnswerValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// True when the single-choice answer equals `option`.
    pub fn is(&self, key: &str, option: &str) -> bool {
        self.text(key) == Some(option)
    }

    /// Numeric answer; numeric strings are accepted.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            AnswerValue::Number(n) if n.is_finite() => Some(*n),
            AnswerValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// Leading integer of the answer ("3", "3+", 3.0 all read as 3).
    pub fn leading_integer(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            AnswerValue::Number(n) if n.is_finite() => Some(n.trunc() as i64),
            AnswerValue::Text(s) => {
                let digits: String = s
                    .trim()
                    .chars()
                    .take_while(|c| c.is_ascii_digit())
                    .collect();
                digits.parse().ok()
            }
            _ => None,
        }
    }

    /// Multi-select answer. A lone text answer counts as a one-item list.
    pub fn list(&self, key: &str) -> Vec<&str> {
        match self.get(key) {
            Some(AnswerValue::List(items)) => items.iter().map(String::as_str).collect(),
            Some(AnswerValue::Text(s)) => vec![s.as_str()],
            _ => Vec::new(),
        }
    }

    /// True when the multi-select answer contains `option`.
    pub fn contains(&self, key: &str, option: &str) -> bool {
        self.list(key).contains(&option)
    }

    /// Number of selected items, or `None` when the question was not submitted at all.
    pub fn selection_count(&self, key: &str) -> Option<usize> {
        match self.0.get(key).or_else(|| {
            BEGINNER_ALIASES
                .iter()
                .find(|(experienced, _)| *experienced == key)
                .and_then(|(_, beginner)| self.0.get(*beginner))
        })? {
            AnswerValue::List(items) => Some(items.len()),
            AnswerValue::Text(s) if !s.trim().is_empty() => Some(1),
            AnswerValue::Text(_) => Some(0),
            AnswerValue::Number(_) => Some(1),
            AnswerValue::Other(v) if v.is_null() => None,
            AnswerValue::Other(_) => Some(1),
        }
    }

    /// Decides the questionnaire family from the keys present.
    pub fn kind(&self) -> QuestionnaireKind {
        if self.0.keys().any(|k| k.starts_with('e')) {
            QuestionnaireKind::Experienced
        } else if self.0.keys().any(|k| k.starts_with('b')) {
            QuestionnaireKind::Beginner
        } else {
            QuestionnaireKind::Unknown
        }
    }
}

impl From<JsonValue> for QuestionnaireAnswers {
    fn from(value: JsonValue) -> Self {
        Self::from_json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_mixed_value_types() {
        let answers: QuestionnaireAnswers = serde_json::from_value(json!({
            "e1_3": 7,
            "e1_6": "2-3 сезони",
            "e2_2": ["Я догнав автівку"],
            "e9_9": true
        }))
        .unwrap();

        assert_eq!(answers.number("e1_3"), Some(7.0));
        assert_eq!(answers.text("e1_6"), Some("2-3 сезони"));
        assert!(answers.contains("e2_2", "Я догнав автівку"));
        assert!(answers.is_answered("e9_9"));
        assert_eq!(answers.text("e9_9"), None);
    }

    #[test]
    fn mixed_arrays_are_tolerated_as_other() {
        let answers = QuestionnaireAnswers::from_json(json!({ "e2_2": [1, "a"] }));
        assert!(answers.list("e2_2").is_empty());
        assert_eq!(answers.selection_count("e2_2"), Some(1));
    }

    #[test]
    fn from_json_of_non_object_is_empty() {
        assert!(QuestionnaireAnswers::from_json(json!([1, 2, 3])).is_empty());
        assert!(QuestionnaireAnswers::from_json(json!("text")).is_empty());
    }

    #[test]
    fn numeric_strings_parse_as_numbers() {
        let answers = QuestionnaireAnswers::new().with("e1_3", "8");
        assert_eq!(answers.number("e1_3"), Some(8.0));
    }

    #[test]
    fn leading_integer_reads_prefix_digits() {
        let answers = QuestionnaireAnswers::new()
            .with("a", "3+")
            .with("b", 2.0)
            .with("c", "багато");

        assert_eq!(answers.leading_integer("a"), Some(3));
        assert_eq!(answers.leading_integer("b"), Some(2));
        assert_eq!(answers.leading_integer("c"), None);
        assert_eq!(answers.leading_integer("missing"), None);
    }

    #[test]
    fn experienced_key_falls_back_to_beginner_alias() {
        let answers = QuestionnaireAnswers::new().with("b4_1", "90-150 км/год");
        assert!(answers.is("e7_1", "90-150 км/год"));
    }

    #[test]
    fn experienced_answer_wins_over_alias() {
        let answers = QuestionnaireAnswers::new()
            .with("e7_1", "40-70 км/год")
            .with("b4_1", "90-150 км/год");
        assert!(answers.is("e7_1", "40-70 км/год"));
    }

    #[test]
    fn blank_text_counts_as_unanswered() {
        let answers = QuestionnaireAnswers::new().with("e1_7", "   ");
        assert!(!answers.is_answered("e1_7"));
        assert_eq!(answers.text("e1_7"), None);
    }

    #[test]
    fn selection_count_distinguishes_empty_from_missing() {
        let answers = QuestionnaireAnswers::new().with("e2_3", Vec::<&str>::new());
        assert_eq!(answers.selection_count("e2_3"), Some(0));
        assert_eq!(answers.selection_count("e2_2"), None);
    }

    #[test]
    fn kind_detects_questionnaire_family() {
        assert_eq!(
            QuestionnaireAnswers::new().with("e1_1", "20-30").kind(),
            QuestionnaireKind::Experienced
        );
        assert_eq!(
            QuestionnaireAnswers::new().with("b1_1", "20-30").kind(),
            QuestionnaireKind::Beginner
        );
        assert_eq!(QuestionnaireAnswers::new().kind(), QuestionnaireKind::Unknown);
    }
}
