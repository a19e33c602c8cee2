use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::question::Question;

/// Difficulty names every deployment is expected to offer. They double as
/// the keys of the fallback dataset substituted when loading fails.
pub const DEFAULT_DIFFICULTIES: [&str; 3] = ["easy", "normal", "hard"];

/// The parsed quiz file: difficulty name mapped to its ordered questions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizDataset(pub BTreeMap<String, Vec<Question>>);

impl QuizDataset {
    /// The safe empty default: every known difficulty present, no questions.
    pub fn fallback() -> Self {
        Self(
            DEFAULT_DIFFICULTIES
                .iter()
                .map(|d| (d.to_string(), Vec::new()))
                .collect(),
        )
    }

    pub fn questions(&self, difficulty: &str) -> Option<&[Question]> {
        self.0.get(difficulty).map(Vec::as_slice)
    }

    pub fn difficulties(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }
}
