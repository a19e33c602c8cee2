use serde::{Deserialize, Serialize};

/// A single quiz entry.
///
/// The server never inspects a question's shape; whatever the dataset file
/// holds is handed to the frontend unchanged. The frontend currently reads
/// `genre`, `question`, `options`, `answer` and `explanation`, but that
/// contract lives entirely in `static/js/quiz.js`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Question(pub serde_json::Value);
