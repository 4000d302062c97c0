//! Parsing of `generateContent` replies.

use crate::AnalysisError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A structured board analysis returned by the model.
///
/// `best_move` is free text from the model and is not checked against the
/// rules engine. `confidence` is expected in `[0, 1]` but is passed through
/// as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardAnalysis {
    /// Strategic summary of the position.
    pub analysis: String,
    /// Suggested next move.
    #[serde(rename = "bestMove")]
    pub best_move: String,
    /// Model confidence.
    pub confidence: f64,
}

impl fmt::Display for BoardAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nBest move: {} (confidence {:.2})",
            self.analysis, self.best_move, self.confidence
        )
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Extracts the text of the first candidate from a `generateContent` reply
/// body. Text parts are concatenated in order.
pub fn response_text(body: &str) -> Result<String, AnalysisError> {
    let envelope: GenerateContentResponse = serde_json::from_str(body)?;
    let content = envelope
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .ok_or_else(|| AnalysisError::MalformedResponse("no candidates".to_string()))?;

    let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
    if text.is_empty() {
        return Err(AnalysisError::MalformedResponse(
            "candidate has no text".to_string(),
        ));
    }
    Ok(text)
}

/// Parses a full `generateContent` reply body into a [`BoardAnalysis`].
pub fn parse_response(body: &str) -> Result<BoardAnalysis, AnalysisError> {
    let text = response_text(body)?;
    Ok(serde_json::from_str(&text)?)
}
