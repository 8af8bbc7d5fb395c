//! Parse the model's text reply into an [`OptimizationResult`].

use crate::domain::{OptimizationResult, OptimizeError};
use once_cell::sync::Lazy;
use regex::Regex;

// First `{` through last `}`; models like to wrap the JSON in prose or fences.
static JSON_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("valid regex"));

pub fn parse_reply(content: &str) -> Result<OptimizationResult, OptimizeError> {
    match serde_json::from_str::<OptimizationResult>(content.trim()) {
        Ok(result) => Ok(result),
        Err(err) => {
            log::warn!("AI reply is not bare JSON ({err}), looking for an embedded object");
            let span = JSON_SPAN
                .find(content)
                .ok_or_else(|| OptimizeError::InvalidReply("no JSON object in reply".into()))?;
            serde_json::from_str(span.as_str())
                .map_err(|e| OptimizeError::InvalidReply(e.to_string()))
        }
    }
}
