//! Output format implementations

use serde_json::json;

use crate::decode::Recognition;

/// Format as plain text
pub fn format_text(result: &Recognition) -> String {
    result.text.clone()
}

/// Format as JSON
pub fn format_json(result: &Recognition) -> String {
    json!({
        "text": result.text,
        "raw": result.raw,
        "timesteps": result.timesteps,
    })
    .to_string()
}
