// src/llm/client.rs

use std::time::Duration;

use serde_json::{json, Value};

use crate::llm::prompt::build_prompt;
use crate::llm::{GenerateError, NOT_FOUND_MARKER};
use crate::state::{AgentProfile, UserResponses};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone, Debug)]
pub struct GeminiClient {
    model: String,
}

impl GeminiClient {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }

    /// One schema-constrained generateContent call per enrollment.
    pub fn generate_identity(
        &self,
        api_key: &str,
        data: &UserResponses,
    ) -> Result<AgentProfile, GenerateError> {
        if api_key.trim().is_empty() {
            return Err(GenerateError::CredentialRequired);
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GenerateError::Generation(e.to_string()))?;

        let url = format!("{}/{}:generateContent", API_BASE, self.model);
        let resp = client
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(&build_request(data))
            .send()
            .map_err(|e| GenerateError::Generation(e.to_string()))?;

        let status = resp.status();
        let body: Value = resp
            .json()
            .map_err(|e| GenerateError::Generation(e.to_string()))?;

        if !status.is_success() {
            return Err(classify_remote_error(status.as_u16(), &body));
        }

        let text = extract_text(&body)?;
        parse_profile(&text)
    }
}

fn build_request(data: &UserResponses) -> Value {
    json!({
        "contents": [
            { "parts": [ { "text": build_prompt(data) } ] }
        ],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema(),
        }
    })
}

/// The fixed output shape the remote is forced into. Mirrors
/// AgentProfile field for field.
fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "fullName":          { "type": "STRING" },
            "lastName":          { "type": "STRING" },
            "rank":              { "type": "STRING" },
            "specialty":         { "type": "STRING" },
            "lastKnownLocation": { "type": "STRING" },
            "clearanceLevel":    { "type": "INTEGER" }
        },
        "required": [
            "fullName", "lastName", "rank", "specialty",
            "lastKnownLocation", "clearanceLevel"
        ]
    })
}

fn classify_remote_error(status: u16, body: &Value) -> GenerateError {
    let message = body
        .pointer("/error/message")
        .and_then(|v| v.as_str())
        .unwrap_or("remote call failed")
        .to_string();

    if message.contains(NOT_FOUND_MARKER) {
        GenerateError::InvalidCredential(message)
    } else {
        GenerateError::Generation(format!("HTTP {}: {}", status, message))
    }
}

fn extract_text(body: &Value) -> Result<String, GenerateError> {
    body.pointer("/candidates/0/content/parts/0/text")
        .and_then(|v| v.as_str())
        .filter(|t| !t.trim().is_empty())
        .map(str::to_owned)
        .ok_or_else(|| GenerateError::Generation("no response from Agency HQ".into()))
}

/// Strip incidental ``` fencing, then parse and validate the profile.
pub fn parse_profile(text: &str) -> Result<AgentProfile, GenerateError> {
    let body = strip_fences(text);

    let profile: AgentProfile = serde_json::from_str(body)
        .map_err(|e| GenerateError::Generation(format!("malformed profile JSON: {}", e)))?;

    if !(1..=5).contains(&profile.clearance_level) {
        return Err(GenerateError::Generation(format!(
            "clearance level {} outside 1-5",
            profile.clearance_level
        )));
    }

    Ok(profile)
}

/// Models sometimes wrap JSON output in a markdown code fence even when
/// told not to. Idempotent on unfenced input.
pub fn strip_fences(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}
