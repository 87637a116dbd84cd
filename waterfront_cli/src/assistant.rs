//! Engineering assistant backed by an OpenAI-compatible chat endpoint.
//!
//! The assistant only relays text. It never evaluates a formula itself;
//! numbers come from `waterfront_core` and are passed in as context.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 1500;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

pub const SYSTEM_PROMPT: &str = "You are an expert marine and waterfront structural engineer specializing in California, Indiana, and Ohio coastal and waterway projects.

Your expertise includes:
- Linear wave theory and coastal processes
- Pile design (Morison forces, axial capacity, scour, corrosion)
- Berthing energy and fender selection
- Mooring analysis (wind and current loads)
- Seawall stability
- Regulatory frameworks: USACE, NOAA, CA Coastal Commission, ASCE MOP 130/61, PIANC

Provide clear, engineering-focused guidance. Always remind users that these are screening-level calculations requiring professional validation and AHJ approval.";

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("OpenAI API key required. Set OPENAI_API_KEY environment variable.")]
    MissingApiKey,

    #[error("request to assistant endpoint failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("assistant endpoint returned {status}: {body}")]
    Api { status: u16, body: String },
}

/// Connection settings
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl AssistantConfig {
    /// Read `OPENAI_API_KEY`, `WATERFRONT_ASSISTANT_MODEL` and
    /// `WATERFRONT_ASSISTANT_URL`.
    pub fn from_env() -> Self {
        AssistantConfig {
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            model: std::env::var("WATERFRONT_ASSISTANT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            base_url: std::env::var("WATERFRONT_ASSISTANT_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    fn new(role: &str, content: impl Into<String>) -> Self {
        ChatMessage {
            role: role.to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

pub struct Assistant {
    config: AssistantConfig,
    client: Client,
}

impl Assistant {
    /// Fails when the API key is missing or empty.
    pub fn new(config: AssistantConfig) -> Result<Self, AssistantError> {
        if config.api_key.trim().is_empty() {
            return Err(AssistantError::MissingApiKey);
        }
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Assistant { config, client })
    }

    pub fn from_env() -> Result<Self, AssistantError> {
        Assistant::new(AssistantConfig::from_env())
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Ask a free-text question, optionally prefixed with `key: value` context.
    pub fn query(&self, question: &str, context: Option<&Map<String, Value>>) -> Result<String, AssistantError> {
        let messages = build_messages(question, context);
        let request = ChatRequest {
            model: &self.config.model,
            messages: &messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };
        let url = format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'));
        debug!(%url, model = %self.config.model, "sending assistant request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AssistantError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json()?;
        Ok(parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default())
    }

    /// Recommend calculations and input ranges for a project description.
    pub fn suggest_calculation(&self, description: &str) -> Result<String, AssistantError> {
        self.query(&suggestion_prompt(description), None)
    }

    /// Explain a result record and suggest next steps.
    pub fn interpret_results(&self, calc_type: &str, inputs: &Value, results: &Value) -> Result<String, AssistantError> {
        self.query(&interpretation_prompt(calc_type, inputs, results), None)
    }
}

/// System prompt plus the user turn, with context rendered as `key: value` lines.
pub fn build_messages(question: &str, context: Option<&Map<String, Value>>) -> Vec<ChatMessage> {
    let user = match context {
        Some(ctx) if !ctx.is_empty() => {
            let rendered: Vec<String> = ctx
                .iter()
                .map(|(k, v)| match v {
                    Value::String(s) => format!("{}: {}", k, s),
                    other => format!("{}: {}", k, other),
                })
                .collect();
            format!("Context:\n{}\n\nQuestion: {}", rendered.join("\n"), question)
        }
        _ => question.to_string(),
    };
    vec![ChatMessage::new("system", SYSTEM_PROMPT), ChatMessage::new("user", user)]
}

pub fn suggestion_prompt(description: &str) -> String {
    format!(
        "Based on this waterfront project description:\n\n{}\n\nSuggest the most relevant engineering calculations to perform and provide recommended input parameter ranges. Format your response as specific calculation recommendations.",
        description
    )
}

pub fn interpretation_prompt(calc_type: &str, inputs: &Value, results: &Value) -> String {
    format!(
        "Interpret these {} calculation results:\n\nInputs: {}\nResults: {}\n\nProvide engineering interpretation, typical acceptance criteria, and recommendations for next steps.",
        calc_type, inputs, results
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(key: &str) -> AssistantConfig {
        AssistantConfig {
            api_key: key.to_string(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    #[test]
    fn test_missing_key_rejected() {
        assert!(matches!(Assistant::new(config("")), Err(AssistantError::MissingApiKey)));
        assert!(matches!(Assistant::new(config("   ")), Err(AssistantError::MissingApiKey)));
    }

    #[test]
    fn test_model_from_config() {
        let assistant = Assistant::new(config("sk-test")).unwrap();
        assert_eq!(assistant.model(), "gpt-4o-mini");
    }

    #[test]
    fn test_messages_without_context() {
        let messages = build_messages("What is Ks?", None);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert!(messages[0].content.contains("screening-level"));
        assert_eq!(messages[1], ChatMessage::new("user", "What is Ks?"));
    }

    #[test]
    fn test_messages_with_context() {
        let ctx = json!({ "state": "OH", "depth_m": 4.5 });
        let messages = build_messages("Is scour a concern?", ctx.as_object());
        assert_eq!(
            messages[1].content,
            "Context:\ndepth_m: 4.5\nstate: OH\n\nQuestion: Is scour a concern?"
        );
    }

    #[test]
    fn test_prompts() {
        assert!(suggestion_prompt("Marina on Lake Erie").contains("Marina on Lake Erie"));
        let prompt = interpretation_prompt("Seawall", &json!({"mu": 0.6}), &json!({"fs": 1.5}));
        assert!(prompt.starts_with("Interpret these Seawall calculation results"));
        assert!(prompt.contains("Inputs: {\"mu\":0.6}"));
    }

    #[test]
    fn test_request_shape() {
        let messages = build_messages("q", None);
        let request = ChatRequest {
            model: DEFAULT_MODEL,
            messages: &messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["max_tokens"], 1500);
        assert_eq!(value["messages"][1]["content"], "q");
    }
}
