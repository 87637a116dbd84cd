//! Assistant commands. These need `OPENAI_API_KEY` and network access.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::{Map, Value};
use tracing::debug;

use crate::assistant::Assistant;
use crate::output::Output;

/// Ask the engineering assistant a question
#[derive(Args, Debug)]
pub struct AskArgs {
    /// The question
    pub question: String,

    /// JSON object file whose entries are sent as context
    #[arg(long)]
    pub context: Option<PathBuf>,
}

/// Ask the assistant which calculations suit a project
#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Free-text project description
    pub description: String,
}

pub fn read_context(path: &PathBuf) -> Result<Map<String, Value>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    match serde_json::from_str::<Value>(&text)? {
        Value::Object(map) => Ok(map),
        _ => anyhow::bail!("context file {} must contain a JSON object", path.display()),
    }
}

pub fn ask(args: AskArgs, out: &Output) -> Result<()> {
    let context = args.context.as_ref().map(read_context).transpose()?;
    let assistant = Assistant::from_env()?;
    debug!(model = assistant.model(), has_context = context.is_some(), "asking assistant");
    let answer = assistant.query(&args.question, context.as_ref())?;
    out.emit(
        "Assistant",
        &serde_json::json!({ "answer": answer }),
        &answer.lines().map(str::to_string).collect::<Vec<_>>(),
    )
}

pub fn suggest(args: SuggestArgs, out: &Output) -> Result<()> {
    let assistant = Assistant::from_env()?;
    let suggestion = assistant.suggest_calculation(&args.description)?;
    out.emit(
        "Suggested Calculations",
        &serde_json::json!({ "suggestion": suggestion }),
        &suggestion.lines().map(str::to_string).collect::<Vec<_>>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_must_be_object() {
        let dir = std::env::temp_dir().join(format!("waterfront_ask_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let good = dir.join("good.json");
        fs::write(&good, r#"{"state": "CA", "depth_m": 8}"#).unwrap();
        assert_eq!(read_context(&good).unwrap().len(), 2);

        let bad = dir.join("bad.json");
        fs::write(&bad, "[1, 2]").unwrap();
        assert!(read_context(&bad).is_err());

        fs::remove_dir_all(&dir).unwrap();
    }
}
