//! Run a JSON file of tagged calculation items.
//!
//! The file holds an array such as
//!
//! ```json
//! [
//!   { "type": "Waves", "period_s": 8.0, "depth_m": 12.0 },
//!   { "type": "Seawall", "friction_coefficient": 0.6, "weight_kn": 1000.0, "thrust_kn": 400.0 }
//! ]
//! ```
//!
//! Every item is run even when an earlier one fails; the command exits with
//! an error afterwards if any item was rejected.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;
use tracing::{info, warn};

use waterfront_core::calculations::{CalculationItem, CalculationOutput};
use waterfront_core::CalcError;

use crate::assistant::Assistant;
use crate::output::{self, Output};

/// Run every calculation in a JSON batch file
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// JSON file containing an array of calculation items
    pub file: PathBuf,

    /// Ask the assistant to interpret each successful result
    #[arg(long)]
    pub interpret: bool,
}

/// Outcome of one batch item
#[derive(Debug, Serialize)]
pub struct BatchEntry {
    pub index: usize,
    pub calc_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<CalculationOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CalcError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,
}

pub fn parse_items(json: &str) -> Result<Vec<CalculationItem>> {
    let items: Vec<CalculationItem> = serde_json::from_str(json).context("batch file is not a valid item array")?;
    Ok(items)
}

pub fn run_items(items: &[CalculationItem]) -> Vec<BatchEntry> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let (output, error) = match item.run() {
                Ok(output) => (Some(output), None),
                Err(e) => {
                    warn!(index, calc_type = item.calc_type(), error = %e, "batch item rejected");
                    (None, Some(e))
                }
            };
            BatchEntry {
                index,
                calc_type: item.calc_type(),
                output,
                error,
                interpretation: None,
            }
        })
        .collect()
}

/// Attach an assistant interpretation to every successful entry.
///
/// A failed request is recorded on its entry and never aborts the batch.
pub fn interpret_entries(assistant: &Assistant, entries: &mut [BatchEntry], items: &[CalculationItem]) {
    for (entry, item) in entries.iter_mut().zip(items) {
        let Some(result) = &entry.output else {
            continue;
        };
        entry.interpretation = Some(match interpret_one(assistant, entry.calc_type, item, result) {
            Ok(text) => text,
            Err(e) => {
                warn!(index = entry.index, calc_type = entry.calc_type, error = %e, "interpretation unavailable");
                format!("Interpretation unavailable: {}", e)
            }
        });
    }
}

fn interpret_one(
    assistant: &Assistant,
    calc_type: &str,
    item: &CalculationItem,
    result: &CalculationOutput,
) -> Result<String> {
    let inputs = serde_json::to_value(item)?;
    let results = serde_json::to_value(result)?;
    Ok(assistant.interpret_results(calc_type, &inputs, &results)?)
}

pub fn execute(args: BatchArgs, out: &Output) -> Result<()> {
    let text = fs::read_to_string(&args.file).with_context(|| format!("reading {}", args.file.display()))?;
    let items = parse_items(&text)?;
    info!(count = items.len(), "running batch");

    let mut entries = run_items(&items);

    if args.interpret {
        let assistant = Assistant::from_env()?;
        interpret_entries(&assistant, &mut entries, &items);
    }

    let failures = entries.iter().filter(|e| e.error.is_some()).count();

    if out.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            let title = format!("#{} {}", entry.index, entry.calc_type);
            let mut lines = match (&entry.output, &entry.error) {
                (Some(result), _) => output::summary_lines(result),
                (None, Some(e)) => vec![format!("[{}] {}", e.error_code(), e)],
                (None, None) => Vec::new(),
            };
            if let Some(text) = &entry.interpretation {
                lines.push(String::new());
                lines.extend(text.lines().map(str::to_string));
            }
            println!("{}", output::panel(&title, &lines));
        }
    }

    if failures > 0 {
        bail!("{} of {} batch items failed", failures, entries.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::{AssistantConfig, DEFAULT_MODEL};

    #[test]
    fn test_mixed_batch() {
        let json = r#"[
            {"type": "Waves", "period_s": 8.0, "depth_m": 12.0},
            {"type": "Seawall", "friction_coefficient": 0.6, "weight_kn": -1.0, "thrust_kn": 400.0},
            {"type": "Corrosion", "initial_thickness_mm": 12.0, "corrosion_rate_mm_per_year": 0.1, "service_years": 50.0}
        ]"#;
        let entries = run_items(&parse_items(json).unwrap());
        assert_eq!(entries.len(), 3);
        assert!(entries[0].output.is_some());
        assert_eq!(entries[1].error.as_ref().and_then(|e| e.field()), Some("weight_kn"));
        assert_eq!(entries[2].calc_type, "Corrosion");
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(parse_items(r#"[{"type": "Breakwater"}]"#).is_err());
    }

    #[test]
    fn test_interpretation_failure_keeps_entries() {
        let json = r#"[
            {"type": "Scour", "diameter_m": 1.0, "current_speed_mps": 1.5},
            {"type": "Seawall", "friction_coefficient": 0.6, "weight_kn": -1.0, "thrust_kn": 400.0}
        ]"#;
        let items = parse_items(json).unwrap();
        let mut entries = run_items(&items);
        let assistant = Assistant::new(AssistantConfig {
            api_key: "sk-test".to_string(),
            model: DEFAULT_MODEL.to_string(),
            base_url: "http://127.0.0.1:1/v1".to_string(),
        })
        .unwrap();

        interpret_entries(&assistant, &mut entries, &items);

        assert_eq!(entries.len(), 2);
        assert!(entries[0].output.is_some());
        let note = entries[0].interpretation.as_deref().unwrap();
        assert!(note.starts_with("Interpretation unavailable"));
        assert!(entries[1].error.is_some());
        assert!(entries[1].interpretation.is_none());
    }
}
