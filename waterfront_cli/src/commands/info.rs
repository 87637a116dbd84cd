//! Reference commands: state profiles, the equation registry and the
//! report template.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use waterfront_core::equations::generate_equations_markdown;
use waterfront_core::jurisdictions::{list_jurisdictions, JurisdictionProfile};
use waterfront_core::report::{write_report_template, DEFAULT_REPORT_FILE};

use crate::output::Output;

/// Write a report template CSV
#[derive(Args, Debug)]
pub struct ReportTemplateArgs {
    /// Output path
    #[arg(long = "out", default_value = DEFAULT_REPORT_FILE)]
    pub out: PathBuf,
}

fn profile_line(p: &JurisdictionProfile) -> String {
    format!(
        "{}: {} - Waters: {}; Agencies: {}. {}",
        p.code,
        p.name,
        p.waters,
        p.agencies.join(", "),
        p.notes
    )
}

pub fn list_states(out: &Output) -> Result<()> {
    let profiles = list_jurisdictions();
    let lines: Vec<String> = profiles.iter().map(profile_line).collect();
    out.emit("Supported States", &profiles, &lines)
}

pub fn equations() -> Result<()> {
    print!("{}", generate_equations_markdown());
    Ok(())
}

pub fn report_template(args: ReportTemplateArgs, out: &Output) -> Result<()> {
    write_report_template(&args.out)?;
    info!(path = %args.out.display(), "report template written");
    let path = args.out.display().to_string();
    out.emit(
        "Report Template",
        &serde_json::json!({ "path": path }),
        &[format!("Wrote report template to {}", path)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use waterfront_core::jurisdictions::jurisdiction;

    #[test]
    fn test_profile_line() {
        let line = profile_line(&jurisdiction("CA").unwrap());
        assert!(line.starts_with("CA: California - Waters: Pacific coast"));
        assert!(line.contains("Agencies: USACE, NOAA, CA Coastal Commission"));
    }
}
