//! # Report Template
//!
//! Header-only CSV template that collects the design inputs for one
//! project. Engineers fill one row per structure and keep it with the
//! screening results.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::errors::{CalcError, CalcResult};

/// Default file name used by the CLI
pub const DEFAULT_REPORT_FILE: &str = "waterfront_report_template.csv";

/// Template columns, in file order
pub const REPORT_TEMPLATE_COLUMNS: [&str; 20] = [
    "project",
    "location",
    "jurisdiction",
    "waterbody",
    "design_wave_Hs_m",
    "design_Tp_s",
    "water_depth_m",
    "pile_D_m",
    "morison_Cd",
    "morison_Cm",
    "mooring_wind_area_m2",
    "mooring_current_area_m2",
    "mooring_wind_mps",
    "mooring_current_mps",
    "berthing_mass_tonnes",
    "berthing_speed_knots",
    "seawall_mu",
    "seawall_W_kN",
    "seawall_T_kN",
    "notes",
];

/// The template contents: one header line terminated by a newline.
pub fn report_template_csv() -> String {
    let mut csv = REPORT_TEMPLATE_COLUMNS.join(",");
    csv.push('\n');
    csv
}

/// Write the template to `path` atomically.
///
/// The contents go to a sibling `.tmp` file which is synced and then renamed
/// over the destination, so readers never observe a half-written template.
///
/// # Errors
///
/// * `FileError` - the temp file could not be created, written or renamed
pub fn write_report_template(path: &Path) -> CalcResult<()> {
    let csv = report_template_csv();
    let tmp_path = path.with_extension("csv.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(csv.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    drop(tmp_file);

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    tracing::debug!(path = %path.display(), "wrote report template");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("waterfront_report_{}_{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_header_columns() {
        let csv = report_template_csv();
        assert!(csv.ends_with('\n'));
        let header: Vec<&str> = csv.trim_end().split(',').collect();
        assert_eq!(header.len(), 20);
        assert_eq!(header[0], "project");
        assert_eq!(header[19], "notes");
    }

    #[test]
    fn test_write_and_overwrite() {
        let dir = test_dir("write");
        let path = dir.join("template.csv");
        fs::write(&path, "stale").unwrap();

        write_report_template(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), report_template_csv());
        assert!(!path.with_extension("csv.tmp").exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_directory() {
        let path = test_dir("missing").join("no_such_dir").join("template.csv");
        let err = write_report_template(&path).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
