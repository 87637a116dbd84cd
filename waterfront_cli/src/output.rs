//! Terminal rendering for calculation results.
//!
//! Text mode draws a titled box per result; `--json` prints the serialized
//! record instead so the output can be piped into other tools.

use anyhow::Result;
use serde::Serialize;

use waterfront_core::calculations::CalculationOutput;

/// Output settings shared by every command
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Output { json }
    }

    /// Print `value` as pretty JSON, or the panel built from `lines`.
    pub fn emit<T: Serialize>(&self, title: &str, value: &T, lines: &[String]) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", panel(title, lines));
        }
        Ok(())
    }

    pub fn emit_calculation(&self, output: &CalculationOutput) -> Result<()> {
        self.emit(title(output), output, &summary_lines(output))
    }
}

/// Display title for a result
pub fn title(output: &CalculationOutput) -> &'static str {
    match output {
        CalculationOutput::Waves(_) => "Linear Waves",
        CalculationOutput::Morison(_) => "Morison Inline Force",
        CalculationOutput::Berthing(_) => "Berthing Energy/Reaction",
        CalculationOutput::Mooring(_) => "Mooring Load",
        CalculationOutput::PileAxial(_) => "Pile Axial Capacity",
        CalculationOutput::Corrosion(_) => "Corrosion Allowance",
        CalculationOutput::Seawall(_) => "Seawall Sliding",
        CalculationOutput::Scour(_) => "Pile Scour (Screening)",
        CalculationOutput::Tides(_) => "Tide Synthesis",
    }
}

/// Human-readable result lines
pub fn summary_lines(output: &CalculationOutput) -> Vec<String> {
    match output {
        CalculationOutput::Waves(r) => vec![
            format!("L = {:.2} m", r.wavelength_m),
            format!("c = {:.2} m/s", r.celerity_mps),
            format!("cg = {:.2} m/s", r.group_celerity_mps),
            format!("Ks = {:.3}", r.shoaling_coefficient),
            format!("h/L = {:.3} ({:?})", r.relative_depth, r.depth_regime),
        ],
        CalculationOutput::Morison(r) => vec![
            format!("Max inline force per length = {:.1} N/m", r.force_per_length_n_per_m),
            format!(
                "  drag = {:.1} N/m, inertia = {:.1} N/m",
                r.drag_per_length_n_per_m, r.inertia_per_length_n_per_m
            ),
        ],
        CalculationOutput::Berthing(r) => vec![
            format!("E = {} J", group_thousands(r.energy_j)),
            format!("R = {:.1} kN", r.fender_reaction_kn),
        ],
        CalculationOutput::Mooring(r) => vec![
            format!("Total mooring load = {:.1} kN", r.total_load_n / 1000.0),
            format!(
                "  wind = {:.1} kN, current = {:.1} kN",
                r.wind_load_n / 1000.0,
                r.current_load_n / 1000.0
            ),
        ],
        CalculationOutput::PileAxial(r) => vec![
            format!("Axial capacity = {:.0} kN", r.capacity_kn),
            format!(
                "  skin = {:.0} kN, end bearing = {:.0} kN",
                r.skin_capacity_kn, r.end_bearing_capacity_kn
            ),
        ],
        CalculationOutput::Corrosion(r) => {
            let mut lines = vec![format!("Remaining thickness = {:.2} mm", r.remaining_thickness_mm)];
            if r.fully_corroded {
                lines.push("  section fully consumed within service life".to_string());
            }
            lines
        }
        CalculationOutput::Seawall(r) => vec![format!("Sliding FS = {:.2}", r.sliding_factor_of_safety)],
        CalculationOutput::Scour(r) => vec![format!("Estimated local scour = {:.2} m", r.scour_depth_m)],
        CalculationOutput::Tides(s) => vec![format!(
            "Generated {} points. Max eta = {:.2} m, Min eta = {:.2} m",
            s.len(),
            s.max_elevation().unwrap_or(0.0),
            s.min_elevation().unwrap_or(0.0)
        )],
    }
}

/// Draw `lines` inside a box with `title` in the top border.
pub fn panel(title: &str, lines: &[String]) -> String {
    let width = lines
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(title.chars().count() + 2))
        .max()
        .unwrap_or(0);

    let title_len = title.chars().count() + 2;
    let left = (width - title_len) / 2;
    let right = width - title_len - left;

    let mut out = String::new();
    out.push_str(&format!("╭─{} {} {}─╮\n", "─".repeat(left), title, "─".repeat(right)));
    for line in lines {
        let pad = width - line.chars().count();
        out.push_str(&format!("│ {}{} │\n", line, " ".repeat(pad)));
    }
    out.push_str(&format!("╰{}╯", "─".repeat(width + 2)));
    out
}

/// Rounded integer with comma separators, e.g. 132,326
fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waterfront_core::calculations::seawall::{self, SeawallInput};

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(132_326.3), "132,326");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1_000_000.0), "1,000,000");
    }

    #[test]
    fn test_panel_alignment() {
        let rendered = panel("Seawall Sliding", &["Sliding FS = 1.50".to_string()]);
        let widths: Vec<usize> = rendered.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "ragged panel:\n{}", rendered);
        assert!(rendered.contains("Seawall Sliding"));
    }

    #[test]
    fn test_summary_lines() {
        let r = seawall::calculate(&SeawallInput::new(0.6, 1000.0, 400.0)).unwrap();
        let output = CalculationOutput::Seawall(r);
        assert_eq!(title(&output), "Seawall Sliding");
        assert_eq!(summary_lines(&output), vec!["Sliding FS = 1.50".to_string()]);
    }
}
