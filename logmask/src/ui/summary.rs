// logmask/src/ui/summary.rs
//! Renders the per-rule match summary of a run as a table.
//! License: MIT OR Apache-2.0

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use logmask_core::{MaskRulesConfig, RunReport};
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Builds the summary table: one row per rule in configuration order
/// (disabled rules included, marked as such), then any counted id the
/// configuration does not name, then a total row.
pub fn build_summary_table(report: &RunReport, config: &MaskRulesConfig) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Rule", "Name", "Matches"]);

    let mut listed = Vec::new();
    for rule in config.iter_rules() {
        let Some(id) = rule.id.as_deref() else {
            continue;
        };
        if listed.contains(&id) {
            continue;
        }
        listed.push(id);

        let name = rule.name.as_deref().unwrap_or(id);
        let count = report.total_per_rule.get(id).copied().unwrap_or(0);
        let count_cell = if rule.is_enabled_effective() {
            count.to_string()
        } else {
            "disabled".to_string()
        };
        table.add_row(vec![
            Cell::new(id),
            Cell::new(name),
            Cell::new(count_cell).set_alignment(CellAlignment::Right),
        ]);
    }

    for (id, count) in &report.total_per_rule {
        if !listed.contains(&id.as_str()) {
            table.add_row(vec![
                Cell::new(id),
                Cell::new(""),
                Cell::new(count).set_alignment(CellAlignment::Right),
            ]);
        }
    }

    table.add_row(vec![
        Cell::new("total"),
        Cell::new(format!("{} file(s)", report.files.len())),
        Cell::new(report.total_count).set_alignment(CellAlignment::Right),
    ]);
    table
}

/// Writes the summary heading and table to `writer`.
pub fn print_summary<W: Write>(
    writer: &mut W,
    report: &RunReport,
    config: &MaskRulesConfig,
    dry_run: bool,
    use_color: bool,
) -> io::Result<()> {
    let heading = if dry_run {
        "Masking summary (dry run, no files written)"
    } else {
        "Masking summary"
    };
    if use_color {
        writeln!(writer, "{}", heading.bold())?;
    } else {
        writeln!(writer, "{}", heading)?;
    }

    let mut table = build_summary_table(report, config);
    if !use_color {
        table.force_no_tty();
    }
    writeln!(writer, "{}", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use logmask_core::{FileReport, MaskRuleConfig};
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    fn sample() -> (RunReport, MaskRulesConfig) {
        let counts = BTreeMap::from([("email".to_string(), 3)]);
        let report = RunReport {
            input_root: PathBuf::from("in"),
            output_root: PathBuf::from("out"),
            files: vec![FileReport {
                input_file: PathBuf::from("in/app.log"),
                output_file: PathBuf::from("out/app_masked.log"),
                counts_per_rule: counts.clone(),
                total_count: 3,
            }],
            total_per_rule: counts,
            total_count: 3,
        };
        let config = MaskRulesConfig::new([
            MaskRuleConfig::new("email", "Email address", "x", "y"),
            MaskRuleConfig::new("ip", "IPv4", "z", "w").with_enabled(false),
            MaskRuleConfig::new("token", "Token", "t", "u"),
        ]);
        (report, config)
    }

    #[test]
    fn test_summary_lists_every_rule_and_total() {
        let (report, config) = sample();
        let mut buf = Vec::new();
        print_summary(&mut buf, &report, &config, false, false).unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert!(out.starts_with("Masking summary\n"));
        assert!(out.contains("Email address"));
        assert!(out.contains("disabled"));
        assert!(out.contains("token"));
        assert!(out.contains("1 file(s)"));
    }

    #[test]
    fn test_dry_run_heading() {
        let (report, config) = sample();
        let mut buf = Vec::new();
        print_summary(&mut buf, &report, &config, true, false).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("dry run"));
    }
}
