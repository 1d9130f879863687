//! Run reports: the per-file and per-run results of a masking run, plus the
//! JSON writer that persists them as `report-YYYYMMDD-HHMMSS-SSS.json`.
//!
//! The JSON document never contains masked or original log text, only
//! paths, rule metadata and counts.
//!
//! License: MIT OR Apache-2.0

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::{debug, info};
use serde::Serialize;
use uuid::Uuid;

use crate::config::MaskRulesConfig;
use crate::errors::MaskError;
use crate::headless::{RulesSource, RunPlan};

/// Version of the JSON report layout.
pub const REPORT_SCHEMA_VERSION: u32 = 1;

const MAX_COLLISION_SUFFIX: u32 = 999;

/// Result of processing a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub input_file: PathBuf,
    /// Where the masked file was (or, on a dry run, would have been) written.
    pub output_file: PathBuf,
    pub counts_per_rule: BTreeMap<String, u64>,
    pub total_count: u64,
}

/// Aggregate result of a whole run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub input_root: PathBuf,
    pub output_root: PathBuf,
    /// Per-file reports in processing order.
    pub files: Vec<FileReport>,
    pub total_per_rule: BTreeMap<String, u64>,
    pub total_count: u64,
}

/// Adds every count of `src` into `dest`, keyed by rule id.
pub fn merge_counts(dest: &mut BTreeMap<String, u64>, src: &BTreeMap<String, u64>) {
    for (rule_id, count) in src {
        *dest.entry(rule_id.clone()).or_insert(0) += count;
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunReportJson<'a> {
    schema_version: u32,
    generated_at: String,
    duration_ms: u64,
    dry_run: bool,
    input_path: String,
    output_base: String,
    suffix: &'a str,
    rules_source: RulesSourceJson,
    summary: SummaryJson<'a>,
    rule_meta: BTreeMap<&'a str, RuleMetaJson<'a>>,
    files: Vec<FileReportJson<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RulesSourceJson {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    rules_path: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryJson<'a> {
    files: usize,
    total_count: u64,
    total_per_rule: &'a BTreeMap<String, u64>,
}

#[derive(Debug, Serialize)]
struct RuleMetaJson<'a> {
    name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FileReportJson<'a> {
    input_file: String,
    output_file: String,
    total_count: u64,
    counts_per_rule: &'a BTreeMap<String, u64>,
}

/// Writes run reports into the output root of a run.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReportWriter;

impl ReportWriter {
    pub fn new() -> Self {
        Self
    }

    /// Writes the report for one run and returns the path of the new file.
    ///
    /// The output root is created if needed, on dry runs too: the report is
    /// the only artifact a dry run produces.
    pub fn write(
        &self,
        plan: &RunPlan,
        config: &MaskRulesConfig,
        report: &RunReport,
        duration_ms: u64,
    ) -> Result<PathBuf, MaskError> {
        let output_root = plan.output_root.as_path();
        fs::create_dir_all(output_root).map_err(|e| MaskError::io(output_root, e))?;

        let now = Local::now();
        let document = build_document(plan, config, report, duration_ms, &now);
        let path = unique_report_path(output_root, &now.format("%Y%m%d-%H%M%S-%3f").to_string());

        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        fs::write(&path, json).map_err(|e| MaskError::io(&path, e))?;

        info!("Run report written to {}", path.display());
        Ok(path)
    }
}

fn build_document<'a>(
    plan: &'a RunPlan,
    config: &'a MaskRulesConfig,
    report: &'a RunReport,
    duration_ms: u64,
    now: &DateTime<Local>,
) -> RunReportJson<'a> {
    let rules_source = match &plan.rules {
        RulesSource::Path(path) => RulesSourceJson {
            kind: "path",
            rules_path: Some(path.display().to_string()),
        },
        RulesSource::Inline(_) => RulesSourceJson {
            kind: "inline",
            rules_path: None,
        },
    };

    let rule_meta = config
        .iter_rules()
        .filter_map(|rule| {
            let id = rule.id.as_deref()?;
            let name = rule
                .name
                .as_deref()
                .filter(|n| !n.trim().is_empty())
                .unwrap_or(id);
            Some((id, RuleMetaJson { name }))
        })
        .collect();

    let files = report
        .files
        .iter()
        .map(|f| FileReportJson {
            input_file: f.input_file.display().to_string(),
            output_file: f.output_file.display().to_string(),
            total_count: f.total_count,
            counts_per_rule: &f.counts_per_rule,
        })
        .collect();

    RunReportJson {
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: now.to_rfc3339(),
        duration_ms,
        dry_run: plan.dry_run,
        input_path: plan.input_path.display().to_string(),
        output_base: plan.output_root.display().to_string(),
        suffix: &plan.suffix,
        rules_source,
        summary: SummaryJson {
            files: report.files.len(),
            total_count: report.total_count,
            total_per_rule: &report.total_per_rule,
        },
        rule_meta,
        files,
    }
}

/// `report-<timestamp>.json`, or the first free `-001`..`-999` variant, or
/// finally a uuid-suffixed name.
fn unique_report_path(output_root: &Path, timestamp: &str) -> PathBuf {
    let base = output_root.join(format!("report-{timestamp}.json"));
    if !base.exists() {
        return base;
    }
    for i in 1..=MAX_COLLISION_SUFFIX {
        let candidate = output_root.join(format!("report-{timestamp}-{i:03}.json"));
        if !candidate.exists() {
            return candidate;
        }
    }
    debug!("All numbered report names for {timestamp} are taken, using a uuid.");
    output_root.join(format!("report-{timestamp}-{}.json", Uuid::new_v4()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_merge_counts_sums_by_rule_id() {
        let mut dest = BTreeMap::from([("email".to_string(), 2)]);
        let src = BTreeMap::from([("email".to_string(), 3), ("token".to_string(), 1)]);
        merge_counts(&mut dest, &src);
        assert_eq!(dest.get("email"), Some(&5));
        assert_eq!(dest.get("token"), Some(&1));
    }

    #[test]
    fn test_unique_report_path_skips_taken_names() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let ts = "20260101-120000-000";
        fs::write(dir.path().join(format!("report-{ts}.json")), "{}")?;
        fs::write(dir.path().join(format!("report-{ts}-001.json")), "{}")?;

        let path = unique_report_path(dir.path(), ts);
        assert_eq!(path, dir.path().join(format!("report-{ts}-002.json")));
        Ok(())
    }
}
