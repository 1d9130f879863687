// logmask-core/tests/pipeline_integration_tests.rs
//! End-to-end tests of the file pipeline and one-shot runs: collecting a
//! tree, masking it line by line, writing mirrored outputs and the JSON run
//! report.

use anyhow::Result;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;
use test_log::test;

use logmask_core::{
    run_plan, run_plan_with_options, FileProcessor, MaskError, MaskRuleConfig, MaskRulesConfig,
    RegexEngine, RunOptions, RunPlan,
};

fn email_config() -> MaskRulesConfig {
    MaskRulesConfig::new([MaskRuleConfig::new(
        "email",
        "Email address",
        r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}",
        "[MASKED_EMAIL]",
    )])
}

fn read_report(path: &Path) -> Result<Value> {
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

#[test]
fn test_single_file_real_run() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("app.log");
    fs::write(&input, "mail=a@example.com\n")?;
    let out = dir.path().join("out");

    let engine = RegexEngine::from_config(&email_config())?;
    let report = FileProcessor::new().process(&input, &out, &engine, "_masked", false)?;

    let masked = out.join("app_masked.log");
    assert_eq!(fs::read_to_string(&masked)?, "mail=[MASKED_EMAIL]\n");
    assert_eq!(report.total_count, 1);
    assert_eq!(report.total_per_rule.get("email"), Some(&1));
    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].output_file, masked);
    Ok(())
}

#[test]
fn test_dry_run_writes_nothing_but_counts_the_same() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("in");
    fs::create_dir_all(input.join("a"))?;
    fs::write(input.join("a").join("one.log"), "x@y.io and z@w.io\nplain\n")?;
    fs::write(input.join("two.log"), "no match here\n")?;

    let engine = RegexEngine::from_config(&email_config())?;
    let real_out = dir.path().join("real");
    let dry_out = dir.path().join("dry");

    let real = FileProcessor::new().process(&input, &real_out, &engine, "", false)?;
    let dry = FileProcessor::new().process(&input, &dry_out, &engine, "", true)?;

    assert!(!dry_out.exists());
    assert_eq!(dry.total_count, real.total_count);
    assert_eq!(dry.total_per_rule, real.total_per_rule);
    for (d, r) in dry.files.iter().zip(&real.files) {
        assert_eq!(d.counts_per_rule, r.counts_per_rule);
        assert_eq!(d.total_count, r.total_count);
    }
    assert_eq!(real.total_count, 2);
    // Files without matches carry an empty count map, not zero entries.
    assert!(real.files[1].counts_per_rule.is_empty());
    Ok(())
}

#[test]
fn test_directory_structure_is_mirrored_in_order() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("in");
    fs::create_dir_all(input.join("a").join("b"))?;
    fs::write(input.join("a").join("b").join("app.log"), "a@b.cc\n")?;
    fs::write(input.join("root.log"), "hello\r\nc@d.ee\r\n")?;
    let out = dir.path().join("out");

    let engine = RegexEngine::from_config(&email_config())?;
    let report = FileProcessor::new().process(&input, &out, &engine, "_masked", false)?;

    let outputs: Vec<_> = report.files.iter().map(|f| f.output_file.clone()).collect();
    assert_eq!(
        outputs,
        vec![
            out.join("a").join("b").join("app_masked.log"),
            out.join("root_masked.log"),
        ]
    );
    assert_eq!(
        fs::read_to_string(out.join("a").join("b").join("app_masked.log"))?,
        "[MASKED_EMAIL]\n"
    );
    // Line terminators are normalised to `\n` on output.
    assert_eq!(
        fs::read_to_string(out.join("root_masked.log"))?,
        "hello\n[MASKED_EMAIL]\n"
    );
    Ok(())
}

#[test]
fn test_io_error_aborts_run_and_keeps_earlier_outputs() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("in");
    fs::create_dir_all(input.join("b"))?;
    fs::write(input.join("a.log"), "a@b.cc\n")?;
    fs::write(input.join("b").join("late.log"), "c@d.ee\n")?;

    // A regular file where the output directory for `b/late.log` must go.
    let out = dir.path().join("out");
    fs::create_dir_all(&out)?;
    fs::write(out.join("b"), "in the way")?;

    let engine = RegexEngine::from_config(&email_config())?;
    let err = FileProcessor::new()
        .process(&input, &out, &engine, "", false)
        .unwrap_err();

    match err {
        MaskError::Io { path, .. } => assert_eq!(path, out.join("b")),
        other => panic!("expected Io error, got {other:?}"),
    }
    assert_eq!(fs::read_to_string(out.join("a.log"))?, "[MASKED_EMAIL]\n");
    assert_eq!(fs::read_to_string(out.join("b"))?, "in the way");
    Ok(())
}

#[test]
fn test_empty_directory_yields_empty_report() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("empty");
    fs::create_dir_all(&input)?;

    let engine = RegexEngine::from_config(&email_config())?;
    let report = FileProcessor::new().process(&input, &dir.path().join("out"), &engine, "", false)?;
    assert!(report.files.is_empty());
    assert_eq!(report.total_count, 0);
    Ok(())
}

#[test]
fn test_missing_input_is_invalid_input() -> Result<()> {
    let dir = tempdir()?;
    let plan = RunPlan::from_config(
        dir.path().join("missing"),
        dir.path().join("out"),
        email_config(),
        "_masked",
        false,
    );

    let err = run_plan(&plan).unwrap_err();
    assert!(matches!(err, MaskError::InvalidInput(_)));
    Ok(())
}

#[test]
fn test_invalid_rules_fail_before_any_output() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("app.log");
    fs::write(&input, "text\n")?;
    let out = dir.path().join("out");

    let config = MaskRulesConfig::new([
        MaskRuleConfig::new("dup", "One", "a", "b"),
        MaskRuleConfig::new("dup", "Two", "(", "c"),
    ]);
    let plan = RunPlan::from_config(&input, &out, config, "", false);

    let err = run_plan(&plan).unwrap_err();
    let messages = err.validation_errors();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0], "rules[1].id is duplicated: dup");
    assert!(messages[1].starts_with("rules[1].pattern is not a valid regular expression: "));
    assert!(!out.exists());
    Ok(())
}

#[test]
fn test_run_plan_writes_report_for_inline_rules() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("app.log");
    fs::write(&input, "mail=a@example.com\n")?;
    let out = dir.path().join("out");

    let plan = RunPlan::from_config(&input, &out, email_config(), "_masked", false);
    let outcome = run_plan(&plan)?;

    let report_path = outcome.report_path.expect("report written");
    assert_eq!(report_path.parent(), Some(out.as_path()));
    let name = report_path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("report-") && name.ends_with(".json"));

    let json = read_report(&report_path)?;
    assert_eq!(json["schemaVersion"], 1);
    assert_eq!(json["dryRun"], false);
    assert_eq!(json["suffix"], "_masked");
    assert_eq!(json["rulesSource"]["type"], "inline");
    assert!(json["rulesSource"].get("rulesPath").is_none());
    assert_eq!(json["summary"]["files"], 1);
    assert_eq!(json["summary"]["totalCount"], 1);
    assert_eq!(json["summary"]["totalPerRule"]["email"], 1);
    assert_eq!(json["ruleMeta"]["email"]["name"], "Email address");
    assert_eq!(json["files"][0]["totalCount"], 1);
    assert_eq!(json["files"][0]["countsPerRule"]["email"], 1);

    // The report carries counts and paths only, never log content.
    let raw = fs::read_to_string(&report_path)?;
    assert!(!raw.contains("a@example.com"));
    Ok(())
}

#[test]
fn test_dry_run_plan_from_rules_path_writes_only_the_report() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("app.log");
    fs::write(&input, "mail=a@example.com\n")?;
    let rules = dir.path().join("rules.json");
    email_config().save_to_file(&rules)?;
    let out = dir.path().join("out");

    let plan = RunPlan::from_rules_path(&input, &out, &rules, "_masked", true);
    let outcome = run_plan(&plan)?;

    assert_eq!(outcome.report.total_count, 1);
    assert!(!out.join("app_masked.log").exists());

    let entries: Vec<_> = fs::read_dir(&out)?.collect::<Result<_, _>>()?;
    assert_eq!(entries.len(), 1);

    let json = read_report(outcome.report_path.as_deref().expect("report written"))?;
    assert_eq!(json["dryRun"], true);
    assert_eq!(json["rulesSource"]["type"], "path");
    assert_eq!(json["rulesSource"]["rulesPath"], rules.display().to_string());
    Ok(())
}

#[test]
fn test_run_without_report() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("app.log");
    fs::write(&input, "nothing\n")?;
    let out = dir.path().join("out");

    let plan = RunPlan::from_config(&input, &out, email_config(), "", false);
    let outcome = run_plan_with_options(&plan, RunOptions { write_report: false })?;

    assert!(outcome.report_path.is_none());
    assert_eq!(fs::read_to_string(out.join("app.log"))?, "nothing\n");
    let reports = fs::read_dir(&out)?
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with("report-"))
        .count();
    assert_eq!(reports, 0);
    Ok(())
}

#[test]
fn test_two_runs_into_same_root_get_distinct_reports() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("app.log");
    fs::write(&input, "a@b.cc\n")?;
    let out = dir.path().join("out");

    let plan = RunPlan::from_config(&input, &out, email_config(), "", true);
    let first = run_plan(&plan)?.report_path;
    let second = run_plan(&plan)?.report_path;

    assert!(first.is_some());
    assert_ne!(first, second);
    Ok(())
}
