// logmask-core/src/processor.rs
//! File-tree processing: collect inputs, mask them line by line, write the
//! results under the output root and aggregate the counts.
//!
//! Files are processed one at a time, in collector order. Each file's read
//! and write handles live only for the duration of that file. An I/O error
//! aborts the run; masked files already written by then stay on disk.
//!
//! License: MIT OR APACHE 2.0

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, info};

use crate::collector::{collect, InputRef};
use crate::engine::MaskingEngine;
use crate::errors::MaskError;
use crate::paths::map_output_path;
use crate::report::{merge_counts, FileReport, RunReport};

/// Drives a [`MaskingEngine`] over every file behind an input path.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileProcessor;

impl FileProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Masks every file under `input` into `output_root`.
    ///
    /// Output paths mirror the input tree with `suffix` injected before each
    /// extension. With `dry_run` set, no file or directory is created, yet
    /// the returned counts are the same as a real run would report.
    pub fn process(
        &self,
        input: &Path,
        output_root: &Path,
        engine: &dyn MaskingEngine,
        suffix: &str,
        dry_run: bool,
    ) -> Result<RunReport, MaskError> {
        let inputs = collect(input)?;
        info!(
            "Processing {} file(s) from {} (dry run: {}).",
            inputs.len(),
            input.display(),
            dry_run
        );

        let mut files = Vec::with_capacity(inputs.len());
        let mut total_per_rule = BTreeMap::new();
        let mut total_count = 0;

        for input_ref in &inputs {
            let output_file = map_output_path(output_root, &input_ref.relative, suffix);
            let file_report = self.process_file(input_ref, &output_file, engine, dry_run)?;

            merge_counts(&mut total_per_rule, &file_report.counts_per_rule);
            total_count += file_report.total_count;
            files.push(file_report);
        }

        info!("Run finished with {} replacement(s) in total.", total_count);
        Ok(RunReport {
            input_root: input.to_path_buf(),
            output_root: output_root.to_path_buf(),
            files,
            total_per_rule,
            total_count,
        })
    }

    fn process_file(
        &self,
        input_ref: &InputRef,
        output_file: &Path,
        engine: &dyn MaskingEngine,
        dry_run: bool,
    ) -> Result<FileReport, MaskError> {
        let source_path = input_ref.file.as_path();
        debug!("Masking {} -> {}", source_path.display(), output_file.display());

        let source = File::open(source_path).map_err(|e| MaskError::io(source_path, e))?;
        let reader = BufReader::new(source);

        let mut writer = if dry_run {
            None
        } else {
            if let Some(parent) = output_file.parent() {
                fs::create_dir_all(parent).map_err(|e| MaskError::io(parent, e))?;
            }
            let target = File::create(output_file).map_err(|e| MaskError::io(output_file, e))?;
            Some(BufWriter::new(target))
        };

        let mut counts_per_rule = BTreeMap::new();
        let mut total_count = 0;

        for line in reader.lines() {
            let line = line.map_err(|e| MaskError::io(source_path, e))?;
            let result = engine.mask(&line, dry_run);

            merge_counts(&mut counts_per_rule, &result.counts_per_rule);
            total_count += result.total_count;

            if let Some(writer) = writer.as_mut() {
                writeln!(writer, "{}", result.output_text)
                    .map_err(|e| MaskError::io(output_file, e))?;
            }
        }

        if let Some(mut writer) = writer {
            writer.flush().map_err(|e| MaskError::io(output_file, e))?;
        }

        Ok(FileReport {
            input_file: input_ref.file.clone(),
            output_file: output_file.to_path_buf(),
            counts_per_rule,
            total_count,
        })
    }
}
