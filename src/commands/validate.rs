use crate::cli::ValidateArgs;
use crate::inspector::{allele::parse_location, classify, read_records, ErrorClass};
use crate::utils::{open_table_reader, Result};
use std::io::BufRead;
use std::path::Path;

#[derive(Debug, Default, PartialEq)]
struct TableSummary {
    true_positives: usize,
    false_positives: usize,
    false_negatives: usize,
    dropped: usize,
    failed: usize,
}

impl TableSummary {
    fn count_mut(&mut self, class: ErrorClass) -> &mut usize {
        match class {
            ErrorClass::TruePositive => &mut self.true_positives,
            ErrorClass::FalsePositive => &mut self.false_positives,
            ErrorClass::FalseNegative => &mut self.false_negatives,
        }
    }

    fn passed(&self) -> usize {
        self.true_positives + self.false_positives + self.false_negatives + self.dropped
    }
}

pub fn validate(args: ValidateArgs) -> Result<()> {
    let mut failed_tables = 0;
    for path in &args.table_paths {
        let summary = summarize_table(path)?;
        let total = summary.passed() + summary.failed;
        log::info!(
            "{}: TP={} FP={} FN={} no-call={}",
            path.display(),
            summary.true_positives,
            summary.false_positives,
            summary.false_negatives,
            summary.dropped
        );
        match summary.failed {
            0 => log::info!("Validation successful. Rows pass={}", summary.passed()),
            _ => {
                failed_tables += 1;
                log::warn!(
                    "Validation failed for {}. Rows pass={} ({:.2}%), fail={} ({:.2}%)",
                    path.display(),
                    summary.passed(),
                    percentage(summary.passed(), total),
                    summary.failed,
                    percentage(summary.failed, total)
                );
            }
        }
    }
    log::info!(
        "Checked {} tables, {} with errors",
        args.table_paths.len(),
        failed_tables
    );
    Ok(())
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

fn summarize_table(path: &Path) -> Result<TableSummary> {
    let reader = open_table_reader(path)?;
    Ok(summarize_records(reader, &path.display().to_string()))
}

fn summarize_records<R: BufRead>(reader: R, label: &str) -> TableSummary {
    let mut summary = TableSummary::default();
    for result in read_records(reader) {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                log::error!("{}: {}", label, e);
                summary.failed += 1;
                continue;
            }
        };
        let Some(class) = classify(&record.dna_call, &record.rna_call) else {
            summary.dropped += 1;
            continue;
        };
        match parse_location(class.side(&record).location) {
            Ok(_) => *summary.count_mut(class) += 1,
            Err(e) => {
                log::error!("{}: {} record, {}", label, class, e);
                summary.failed += 1;
            }
        }
    }
    summary
}
