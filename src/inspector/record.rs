use super::coverage::normalize_coverage;
use crate::utils::{InspectorError, Result};
use std::io::BufRead;

/// Call value written when a caller made no call at a site.
pub const NO_CALL: &str = "NA";

const EXPECTED_FIELD_COUNT: usize = 9;

/// One row of a DNA versus RNA comparison table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRecord {
    pub dna_location: String,
    pub dna_reference_base: String,
    pub dna_call: String,
    pub dna_coverage: u32,
    pub rna_location: String,
    pub rna_reference_base: String,
    pub rna_call: String,
    pub rna_coverage: u32,
    pub rna_strand: String,
}

/// Borrowed view of the DNA or RNA half of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSide<'a> {
    pub location: &'a str,
    pub reference_base: &'a str,
    pub call: &'a str,
    pub coverage: u32,
}

impl ComparisonRecord {
    pub fn new(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < EXPECTED_FIELD_COUNT {
            return Err(InspectorError::MalformedRecord {
                expected: EXPECTED_FIELD_COUNT,
                found: fields.len(),
            });
        }

        Ok(ComparisonRecord {
            dna_location: fields[0].to_string(),
            dna_reference_base: fields[1].to_string(),
            dna_call: fields[2].to_string(),
            dna_coverage: normalize_coverage(fields[3])?,
            rna_location: fields[4].to_string(),
            rna_reference_base: fields[5].to_string(),
            rna_call: fields[6].to_string(),
            rna_coverage: normalize_coverage(fields[7])?,
            rna_strand: fields[8].to_string(),
        })
    }

    pub fn dna(&self) -> CallSide<'_> {
        CallSide {
            location: &self.dna_location,
            reference_base: &self.dna_reference_base,
            call: &self.dna_call,
            coverage: self.dna_coverage,
        }
    }

    pub fn rna(&self) -> CallSide<'_> {
        CallSide {
            location: &self.rna_location,
            reference_base: &self.rna_reference_base,
            call: &self.rna_call,
            coverage: self.rna_coverage,
        }
    }
}

fn is_skippable(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with('#')
}

/// Streams records out of a comparison table, skipping comments and blank lines.
///
/// Errors carry the 1-based line number they occurred on; iteration continues
/// past a bad row so callers decide whether it is fatal.
pub fn read_records<R: BufRead>(reader: R) -> impl Iterator<Item = Result<ComparisonRecord>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(line_number, result_line)| {
            let line = match result_line {
                Ok(line) => line,
                Err(e) => return Some(Err(InspectorError::Io(e).at_line(line_number + 1))),
            };
            let line = line.trim_end_matches('\r');
            if is_skippable(line) {
                return None;
            }
            Some(ComparisonRecord::new(line).map_err(|e| e.at_line(line_number + 1)))
        })
}
