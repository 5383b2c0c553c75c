use super::classify::ErrorClass;
use super::record::ComparisonRecord;
use std::cmp::Reverse;

/// Number of records kept per class and sample unless overridden.
pub const DEFAULT_MAX_ENTRIES: usize = 10;

/// Keeps the `max_entries` records with the highest coverage for `class`.
///
/// The sort is stable, so records with equal coverage keep their table order.
pub fn select_top(
    mut records: Vec<ComparisonRecord>,
    class: ErrorClass,
    max_entries: usize,
) -> Vec<ComparisonRecord> {
    records.sort_by_key(|record| Reverse(class.coverage(record)));
    records.truncate(max_entries);
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: usize, dna_cov: u32, rna_cov: u32) -> ComparisonRecord {
        ComparisonRecord {
            dna_location: format!("chr1--{}", id),
            dna_reference_base: "A".to_string(),
            dna_call: "A/G".to_string(),
            dna_coverage: dna_cov,
            rna_location: format!("chr1--{}", id),
            rna_reference_base: "A".to_string(),
            rna_call: "A/G".to_string(),
            rna_coverage: rna_cov,
            rna_strand: "+".to_string(),
        }
    }

    #[test]
    fn keeps_at_most_max_entries_in_descending_order() {
        let records: Vec<_> = (0..25).map(|i| record(i, 0, (i * 7 % 13) as u32)).collect();
        let top = select_top(records, ErrorClass::TruePositive, DEFAULT_MAX_ENTRIES);
        assert_eq!(top.len(), DEFAULT_MAX_ENTRIES);
        assert!(top
            .windows(2)
            .all(|pair| pair[0].rna_coverage >= pair[1].rna_coverage));
        assert_eq!(top[0].rna_coverage, 12);
    }

    #[test]
    fn short_buckets_are_returned_whole() {
        let records = vec![record(1, 0, 3), record(2, 0, 9)];
        let top = select_top(records, ErrorClass::FalsePositive, DEFAULT_MAX_ENTRIES);
        let coverages: Vec<u32> = top.iter().map(|r| r.rna_coverage).collect();
        assert_eq!(coverages, vec![9, 3]);
    }

    #[test]
    fn false_negatives_rank_by_dna_coverage() {
        let records = vec![record(1, 5, 100), record(2, 50, 1), record(3, 20, 60)];
        let top = select_top(records, ErrorClass::FalseNegative, 2);
        let locations: Vec<&str> = top.iter().map(|r| r.dna_location.as_str()).collect();
        assert_eq!(locations, vec!["chr1--2", "chr1--3"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let records = vec![record(1, 0, 8), record(2, 0, 8), record(3, 0, 8)];
        let top = select_top(records, ErrorClass::TruePositive, 2);
        let locations: Vec<&str> = top.iter().map(|r| r.rna_location.as_str()).collect();
        assert_eq!(locations, vec!["chr1--1", "chr1--2"]);
    }
}
