use super::classify::ErrorClass;
use super::record::ComparisonRecord;
use crate::utils::{InspectorError, Result};
use itertools::Itertools;
use serde::Serialize;

const LOCATION_SEPARATOR: &str = "--";
const CHROM_PREFIX: &str = "chr";

/// A single non-reference allele observed at a site, as shown in the inspector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlleleEntry {
    #[serde(rename = "Alt")]
    pub alternate_base: String,
    #[serde(rename = "Chr")]
    pub chromosome: String,
    #[serde(rename = "Cov")]
    pub coverage: u32,
    #[serde(rename = "Loc")]
    pub locus: String,
    #[serde(rename = "Ref")]
    pub reference_base: String,
    #[serde(rename = "Strand")]
    pub strand: String,
}

impl AlleleEntry {
    /// Report key, e.g. `Chr7-12345 (30)`.
    pub fn key(&self) -> String {
        format!("Chr{}-{} ({})", self.chromosome, self.locus, self.coverage)
    }
}

/// Drops a leading `chr` (any case) unless nothing would be left.
pub fn normalize_chromosome(token: &str) -> &str {
    match token.get(..CHROM_PREFIX.len()) {
        Some(prefix)
            if token.len() > CHROM_PREFIX.len() && prefix.eq_ignore_ascii_case(CHROM_PREFIX) =>
        {
            &token[CHROM_PREFIX.len()..]
        }
        _ => token,
    }
}

/// Splits `<chrom>--<locus>` into a normalized chromosome label and locus.
///
/// Anything after a second separator is ignored.
pub fn parse_location(location: &str) -> Result<(&str, &str)> {
    let mut parts = location.split(LOCATION_SEPARATOR);
    match (parts.next(), parts.next()) {
        (Some(chrom), Some(locus)) => Ok((normalize_chromosome(chrom), locus)),
        _ => Err(InspectorError::UnparsableLocation(location.to_string())),
    }
}

/// Distinct alleles of a slash-delimited call other than `reference_base`, sorted.
pub fn alternate_alleles<'a>(call: &'a str, reference_base: &str) -> Vec<&'a str> {
    call.split('/')
        .filter(|allele| !allele.is_empty() && *allele != reference_base)
        .unique()
        .sorted()
        .collect()
}

/// Expands a classified record into one entry per alternate allele.
///
/// Location, call, reference and coverage all come from the side that is
/// authoritative for `class`; the strand is always the RNA strand column.
pub fn extract_alleles(record: &ComparisonRecord, class: ErrorClass) -> Result<Vec<AlleleEntry>> {
    let side = class.side(record);
    let (chromosome, locus) = parse_location(side.location)?;

    Ok(alternate_alleles(side.call, side.reference_base)
        .into_iter()
        .map(|alt| AlleleEntry {
            alternate_base: alt.to_string(),
            chromosome: chromosome.to_string(),
            coverage: side.coverage,
            locus: locus.to_string(),
            reference_base: side.reference_base.to_string(),
            strand: record.rna_strand.clone(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        dna: (&str, &str, &str, u32),
        rna: (&str, &str, &str, u32),
        strand: &str,
    ) -> ComparisonRecord {
        ComparisonRecord {
            dna_location: dna.0.to_string(),
            dna_reference_base: dna.1.to_string(),
            dna_call: dna.2.to_string(),
            dna_coverage: dna.3,
            rna_location: rna.0.to_string(),
            rna_reference_base: rna.1.to_string(),
            rna_call: rna.2.to_string(),
            rna_coverage: rna.3,
            rna_strand: strand.to_string(),
        }
    }

    #[test]
    fn chromosome_prefix_is_stripped() {
        assert_eq!(parse_location("chr7--12345").unwrap(), ("7", "12345"));
        assert_eq!(parse_location("CHRX--9").unwrap(), ("X", "9"));
        assert_eq!(parse_location("7--12345").unwrap(), ("7", "12345"));
    }

    #[test]
    fn locus_stops_at_next_separator() {
        assert_eq!(parse_location("chr1--100--200").unwrap(), ("1", "100"));
        assert_eq!(parse_location("chr1--").unwrap(), ("1", ""));
    }

    #[test]
    fn bare_chr_token_is_kept() {
        assert_eq!(normalize_chromosome("chr"), "chr");
        assert_eq!(normalize_chromosome("ch"), "ch");
        assert_eq!(normalize_chromosome("scaffold_1"), "scaffold_1");
    }

    #[test]
    fn location_without_separator_is_rejected() {
        assert!(matches!(
            parse_location("chr7:12345"),
            Err(InspectorError::UnparsableLocation(loc)) if loc == "chr7:12345"
        ));
    }

    #[test]
    fn reference_base_is_excluded() {
        assert_eq!(alternate_alleles("A/T", "A"), vec!["T"]);
        assert!(alternate_alleles("A/A", "A").is_empty());
        assert_eq!(alternate_alleles("G/C/G", "A"), vec!["C", "G"]);
        assert_eq!(alternate_alleles("T/", "A"), vec!["T"]);
    }

    #[test]
    fn true_positive_uses_rna_side() {
        let rec = record(
            ("chr1--100", "A", "A/C", 4),
            ("chr1--101", "A", "A/T", 30),
            "-",
        );
        let entries = extract_alleles(&rec, ErrorClass::TruePositive).unwrap();
        assert_eq!(
            entries,
            vec![AlleleEntry {
                alternate_base: "T".to_string(),
                chromosome: "1".to_string(),
                coverage: 30,
                locus: "101".to_string(),
                reference_base: "A".to_string(),
                strand: "-".to_string(),
            }]
        );
        assert_eq!(entries[0].key(), "Chr1-101 (30)");
    }

    #[test]
    fn false_negative_excludes_its_own_dna_reference() {
        // The RNA reference differs so a mix-up between sides would leak `G` through.
        let rec = record(("chr2--50", "G", "G/T", 15), ("chr2--50", "T", "NA", 0), "+");
        let entries = extract_alleles(&rec, ErrorClass::FalseNegative).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].alternate_base, "T");
        assert_eq!(entries[0].reference_base, "G");
        assert_eq!(entries[0].coverage, 15);
    }

    #[test]
    fn multi_allelic_call_expands() {
        let rec = record(("NA", "NA", "NA", 0), ("3--7", "A", "C/G", 12), "+");
        let entries = extract_alleles(&rec, ErrorClass::FalsePositive).unwrap();
        let alts: Vec<&str> = entries.iter().map(|e| e.alternate_base.as_str()).collect();
        assert_eq!(alts, vec!["C", "G"]);
        assert!(entries.iter().all(|e| e.key() == "Chr3-7 (12)"));
    }

    #[test]
    fn reference_only_call_yields_nothing() {
        let rec = record(("1--5", "A", "A", 9), ("1--5", "A", "NA", 0), "+");
        assert!(extract_alleles(&rec, ErrorClass::FalseNegative)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn serializes_with_inspector_field_names() {
        let entry = AlleleEntry {
            alternate_base: "T".to_string(),
            chromosome: "7".to_string(),
            coverage: 20,
            locus: "12345".to_string(),
            reference_base: "A".to_string(),
            strand: "+".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"Alt":"T","Chr":"7","Cov":20,"Loc":"12345","Ref":"A","Strand":"+"}"#
        );
    }
}
