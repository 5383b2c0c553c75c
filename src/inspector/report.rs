use super::allele::AlleleEntry;
use super::classify::ErrorClass;
use crate::utils::{create_output_writer, InspectorError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

pub type AlleleMap = BTreeMap<String, AlleleEntry>;

/// Inserts `entry` under its report key.
///
/// When the key is already taken within the bucket (two alleles of one site,
/// or two sites sharing chromosome, locus and coverage) the entry is stored
/// under `<key> #2`, `<key> #3`, ... instead of replacing the earlier one.
pub fn insert_entry(map: &mut AlleleMap, entry: AlleleEntry) -> String {
    let base_key = entry.key();
    let mut key = base_key.clone();
    let mut copy = 1;
    while map.contains_key(&key) {
        copy += 1;
        key = format!("{} #{}", base_key, copy);
    }
    map.insert(key.clone(), entry);
    key
}

/// Per-sample inspector payload. Field order matches the sorted JSON key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleReport {
    #[serde(skip)]
    pub sample_name: String,
    #[serde(rename = "DNA")]
    pub dna_bam_path: PathBuf,
    #[serde(rename = "DNA_VCF")]
    pub dna_vcf_path: PathBuf,
    #[serde(rename = "FN")]
    pub false_negatives: AlleleMap,
    #[serde(rename = "FP")]
    pub false_positives: AlleleMap,
    #[serde(rename = "RNA")]
    pub rna_bam_path: PathBuf,
    #[serde(rename = "RNA_VCF")]
    pub rna_vcf_path: PathBuf,
    #[serde(rename = "TP")]
    pub true_positives: AlleleMap,
}

impl SampleReport {
    pub fn entries(&self, class: ErrorClass) -> &AlleleMap {
        match class {
            ErrorClass::TruePositive => &self.true_positives,
            ErrorClass::FalsePositive => &self.false_positives,
            ErrorClass::FalseNegative => &self.false_negatives,
        }
    }

    pub fn entries_mut(&mut self, class: ErrorClass) -> &mut AlleleMap {
        match class {
            ErrorClass::TruePositive => &mut self.true_positives,
            ErrorClass::FalsePositive => &mut self.false_positives,
            ErrorClass::FalseNegative => &mut self.false_negatives,
        }
    }
}

/// All sample reports of a run, keyed by sample name.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct InspectorReport {
    samples: BTreeMap<String, SampleReport>,
}

impl InspectorReport {
    /// Adds a sample, returning the report it replaced if the name was already present.
    pub fn insert(&mut self, report: SampleReport) -> Option<SampleReport> {
        self.samples.insert(report.sample_name.clone(), report)
    }

    pub fn get(&self, sample_name: &str) -> Option<&SampleReport> {
        self.samples.get(sample_name)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> std::result::Result<(), serde_json::Error> {
        serde_json::to_writer_pretty(writer, self)
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let failure = |source: std::io::Error| InspectorError::OutputWriteFailure {
            path: path.to_path_buf(),
            source,
        };
        let mut writer = create_output_writer(path)?;
        self.to_writer(&mut writer).map_err(|e| failure(e.into()))?;
        writer.flush().map_err(failure)
    }
}
