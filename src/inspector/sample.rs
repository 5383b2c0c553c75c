use super::allele::extract_alleles;
use super::classify::{ClassBuckets, ErrorClass};
use super::record::read_records;
use super::report::{insert_entry, AlleleMap, SampleReport};
use super::select::select_top;
use crate::utils::{open_table_reader, InspectorError, Result};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Sample name plus the files produced for it by the comparison pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleDescriptor {
    pub sample_name: String,
    pub rna_bam: PathBuf,
    pub dna_bam: PathBuf,
    pub rna_vcf: PathBuf,
    pub dna_vcf: PathBuf,
    pub comparison_table: PathBuf,
}

impl FromStr for SampleDescriptor {
    type Err = InspectorError;

    /// Parses `sample,rna_bam,dna_bam,rna_vcf,dna_vcf,table`.
    fn from_str(encoding: &str) -> Result<Self> {
        const EXPECTED_FIELD_COUNT: usize = 6;
        let fields: Vec<&str> = encoding.split(',').map(str::trim).collect();
        if fields.len() != EXPECTED_FIELD_COUNT {
            return Err(InspectorError::InvalidArgument(format!(
                "Expected {} comma-separated values (sample,rna_bam,dna_bam,rna_vcf,dna_vcf,table), found {}: {}",
                EXPECTED_FIELD_COUNT,
                fields.len(),
                encoding
            )));
        }
        if fields.iter().any(|field| field.is_empty()) {
            return Err(InspectorError::InvalidArgument(format!(
                "Empty value in sample descriptor: {}",
                encoding
            )));
        }

        Ok(SampleDescriptor {
            sample_name: fields[0].to_string(),
            rna_bam: PathBuf::from(fields[1]),
            dna_bam: PathBuf::from(fields[2]),
            rna_vcf: PathBuf::from(fields[3]),
            dna_vcf: PathBuf::from(fields[4]),
            comparison_table: PathBuf::from(fields[5]),
        })
    }
}

impl SampleDescriptor {
    pub fn input_files(&self) -> [&Path; 5] {
        [
            self.rna_bam.as_path(),
            self.dna_bam.as_path(),
            self.rna_vcf.as_path(),
            self.dna_vcf.as_path(),
            self.comparison_table.as_path(),
        ]
    }

    /// Fails on the first referenced file that does not exist.
    pub fn check_inputs(&self) -> Result<()> {
        match self.input_files().into_iter().find(|path| !path.exists()) {
            Some(missing) => Err(InspectorError::MissingInputFile(missing.to_path_buf())),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SampleParams {
    pub max_entries: usize,
    pub skip_invalid_rows: bool,
}

/// Runs the whole per-sample pipeline: parse, classify, rank, expand.
pub fn build_sample_report(
    descriptor: &SampleDescriptor,
    params: &SampleParams,
) -> Result<SampleReport> {
    descriptor.check_inputs()?;
    let reader = open_table_reader(&descriptor.comparison_table)?;
    let buckets = collect_buckets(reader, &descriptor.sample_name, params.skip_invalid_rows)?;
    log::debug!(
        "{}: TP={} FP={} FN={} dropped={}",
        descriptor.sample_name,
        buckets.true_positives.len(),
        buckets.false_positives.len(),
        buckets.false_negatives.len(),
        buckets.dropped
    );
    assemble_report(descriptor, buckets, params)
}

/// Reads a comparison table into class buckets.
pub fn collect_buckets<R: BufRead>(
    reader: R,
    sample_name: &str,
    skip_invalid_rows: bool,
) -> Result<ClassBuckets> {
    let mut buckets = ClassBuckets::default();
    for result in read_records(reader) {
        match result {
            Ok(record) => {
                buckets.push(record);
            }
            Err(e) if skip_invalid_rows && !matches!(e.root(), InspectorError::Io(_)) => {
                log::warn!("{}: skipping row, {}", sample_name, e);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(buckets)
}

/// Ranks each bucket and expands the retained records into report entries.
pub fn assemble_report(
    descriptor: &SampleDescriptor,
    mut buckets: ClassBuckets,
    params: &SampleParams,
) -> Result<SampleReport> {
    let mut report = SampleReport {
        sample_name: descriptor.sample_name.clone(),
        dna_bam_path: descriptor.dna_bam.clone(),
        dna_vcf_path: descriptor.dna_vcf.clone(),
        false_negatives: AlleleMap::new(),
        false_positives: AlleleMap::new(),
        rna_bam_path: descriptor.rna_bam.clone(),
        rna_vcf_path: descriptor.rna_vcf.clone(),
        true_positives: AlleleMap::new(),
    };

    for class in ErrorClass::ALL {
        let top = select_top(buckets.take(class), class, params.max_entries);
        let entries = report.entries_mut(class);
        for record in &top {
            let alleles = match extract_alleles(record, class) {
                Ok(alleles) => alleles,
                Err(e) if params.skip_invalid_rows => {
                    log::warn!("{}: skipping {} record, {}", descriptor.sample_name, class, e);
                    continue;
                }
                Err(e) => return Err(e),
            };
            for allele in alleles {
                let key = insert_entry(entries, allele);
                log::trace!("{}: {} {}", descriptor.sample_name, class, key);
            }
        }
    }

    Ok(report)
}
