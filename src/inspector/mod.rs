pub mod allele;
pub mod classify;
pub mod coverage;
pub mod record;
pub mod report;
pub mod sample;
pub mod select;

pub use allele::{extract_alleles, AlleleEntry};
pub use classify::{classify, ClassBuckets, ErrorClass};
pub use coverage::normalize_coverage;
pub use record::{read_records, CallSide, ComparisonRecord, NO_CALL};
pub use report::{AlleleMap, InspectorReport, SampleReport};
pub use sample::{build_sample_report, SampleDescriptor, SampleParams};
pub use select::{select_top, DEFAULT_MAX_ENTRIES};
