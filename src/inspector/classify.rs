use super::record::{CallSide, ComparisonRecord, NO_CALL};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorClass {
    TruePositive,
    FalsePositive,
    FalseNegative,
}

impl ErrorClass {
    pub const ALL: [ErrorClass; 3] = [
        ErrorClass::TruePositive,
        ErrorClass::FalsePositive,
        ErrorClass::FalseNegative,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ErrorClass::TruePositive => "TP",
            ErrorClass::FalsePositive => "FP",
            ErrorClass::FalseNegative => "FN",
        }
    }

    /// The half of the record that describes the variant for this class:
    /// RNA for calls the RNA caller made, DNA for calls it missed.
    pub fn side<'a>(&self, record: &'a ComparisonRecord) -> CallSide<'a> {
        match self {
            ErrorClass::TruePositive | ErrorClass::FalsePositive => record.rna(),
            ErrorClass::FalseNegative => record.dna(),
        }
    }

    pub fn coverage(&self, record: &ComparisonRecord) -> u32 {
        self.side(record).coverage
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Assigns an error class from the DNA and RNA calls. `None` when neither side made a call.
pub fn classify(dna_call: &str, rna_call: &str) -> Option<ErrorClass> {
    match (dna_call == NO_CALL, rna_call == NO_CALL) {
        (true, false) => Some(ErrorClass::FalsePositive),
        (true, true) => None,
        (false, true) => Some(ErrorClass::FalseNegative),
        (false, false) => Some(ErrorClass::TruePositive),
    }
}

/// Records of one sample split by error class, in table order.
#[derive(Debug, Default)]
pub struct ClassBuckets {
    pub true_positives: Vec<ComparisonRecord>,
    pub false_positives: Vec<ComparisonRecord>,
    pub false_negatives: Vec<ComparisonRecord>,
    pub dropped: usize,
}

impl ClassBuckets {
    pub fn push(&mut self, record: ComparisonRecord) -> Option<ErrorClass> {
        let class = classify(&record.dna_call, &record.rna_call);
        match class {
            Some(class) => self.bucket_mut(class).push(record),
            None => self.dropped += 1,
        }
        class
    }

    pub fn bucket(&self, class: ErrorClass) -> &[ComparisonRecord] {
        match class {
            ErrorClass::TruePositive => &self.true_positives,
            ErrorClass::FalsePositive => &self.false_positives,
            ErrorClass::FalseNegative => &self.false_negatives,
        }
    }

    fn bucket_mut(&mut self, class: ErrorClass) -> &mut Vec<ComparisonRecord> {
        match class {
            ErrorClass::TruePositive => &mut self.true_positives,
            ErrorClass::FalsePositive => &mut self.false_positives,
            ErrorClass::FalseNegative => &mut self.false_negatives,
        }
    }

    pub fn take(&mut self, class: ErrorClass) -> Vec<ComparisonRecord> {
        std::mem::take(self.bucket_mut(class))
    }
}
