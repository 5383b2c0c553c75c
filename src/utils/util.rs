use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InspectorError>;

#[derive(Debug, Error)]
pub enum InspectorError {
    #[error("expected {expected} tab-separated fields, found {found}")]
    MalformedRecord { expected: usize, found: usize },

    #[error("invalid coverage value: `{0}`")]
    InvalidCoverage(String),

    #[error("location `{0}` is not in the form <chrom>--<locus>")]
    UnparsableLocation(String),

    #[error("the input file {} does not exist", .0.display())]
    MissingInputFile(PathBuf),

    #[error("unable to write output file {}: {source}", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    InvalidArgument(String),

    #[error("error at table line {line}: {source}")]
    AtLine {
        line: usize,
        source: Box<InspectorError>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl InspectorError {
    pub fn at_line(self, line: usize) -> Self {
        InspectorError::AtLine {
            line,
            source: Box::new(self),
        }
    }

    /// Innermost error, looking through line annotations.
    pub fn root(&self) -> &InspectorError {
        match self {
            InspectorError::AtLine { source, .. } => source.root(),
            other => other,
        }
    }
}

pub fn handle_error_and_exit(err: InspectorError) -> ! {
    log::error!("{}", err);
    std::process::exit(1);
}
