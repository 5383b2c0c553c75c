use crate::utils::{InspectorError, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub fn create_output_writer(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| InspectorError::OutputWriteFailure {
            path: path.to_path_buf(),
            source,
        })
}
