use super::{InspectorError, Result};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufReader, Read as ioRead};
use std::path::Path;

fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".gzip")
}

/// Opens a comparison table, transparently decompressing `.gz` input.
pub fn open_table_reader(path: &Path) -> Result<BufReader<Box<dyn ioRead + Send>>> {
    if !path.exists() {
        return Err(InspectorError::MissingInputFile(path.to_path_buf()));
    }
    let file = File::open(path)?;
    if !is_gzipped(path) {
        return Ok(BufReader::new(Box::new(file)));
    }
    let gz_decoder = MultiGzDecoder::new(file);
    if gz_decoder.header().is_none() {
        return Err(InspectorError::Io(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Invalid gzip header: {}", path.display()),
        )));
    }
    Ok(BufReader::new(Box::new(gz_decoder)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::{write::GzEncoder, Compression};
    use std::io::{BufRead, Write};

    #[test]
    fn reads_plain_and_gzipped_tables() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("table.tsv");
        std::fs::write(&plain, "#header\nrow\n").unwrap();

        let gz = dir.path().join("table.tsv.gz");
        let mut encoder = GzEncoder::new(File::create(&gz).unwrap(), Compression::default());
        encoder.write_all(b"#header\nrow\n").unwrap();
        encoder.finish().unwrap();

        for path in [plain, gz] {
            let lines: Vec<String> = open_table_reader(&path)
                .unwrap()
                .lines()
                .map(|l| l.unwrap())
                .collect();
            assert_eq!(lines, vec!["#header", "row"]);
        }
    }

    #[test]
    fn missing_table_is_reported() {
        let result = open_table_reader(Path::new("/nonexistent/table.tsv"));
        assert!(matches!(result, Err(InspectorError::MissingInputFile(_))));
    }
}
