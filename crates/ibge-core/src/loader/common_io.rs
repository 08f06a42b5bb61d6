// crates/ibge-core/src/loader/common_io.rs
use crate::error::{LoadError, Result};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Opens a fixture file, buffers it, and gunzips it when the name ends in
/// `.gz`. The caller gets a plain reader either way.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(format!("{}: {e}", path.display())),
        _ => LoadError::Io(e),
    })?;

    let reader = BufReader::new(file);
    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(flate2::read::GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        drop(reader);
        Err(LoadError::InvalidData(format!(
            "{} is gzipped but the 'compact' feature is disabled",
            path.display()
        )))
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
