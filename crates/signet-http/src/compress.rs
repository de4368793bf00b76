//! Gzip request-body encoding

use crate::error::HttpError;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

/// Gzip-compress a request body
pub(crate) fn gzip_bytes(data: &[u8]) -> Result<Vec<u8>, HttpError> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).map_err(HttpError::Compress)?;
    encoder.finish().map_err(HttpError::Compress)
}
