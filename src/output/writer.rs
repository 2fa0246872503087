//! Persisting sitemap documents to disk
//!
//! Files are written in place: there is no temporary file or atomic rename, so
//! concurrent runs against the same directory race and the last writer wins.

use crate::sitemap::{SitemapSet, GZIP_EXTENSION};
use crate::{Result, SitemapError};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Returns true if this build can write gzip files
pub fn compression_available() -> bool {
    cfg!(feature = "gzip")
}

/// Writes `body` to `path` uncompressed, replacing any existing file
pub fn write_plain(path: &Path, body: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(body.as_bytes())?;
    Ok(())
}

/// Writes `body` to `path` gzip-compressed, replacing any existing file
#[cfg(feature = "gzip")]
pub fn write_gzip(path: &Path, body: &str) -> Result<()> {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::BufWriter;

    let file = File::create(path)?;
    let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
    encoder.write_all(body.as_bytes())?;
    encoder.finish()?.flush()?;
    Ok(())
}

/// Writes `body` to `path` gzip-compressed, replacing any existing file
#[cfg(not(feature = "gzip"))]
pub fn write_gzip(_path: &Path, _body: &str) -> Result<()> {
    Err(SitemapError::CompressionUnavailable)
}

/// Writes every file of a sitemap set into `dir`
///
/// With an index, the index is written uncompressed and every sitemap file is
/// gzip-compressed (their names end in `.xml.gz`). Without one, the single
/// sitemap is written uncompressed, plus a `.gz` copy when the set asks for it.
///
/// Compression availability is checked before anything is written.
///
/// # Returns
///
/// The paths written, in order.
pub fn write_sitemap_set(set: &SitemapSet, dir: &Path) -> Result<Vec<PathBuf>> {
    if set.documents.is_empty() {
        return Err(SitemapError::NothingToWrite);
    }

    let needs_gzip = set.has_index() || set.gzip_copy;
    if needs_gzip && !compression_available() {
        return Err(SitemapError::CompressionUnavailable);
    }

    let mut written = Vec::new();

    if let Some(index) = &set.index {
        let path = dir.join(&index.file_name);
        write_plain(&path, &index.xml_body)?;
        info!(
            "Wrote sitemap index {} ({} sitemaps)",
            path.display(),
            index.references.len()
        );
        written.push(path);

        for document in &set.documents {
            let path = dir.join(&document.file_name);
            write_gzip(&path, &document.xml_body)?;
            info!("Wrote {} ({} URLs)", path.display(), document.len());
            written.push(path);
        }
    } else {
        let document = &set.documents[0];
        let path = dir.join(&document.file_name);
        write_plain(&path, &document.xml_body)?;
        info!("Wrote {} ({} URLs)", path.display(), document.len());
        written.push(path);

        if set.gzip_copy {
            let path = dir.join(format!("{}{}", document.file_name, GZIP_EXTENSION));
            write_gzip(&path, &document.xml_body)?;
            info!("Wrote gzip copy {}", path.display());
            written.push(path);
        }
    }

    Ok(written)
}
