use crate::error::ExportError;
use crate::structs::{CharacterMetric, FontDocument};
use log::{debug, info};
use std::io::Write;
use std::path::Path;

/// Read and parse a font metrics file.
///
/// Fails without producing any output if the file can't be read, isn't
/// JSON, or has no `characters` object. Individual character records are
/// not checked until [`export`] reaches them.
pub fn read_document(path: impl AsRef<Path>) -> Result<FontDocument, ExportError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", text.len(), path.display());
    let document: FontDocument = text.parse()?;
    if !document.info.is_empty() {
        info!("Atlas: {}", document.info);
    }
    debug!("{} characters in {}", document.len(), path.display());
    Ok(document)
}

/// Write one `CharCoord` line per character, in document order.
///
/// Lines are written as each record is converted, so a bad record leaves
/// the lines for all earlier records in the writer. Returns the number of
/// lines written.
pub fn export(document: &FontDocument, writer: &mut impl Write) -> Result<usize, ExportError> {
    let mut written = 0;
    for (id, value) in document.characters.iter() {
        let metric = CharacterMetric::from_value(id, value)?;
        writeln!(writer, "{}", metric).map_err(ExportError::Write)?;
        written += 1;
    }
    debug!("Wrote {} lines", written);
    Ok(written)
}

pub fn export_path(path: impl AsRef<Path>, writer: &mut impl Write) -> Result<usize, ExportError> {
    let document = read_document(path)?;
    export(&document, writer)
}
