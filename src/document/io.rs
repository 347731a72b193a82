//! Container access
//!
//! This module opens document archives and reads the body resource out of
//! them. Archive handles are owned by the caller's scope and close when it
//! ends, on success and failure alike.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use tracing::debug;
use zip::ZipArchive;

use super::error::ExtractError;

/// Entries whose presence identifies other Office containers
const FOREIGN_MARKERS: &[(&str, &str)] = &[
    ("xl/workbook.xml", "an Excel workbook (.xlsx)"),
    ("ppt/presentation.xml", "a PowerPoint presentation (.pptx)"),
];

/// Open `path` as a ZIP archive
pub(crate) fn open_container(path: &Path) -> Result<ZipArchive<File>, ExtractError> {
    let file = File::open(path).map_err(|source| ExtractError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    container_from_reader(file, path)
}

pub(crate) fn container_from_reader<R: Read + Seek>(
    reader: R,
    path: &Path,
) -> Result<ZipArchive<R>, ExtractError> {
    let archive = ZipArchive::new(reader).map_err(|source| ExtractError::Archive {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), entries = archive.len(), "opened container");
    Ok(archive)
}

/// Read the complete contents of the `part` entry
pub(crate) fn read_body_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    path: &Path,
    part: &str,
) -> Result<Vec<u8>, ExtractError> {
    let Some(index) = archive.index_for_name(part) else {
        return Err(ExtractError::MissingBody {
            path: path.to_path_buf(),
            part: part.to_string(),
            found: identify_foreign_container(archive),
        });
    };

    let mut entry = archive
        .by_index(index)
        .map_err(|source| ExtractError::Archive {
            path: path.to_path_buf(),
            source,
        })?;
    let mut bytes = Vec::new();
    entry
        .read_to_end(&mut bytes)
        .map_err(|source| ExtractError::ReadBody {
            path: path.to_path_buf(),
            part: part.to_string(),
            source,
        })?;

    debug!(path = %path.display(), part, bytes = bytes.len(), "read body part");
    Ok(bytes)
}

fn identify_foreign_container<R: Read + Seek>(archive: &ZipArchive<R>) -> Option<&'static str> {
    let names: Vec<&str> = archive.file_names().collect();
    FOREIGN_MARKERS
        .iter()
        .find(|(marker, _)| names.contains(marker))
        .map(|&(_, kind)| kind)
}
