use atlasfold::core::models::structure::ResidueConfidence;
use atlasfold::workflows::dispatch::Download;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes `download` into `directory`, creating it if needed, and returns the file path.
pub fn write_download(directory: &Path, download: &Download) -> io::Result<PathBuf> {
    fs::create_dir_all(directory)?;
    let path = directory.join(sanitize_file_name(&download.file_name));
    fs::write(&path, download.contents.as_bytes())?;
    debug!(
        "Saved {} ({} bytes) to {:?}",
        download.mime_type,
        download.contents.len(),
        path
    );
    Ok(path)
}

/// Keeps ASCII alphanumerics, `-`, `_` and `.`; everything else becomes `_`.
pub fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.trim_matches('.').is_empty() {
        "structure.pdb".to_string()
    } else {
        cleaned
    }
}

pub fn write_residue_table(path: &Path, residues: &[ResidueConfidence]) -> Result<(), csv::Error> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    for residue in residues {
        writer.serialize(residue)?;
    }
    writer.flush()?;
    debug!("Wrote {} residue rows to {:?}", residues.len(), path);
    Ok(())
}
