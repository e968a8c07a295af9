//! File and asset path resolution for sketches.

use std::fs::File;
use std::path::{Component, Path, PathBuf};

use crate::error::SurfaceError;

/// Path of a private file, as `Context.getFileStreamPath` resolves it.
pub fn file_stream_path(files_dir: &Path, name: &str) -> PathBuf {
    files_dir.join(name)
}

/// Opens a private file for reading.
///
/// Like the platform call it mirrors, only bare file names are accepted.
pub fn open_file_input(files_dir: &Path, name: &str) -> Result<File, SurfaceError> {
    if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
        return Err(SurfaceError::PathSeparator(name.to_string()));
    }

    open(file_stream_path(files_dir, name))
}

/// Resolves a sketch data path: absolute paths pass through, relative ones
/// land in the files directory.
pub fn resolve_data_path(files_dir: &Path, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        files_dir.join(p)
    }
}

/// Opens a bundled asset. Names are relative to the asset root and may not
/// climb out of it.
pub fn open_asset(assets_dir: &Path, name: &str) -> Result<File, SurfaceError> {
    let rel = Path::new(name);
    let contained = rel
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if name.is_empty() || !contained {
        return Err(SurfaceError::AssetOutsideRoot(name.to_string()));
    }

    open(assets_dir.join(rel))
}

fn open(path: PathBuf) -> Result<File, SurfaceError> {
    File::open(&path).map_err(|source| SurfaceError::Io { path, source })
}
