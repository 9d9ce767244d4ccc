/// Turning files on disk into upload candidates
///
/// Only metadata is read (name and size). File contents are never
/// opened, copied or sent anywhere.

use std::path::{Path, PathBuf};
use tokio::task;
use walkdir::WalkDir;

use crate::error::{AppError, Result};
use crate::state::data::FileDescriptor;

/// Media type used when the extension is unknown
const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Guess a media type from the file extension
pub fn guess_media_type(path: &Path) -> &'static str {
    let ext = match path.extension() {
        Some(ext) => ext.to_string_lossy().to_lowercase(),
        None => return FALLBACK_MEDIA_TYPE,
    };

    match ext.as_str() {
        // Video
        "mp4" | "m4v" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        // Image
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "heic" => "image/heic",
        "tif" | "tiff" => "image/tiff",
        // Documents
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        // Archives
        "zip" => "application/zip",
        "rar" => "application/vnd.rar",
        "7z" => "application/x-7z-compressed",
        "gz" => "application/gzip",
        _ => FALLBACK_MEDIA_TYPE,
    }
}

/// Read metadata for a single file
pub fn describe_path(path: &Path) -> Result<FileDescriptor> {
    let metadata = std::fs::metadata(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(descriptor(path, metadata.len()))
}

/// Describe files picked in the dialog or dropped on the window.
/// Unreadable files and directories are skipped.
pub async fn describe_files(paths: Vec<PathBuf>) -> Vec<FileDescriptor> {
    let mut files = Vec::with_capacity(paths.len());

    for path in paths {
        match tokio::fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => files.push(descriptor(&path, metadata.len())),
            Ok(_) => log::debug!("Skipping non-file {}", path.display()),
            Err(e) => log::warn!("Cannot read {}: {}", path.display(), e),
        }
    }

    files
}

/// Recursively collect every file under `folder`
/// Runs in a blocking thread to avoid stalling the UI
///
/// Returns an error message for the upload dialog if the scan task dies.
pub async fn scan_folder(folder: PathBuf) -> std::result::Result<Vec<FileDescriptor>, String> {
    let display = folder.display().to_string();

    task::spawn_blocking(move || scan_folder_blocking(&folder))
        .await
        .map_err(|e| {
            log::error!("Folder scan of {} failed: {}", display, e);
            format!("Could not scan {}", display)
        })
}

/// Blocking implementation of the folder scan
fn scan_folder_blocking(folder: &Path) -> Vec<FileDescriptor> {
    log::info!("Scanning folder: {}", folder.display());

    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        match describe_path(entry.path()) {
            Ok(file) => files.push(file),
            Err(e) => log::warn!("{e}"),
        }
    }

    log::info!("Found {} files in {}", files.len(), folder.display());
    files
}

/// Descriptor for a file on disk whose size is already known
fn descriptor(path: &Path, size: u64) -> FileDescriptor {
    FileDescriptor {
        path: Some(path.to_path_buf()),
        ..FileDescriptor::new(file_name(path), size, guess_media_type(path))
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_guess_media_type() {
        assert_eq!(guess_media_type(Path::new("clip.MP4")), "video/mp4");
        assert_eq!(guess_media_type(Path::new("hero.jpeg")), "image/jpeg");
        assert_eq!(guess_media_type(Path::new("logos.rar")), "application/vnd.rar");
        assert_eq!(guess_media_type(Path::new("README")), FALLBACK_MEDIA_TYPE);
        assert_eq!(guess_media_type(Path::new("data.xyz")), FALLBACK_MEDIA_TYPE);
    }

    #[test]
    fn test_describe_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brief.pdf");
        fs::write(&path, vec![0u8; 2048]).unwrap();

        let file = describe_path(&path).unwrap();
        assert_eq!(file.name, "brief.pdf");
        assert_eq!(file.size, 2048);
        assert_eq!(file.media_type, "application/pdf");
        assert_eq!(file.path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_describe_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = describe_path(&dir.path().join("gone.png")).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread().build().unwrap()
    }

    #[test]
    fn test_describe_files_skips_missing_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        let cover = dir.path().join("cover.png");
        fs::write(&cover, vec![0u8; 512]).unwrap();
        let folder = dir.path().join("shoots");
        fs::create_dir(&folder).unwrap();
        let missing = dir.path().join("gone.mov");

        let files = runtime().block_on(describe_files(vec![missing, folder, cover.clone()]));

        assert_eq!(files.len(), 1);
        assert_eq!(files[0], describe_path(&cover).unwrap());
        assert_eq!(files[0].name, "cover.png");
        assert_eq!(files[0].size, 512);
        assert_eq!(files[0].media_type, "image/png");
        assert_eq!(files[0].path.as_deref(), Some(cover.as_path()));
    }

    #[test]
    fn test_scan_folder_on_runtime() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("deck.pdf"), b"pdf").unwrap();

        let files = runtime().block_on(scan_folder(dir.path().to_path_buf())).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].media_type, "application/pdf");
    }

    #[test]
    fn test_scan_folder_finds_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("shoots/day1")).unwrap();
        fs::write(dir.path().join("a.png"), b"png").unwrap();
        fs::write(dir.path().join("shoots/day1/b.mov"), b"mov").unwrap();
        fs::write(dir.path().join("shoots/notes.txt"), b"hello").unwrap();

        let files = scan_folder_blocking(dir.path());
        let mut names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        names.sort();

        assert_eq!(names, vec!["a.png", "b.mov", "notes.txt"]);
        assert!(files.iter().all(|f| f.path.is_some()));
    }
}
