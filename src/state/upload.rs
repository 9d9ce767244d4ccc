/// Upload dialog state
///
/// Holds the files the user has picked or dropped until they
/// confirm the upload. Nothing is read or copied here.

use super::data::FileDescriptor;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadDialog {
    /// Whether the modal is shown
    pub is_open: bool,
    /// Files are hovering over the window
    pub drag_active: bool,
    /// Files waiting for confirmation, in the order they were added
    pending: Vec<FileDescriptor>,
    /// Status line shown under the drop zone
    notice: Option<String>,
}

impl UploadDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.is_open = true;
        self.notice = None;
    }

    /// Hide the dialog. Pending files stay until confirmed or removed.
    pub fn close(&mut self) {
        self.is_open = false;
        self.drag_active = false;
    }

    pub fn set_drag_active(&mut self, active: bool) {
        self.drag_active = active;
    }

    pub fn pending(&self) -> &[FileDescriptor] {
        &self.pending
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Report a failed pick or scan
    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    /// Append files, skipping ones whose source path is already pending.
    /// Returns how many were added. Adding nothing leaves a notice.
    pub fn add_files(&mut self, files: Vec<FileDescriptor>) -> usize {
        let mut added = 0;
        for file in files {
            let duplicate = file.path.is_some()
                && self.pending.iter().any(|pending| pending.path == file.path);
            if !duplicate {
                self.pending.push(file);
                added += 1;
            }
        }

        self.notice = if added == 0 {
            Some("No new files found".to_string())
        } else {
            None
        };
        added
    }

    /// Drop one pending file. Out-of-range indexes are ignored.
    pub fn remove(&mut self, index: usize) -> Option<FileDescriptor> {
        if index < self.pending.len() {
            Some(self.pending.remove(index))
        } else {
            None
        }
    }

    /// Hand over the pending files and close the dialog.
    /// With nothing pending the dialog stays open and None is returned.
    pub fn confirm(&mut self) -> Option<Vec<FileDescriptor>> {
        if self.pending.is_empty() {
            return None;
        }
        self.close();
        Some(std::mem::take(&mut self.pending))
    }
}

/// Human-readable size for the pending list (e.g., "1.5 KB", "0 Bytes")
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    const K: f64 = 1024.0;

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let bytes = bytes as f64;
    let exponent = ((bytes.ln() / K.ln()).floor() as usize).min(UNITS.len() - 1);
    let value = (bytes / K.powi(exponent as i32) * 100.0).round() / 100.0;

    format!("{} {}", value, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn on_disk(name: &str) -> FileDescriptor {
        FileDescriptor {
            path: Some(PathBuf::from("/tmp").join(name)),
            ..FileDescriptor::new(name, 10, "text/plain")
        }
    }

    #[test]
    fn test_confirm_empty_keeps_dialog_open() {
        let mut dialog = UploadDialog::new();
        dialog.open();
        assert_eq!(dialog.confirm(), None);
        assert!(dialog.is_open);
    }

    #[test]
    fn test_confirm_hands_over_files() {
        let mut dialog = UploadDialog::new();
        dialog.open();
        dialog.add_files(vec![on_disk("a.txt"), on_disk("b.txt")]);

        let files = dialog.confirm().unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].name, "a.txt");
        assert!(dialog.pending().is_empty());
        assert!(!dialog.is_open);
    }

    #[test]
    fn test_add_files_skips_duplicate_paths() {
        let mut dialog = UploadDialog::new();
        assert_eq!(dialog.add_files(vec![on_disk("a.txt")]), 1);
        assert_eq!(dialog.add_files(vec![on_disk("a.txt"), on_disk("b.txt")]), 1);
        assert_eq!(dialog.pending().len(), 2);

        // Without a path there is nothing to compare against
        let loose = FileDescriptor::new("c.txt", 1, "text/plain");
        assert_eq!(dialog.add_files(vec![loose.clone(), loose]), 2);
    }

    #[test]
    fn test_notice() {
        let mut dialog = UploadDialog::new();
        dialog.open();
        assert_eq!(dialog.notice(), None);

        // An empty scan result is reported
        assert_eq!(dialog.add_files(Vec::new()), 0);
        assert_eq!(dialog.notice(), Some("No new files found"));

        dialog.add_files(vec![on_disk("a.txt")]);
        assert_eq!(dialog.notice(), None);

        dialog.set_notice("Could not scan /tmp/shoots");
        assert_eq!(dialog.notice(), Some("Could not scan /tmp/shoots"));

        dialog.close();
        dialog.open();
        assert_eq!(dialog.notice(), None);
    }

    #[test]
    fn test_remove() {
        let mut dialog = UploadDialog::new();
        dialog.add_files(vec![on_disk("a.txt"), on_disk("b.txt")]);

        assert_eq!(dialog.remove(5), None);
        assert_eq!(dialog.remove(0).unwrap().name, "a.txt");
        assert_eq!(dialog.pending()[0].name, "b.txt");
    }

    #[test]
    fn test_close_keeps_pending() {
        let mut dialog = UploadDialog::new();
        dialog.open();
        dialog.set_drag_active(true);
        dialog.add_files(vec![on_disk("a.txt")]);
        dialog.close();

        assert!(!dialog.is_open);
        assert!(!dialog.drag_active);
        assert_eq!(dialog.pending().len(), 1);
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_572_864), "1.5 MB");
        assert_eq!(format_file_size(2_621_440), "2.5 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024), "5 GB");
        // Terabytes stay in GB
        assert_eq!(format_file_size(2 * 1024 * 1024 * 1024 * 1024), "2048 GB");
    }
}
