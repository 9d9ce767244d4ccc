/// Shared data structures for the application state
///
/// These types represent the data model that flows between
/// the asset store and the UI layer.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Placeholder thumbnail reference used until real previews exist
pub const PLACEHOLDER_THUMBNAIL: &str = "/api/placeholder/300/200";

/// The kind of file an asset represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetType {
    Video,
    Image,
    Document,
    Archive,
}

impl AssetType {
    /// Derive the type of an incoming file.
    ///
    /// The media type wins for video and image; otherwise the file name
    /// decides between archive and document.
    pub fn from_upload(name: &str, media_type: &str) -> Self {
        if media_type.starts_with("video/") {
            AssetType::Video
        } else if media_type.starts_with("image/") {
            AssetType::Image
        } else if name.ends_with(".zip") || name.ends_with(".rar") {
            AssetType::Archive
        } else {
            AssetType::Document
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssetType::Video => "Video",
            AssetType::Image => "Image",
            AssetType::Document => "Document",
            AssetType::Archive => "Archive",
        }
    }
}

/// A single file record in the library
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    /// Unique ID within the collection
    pub id: String,
    /// Display name (e.g., "Summer Campaign 2024.mp4")
    pub name: String,
    pub kind: AssetType,
    /// Human-readable size (e.g., "2.4 MB")
    pub size: String,
    /// Human-readable last-modified label (e.g., "Yesterday")
    pub modified: String,
    /// Not rendered until real previews exist
    #[allow(dead_code)]
    pub thumbnail: String,
    pub starred: bool,
    /// Owning folder label (free text)
    pub folder: String,
}

/// Sidebar category restricting which assets are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterType {
    #[default]
    All,
    Starred,
    Video,
    Image,
}

impl FilterType {
    /// Sidebar order
    pub const ALL: [FilterType; 4] = [
        FilterType::All,
        FilterType::Starred,
        FilterType::Video,
        FilterType::Image,
    ];

    /// Check whether an asset belongs to this category
    pub fn matches(&self, asset: &Asset) -> bool {
        match self {
            FilterType::All => true,
            FilterType::Starred => asset.starred,
            FilterType::Video => asset.kind == AssetType::Video,
            FilterType::Image => asset.kind == AssetType::Image,
        }
    }

    /// Heading shown above the file area
    pub fn title(&self) -> &'static str {
        match self {
            FilterType::All => "All Files",
            FilterType::Starred => "Starred",
            FilterType::Video => "Videos",
            FilterType::Image => "Images",
        }
    }
}

/// Grid of cards or a table of rows
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// A file offered for upload: picked, dropped, or found in a folder
#[derive(Debug, Clone, PartialEq)]
pub struct FileDescriptor {
    /// File name only (e.g., "hero.png")
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Media type (e.g., "image/png")
    pub media_type: String,
    /// Source on disk, when known
    pub path: Option<PathBuf>,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, size: u64, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            media_type: media_type.into(),
            path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(kind: AssetType, starred: bool) -> Asset {
        Asset {
            id: "a".to_string(),
            name: "a".to_string(),
            kind,
            size: "1 MB".to_string(),
            modified: "Just now".to_string(),
            thumbnail: PLACEHOLDER_THUMBNAIL.to_string(),
            starred,
            folder: "My Files".to_string(),
        }
    }

    #[test]
    fn test_type_from_media_type() {
        assert_eq!(AssetType::from_upload("clip.mov", "video/quicktime"), AssetType::Video);
        assert_eq!(AssetType::from_upload("hero.png", "image/png"), AssetType::Image);
        assert_eq!(AssetType::from_upload("brief.pdf", "application/pdf"), AssetType::Document);
    }

    #[test]
    fn test_type_from_archive_name() {
        assert_eq!(AssetType::from_upload("logos.zip", "application/zip"), AssetType::Archive);
        assert_eq!(AssetType::from_upload("backup.rar", ""), AssetType::Archive);
        // Extension match is case-sensitive
        assert_eq!(AssetType::from_upload("Backup.RAR", ""), AssetType::Document);
        assert_eq!(AssetType::from_upload("Backup.ZIP", "application/zip"), AssetType::Document);
        // Media type takes precedence over the extension
        assert_eq!(AssetType::from_upload("frames.zip", "image/png"), AssetType::Image);
    }

    #[test]
    fn test_filter_type_matches() {
        let video = asset(AssetType::Video, false);
        let starred_doc = asset(AssetType::Document, true);

        assert!(FilterType::All.matches(&video));
        assert!(FilterType::Video.matches(&video));
        assert!(!FilterType::Image.matches(&video));
        assert!(!FilterType::Starred.matches(&video));
        assert!(FilterType::Starred.matches(&starred_doc));
        assert!(!FilterType::Video.matches(&starred_doc));
    }

    #[test]
    fn test_view_mode_serialization() {
        assert_eq!(serde_json::to_string(&ViewMode::List).unwrap(), "\"list\"");
        let mode: ViewMode = serde_json::from_str("\"grid\"").unwrap();
        assert_eq!(mode, ViewMode::Grid);
    }
}
