use std::collections::HashSet;

use super::data::{Asset, AssetType, FileDescriptor, FilterType, PLACEHOLDER_THUMBNAIL};

/// Folder label given to every uploaded asset
pub const UPLOAD_FOLDER: &str = "My Files";

/// Modified label given to every uploaded asset
pub const UPLOAD_MODIFIED: &str = "Just now";

/// The Library holds every asset record plus the current selection.
///
/// Everything lives in memory; nothing survives a restart. All mutations
/// run on the UI thread, so there is no locking here.
#[derive(Debug, Default)]
pub struct Library {
    /// Display order: newest uploads first
    assets: Vec<Asset>,
    /// IDs the user has marked. Always a subset of `assets`.
    selection: HashSet<String>,
    /// Source of upload IDs
    next_upload_id: u64,
}

impl Library {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a library from existing records (first occurrence of an ID wins)
    pub fn with_assets(assets: Vec<Asset>) -> Self {
        let mut seen = HashSet::new();
        let assets = assets
            .into_iter()
            .filter(|asset| seen.insert(asset.id.clone()))
            .collect();

        Library {
            assets,
            selection: HashSet::new(),
            next_upload_id: 0,
        }
    }

    /// The demo library shown on first launch
    pub fn sample() -> Self {
        Self::with_assets(sample_assets())
    }

    /// All assets, unfiltered, in display order
    pub fn list(&self) -> &[Asset] {
        &self.assets
    }

    pub fn get(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.id == id)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn selection(&self) -> &HashSet<String> {
        &self.selection
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Distinct folder labels in first-seen order
    pub fn folders(&self) -> Vec<&str> {
        let mut folders: Vec<&str> = Vec::new();
        for asset in &self.assets {
            if !folders.contains(&asset.folder.as_str()) {
                folders.push(&asset.folder);
            }
        }
        folders
    }

    /// Flip the starred flag.
    /// Returns false if no asset has this ID (stale UI state).
    pub fn toggle_star(&mut self, id: &str) -> bool {
        match self.assets.iter_mut().find(|asset| asset.id == id) {
            Some(asset) => {
                asset.starred = !asset.starred;
                true
            }
            None => false,
        }
    }

    /// Remove an asset and drop it from the selection.
    /// Returns the removed record, or None if the ID was unknown.
    pub fn delete(&mut self, id: &str) -> Option<Asset> {
        self.selection.remove(id);
        let index = self.assets.iter().position(|asset| asset.id == id)?;
        Some(self.assets.remove(index))
    }

    /// Add the ID to the selection, or remove it if already selected.
    /// Returns whether the asset is selected afterwards. Unknown IDs are ignored.
    pub fn toggle_select(&mut self, id: &str) -> bool {
        if !self.selection.remove(id) {
            if self.get(id).is_none() {
                return false;
            }
            self.selection.insert(id.to_string());
            return true;
        }
        false
    }

    /// Turn incoming files into assets and prepend them, keeping their order.
    /// Returns the newly created records.
    pub fn upload(&mut self, files: Vec<FileDescriptor>) -> Vec<Asset> {
        let new_assets: Vec<Asset> = files
            .into_iter()
            .map(|file| Asset {
                id: self.fresh_id(),
                kind: AssetType::from_upload(&file.name, &file.media_type),
                size: format_megabytes(file.size),
                name: file.name,
                modified: UPLOAD_MODIFIED.to_string(),
                thumbnail: PLACEHOLDER_THUMBNAIL.to_string(),
                starred: false,
                folder: UPLOAD_FOLDER.to_string(),
            })
            .collect();

        self.assets.splice(0..0, new_assets.iter().cloned());
        new_assets
    }

    /// Next unused upload ID
    fn fresh_id(&mut self) -> String {
        loop {
            self.next_upload_id += 1;
            let id = format!("upload-{}", self.next_upload_id);
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

/// Assets whose name contains `query` (case-insensitive) and that match `filter`.
/// Input order is preserved.
pub fn filter<'a>(assets: &'a [Asset], query: &str, filter: FilterType) -> Vec<&'a Asset> {
    let query = query.to_lowercase();
    assets
        .iter()
        .filter(|asset| filter.matches(asset) && asset.name.to_lowercase().contains(&query))
        .collect()
}

/// Size label for an uploaded file: decimal megabytes, one decimal place
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
}

fn sample_assets() -> Vec<Asset> {
    let entries = [
        ("1", "Summer Campaign 2024.mp4", AssetType::Video, "124 MB", "2 hours ago", true, "Campaigns"),
        ("2", "Product Hero Image.jpg", AssetType::Image, "2.4 MB", "Yesterday", false, "Product Assets"),
        ("3", "Brand Guidelines Q1.pdf", AssetType::Document, "8.1 MB", "3 days ago", true, "Brand"),
        ("4", "Instagram Story Ad.mp4", AssetType::Video, "45 MB", "1 week ago", false, "Social Media"),
        ("5", "Logo Variations.zip", AssetType::Archive, "12 MB", "2 weeks ago", false, "Brand"),
        ("6", "Fall Collection Banner.png", AssetType::Image, "5.6 MB", "3 weeks ago", true, "Campaigns"),
    ];

    entries
        .into_iter()
        .map(|(id, name, kind, size, modified, starred, folder)| Asset {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            size: size.to_string(),
            modified: modified.to_string(),
            thumbnail: PLACEHOLDER_THUMBNAIL.to_string(),
            starred,
            folder: folder.to_string(),
        })
        .collect()
}
