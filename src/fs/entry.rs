//! Directory listing entries and their ordering

use std::cmp::Ordering;
use std::fs::Metadata;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

/// One row of a directory listing or search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Byte size, files only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Serialized as milliseconds since the Unix epoch
    #[serde(rename = "mtime", serialize_with = "serialize_mtime")]
    pub modified: Option<SystemTime>,
}

impl FileEntry {
    pub fn from_metadata(name: String, path: PathBuf, metadata: &Metadata) -> Self {
        let is_dir = metadata.is_dir();
        Self {
            name,
            path,
            kind: if is_dir {
                EntryKind::Directory
            } else {
                EntryKind::File
            },
            size: (!is_dir).then(|| metadata.len()),
            modified: metadata.modified().ok(),
        }
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

fn epoch_millis(time: SystemTime) -> Option<u64> {
    time.duration_since(UNIX_EPOCH)
        .ok()
        .map(|d| d.as_millis() as u64)
}

fn serialize_mtime<S: Serializer>(value: &Option<SystemTime>, serializer: S) -> Result<S::Ok, S::Error> {
    match value.and_then(epoch_millis) {
        Some(ms) => serializer.serialize_some(&ms),
        None => serializer.serialize_none(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Name,
    Size,
    Modified,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Case-insensitive name order with a byte-order tie-break
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Sort entries: directories first, then by `sort_by` within each kind.
///
/// `order` only reverses the order inside a kind; directories always lead.
pub fn sort_entries(entries: &mut [FileEntry], sort_by: SortBy, order: SortOrder) {
    entries.sort_by(|a, b| {
        let kind = b.is_dir().cmp(&a.is_dir());
        if kind != Ordering::Equal {
            return kind;
        }

        let by_key = match sort_by {
            SortBy::Name => Ordering::Equal,
            SortBy::Size => a.size.unwrap_or(0).cmp(&b.size.unwrap_or(0)),
            SortBy::Modified => a.modified.cmp(&b.modified),
        }
        .then_with(|| compare_names(&a.name, &b.name));

        match order {
            SortOrder::Asc => by_key,
            SortOrder::Desc => by_key.reverse(),
        }
    });
}
