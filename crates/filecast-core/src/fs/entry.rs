//! Entry representation.

use std::fmt;

use serde::Serialize;

/// Category of a served entry.
///
/// Directories are recognised from filesystem metadata; everything else is
/// categorised by extension alone. No content sniffing is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntryType {
    #[serde(rename = "dir")]
    Directory,
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "image")]
    Image,
    #[serde(rename = "video")]
    Video,
}

impl EntryType {
    /// Categorises a file by its extension (the text after the last `.` of
    /// the file name, without the dot).
    ///
    /// Matching is exact: `PHOTO.JPG` is [`EntryType::Text`].
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext {
            Some("mp4" | "ts") => EntryType::Video,
            Some("jpg" | "png" | "jpeg") => EntryType::Image,
            _ => EntryType::Text,
        }
    }

    /// The tag used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            EntryType::Directory => "dir",
            EntryType::Text => "text",
            EntryType::Image => "image",
            EntryType::Video => "video",
        }
    }

    pub fn is_dir(self) -> bool {
        self == EntryType::Directory
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single classified entry: its category and final path segment.
///
/// Serialises as `{"type": "...", "name": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryInfo {
    #[serde(rename = "type")]
    entry_type: EntryType,
    name: String,
}

impl EntryInfo {
    /// Creates an entry. `name` is kept exactly as given.
    pub fn new(entry_type: EntryType, name: &str) -> Self {
        Self {
            entry_type,
            name: name.to_string(),
        }
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    /// Returns the entry name (last component of the path, never a full path).
    pub fn name(&self) -> &str {
        &self.name
    }
}
