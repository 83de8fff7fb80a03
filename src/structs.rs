use crate::features::camera::{CameraInfo, extract_camera};
use crate::features::datetime::format_capture_time;
use crate::features::dimensions::{Dimensions, extract_dimensions};
use crate::features::gps::{GeoCoordinate, resolve_altitude, resolve_location};
use crate::features::settings::{ImageSettings, extract_settings};
use crate::raw::{TagDictionary, TagValue};
use chrono::{DateTime, Utc};
use mime_guess::MimeGuess;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// File-level attributes, gathered from the filesystem before any tag
/// extraction runs.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileDetails {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    pub modified: Option<DateTime<Utc>>,
}

impl FileDetails {
    /// Stats the file and guesses its MIME type from the extension.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be stat'ed; this is the one hard failure
    /// in the inspection flow.
    pub fn from_path(path: &Path) -> Result<Self, io::Error> {
        let metadata = fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime_type = MimeGuess::from_path(path)
            .first_or_octet_stream()
            .to_string();
        let modified = metadata.modified().ok().map(DateTime::<Utc>::from);

        Ok(Self {
            name,
            size_bytes: metadata.len(),
            mime_type,
            modified,
        })
    }
}

/// The assembled, display-ready view of one image.
///
/// Built once per inspected file and immutable afterwards; a new inspection
/// produces a fresh record rather than patching an old one. Every optional
/// field means "not present in source"; consumers omit those lines instead
/// of rendering empty values.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    pub modified: Option<DateTime<Utc>>,
    pub location: Option<GeoCoordinate>,
    pub altitude: Option<String>,
    pub date_time: Option<String>,
    pub camera: Option<CameraInfo>,
    pub settings: Option<ImageSettings>,
    pub dimensions: Option<Dimensions>,
    pub copyright: Option<String>,
    pub artist: Option<String>,
    /// The dictionary the record was assembled from, kept verbatim for
    /// pass-through inspection.
    pub raw_tags: TagDictionary,
}

impl ImageRecord {
    /// Combines the extractor outputs with the file attributes into one
    /// record. Each extractor runs exactly once on the same dictionary, and
    /// assembly itself cannot fail: sparse input yields a sparse record.
    pub fn assemble(details: FileDetails, tags: TagDictionary) -> Self {
        Self {
            location: resolve_location(&tags),
            altitude: resolve_altitude(&tags),
            date_time: format_capture_time(&tags),
            camera: extract_camera(&tags),
            settings: extract_settings(&tags),
            dimensions: extract_dimensions(&tags),
            copyright: text_tag(&tags, "Copyright"),
            artist: text_tag(&tags, "Artist"),
            name: details.name,
            size_bytes: details.size_bytes,
            mime_type: details.mime_type,
            modified: details.modified,
            raw_tags: tags,
        }
    }
}

fn text_tag(tags: &TagDictionary, key: &str) -> Option<String> {
    tags.get(key).and_then(TagValue::as_text).map(str::to_owned)
}
