use crate::error::InspectorError;
use crate::raw::{TagDictionary, dictionary_from_json};
use crate::structs::{FileDetails, ImageRecord};
use bon::bon;
use exiftool::ExifTool;
use log::warn;
use std::path::{Path, PathBuf};

/// The main entry point for image inspection.
///
/// This struct holds the running `exiftool` process used to extract raw
/// tags. It is designed to be created once and reused for inspecting
/// multiple files.
///
/// Use the builder pattern to construct an instance:
/// ```rust,no_run
/// # use image_inspector::{ImageInspector, InspectorError};
/// # fn main() -> Result<(), InspectorError> {
/// let inspector = ImageInspector::builder().build()?;
/// # Ok(())
/// # }
/// ```
pub struct ImageInspector {
    exiftool: ExifTool,
}

#[bon]
impl ImageInspector {
    /// Constructs an `ImageInspector` via a builder pattern.
    ///
    /// # Builder Arguments
    ///
    /// * `exiftool_path: Option<PathBuf>` - An optional path to a specific
    ///   `exiftool` executable. If `None`, `exiftool` will be searched for
    ///   in the system's PATH.
    ///
    /// # Errors
    ///
    /// This function will return an error if the `exiftool` executable
    /// cannot be found or fails to start.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use std::path::PathBuf;
    /// # use image_inspector::{ImageInspector, InspectorError};
    /// # fn main() -> Result<(), InspectorError> {
    /// let inspector = ImageInspector::builder()
    ///     .exiftool_path(PathBuf::from("/usr/local/bin/exiftool"))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub fn new(exiftool_path: Option<PathBuf>) -> Result<Self, InspectorError> {
        let exiftool = match exiftool_path {
            Some(path) => ExifTool::with_executable(&path)?,
            None => ExifTool::new()?,
        };
        Ok(Self { exiftool })
    }

    /// Inspects an image file and assembles its normalized metadata record.
    ///
    /// The file is stat'ed for its name, size, MIME type, and modification
    /// time, then the raw tags are extracted in numeric mode and normalized
    /// into an [`ImageRecord`]. A failed extraction is not an error: the
    /// record is assembled from an empty dictionary, with every metadata
    /// field absent.
    ///
    /// # Arguments
    ///
    /// * `image_file` - A path to the image file to inspect.
    ///
    /// # Errors
    ///
    /// Returns [`InspectorError::Io`] when the file itself cannot be
    /// stat'ed. Metadata sparsity never errors.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use std::path::Path;
    /// # use image_inspector::{ImageInspector, InspectorError};
    /// # fn main() -> Result<(), InspectorError> {
    /// let mut inspector = ImageInspector::builder().build()?;
    /// let record = inspector.inspect(Path::new("photos/sunset.jpg"))?;
    ///
    /// println!("Taken: {:?}", record.date_time);
    /// println!("Location: {:?}", record.location);
    /// # Ok(())
    /// # }
    /// ```
    pub fn inspect(&mut self, image_file: &Path) -> Result<ImageRecord, InspectorError> {
        let details = FileDetails::from_path(image_file)?;
        let tags = self.read_tags(image_file);
        Ok(ImageRecord::assemble(details, tags))
    }

    /// Runs the extraction tool. A failed run or a non-object payload
    /// degrades to an empty dictionary so every extractor reads "absent."
    fn read_tags(&mut self, image_file: &Path) -> TagDictionary {
        match self.exiftool.json(image_file, &["-n"]) {
            Ok(raw) => dictionary_from_json(&raw).unwrap_or_else(|| {
                warn!(
                    "unexpected tag payload for {}, treating as empty",
                    image_file.display()
                );
                TagDictionary::new()
            }),
            Err(error) => {
                warn!(
                    "tag extraction failed for {}: {error}",
                    image_file.display()
                );
                TagDictionary::new()
            }
        }
    }
}
