//! # Image Inspector
//!
//! Normalize loosely-structured image metadata into typed, display-ready records.
//!
//! This crate takes the raw tag dictionary an external extraction tool produces
//! for an image file and turns it into a stable, strongly-typed record, absorbing
//! the representational inconsistencies real-world files exhibit: rationals
//! encoded as fraction pairs or floats, synonym tag names, degrees/minutes/seconds
//! versus decimal coordinates, enumerated flash and orientation codes, and
//! heterogeneous date formats.
//!
//! ## Key Features
//!
//! - **Typed tag values**: raw tags deserialize into a closed union that extractors
//!   pattern-match instead of probing shapes at runtime.
//! - **GPS resolution**: decimal-degree coordinates from pre-resolved fields or
//!   DMS triples with hemisphere references, plus a formatted altitude.
//! - **Capture time**: a human-readable timestamp from prioritized candidate tags,
//!   including the colon-separated EXIF date convention.
//! - **Camera and exposure settings**: make/model/lens plus photographically
//!   formatted aperture, exposure time, focal length, and flash description.
//! - **Graceful degradation**: missing or malformed tags produce absent fields,
//!   never errors; an empty dictionary assembles into a sparse record.
//!
//! ## Usage
//!
//! Create an `ImageInspector` and call `inspect` with the path to your image.
//!
//! ```rust,no_run
//! use image_inspector::{ImageInspector, InspectorError};
//! use std::path::Path;
//!
//! fn main() -> Result<(), InspectorError> {
//!     let mut inspector = ImageInspector::builder().build()?;
//!     let record = inspector.inspect(Path::new("photos/sunset.jpg"))?;
//!
//!     println!("Camera: {:?}", record.camera);
//!     println!("Taken: {:?}", record.date_time);
//!     println!("Location: {:?}", record.location);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod features;
pub mod image_inspector;
pub mod raw;
pub mod structs;
pub mod utils;

pub use error::InspectorError;
pub use image_inspector::ImageInspector;
pub use structs::{FileDetails, ImageRecord};
