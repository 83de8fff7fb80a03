use crate::raw::{TagDictionary, first_uint};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub width: Option<u64>,
    pub height: Option<u64>,
    /// Raw orientation code, 1 through 8 in well-formed files. Use
    /// [`describe_orientation`] for the display form.
    pub orientation: Option<u64>,
}

const WIDTH_KEYS: [&str; 3] = ["PixelXDimension", "ImageWidth", "width"];
const HEIGHT_KEYS: [&str; 3] = ["PixelYDimension", "ImageHeight", "height"];
const ORIENTATION_KEYS: [&str; 2] = ["Orientation", "orientation"];

/// Extracts pixel dimensions and the orientation code, or `None` when no
/// field is present at all.
pub fn extract_dimensions(tags: &TagDictionary) -> Option<Dimensions> {
    let dimensions = Dimensions {
        width: first_uint(tags, &WIDTH_KEYS),
        height: first_uint(tags, &HEIGHT_KEYS),
        orientation: first_uint(tags, &ORIENTATION_KEYS),
    };
    let present = dimensions.width.is_some()
        || dimensions.height.is_some()
        || dimensions.orientation.is_some();
    present.then_some(dimensions)
}

/// Maps an orientation code to its description. Code zero and absence both
/// read as unknown; codes outside the table render numerically.
pub fn describe_orientation(orientation: Option<u64>) -> String {
    let Some(code) = orientation else {
        return "Unknown".to_string();
    };
    let description = match code {
        0 => "Unknown",
        1 => "Normal",
        2 => "Mirrored horizontally",
        3 => "Rotated 180°",
        4 => "Mirrored vertically",
        5 => "Mirrored horizontally and rotated 270°",
        6 => "Rotated 90°",
        7 => "Mirrored horizontally and rotated 90°",
        8 => "Rotated 270°",
        other => return format!("Orientation {other}"),
    };
    description.to_string()
}
