use crate::raw::{TagDictionary, first_text};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CameraInfo {
    pub make: Option<String>,
    pub model: Option<String>,
    pub software: Option<String>,
    pub lens: Option<String>,
}

const MAKE_KEYS: [&str; 2] = ["Make", "make"];
const MODEL_KEYS: [&str; 2] = ["Model", "model"];
const SOFTWARE_KEYS: [&str; 2] = ["Software", "software"];
const LENS_KEYS: [&str; 3] = ["LensModel", "Lens", "lens"];

/// Extracts camera body and lens identification, or `None` when no field
/// is present at all.
pub fn extract_camera(tags: &TagDictionary) -> Option<CameraInfo> {
    let camera = CameraInfo {
        make: first_text(tags, &MAKE_KEYS).map(str::to_owned),
        model: first_text(tags, &MODEL_KEYS).map(str::to_owned),
        software: first_text(tags, &SOFTWARE_KEYS).map(str::to_owned),
        lens: first_text(tags, &LENS_KEYS).map(str::to_owned),
    };
    let present = camera.make.is_some()
        || camera.model.is_some()
        || camera.software.is_some()
        || camera.lens.is_some();
    present.then_some(camera)
}
