use crate::raw::{TagDictionary, TagValue, first_float, first_uint};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageSettings {
    pub iso: Option<u64>,
    pub aperture: Option<String>,
    pub exposure_time: Option<String>,
    pub focal_length: Option<String>,
    pub flash: Option<String>,
}

const ISO_KEYS: [&str; 3] = ["ISO", "ISOSpeedRatings", "iso"];
const APERTURE_KEYS: [&str; 2] = ["FNumber", "fNumber"];
const EXPOSURE_KEYS: [&str; 2] = ["ExposureTime", "exposureTime"];
const FOCAL_KEYS: [&str; 2] = ["FocalLength", "focalLength"];

/// Extracts exposure settings with photographic unit formatting, or `None`
/// when no field is present at all. Zero readings count as absent; a zero
/// F-number or exposure is sensor noise, not a setting.
pub fn extract_settings(tags: &TagDictionary) -> Option<ImageSettings> {
    let settings = ImageSettings {
        iso: first_uint(tags, &ISO_KEYS).filter(|iso| *iso != 0),
        aperture: first_float(tags, &APERTURE_KEYS).and_then(format_aperture),
        exposure_time: first_float(tags, &EXPOSURE_KEYS).and_then(format_exposure_time),
        focal_length: first_float(tags, &FOCAL_KEYS).and_then(format_focal_length),
        flash: tags
            .get("Flash")
            .or_else(|| tags.get("flash"))
            .and_then(describe_flash),
    };
    let present = settings.iso.is_some()
        || settings.aperture.is_some()
        || settings.exposure_time.is_some()
        || settings.focal_length.is_some()
        || settings.flash.is_some();
    present.then_some(settings)
}

fn format_aperture(f_number: f64) -> Option<String> {
    (f_number != 0.0).then(|| format!("f/{f_number:.1}"))
}

/// Exposures of a second or more print as plain seconds; faster ones use
/// the photographic reciprocal form.
fn format_exposure_time(seconds: f64) -> Option<String> {
    if seconds == 0.0 {
        return None;
    }
    if seconds >= 1.0 {
        Some(format!("{seconds}s"))
    } else {
        Some(format!("1/{}s", (1.0 / seconds).round() as i64))
    }
}

fn format_focal_length(millimeters: f64) -> Option<String> {
    (millimeters != 0.0).then(|| format!("{}mm", millimeters.round() as i64))
}

/// Maps the flash tag to its description: booleans directly, known codes
/// through the fixed table, anything else as `Flash value: <code>`.
fn describe_flash(value: &TagValue) -> Option<String> {
    if let TagValue::Boolean(fired) = value {
        let description = if *fired { "Flash Fired" } else { "No Flash" };
        return Some(description.to_string());
    }

    let code = value.as_uint()?;
    let description = match code {
        0 => "No Flash",
        1 => "Flash Fired",
        5 => "Flash Fired, Return not detected",
        7 => "Flash Fired, Return detected",
        8 => "On, Flash did not fire",
        9 => "Flash Fired, Compulsory mode",
        16 => "Off, Flash did not fire",
        24 => "Auto, Flash did not fire",
        25 => "Auto, Flash fired",
        other => return Some(format!("Flash value: {other}")),
    };
    Some(description.to_string())
}
