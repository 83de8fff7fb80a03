use crate::raw::{TagDictionary, TagValue};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::OnceLock;

static RE_COLON_DATE: OnceLock<Regex> = OnceLock::new();

/// Capture-time tags in priority order; the first present, non-empty one is
/// the only one considered.
const TIMESTAMP_KEYS: [&str; 4] = ["DateTimeOriginal", "DateTime", "CreateDate", "ModifyDate"];

const DATE_TIME_DISPLAY: &str = "%-d %B %Y %H:%M:%S";
const DATE_DISPLAY: &str = "%-d %B %Y";

/// Renders the capture timestamp from the first usable candidate tag.
///
/// Standard date strings render in a long human-readable form. Strings in
/// the colon-separated EXIF convention (`YYYY:MM:DD HH:MM:SS`) are
/// reformatted to `DD/MM/YYYY HH:MM:SS` by hand, since colon-separated date
/// components are not generally parseable. Anything else yields `None`, as
/// does a chosen candidate that is not text; there is no fall-through to
/// later candidates once one is chosen.
pub fn format_capture_time(tags: &TagDictionary) -> Option<String> {
    let candidate = TIMESTAMP_KEYS.iter().find_map(|key| {
        let value = tags.get(*key)?;
        match value {
            TagValue::Text(text) if text.is_empty() => None,
            present => Some(present),
        }
    })?;
    let text = candidate.as_text()?;
    format_standard(text).or_else(|| format_exif_colon(text))
}

/// Parses the dash/ISO date forms and renders the long display form.
/// Colon-separated dates are deliberately not in this list; they belong to
/// [`format_exif_colon`].
fn format_standard(text: &str) -> Option<String> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.format(DATE_TIME_DISPLAY).to_string());
    }

    let formats = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
    for format in formats {
        if let Ok(instant) = NaiveDateTime::parse_from_str(text, format) {
            return Some(instant.format(DATE_TIME_DISPLAY).to_string());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .map(|day| day.format(DATE_DISPLAY).to_string())
}

/// Reorders `YYYY:MM:DD` to `DD/MM/YYYY`, carrying any time part over
/// verbatim.
fn format_exif_colon(text: &str) -> Option<String> {
    let re = RE_COLON_DATE
        .get_or_init(|| Regex::new(r"^(\d{4}):(\d{2}):(\d{2})(?: (.+))?$").unwrap());
    let caps = re.captures(text)?;
    let year = caps.get(1)?.as_str();
    let month = caps.get(2)?.as_str();
    let day = caps.get(3)?.as_str();

    Some(match caps.get(4) {
        Some(time) => format!("{day}/{month}/{year} {}", time.as_str()),
        None => format!("{day}/{month}/{year}"),
    })
}
