use crate::raw::{TagDictionary, TagValue, first_float};
use serde::{Deserialize, Serialize};

/// A resolved coordinate pair in decimal degrees. Values pass through the
/// resolution math unclamped; range checks belong to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Resolves a coordinate pair from the tag dictionary, or `None` if no
/// usable pair exists.
///
/// Sources, in priority order:
/// 1. Pre-resolved decimal `latitude`/`longitude` fields.
/// 2. `GPSLatitude`/`GPSLongitude` as plain numbers. These are already
///    signed decimals, so the hemisphere references are not applied.
/// 3. `GPSLatitude`/`GPSLongitude` as degrees/minutes/seconds data plus the
///    `GPSLatitudeRef`/`GPSLongitudeRef` hemisphere letters.
pub fn resolve_location(tags: &TagDictionary) -> Option<GeoCoordinate> {
    if let (Some(latitude), Some(longitude)) = (
        tags.get("latitude").and_then(TagValue::as_float),
        tags.get("longitude").and_then(TagValue::as_float),
    ) {
        return Some(GeoCoordinate { latitude, longitude });
    }

    if let (Some(latitude), Some(longitude)) = (
        decimal_degrees(tags, "GPSLatitude"),
        decimal_degrees(tags, "GPSLongitude"),
    ) {
        return Some(GeoCoordinate { latitude, longitude });
    }

    // A coordinate pair is atomic: a lone axis resolves to nothing.
    let (Some(latitude), Some(longitude)) = (
        tags.get("GPSLatitude")
            .and_then(|value| dms_to_decimal(value, hemisphere(tags, "GPSLatitudeRef"))),
        tags.get("GPSLongitude")
            .and_then(|value| dms_to_decimal(value, hemisphere(tags, "GPSLongitudeRef"))),
    ) else {
        return None;
    };
    Some(GeoCoordinate { latitude, longitude })
}

/// Renders the altitude tag as `"<meters> above|below sea level"`.
///
/// The altitude reference marks above sea level with a zero; anything else,
/// including a missing reference, reads as below.
pub fn resolve_altitude(tags: &TagDictionary) -> Option<String> {
    let altitude = first_float(tags, &["GPSAltitude", "altitude"])?;
    let reference = tags
        .get("GPSAltitudeRef")
        .or_else(|| tags.get("altitudeRef"));
    let above = match reference {
        Some(TagValue::Number(value)) => *value == 0.0,
        Some(TagValue::Text(text)) => text == "0",
        _ => false,
    };
    let direction = if above { "above" } else { "below" };
    Some(format!("{altitude:.1}m {direction} sea level"))
}

fn decimal_degrees(tags: &TagDictionary, key: &str) -> Option<f64> {
    match tags.get(key) {
        Some(TagValue::Number(value)) if value.is_finite() => Some(*value),
        _ => None,
    }
}

fn hemisphere<'a>(tags: &'a TagDictionary, key: &str) -> Option<&'a str> {
    tags.get(key).and_then(TagValue::as_text)
}

/// Converts a degrees/minutes/seconds value to signed decimal degrees.
/// A rational tag reads as a degenerate triple with the same value for all
/// three components.
fn dms_to_decimal(value: &TagValue, reference: Option<&str>) -> Option<f64> {
    let [degrees, minutes, seconds] = dms_triple(value)?;
    let decimal = degrees + minutes / 60.0 + seconds / 3600.0;
    match reference {
        Some("S" | "W") => Some(-decimal),
        _ => Some(decimal),
    }
}

fn dms_triple(value: &TagValue) -> Option<[f64; 3]> {
    match value {
        TagValue::Numbers(parts) if parts.len() >= 3 => Some([parts[0], parts[1], parts[2]]),
        TagValue::Fraction(fraction) => {
            let resolved = fraction.to_float()?;
            Some([resolved, resolved, resolved])
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::dictionary_from_json;
    use serde_json::json;

    fn tags(raw: serde_json::Value) -> TagDictionary {
        dictionary_from_json(&raw).unwrap()
    }

    #[test]
    fn test_direct_decimal_fields_pass_through_unchanged() {
        let tags = tags(json!({
            "latitude": 40.8208875277778,
            "longitude": 14.4228166666667
        }));

        let location = resolve_location(&tags).unwrap();
        assert_eq!(location.latitude, 40.8208875277778);
        assert_eq!(location.longitude, 14.4228166666667);
    }

    #[test]
    fn test_direct_decimals_are_preferred_over_dms_data() {
        let tags = tags(json!({
            "latitude": 1.5,
            "longitude": 2.5,
            "GPSLatitude": [48.0, 51.0, 29.6],
            "GPSLatitudeRef": "N",
            "GPSLongitude": [2.0, 17.0, 40.2],
            "GPSLongitudeRef": "E"
        }));

        let location = resolve_location(&tags).unwrap();
        assert_eq!(location.latitude, 1.5);
        assert_eq!(location.longitude, 2.5);
    }

    #[test]
    fn test_plain_number_gps_tags_skip_hemisphere_negation() {
        // Numeric-mode extraction emits signed decimals; the refs must not
        // flip them a second time.
        let tags = tags(json!({
            "GPSLatitude": 40.7128,
            "GPSLongitude": -74.0060,
            "GPSLatitudeRef": "N",
            "GPSLongitudeRef": "W"
        }));

        let location = resolve_location(&tags).unwrap();
        assert_eq!(location.latitude, 40.7128);
        assert_eq!(location.longitude, -74.0060);
    }

    #[test]
    fn test_dms_triples_convert_to_decimal_degrees() {
        let tags = tags(json!({
            "GPSLatitude": [48.0, 51.0, 29.6],
            "GPSLatitudeRef": "N",
            "GPSLongitude": [2.0, 17.0, 40.2],
            "GPSLongitudeRef": "E"
        }));

        let location = resolve_location(&tags).unwrap();
        assert!((location.latitude - 48.858222).abs() < 1e-6);
        assert!((location.longitude - 2.294500).abs() < 1e-6);
    }

    #[test]
    fn test_south_and_west_references_negate() {
        let tags = tags(json!({
            "GPSLatitude": [33.0, 52.0, 5.4],
            "GPSLatitudeRef": "S",
            "GPSLongitude": [151.0, 12.0, 35.9],
            "GPSLongitudeRef": "E"
        }));

        let location = resolve_location(&tags).unwrap();
        assert!((location.latitude - -33.868167).abs() < 1e-6);
        assert!((location.longitude - 151.209972).abs() < 1e-6);
    }

    #[test]
    fn test_missing_reference_leaves_value_positive() {
        let tags = tags(json!({
            "GPSLatitude": [48.0, 51.0, 29.6],
            "GPSLongitude": [2.0, 17.0, 40.2]
        }));

        let location = resolve_location(&tags).unwrap();
        assert!(location.latitude > 0.0);
        assert!(location.longitude > 0.0);
    }

    #[test]
    fn test_rational_tag_resolves_as_degenerate_triple() {
        let tags = tags(json!({
            "GPSLatitude": {"numerator": 485, "denominator": 10},
            "GPSLongitude": {"numerator": 40, "denominator": 10}
        }));

        let location = resolve_location(&tags).unwrap();
        // 48.5 spread over degrees, minutes, and seconds alike.
        let expected = 48.5 + 48.5 / 60.0 + 48.5 / 3600.0;
        assert!((location.latitude - expected).abs() < 1e-9);
    }

    #[test]
    fn test_lone_axis_resolves_to_none() {
        let tags = tags(json!({
            "GPSLatitude": [48.0, 51.0, 29.6],
            "GPSLatitudeRef": "N"
        }));

        assert!(resolve_location(&tags).is_none());
    }

    #[test]
    fn test_malformed_triples_resolve_to_none() {
        // Latitude triple is short, longitude is fine.
        let short = tags(json!({
            "GPSLatitude": [48.0, 51.0],
            "GPSLongitude": [2.0, 17.0, 40.2]
        }));
        assert!(resolve_location(&short).is_none());

        let non_numeric = tags(json!({
            "GPSLatitude": ["48", "51", "29.6"],
            "GPSLongitude": [2.0, 17.0, 40.2]
        }));
        assert!(resolve_location(&non_numeric).is_none());

        assert!(resolve_location(&tags(json!({}))).is_none());
    }

    #[test]
    fn test_altitude_renders_with_reference_direction() {
        let above = tags(json!({"GPSAltitude": 35.4, "GPSAltitudeRef": 0}));
        assert_eq!(
            resolve_altitude(&above).as_deref(),
            Some("35.4m above sea level")
        );

        let above_text = tags(json!({"GPSAltitude": 35.4, "GPSAltitudeRef": "0"}));
        assert_eq!(
            resolve_altitude(&above_text).as_deref(),
            Some("35.4m above sea level")
        );

        let below = tags(json!({"GPSAltitude": 12.0, "GPSAltitudeRef": 1}));
        assert_eq!(
            resolve_altitude(&below).as_deref(),
            Some("12.0m below sea level")
        );

        // No reference tag reads as below sea level.
        let unreferenced = tags(json!({"GPSAltitude": 10.0}));
        assert_eq!(
            resolve_altitude(&unreferenced).as_deref(),
            Some("10.0m below sea level")
        );
    }

    #[test]
    fn test_altitude_accepts_rational_values() {
        let tags = tags(json!({
            "GPSAltitude": {"numerator": 354, "denominator": 10},
            "GPSAltitudeRef": 0
        }));
        assert_eq!(
            resolve_altitude(&tags).as_deref(),
            Some("35.4m above sea level")
        );
    }

    #[test]
    fn test_altitude_absent_without_the_tag() {
        assert!(resolve_altitude(&tags(json!({}))).is_none());
        assert!(resolve_altitude(&tags(json!({"GPSAltitudeRef": 0}))).is_none());
    }
}
