use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// File extensions the folder utilities treat as images.
const IMAGE_EXTENSIONS: [&str; 8] = ["jpg", "jpeg", "png", "gif", "webp", "tiff", "heic", "bmp"];

/// Checks if a directory entry is hidden (starts with '.').
fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| extension.eq_ignore_ascii_case(known))
        })
}

/// Recursively lists image files under `dir`, filtered by extension.
/// I/O errors encountered during traversal are propagated.
pub fn list_image_files(dir: &Path, include_hidden: bool) -> Result<Vec<PathBuf>, walkdir::Error> {
    WalkDir::new(dir)
        .into_iter()
        .filter_entry(|entry| include_hidden || !is_hidden(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => {
                let path = entry.path();
                (entry.file_type().is_file() && has_image_extension(path))
                    .then(|| Ok(path.to_path_buf()))
            }
            Err(error) => Some(Err(error)),
        })
        .collect()
}

/// Renders a byte count in a compact human-readable unit, scaled forms with
/// one decimal.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 B".to_string();
    }
    let exponent = ((bytes as f64).log(1024.0).floor() as usize).min(UNITS.len() - 1);
    let scaled = bytes as f64 / 1024f64.powi(exponent as i32);
    if exponent == 0 {
        format!("{scaled} {}", UNITS[exponent])
    } else {
        format!("{scaled:.1} {}", UNITS[exponent])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_format_file_size_units() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2_621_440), "2.5 MB");
        assert_eq!(format_file_size(5_368_709_120), "5.0 GB");
    }

    #[test]
    fn test_format_file_size_clamps_at_gigabytes() {
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024 * 1024), "3072.0 GB");
    }

    #[test]
    fn test_list_image_files_filters_by_extension() {
        let dir = std::env::temp_dir().join("image_inspector_list_test");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("photo.jpg"), b"a").unwrap();
        fs::write(dir.join("scan.PNG"), b"b").unwrap();
        fs::write(dir.join("notes.txt"), b"c").unwrap();

        let mut files = list_image_files(&dir, false).unwrap();
        files.sort();

        let names: Vec<_> = files
            .iter()
            .filter_map(|path| path.file_name().and_then(|name| name.to_str()))
            .collect();
        assert_eq!(names, vec!["photo.jpg", "scan.PNG"]);

        fs::remove_dir_all(&dir).ok();
    }
}
