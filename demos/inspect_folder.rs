use image_inspector::ImageInspector;
use image_inspector::features::dimensions::describe_orientation;
use image_inspector::utils::{format_file_size, list_image_files};
use log::debug;
use std::env;
use std::path::Path;

/// Sweep a folder and print a one-line summary per image.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(dir) = args.get(1) else {
        eprintln!("usage: inspect_folder <directory>");
        return Ok(());
    };

    let mut inspector = ImageInspector::builder().build()?;
    for file in list_image_files(Path::new(dir), false)? {
        debug!("inspecting {}", file.display());
        let record = inspector.inspect(&file)?;

        let camera = record
            .camera
            .as_ref()
            .and_then(|camera| camera.model.clone())
            .unwrap_or_else(|| "unknown camera".to_string());
        let taken = record
            .date_time
            .clone()
            .unwrap_or_else(|| "unknown date".to_string());
        let place = record
            .location
            .map(|location| format!("{:.5}, {:.5}", location.latitude, location.longitude))
            .unwrap_or_else(|| "no location".to_string());
        let orientation =
            describe_orientation(record.dimensions.and_then(|dimensions| dimensions.orientation));

        println!(
            "{} ({}): {camera}, {taken}, {place}, {orientation}",
            record.name,
            format_file_size(record.size_bytes),
        );
    }

    Ok(())
}
