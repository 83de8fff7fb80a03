use image_inspector::ImageInspector;
use std::env;
use std::path::Path;

/// Inspect a single image file and print the normalized record as JSON.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(path) = args.get(1) else {
        eprintln!("usage: inspect_file <image>");
        return Ok(());
    };

    let mut inspector = ImageInspector::builder().build()?;
    let record = inspector.inspect(Path::new(path))?;
    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}
