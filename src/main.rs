mod error;
mod icon_padder;
mod padding_config;

use std::path::Path;
use std::process;

use error::PadError;
use padding_config::PaddingConfig;

fn main() -> Result<(), PadError> {
    env_logger::init(); // Initialize logger

    let (input_icon, output_icon) = padding_config::asset_paths(Path::new(env!("CARGO_MANIFEST_DIR")));
    let config = PaddingConfig::default();

    let report = match icon_padder::pad(&input_icon, &output_icon, &config) {
        Ok(report) => report,
        Err(e @ PadError::MissingInput(_)) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        Err(e) => return Err(e),
    };

    println!("{}", report);
    println!("\nNext steps:");
    println!("1. Preview the padded icon: {}", padding_config::OUTPUT_ICON);
    println!("2. If satisfied, update app.json to use the padded version");
    println!("3. Or adjust DEFAULT_LOGO_PERCENTAGE (or DEFAULT_ALLOW_UPSCALE for small icons) in src/padding_config.rs and run again");

    Ok(())
}
