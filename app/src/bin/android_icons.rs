//! Android launcher icon generator.
//!
//! Reads `app-icon-android.png` from the working directory and writes
//! `ic_launcher.png` into every mipmap density bucket under the app's
//! Android resource directory.

use std::path::Path;

use tracing_subscriber::EnvFilter;

use icon_batch::{generate_android, load_source};

/// Source image, expected next to the invocation directory.
const SOURCE_IMAGE: &str = "app-icon-android.png";

/// Android resource root in a Flutter project layout.
const ANDROID_RES_ROOT: &str = "android/app/src/main/res";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!(source = SOURCE_IMAGE, "Generating Android launcher icons");

    let img = load_source(Path::new(SOURCE_IMAGE))?;
    let written = generate_android(&img, Path::new(ANDROID_RES_ROOT))?;

    tracing::info!(written, "All launcher icons generated");
    Ok(())
}
