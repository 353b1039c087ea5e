//! Combined Android + iOS icon generator.
//!
//! Reads `app-icon.png` from the working directory and writes the full
//! launcher icon set for both platforms: 5 Android mipmap buckets and the
//! 15 slots of the iOS `AppIcon.appiconset`.

use std::path::Path;

use tracing_subscriber::EnvFilter;

use icon_batch::{generate_android, generate_ios, load_source};

/// Source image, expected next to the invocation directory.
const SOURCE_IMAGE: &str = "app-icon.png";

/// Android resource root in a Flutter project layout.
const ANDROID_RES_ROOT: &str = "android/app/src/main/res";

/// iOS app icon set directory in a Flutter project layout.
const IOS_ICONSET_ROOT: &str = "ios/Runner/Assets.xcassets/AppIcon.appiconset";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!(source = SOURCE_IMAGE, "Generating Android and iOS icons");

    let img = load_source(Path::new(SOURCE_IMAGE))?;
    let android = generate_android(&img, Path::new(ANDROID_RES_ROOT))?;
    let ios = generate_ios(&img, Path::new(IOS_ICONSET_ROOT))?;

    tracing::info!(written = android + ios, "All icons generated");
    Ok(())
}
