//! Launcher icon batch generation for Android and iOS.
//!
//! Decodes one source image, then resizes and writes it as PNG for every
//! entry in a platform size table: Android mipmap density buckets and the
//! iOS app icon set.

pub mod generate;
pub mod resize;
pub mod tables;

// Re-exports for convenience
pub use generate::{GenerateError, generate_android, generate_ios, load_source};
pub use resize::resize_to_square;
pub use tables::{ANDROID_ICON_FILENAME, ANDROID_MIPMAPS, AppIconSlot, IOS_APP_ICONS, MipmapBucket};
