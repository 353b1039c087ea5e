//! Static size tables for Android and iOS launcher icons.
//!
//! The two platforms key their tables differently: Android entries name a
//! density bucket directory and the filename inside it is always
//! `ic_launcher.png`, while iOS entries name the output file directly.
//! The shapes are kept as two distinct types on purpose.

/// Filename written inside every Android mipmap bucket.
pub const ANDROID_ICON_FILENAME: &str = "ic_launcher.png";

/// One Android density bucket and its icon size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MipmapBucket {
    /// Resource directory name, e.g. `mipmap-xhdpi`.
    pub dir: &'static str,
    pub size: u32,
}

/// One slot in the iOS app icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppIconSlot {
    /// Literal output filename, e.g. `Icon-App-60x60@2x.png`.
    pub file_name: &'static str,
    pub size: u32,
}

/// Android launcher icon sizes, mdpi through xxxhdpi.
pub const ANDROID_MIPMAPS: [MipmapBucket; 5] = [
    MipmapBucket { dir: "mipmap-mdpi", size: 48 },
    MipmapBucket { dir: "mipmap-hdpi", size: 72 },
    MipmapBucket { dir: "mipmap-xhdpi", size: 96 },
    MipmapBucket { dir: "mipmap-xxhdpi", size: 144 },
    MipmapBucket { dir: "mipmap-xxxhdpi", size: 192 },
];

/// iOS app icon set, 20px notification icon through 1024px marketing icon.
pub const IOS_APP_ICONS: [AppIconSlot; 15] = [
    AppIconSlot { file_name: "Icon-App-20x20@1x.png", size: 20 },
    AppIconSlot { file_name: "Icon-App-20x20@2x.png", size: 40 },
    AppIconSlot { file_name: "Icon-App-20x20@3x.png", size: 60 },
    AppIconSlot { file_name: "Icon-App-29x29@1x.png", size: 29 },
    AppIconSlot { file_name: "Icon-App-29x29@2x.png", size: 58 },
    AppIconSlot { file_name: "Icon-App-29x29@3x.png", size: 87 },
    AppIconSlot { file_name: "Icon-App-40x40@1x.png", size: 40 },
    AppIconSlot { file_name: "Icon-App-40x40@2x.png", size: 80 },
    AppIconSlot { file_name: "Icon-App-40x40@3x.png", size: 120 },
    AppIconSlot { file_name: "Icon-App-60x60@2x.png", size: 120 },
    AppIconSlot { file_name: "Icon-App-60x60@3x.png", size: 180 },
    AppIconSlot { file_name: "Icon-App-76x76@1x.png", size: 76 },
    AppIconSlot { file_name: "Icon-App-76x76@2x.png", size: 152 },
    AppIconSlot { file_name: "Icon-App-83.5x83.5@2x.png", size: 167 },
    AppIconSlot { file_name: "Icon-App-1024x1024@1x.png", size: 1024 },
];
