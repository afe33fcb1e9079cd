//! Static icon manifest
//!
//! The manifest is a fixed, ordered table of every icon variant the tool
//! produces: one `(platform, relative path, pixel size)` record per output
//! file. It is plain data, never mutated at runtime; path templates are
//! substituted by the resolver, not in place.

use std::fmt;
use std::str::FromStr;

use crate::error::{IconError, IconResult};

/// Placeholder token in Android path templates, replaced with the
/// user-supplied icon base name before resolution.
pub const ICON_TOKEN: &str = "$$ICON$$";

/// Target mobile platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    /// All known platforms, in manifest order
    pub const ALL: [Platform; 2] = [Platform::Ios, Platform::Android];

    /// Directory name for this platform under the output root
    pub fn dir_name(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }

    /// Parse a user-supplied target list, rejecting unknown names and
    /// dropping duplicates while preserving first-seen order.
    pub fn parse_list(names: &[String]) -> IconResult<Vec<Platform>> {
        let mut platforms = Vec::new();
        for name in names {
            let platform = name.parse::<Platform>()?;
            if !platforms.contains(&platform) {
                platforms.push(platform);
            }
        }
        Ok(platforms)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for Platform {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            _ => Err(IconError::InvalidTarget {
                name: s.to_string(),
            }),
        }
    }
}

/// One icon variant to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEntry {
    pub platform: Platform,
    /// Path relative to the platform directory. Uses `/` as separator and
    /// may contain [`ICON_TOKEN`].
    pub relative_path: &'static str,
    /// Output width and height in pixels
    pub size: u32,
}

const fn ios(relative_path: &'static str, size: u32) -> ManifestEntry {
    ManifestEntry {
        platform: Platform::Ios,
        relative_path,
        size,
    }
}

const fn android(relative_path: &'static str, size: u32) -> ManifestEntry {
    ManifestEntry {
        platform: Platform::Android,
        relative_path,
        size,
    }
}

/// Every icon variant, partitioned by platform
pub static MANIFEST: &[ManifestEntry] = &[
    ios("icon-60@3x.png", 180),
    ios("icon-60.png", 60),
    ios("icon-60@2x.png", 120),
    ios("icon-76.png", 76),
    ios("icon-76@2x.png", 152),
    ios("icon-40.png", 40),
    ios("icon-40@2x.png", 80),
    ios("icon.png", 57),
    ios("icon@2x.png", 114),
    ios("icon-72.png", 72),
    ios("icon-72@2x.png", 144),
    ios("icon-small.png", 29),
    ios("icon-small@2x.png", 58),
    ios("icon-50.png", 50),
    ios("icon-50@2x.png", 100),
    ios("icon-83.5@2x.png", 167),
    android("mipmap-ldpi/$$ICON$$.png", 36),
    android("mipmap-mdpi/$$ICON$$.png", 48),
    android("mipmap-hdpi/$$ICON$$.png", 72),
    android("mipmap-xhdpi/$$ICON$$.png", 96),
    android("mipmap-xxhdpi/$$ICON$$.png", 144),
    android("mipmap-xxxhdpi/$$ICON$$.png", 192),
];

/// Manifest entries for the selected platforms, preserving table order
pub fn entries_for(platforms: &[Platform]) -> Vec<&'static ManifestEntry> {
    MANIFEST
        .iter()
        .filter(|entry| platforms.contains(&entry.platform))
        .collect()
}
