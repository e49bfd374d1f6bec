pub mod client;
pub mod render;
pub mod service;
pub mod store;

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::models::ImageType;

pub use client::MappingImageService;
pub use render::{ImageRenderer, RenderError, RenderFormat, RenderParams, SizePreset};
pub use service::ImageService;
pub use store::{FileEntry, FsImageStore, ImageStore};

lazy_static! {
    static ref IMAGE_FILE: Regex = Regex::new(r"(?i)\.(jpg|jpeg|png|webp|svg|gif)$").unwrap();
}

/// Type of a file the allow-list accepts, taken from the matched suffix.
/// A bare `.jpg` counts too, even though it has no extension as a path.
pub fn image_type_of(name: &str) -> Option<ImageType> {
    let captures = IMAGE_FILE.captures(name)?;
    ImageType::from_extension(captures.get(1)?.as_str())
}

/// How one image is picked out of a folder or section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSelector {
    ByIndex(usize),
    ByKeyword(String),
}

impl ImageSelector {
    /// Tagged form for cache keys, so `ByIndex(4)` and `ByKeyword("4")`
    /// never collide.
    pub fn cache_key(&self) -> String {
        match self {
            ImageSelector::ByIndex(index) => format!("i:{}", index),
            ImageSelector::ByKeyword(keyword) => format!("k:{}", keyword),
        }
    }
}

impl fmt::Display for ImageSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSelector::ByIndex(index) => write!(f, "{}", index),
            ImageSelector::ByKeyword(keyword) => f.write_str(keyword),
        }
    }
}

impl From<usize> for ImageSelector {
    fn from(index: usize) -> Self {
        ImageSelector::ByIndex(index)
    }
}

impl From<&str> for ImageSelector {
    fn from(keyword: &str) -> Self {
        ImageSelector::ByKeyword(keyword.to_string())
    }
}

/// Why a lookup fell back to the placeholder image.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFound {
    #[error("No images found in folder \"{0}\"")]
    EmptyFolder(String),

    #[error("Section \"{0}\" not found in image mapping")]
    SectionMissing(String),

    #[error("No image matching \"{key}\" in section \"{section}\"")]
    KeyMissing { section: String, key: String },

    #[error("Index {index} out of range for section \"{section}\" ({len} images)")]
    IndexOutOfRange {
        section: String,
        index: usize,
        len: usize,
    },
}
