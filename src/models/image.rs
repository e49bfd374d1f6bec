use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Placeholder {
    Blur,
    Empty,
}

/// Hand-authored display settings for one image of the mapping table.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    pub path: &'static str,
    pub alt: &'static str,
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<Placeholder>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    #[serde(alias = "jpg")]
    Jpeg,
    Png,
    Webp,
    Svg,
    Gif,
}

impl ImageType {
    /// Maps a file extension (without the dot) to its type. `jpg` and `jpeg`
    /// share the `Jpeg` type.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(ImageType::Jpeg),
            "png" => Some(ImageType::Png),
            "webp" => Some(ImageType::Webp),
            "svg" => Some(ImageType::Svg),
            "gif" => Some(ImageType::Gif),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageType::Jpeg => "jpeg",
            ImageType::Png => "png",
            ImageType::Webp => "webp",
            ImageType::Svg => "svg",
            ImageType::Gif => "gif",
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown image type '{0}'")]
pub struct UnknownImageType(pub String);

impl FromStr for ImageType {
    type Err = UnknownImageType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImageType::from_extension(s.trim_start_matches('.'))
            .ok_or_else(|| UnknownImageType(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageInfo {
    pub name: String,
    pub path: String,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(rename = "type")]
    pub image_type: ImageType,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FolderInfo {
    pub name: String,
    pub path: String,
    pub image_count: usize,
    pub total_size: u64,
    pub images: Arc<Vec<ImageInfo>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectionInfo {
    pub name: String,
    pub image_count: usize,
    pub description: String,
    pub images: Vec<ImageConfig>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ImageMetadata {
    pub alt: String,
    pub title: String,
}

// Response envelopes for /api/images

#[derive(Debug, Serialize)]
pub struct FoldersResponse {
    pub folders: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct StatisticsResponse {
    pub statistics: BTreeMap<String, Arc<FolderInfo>>,
}

#[derive(Debug, Serialize)]
pub struct ImagesResponse {
    pub images: Vec<ImageInfo>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderInfoResponse {
    pub folder_info: Arc<FolderInfo>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePathResponse {
    pub image_path: String,
}

#[derive(Debug, Serialize)]
pub struct MappingResponse {
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct SectionsResponse {
    pub sections: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct SectionResponse {
    pub section: SectionInfo,
}

#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}
