use std::io::Cursor;
use std::str::FromStr;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ImageService;
use crate::cache::MemoCache;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Image not readable: {0}")]
    Source(#[from] std::io::Error),

    #[error("Image decoding failed: {0}")]
    Decode(String),

    #[error("Image encoding failed: {0}")]
    Encode(String),

    #[error("Unsupported parameter: {0}")]
    InvalidParameter(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    Webp,
    Jpg,
    Png,
    Gif,
}

impl RenderFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            RenderFormat::Webp => "image/webp",
            RenderFormat::Jpg => "image/jpeg",
            RenderFormat::Png => "image/png",
            RenderFormat::Gif => "image/gif",
        }
    }
}

impl FromStr for RenderFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "webp" => Ok(RenderFormat::Webp),
            "jpg" | "jpeg" => Ok(RenderFormat::Jpg),
            "png" => Ok(RenderFormat::Png),
            "gif" => Ok(RenderFormat::Gif),
            _ => Err(RenderError::InvalidParameter(format!("format '{}'", s))),
        }
    }
}

/// Named responsive widths.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SizePreset {
    Thumbnail,
    Small,
    Medium,
    Large,
    Xlarge,
}

const LADDER: [SizePreset; 5] = [
    SizePreset::Thumbnail,
    SizePreset::Small,
    SizePreset::Medium,
    SizePreset::Large,
    SizePreset::Xlarge,
];

impl SizePreset {
    /// Smallest preset at least `width` wide, `Xlarge` past the top.
    pub fn covering(width: u32) -> SizePreset {
        LADDER
            .into_iter()
            .find(|preset| preset.width() >= width)
            .unwrap_or(SizePreset::Xlarge)
    }

    pub fn width(&self) -> u32 {
        match self {
            SizePreset::Thumbnail => 150,
            SizePreset::Small => 300,
            SizePreset::Medium => 600,
            SizePreset::Large => 1200,
            SizePreset::Xlarge => 1920,
        }
    }
}

impl FromStr for SizePreset {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "thumbnail" => Ok(SizePreset::Thumbnail),
            "small" => Ok(SizePreset::Small),
            "medium" => Ok(SizePreset::Medium),
            "large" => Ok(SizePreset::Large),
            "xlarge" => Ok(SizePreset::Xlarge),
            _ => Err(RenderError::InvalidParameter(format!("size '{}'", s))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderParams {
    pub width: Option<u32>,
    pub size: Option<SizePreset>,
    pub quality: Option<u8>,
    pub format: Option<RenderFormat>,
}

impl RenderParams {
    /// An explicit width wins over a size preset. Widths snap up to the
    /// preset ladder so renditions stay a small fixed set per file.
    pub fn target_width(&self) -> Option<u32> {
        self.width
            .map(SizePreset::covering)
            .or(self.size)
            .map(|preset| preset.width())
    }

    /// Quality rounded to the nearest multiple of 5, within 5..=100.
    pub fn snapped_quality(&self) -> Option<u8> {
        self.quality.map(snap_quality)
    }

    pub fn to_cache_key(&self) -> String {
        let mut parts = Vec::new();

        if let Some(width) = self.target_width() {
            parts.push(format!("w{}", width));
        }
        if let Some(quality) = self.snapped_quality() {
            parts.push(format!("q{}", quality));
        }
        if let Some(format) = self.format {
            parts.push(format!("f{:?}", format).to_lowercase());
        }

        if parts.is_empty() {
            "original".to_string()
        } else {
            parts.join("_")
        }
    }
}

fn snap_quality(quality: u8) -> u8 {
    let quality = quality.min(100);
    ((quality + 2) / 5 * 5).max(5)
}

/// Resizes images from the images root and keeps every rendition in memory,
/// keyed `<public path>|<params>`.
pub struct ImageRenderer {
    default_quality: u8,
    cache: MemoCache<(Vec<u8>, String)>,
}

impl ImageRenderer {
    pub fn new(default_quality: u8) -> Self {
        Self {
            default_quality: default_quality.min(100),
            cache: MemoCache::new(),
        }
    }

    pub fn render(
        &self,
        service: &ImageService,
        public_path: &str,
        params: &RenderParams,
    ) -> Result<(Vec<u8>, String), RenderError> {
        let canonical = service
            .canonical_path(public_path)
            .unwrap_or_else(|| public_path.to_string());
        let cache_key = format!("{}|{}", canonical, params.to_cache_key());
        if let Some(rendition) = self.cache.get(&cache_key) {
            debug!("Rendition found in cache: {}", cache_key);
            return Ok(rendition);
        }

        let source = service.read_image(public_path)?;
        let rendition = render_image(&source, params, self.default_quality)?;
        info!(
            "Rendered {} ({} bytes) with params {}",
            public_path,
            rendition.0.len(),
            params.to_cache_key()
        );

        self.cache.insert(cache_key, rendition.clone());
        Ok(rendition)
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Drops the renditions of every file under `folder`.
    pub fn refresh_folder(&self, service: &ImageService, folder: &str) {
        let dropped = self
            .cache
            .remove_prefixed(&format!("{}/", service.folder_path(folder)));
        debug!("Dropped {} renditions for folder {}", dropped, folder);
    }
}

pub fn render_image(
    data: &[u8],
    params: &RenderParams,
    default_quality: u8,
) -> Result<(Vec<u8>, String), RenderError> {
    let img = image::load_from_memory(data)
        .map_err(|e| RenderError::Decode(e.to_string()))?;

    let img = match params.target_width() {
        Some(width) => shrink_to_width(img, width),
        None => img,
    };

    let format = params.format.unwrap_or(RenderFormat::Jpg);
    let quality = params.snapped_quality().unwrap_or(default_quality).min(100);
    encode_image(img, format, quality)
}

// Never enlarges; height follows the aspect ratio
fn shrink_to_width(img: DynamicImage, width: u32) -> DynamicImage {
    let (current_width, current_height) = img.dimensions();
    if width == 0 || width >= current_width {
        return img;
    }

    let height = ((current_height as f64 * width as f64) / current_width as f64).round().max(1.0) as u32;
    img.resize_exact(width, height, FilterType::Lanczos3)
}

fn encode_image(img: DynamicImage, format: RenderFormat, quality: u8) -> Result<(Vec<u8>, String), RenderError> {
    let mut output = Vec::new();

    match format {
        RenderFormat::Jpg => {
            let rgb = img.to_rgb8();
            let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut output, quality);
            encoder
                .encode(rgb.as_raw(), rgb.width(), rgb.height(), image::ColorType::Rgb8)
                .map_err(|e| RenderError::Encode(format!("JPEG: {}", e)))?;
        }
        RenderFormat::Png => write_as(&img, &mut output, ImageFormat::Png)?,
        RenderFormat::Webp => write_as(&img, &mut output, ImageFormat::WebP)?,
        RenderFormat::Gif => write_as(&img, &mut output, ImageFormat::Gif)?,
    }

    Ok((output, format.content_type().to_string()))
}

fn write_as(img: &DynamicImage, output: &mut Vec<u8>, format: ImageFormat) -> Result<(), RenderError> {
    img.write_to(&mut Cursor::new(output), format)
        .map_err(|e| RenderError::Encode(format!("{:?}: {}", format, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use std::fs;
    use tempfile::TempDir;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(image::RgbImage::new(width, height));
        let mut out = Vec::new();
        img.write_to(&mut Cursor::new(&mut out), ImageFormat::Png).unwrap();
        out
    }

    #[test]
    fn shrinks_keeping_aspect_ratio() {
        let params = RenderParams {
            width: Some(120),
            format: Some(RenderFormat::Png),
            ..Default::default()
        };
        let (data, content_type) = render_image(&png(400, 200), &params, 85).unwrap();
        assert_eq!(content_type, "image/png");
        let out = image::load_from_memory(&data).unwrap();
        assert_eq!(out.dimensions(), (150, 75));
    }

    #[test]
    fn never_enlarges() {
        let params = RenderParams {
            size: Some(SizePreset::Xlarge),
            format: Some(RenderFormat::Png),
            ..Default::default()
        };
        let (data, _) = render_image(&png(40, 30), &params, 85).unwrap();
        let out = image::load_from_memory(&data).unwrap();
        assert_eq!(out.dimensions(), (40, 30));
    }

    #[test]
    fn defaults_to_jpeg() {
        let (data, content_type) = render_image(&png(10, 10), &RenderParams::default(), 85).unwrap();
        assert_eq!(content_type, "image/jpeg");
        assert_eq!(image::guess_format(&data).unwrap(), ImageFormat::Jpeg);
    }

    fn service_over(root: &TempDir) -> ImageService {
        ImageService::from_config(&AppConfig {
            images_root: root.path().to_string_lossy().into_owned(),
            ..AppConfig::default()
        })
    }

    #[test]
    fn refresh_drops_only_that_folders_renditions() {
        let root = TempDir::new().unwrap();
        for folder in ["Grapes", "Vineyards"] {
            fs::create_dir_all(root.path().join(folder)).unwrap();
            fs::write(root.path().join(folder).join("a.png"), png(40, 20)).unwrap();
        }
        let service = service_over(&root);
        let renderer = ImageRenderer::new(85);
        let params = RenderParams {
            format: Some(RenderFormat::Png),
            ..Default::default()
        };

        let (before, _) = renderer.render(&service, "/images/Grapes/a.png", &params).unwrap();
        renderer.render(&service, "/images/Grapes//a.png", &params).unwrap();
        renderer.render(&service, "/images/Vineyards/a.png", &params).unwrap();
        assert_eq!(renderer.cache.len(), 2);

        fs::write(root.path().join("Grapes/a.png"), png(10, 10)).unwrap();
        let (stale, _) = renderer.render(&service, "/images/Grapes/a.png", &params).unwrap();
        assert_eq!(stale, before);

        renderer.refresh_folder(&service, "Grapes");
        assert_eq!(renderer.cache.len(), 1);
        let (fresh, _) = renderer.render(&service, "/images/Grapes/a.png", &params).unwrap();
        assert_eq!(image::load_from_memory(&fresh).unwrap().dimensions(), (10, 10));
    }

    #[test]
    fn nearby_widths_reuse_one_rendition() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("Grapes")).unwrap();
        fs::write(root.path().join("Grapes/a.png"), png(400, 200)).unwrap();
        let service = service_over(&root);
        let renderer = ImageRenderer::new(85);

        for width in 1..=150 {
            let params = RenderParams {
                width: Some(width),
                quality: Some(80 + (width % 3) as u8),
                ..Default::default()
            };
            renderer.render(&service, "/images/Grapes/a.png", &params).unwrap();
        }
        assert_eq!(renderer.cache.len(), 1);
    }

    #[test]
    fn garbage_input_is_a_decode_error() {
        let err = render_image(b"not an image", &RenderParams::default(), 85).unwrap_err();
        assert!(matches!(err, RenderError::Decode(_)));
    }

    #[test]
    fn explicit_width_beats_preset() {
        let params = RenderParams {
            width: Some(320),
            size: Some(SizePreset::Thumbnail),
            quality: Some(70),
            format: Some(RenderFormat::Webp),
        };
        assert_eq!(params.target_width(), Some(600));
        assert_eq!(params.to_cache_key(), "w600_q70_fwebp");
        assert_eq!(RenderParams::default().to_cache_key(), "original");
    }

    #[test]
    fn arbitrary_widths_and_qualities_share_keys() {
        let keys: std::collections::HashSet<String> = (1..=4000u32)
            .flat_map(|width| {
                (0..=255u8).step_by(7).map(move |quality| {
                    RenderParams {
                        width: Some(width),
                        quality: Some(quality),
                        ..Default::default()
                    }
                    .to_cache_key()
                })
            })
            .collect();
        assert!(keys.len() <= 5 * 20, "{} keys", keys.len());

        assert_eq!(SizePreset::covering(1), SizePreset::Thumbnail);
        assert_eq!(SizePreset::covering(301), SizePreset::Medium);
        assert_eq!(SizePreset::covering(5000), SizePreset::Xlarge);
        assert_eq!(snap_quality(0), 5);
        assert_eq!(snap_quality(83), 85);
        assert_eq!(snap_quality(255), 100);
    }

    #[test]
    fn parses_formats_and_presets() {
        assert_eq!("jpeg".parse::<RenderFormat>().unwrap(), RenderFormat::Jpg);
        assert_eq!("medium".parse::<SizePreset>().unwrap().width(), 600);
        assert!("avif".parse::<RenderFormat>().is_err());
        assert!("huge".parse::<SizePreset>().is_err());
    }
}
