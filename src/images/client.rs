use log::warn;
use rand::seq::SliceRandom;

use super::{ImageSelector, NotFound};
use crate::cache::MemoCache;
use crate::mapping::{ImageMapping, IMAGE_MAPPING};
use crate::models::SectionInfo;

/// Image lookups served from the mapping table alone, for contexts without
/// access to the images directory.
pub struct MappingImageService {
    mapping: &'static ImageMapping,
    placeholder: String,
    cache: MemoCache<String>,
}

impl MappingImageService {
    pub fn new(mapping: &'static ImageMapping, placeholder: impl Into<String>) -> Self {
        Self {
            mapping,
            placeholder: placeholder.into(),
            cache: MemoCache::new(),
        }
    }

    /// Index lookups follow the section's authored key order. Keyword lookups
    /// match the stored paths case-insensitively.
    pub fn resolve_image(&self, section: &str, selector: &ImageSelector) -> Result<String, NotFound> {
        let images = self
            .mapping
            .section(section)
            .ok_or_else(|| NotFound::SectionMissing(section.to_string()))?;

        let config = match selector {
            ImageSelector::ByIndex(index) => {
                images
                    .images
                    .get(*index)
                    .map(|(_, config)| config)
                    .ok_or_else(|| NotFound::IndexOutOfRange {
                        section: section.to_string(),
                        index: *index,
                        len: images.len(),
                    })?
            }
            ImageSelector::ByKeyword(keyword) => {
                let keyword = keyword.to_lowercase();
                images
                    .configs()
                    .find(|config| config.path.to_lowercase().contains(&keyword))
                    .ok_or_else(|| NotFound::KeyMissing {
                        section: section.to_string(),
                        key: keyword.clone(),
                    })?
            }
        };

        Ok(config.path.to_string())
    }

    pub fn get_image(&self, section: &str, selector: &ImageSelector) -> String {
        let cache_key = format!("{}|{}", section, selector.cache_key());
        if let Some(path) = self.cache.get(&cache_key) {
            return path;
        }

        match self.resolve_image(section, selector) {
            Ok(path) => {
                self.cache.insert(cache_key, path.clone());
                path
            }
            Err(reason) => {
                warn!("{}, using placeholder", reason);
                self.placeholder.clone()
            }
        }
    }

    /// Every path of a section. An unknown section yields the placeholder
    /// alone so callers always have something to render.
    pub fn get_images_from_folder(&self, section: &str) -> Vec<String> {
        match self.mapping.section(section) {
            Some(images) => images.configs().map(|c| c.path.to_string()).collect(),
            None => {
                warn!("Section \"{}\" not found in image mapping", section);
                vec![self.placeholder.clone()]
            }
        }
    }

    pub fn get_random_image(&self, section: &str) -> String {
        let images = self.get_images_from_folder(section);
        images
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_else(|| self.placeholder.clone())
    }

    pub fn get_section_info(&self, section: &str) -> Option<SectionInfo> {
        let images = self.mapping.section(section)?;

        Some(SectionInfo {
            name: section.to_string(),
            image_count: images.len(),
            description: format!("Images from {} section", section),
            images: images.configs().cloned().collect(),
        })
    }

    pub fn get_all_sections(&self) -> Vec<&'static str> {
        self.mapping.get_available_sections()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn cached_lookups(&self) -> usize {
        self.cache.len()
    }
}

impl Default for MappingImageService {
    fn default() -> Self {
        Self::new(&IMAGE_MAPPING, "/images/placeholder.jpg")
    }
}
