//! Static `(section, key)` lookup of hand-authored image settings.
//!
//! The table is compiled in and never mutated. Lookups are pure: a missing
//! section or key is logged and reported as `None`.

mod table;

use std::fmt::Display;

use log::warn;

use crate::models::ImageConfig;

pub use table::IMAGE_MAPPING;

/// One named bucket of the mapping table. Keys keep their authored order.
#[derive(Debug)]
pub struct Section {
    pub name: &'static str,
    pub images: &'static [(&'static str, ImageConfig)],
}

impl Section {
    pub fn get(&self, key: &str) -> Option<&'static ImageConfig> {
        self.images
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, config)| config)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.images.iter().map(|(k, _)| *k)
    }

    pub fn configs(&self) -> impl Iterator<Item = &'static ImageConfig> + '_ {
        self.images.iter().map(|(_, config)| config)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[derive(Debug)]
pub struct ImageMapping {
    sections: &'static [Section],
}

impl ImageMapping {
    pub const fn new(sections: &'static [Section]) -> Self {
        Self { sections }
    }

    pub fn section(&self, name: &str) -> Option<&'static Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Looks up one image. `key` may be an ordinal (`0`) or a named key
    /// (`"valdo"`); both are matched against the key's textual form.
    pub fn get_image_config(&self, section: &str, key: impl Display) -> Option<&'static ImageConfig> {
        let Some(images) = self.section(section) else {
            warn!("Section \"{}\" not found in image mapping", section);
            return None;
        };

        let key = key.to_string();
        let config = images.get(&key);
        if config.is_none() {
            warn!("Key \"{}\" not found in section \"{}\"", key, section);
        }
        config
    }

    pub fn get_section_images(&self, section: &str) -> Option<&'static [(&'static str, ImageConfig)]> {
        self.section(section).map(|s| s.images)
    }

    pub fn get_image_path(&self, section: &str, key: impl Display) -> Option<&'static str> {
        self.get_image_config(section, key).map(|c| c.path)
    }

    pub fn get_image_alt(&self, section: &str, key: impl Display) -> Option<&'static str> {
        self.get_image_config(section, key).map(|c| c.alt)
    }

    pub fn has_image(&self, section: &str, key: impl Display) -> bool {
        self.get_image_config(section, key).is_some()
    }

    pub fn get_available_sections(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.name).collect()
    }

    pub fn get_section_keys(&self, section: &str) -> Vec<&'static str> {
        self.section(section)
            .map(|s| s.keys().collect())
            .unwrap_or_default()
    }
}

pub fn get_image_config(section: &str, key: impl Display) -> Option<&'static ImageConfig> {
    IMAGE_MAPPING.get_image_config(section, key)
}

pub fn get_section_images(section: &str) -> Option<&'static [(&'static str, ImageConfig)]> {
    IMAGE_MAPPING.get_section_images(section)
}

pub fn get_image_path(section: &str, key: impl Display) -> Option<&'static str> {
    IMAGE_MAPPING.get_image_path(section, key)
}

pub fn get_image_alt(section: &str, key: impl Display) -> Option<&'static str> {
    IMAGE_MAPPING.get_image_alt(section, key)
}

pub fn has_image(section: &str, key: impl Display) -> bool {
    IMAGE_MAPPING.has_image(section, key)
}

pub fn get_available_sections() -> Vec<&'static str> {
    IMAGE_MAPPING.get_available_sections()
}

pub fn get_section_keys(section: &str) -> Vec<&'static str> {
    IMAGE_MAPPING.get_section_keys(section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Placeholder;

    #[test]
    fn every_table_entry_is_returned_verbatim() {
        for section in get_available_sections() {
            for (key, config) in get_section_images(section).unwrap() {
                let found = get_image_config(section, key).unwrap();
                assert!(std::ptr::eq(found, config));
            }
        }
    }

    #[test]
    fn numeric_key_resolves_first_vineyard() {
        let config = get_image_config("Vineyards", 0).unwrap();
        assert_eq!(
            config.path,
            "/images/Vineyards/Copia di Copia di dettaglio vigneti.jpg"
        );
        assert_eq!((config.width, config.height), (1920, 1080));
        assert_eq!(config.quality, Some(95));
        assert_eq!(config.placeholder, Some(Placeholder::Blur));
    }

    #[test]
    fn named_keys_resolve() {
        assert_eq!(get_image_alt("Logos", "ws"), Some("Wine Spectator logo"));
        assert_eq!(get_image_config("Logos", "valdo").unwrap().placeholder, None);
    }

    #[test]
    fn missing_pairs_are_none() {
        assert!(get_image_config("Nope", 0).is_none());
        assert!(get_image_config("Vineyards", 99).is_none());
        assert!(get_image_path("Vineyards", "missing").is_none());
        assert!(get_image_alt("Nope", "x").is_none());
        assert!(!has_image("Grapes", 7));
        assert!(has_image("Grapes", 2));
    }

    #[test]
    fn sections_keep_authored_order() {
        let sections = get_available_sections();
        assert_eq!(sections.first(), Some(&"Vineyards"));
        assert_eq!(sections.last(), Some(&"Instagram"));
        assert!(sections.contains(&"Casa Valdo"));
        assert_eq!(get_section_keys("Logos"), vec!["valdo", "ws"]);
        assert_eq!(get_section_keys("Timeline"), vec!["0", "1", "2", "3"]);
    }

    #[test]
    fn unknown_section_has_no_keys() {
        assert!(get_section_keys("Unknown").is_empty());
        assert!(get_section_images("Unknown").is_none());
    }

    #[test]
    fn custom_tables_are_supported() {
        static SECTIONS: &[Section] = &[Section {
            name: "Grapes",
            images: &[(
                "0",
                ImageConfig {
                    path: "/images/Grapes/a.jpg",
                    alt: "A",
                    width: 10,
                    height: 20,
                    quality: None,
                    placeholder: Some(Placeholder::Empty),
                },
            )],
        }];
        let mapping = ImageMapping::new(SECTIONS);
        assert_eq!(mapping.get_image_path("Grapes", 0), Some("/images/Grapes/a.jpg"));
        assert_eq!(mapping.get_available_sections(), vec!["Grapes"]);
    }
}
