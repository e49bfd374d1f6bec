use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use chrono::Duration;
use lazy_static::lazy_static;
use log::{debug, info, warn};
use rand::seq::SliceRandom;
use regex::{Captures, Regex};

use super::store::{FsImageStore, ImageStore};
use super::{image_type_of, ImageSelector, NotFound};
use crate::cache::{Clock, SystemClock, TtlCache};
use crate::config::AppConfig;
use crate::mapping::{ImageMapping, IMAGE_MAPPING};
use crate::models::{FolderInfo, ImageInfo, ImageMetadata, ImageType};

lazy_static! {
    static ref SECTION_FOLDERS: HashMap<&'static str, &'static str> = HashMap::from([
        ("hero", "Logos"),
        ("timeline", "Historical Photos"),
        ("valdobbiadene", "Vineyards"),
        ("valdoDifference", "Grapes"),
        ("wines", "Bottle Shots"),
        ("casaValdo", "Casa Valdo"),
        ("lifestyle", "Lifestyle"),
        ("backgrounds", "Backgrounds"),
        ("icons", "Icons"),
    ]);
    static ref WORD_SEPARATOR: Regex = Regex::new(r"[-_]").unwrap();
    static ref WORD_START: Regex = Regex::new(r"\b\w").unwrap();
}

const DEFAULT_FOLDER: &str = "Vineyards";
pub const RENDER_ROUTE: &str = "/api/images/render";

/// Folder a site section falls back to when the mapping has no entry.
pub fn folder_for_section(section: &str) -> &'static str {
    SECTION_FOLDERS.get(section).copied().unwrap_or(DEFAULT_FOLDER)
}

/// Discovers images under the images root and serves per-folder metadata.
///
/// Folder listings and folder summaries are memoized separately under
/// `folder_<name>` and `folder_info_<name>`, each with its own expiry.
pub struct ImageService {
    store: Box<dyn ImageStore>,
    clock: Arc<dyn Clock>,
    mapping: &'static ImageMapping,
    images: TtlCache<Arc<Vec<ImageInfo>>>,
    folders: TtlCache<Arc<FolderInfo>>,
    public_prefix: String,
    placeholder: String,
}

impl ImageService {
    pub fn new(store: Box<dyn ImageStore>, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            store,
            images: TtlCache::new(ttl, clock.clone()),
            folders: TtlCache::new(ttl, clock.clone()),
            clock,
            mapping: &IMAGE_MAPPING,
            public_prefix: "/images".to_string(),
            placeholder: "/images/placeholder.jpg".to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let ttl = Duration::seconds(config.folder_cache_duration as i64);
        Self::new(
            Box::new(FsImageStore::new(&config.images_root)),
            Arc::new(SystemClock),
            ttl,
        )
        .with_public_prefix(&config.public_prefix)
        .with_placeholder(&config.placeholder_path)
    }

    pub fn with_mapping(mut self, mapping: &'static ImageMapping) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn with_public_prefix(mut self, prefix: &str) -> Self {
        self.public_prefix = prefix.trim_end_matches('/').to_string();
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn cache_duration(&self) -> Duration {
        self.images.ttl
    }

    pub fn get_images_from_folder(&self, folder: &str) -> Arc<Vec<ImageInfo>> {
        let cache_key = format!("folder_{}", folder);

        if let Some(images) = self.images.get(&cache_key) {
            if let Some(age) = self.images.age(&cache_key) {
                debug!("Serving cached listing for folder {} (age: {}s)", folder, age.num_seconds());
            }
            return images;
        }

        match self.scan_folder(folder) {
            Ok(images) => {
                info!("Scanned folder {}: {} images", folder, images.len());
                let images = Arc::new(images);
                self.images.insert(cache_key, images.clone());
                images
            }
            Err(e) => {
                warn!("Could not read folder {}: {}", folder, e);
                Arc::new(Vec::new())
            }
        }
    }

    fn scan_folder(&self, folder: &str) -> io::Result<Vec<ImageInfo>> {
        let mut images = Vec::new();

        for entry in self.store.read_folder(folder)? {
            if !entry.is_file {
                continue;
            }
            let Some(image_type) = image_type_of(&entry.name) else {
                continue;
            };

            let dimensions = match image_type {
                ImageType::Svg => None,
                _ => self.store.dimensions(folder, &entry.name),
            };

            images.push(ImageInfo {
                path: format!("{}/{}/{}", self.public_prefix, folder, entry.name),
                name: entry.name,
                size: entry.size,
                last_modified: entry.modified,
                dimensions,
                image_type,
            });
        }

        images.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(images)
    }

    /// Summary of a folder, `None` when it holds no images.
    pub fn get_folder_info(&self, folder: &str) -> Option<Arc<FolderInfo>> {
        let cache_key = format!("folder_info_{}", folder);

        if let Some(info) = self.folders.get(&cache_key) {
            if let Some(age) = self.folders.age(&cache_key) {
                debug!("Serving cached summary for folder {} (age: {}s)", folder, age.num_seconds());
            }
            return Some(info);
        }

        let images = self.get_images_from_folder(folder);
        if images.is_empty() {
            return None;
        }

        let info = Arc::new(FolderInfo {
            name: folder.to_string(),
            path: self.folder_path(folder),
            image_count: images.len(),
            total_size: images.iter().map(|img| img.size).sum(),
            images,
        });
        self.folders.insert(cache_key, info.clone());
        Some(info)
    }

    /// Picks one image of a folder. An out-of-range index or an unmatched
    /// keyword yields the first image; only an empty folder is an error.
    pub fn resolve_image(&self, folder: &str, selector: Option<&ImageSelector>) -> Result<String, NotFound> {
        let images = self.get_images_from_folder(folder);
        let first = images
            .first()
            .ok_or_else(|| NotFound::EmptyFolder(folder.to_string()))?;

        let image = match selector {
            Some(ImageSelector::ByIndex(index)) => images.get(*index).unwrap_or(first),
            Some(ImageSelector::ByKeyword(keyword)) => {
                let keyword = keyword.to_lowercase();
                images
                    .iter()
                    .find(|img| img.name.to_lowercase().contains(&keyword))
                    .unwrap_or(first)
            }
            None => first,
        };

        Ok(image.path.clone())
    }

    pub fn get_image(&self, folder: &str, selector: Option<&ImageSelector>) -> String {
        self.resolve_image(folder, selector)
            .unwrap_or_else(|reason| self.degrade(reason))
    }

    /// Mapping table first, then the folder the section falls back to.
    pub fn get_image_with_fallback(&self, section: &str, key: &str) -> String {
        if let Some(config) = self.mapping.get_image_config(section, key) {
            return config.path.to_string();
        }

        let folder = folder_for_section(section);
        self.get_image(folder, Some(&ImageSelector::ByKeyword(key.to_string())))
    }

    pub fn get_random_image(&self, folder: &str) -> String {
        let images = self.get_images_from_folder(folder);
        match images.choose(&mut rand::thread_rng()) {
            Some(image) => image.path.clone(),
            None => self.degrade(NotFound::EmptyFolder(folder.to_string())),
        }
    }

    pub fn get_images_by_type(&self, folder: &str, image_type: ImageType) -> Vec<ImageInfo> {
        self.filter_images(folder, |img| img.image_type == image_type)
    }

    /// Images whose size in bytes lies within `min..=max`.
    pub fn get_images_by_size(&self, folder: &str, min: u64, max: u64) -> Vec<ImageInfo> {
        self.filter_images(folder, |img| img.size >= min && img.size <= max)
    }

    pub fn get_recent_images(&self, folder: &str, days: u32) -> Vec<ImageInfo> {
        let cutoff = self.clock.now() - Duration::days(days as i64);
        self.filter_images(folder, |img| img.last_modified > cutoff)
    }

    fn filter_images(&self, folder: &str, keep: impl Fn(&ImageInfo) -> bool) -> Vec<ImageInfo> {
        self.get_images_from_folder(folder)
            .iter()
            .filter(|img| keep(img))
            .cloned()
            .collect()
    }

    pub fn get_available_folders(&self) -> Vec<String> {
        self.store.list_folders().unwrap_or_else(|e| {
            warn!("Could not read images root: {}", e);
            Vec::new()
        })
    }

    pub fn get_folder_statistics(&self) -> BTreeMap<String, Arc<FolderInfo>> {
        self.get_available_folders()
            .into_iter()
            .filter_map(|folder| {
                let info = self.get_folder_info(&folder)?;
                Some((folder, info))
            })
            .collect()
    }

    pub fn clear_cache(&self) {
        self.images.clear();
        self.folders.clear();
        info!("Image cache cleared");
    }

    pub fn refresh_folder(&self, folder: &str) {
        self.images.remove(&format!("folder_{}", folder));
        self.folders.remove(&format!("folder_info_{}", folder));
        info!("Cache entries for folder {} dropped", folder);
    }

    /// URL of a resized rendition served by the render route.
    pub fn get_optimized_image_path(&self, path: &str, width: u32, quality: u8) -> String {
        format!(
            "{}?path={}&width={}&quality={}",
            RENDER_ROUTE,
            rocket::http::RawStr::new(path).percent_encode().as_str(),
            width,
            quality
        )
    }

    /// Alt text and title derived from a file name, `vineyard_detail-2.jpg`
    /// becomes `Vineyard Detail 2`.
    pub fn get_image_metadata(path: &str) -> ImageMetadata {
        let stem = Path::new(path)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let spaced = WORD_SEPARATOR.replace_all(&stem, " ");
        let alt = WORD_START
            .replace_all(&spaced, |caps: &Captures| caps[0].to_uppercase())
            .into_owned();

        ImageMetadata {
            title: alt.clone(),
            alt,
        }
    }

    /// Public path of a folder, `/images/Grapes`.
    pub fn folder_path(&self, folder: &str) -> String {
        format!("{}/{}", self.public_prefix, folder)
    }

    /// Public path with `.` segments and doubled separators removed, `None`
    /// outside the prefix.
    pub fn canonical_path(&self, public_path: &str) -> Option<String> {
        let relative = self.relative_path(public_path)?;
        let parts: Vec<String> = relative
            .components()
            .filter_map(|part| match part {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        Some(format!("{}/{}", self.public_prefix, parts.join("/")))
    }

    /// Maps a public path (`/images/Grapes/a.jpg`) back to a path relative to
    /// the images root.
    pub fn relative_path(&self, public_path: &str) -> Option<PathBuf> {
        let rest = public_path.strip_prefix(&self.public_prefix)?;
        let rest = rest.strip_prefix('/')?;
        if rest.is_empty() {
            return None;
        }
        Some(PathBuf::from(rest))
    }

    pub fn read_image(&self, public_path: &str) -> io::Result<Vec<u8>> {
        let relative = self.relative_path(public_path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not under {}", public_path, self.public_prefix),
            )
        })?;
        self.store.read_file(&relative)
    }

    fn degrade(&self, reason: NotFound) -> String {
        warn!("{}, using placeholder", reason);
        self.placeholder.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use crate::images::FileEntry;
    use crate::mapping::Section;
    use crate::models::{Dimensions, ImageConfig};
    use chrono::{DateTime, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory store that counts folder reads.
    #[derive(Default)]
    struct MemoryStore {
        folders: HashMap<String, Vec<FileEntry>>,
        reads: Arc<AtomicUsize>,
    }

    impl MemoryStore {
        fn with_file(mut self, folder: &str, name: &str, size: u64, modified: DateTime<Utc>) -> Self {
            self.folders.entry(folder.to_string()).or_default().push(FileEntry {
                name: name.to_string(),
                is_file: true,
                size,
                modified,
            });
            self
        }

        fn with_dir(mut self, folder: &str, name: &str) -> Self {
            self.folders.entry(folder.to_string()).or_default().push(FileEntry {
                name: name.to_string(),
                is_file: false,
                size: 0,
                modified: epoch(),
            });
            self
        }
    }

    impl ImageStore for MemoryStore {
        fn read_folder(&self, folder: &str) -> io::Result<Vec<FileEntry>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.folders
                .get(folder)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, folder.to_string()))
        }

        fn list_folders(&self) -> io::Result<Vec<String>> {
            let mut names: Vec<String> = self.folders.keys().cloned().collect();
            names.sort();
            Ok(names)
        }

        fn dimensions(&self, _folder: &str, file: &str) -> Option<Dimensions> {
            file.ends_with(".png").then_some(Dimensions { width: 2, height: 1 })
        }

        fn read_file(&self, relative: &Path) -> io::Result<Vec<u8>> {
            Ok(relative.to_string_lossy().into_owned().into_bytes())
        }
    }

    fn epoch() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(0, 0).unwrap()
    }

    fn grapes_store() -> MemoryStore {
        MemoryStore::default()
            .with_file("Grapes", "b.png", 200, epoch())
            .with_file("Grapes", "a.jpg", 100, epoch())
            .with_file("Grapes", "notes.txt", 5, epoch())
            .with_dir("Grapes", "raw.jpg")
            .with_file("Vineyards", "hills.JPEG", 300, epoch())
            .with_file("Vineyards", "logo.svg", 10, epoch())
            .with_file("Empty", "readme.md", 1, epoch())
    }

    fn service(store: MemoryStore) -> (Arc<ManualClock>, Arc<AtomicUsize>, ImageService) {
        let clock = Arc::new(ManualClock::new(epoch() + Duration::days(30)));
        let reads = store.reads.clone();
        let service = ImageService::new(Box::new(store), clock.clone(), Duration::minutes(5));
        (clock, reads, service)
    }

    #[test]
    fn lists_only_allowed_files_sorted_by_name() {
        let (_, _, service) = service(grapes_store());
        let images = service.get_images_from_folder("Grapes");

        let names: Vec<&str> = images.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "b.png"]);
        assert_eq!(images[0].path, "/images/Grapes/a.jpg");
        assert_eq!(images[0].image_type, ImageType::Jpeg);
        assert_eq!(images[0].dimensions, None);
        assert_eq!(images[1].dimensions, Some(Dimensions { width: 2, height: 1 }));
    }

    #[test]
    fn svg_and_uppercase_extensions_are_typed() {
        let (_, _, service) = service(grapes_store());
        let images = service.get_images_from_folder("Vineyards");
        let types: Vec<ImageType> = images.iter().map(|i| i.image_type).collect();
        assert_eq!(types, vec![ImageType::Jpeg, ImageType::Svg]);
    }

    #[test]
    fn bare_extension_dotfile_is_listed_as_jpeg() {
        let store = MemoryStore::default()
            .with_file("Grapes", ".jpg", 7, epoch())
            .with_file("Grapes", "a.jpg", 100, epoch())
            .with_file("Grapes", ".hidden", 1, epoch());
        let (_, _, service) = service(store);
        let images = service.get_images_from_folder("Grapes");

        let names: Vec<&str> = images.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec![".jpg", "a.jpg"]);
        assert_eq!(images[0].image_type, ImageType::Jpeg);
        assert_eq!(images[0].path, "/images/Grapes/.jpg");
    }

    #[test]
    fn repeated_listing_within_ttl_reads_once() {
        let (clock, reads, service) = service(grapes_store());
        let first = service.get_images_from_folder("Grapes");
        clock.advance(Duration::minutes(4));
        let second = service.get_images_from_folder("Grapes");

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn expired_listing_is_recomputed() {
        let (clock, reads, service) = service(grapes_store());
        let first = service.get_images_from_folder("Grapes");
        clock.advance(Duration::minutes(5));
        let second = service.get_images_from_folder("Grapes");

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first, second);
        assert_eq!(reads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn missing_folder_is_empty_and_not_cached() {
        let (_, reads, service) = service(grapes_store());
        assert!(service.get_images_from_folder("Nope").is_empty());
        assert!(service.get_images_from_folder("Nope").is_empty());
        assert_eq!(reads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn folder_info_sums_sizes() {
        let (_, _, service) = service(grapes_store());
        let info = service.get_folder_info("Grapes").unwrap();

        assert_eq!(info.name, "Grapes");
        assert_eq!(info.path, "/images/Grapes");
        assert_eq!(info.image_count, 2);
        assert_eq!(info.total_size, 300);
        assert_eq!(info.images[0].name, "a.jpg");
        assert_eq!(info.images[1].name, "b.png");
    }

    #[test]
    fn folder_info_is_none_without_images() {
        let (_, _, service) = service(grapes_store());
        assert!(service.get_folder_info("Empty").is_none());
        assert!(service.get_folder_info("Nope").is_none());
    }

    #[test]
    fn clear_cache_forces_one_recompute() {
        let (_, reads, service) = service(grapes_store());
        service.get_folder_info("Grapes");
        assert_eq!(reads.load(Ordering::SeqCst), 1);

        service.clear_cache();
        service.get_folder_info("Grapes");
        service.get_images_from_folder("Grapes");
        assert_eq!(reads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn refresh_only_touches_one_folder() {
        let (_, reads, service) = service(grapes_store());
        service.get_folder_info("Grapes");
        service.get_folder_info("Vineyards");
        assert_eq!(reads.load(Ordering::SeqCst), 2);

        service.refresh_folder("Grapes");
        service.get_folder_info("Vineyards");
        assert_eq!(reads.load(Ordering::SeqCst), 2);
        service.get_folder_info("Grapes");
        assert_eq!(reads.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn index_selects_by_position() {
        let (_, _, service) = service(grapes_store());
        let images = service.get_images_from_folder("Grapes");
        assert_eq!(service.get_image("Grapes", Some(&ImageSelector::ByIndex(0))), images[0].path);
        assert_eq!(service.get_image("Grapes", Some(&ImageSelector::ByIndex(1))), "/images/Grapes/b.png");
        assert_eq!(service.get_image("Grapes", Some(&ImageSelector::ByIndex(9))), images[0].path);
        assert_eq!(service.get_image("Grapes", None), images[0].path);
    }

    #[test]
    fn keyword_matches_case_insensitively() {
        let (_, _, service) = service(grapes_store());
        assert_eq!(service.get_image("Grapes", Some(&"B.P".into())), "/images/Grapes/b.png");
        assert_eq!(
            service.get_image("Grapes", Some(&"nonexistent-substring".into())),
            "/images/Grapes/a.jpg"
        );
    }

    #[test]
    fn empty_folder_degrades_to_placeholder() {
        let (_, _, service) = service(grapes_store());
        assert_eq!(
            service.resolve_image("Empty", None),
            Err(NotFound::EmptyFolder("Empty".to_string()))
        );
        assert_eq!(service.get_image("Empty", None), "/images/placeholder.jpg");
        assert_eq!(service.get_image("Nope", Some(&ImageSelector::ByIndex(2))), "/images/placeholder.jpg");
        assert_eq!(service.get_random_image("Nope"), "/images/placeholder.jpg");
    }

    #[test]
    fn random_image_comes_from_folder() {
        let (_, _, service) = service(grapes_store());
        for _ in 0..10 {
            let path = service.get_random_image("Grapes");
            assert!(path == "/images/Grapes/a.jpg" || path == "/images/Grapes/b.png");
        }
    }

    #[test]
    fn filters_by_type_and_size() {
        let (_, _, service) = service(grapes_store());
        let pngs = service.get_images_by_type("Grapes", ImageType::Png);
        assert_eq!(pngs.len(), 1);
        assert_eq!(pngs[0].name, "b.png");

        let sized = service.get_images_by_size("Grapes", 150, 200);
        assert_eq!(sized.len(), 1);
        assert_eq!(sized[0].name, "b.png");
        assert_eq!(service.get_images_by_size("Grapes", 0, 1000).len(), 2);
    }

    #[test]
    fn recent_images_use_the_injected_clock() {
        let now = epoch() + Duration::days(30);
        let store = MemoryStore::default()
            .with_file("Lifestyle", "old.jpg", 1, now - Duration::days(10))
            .with_file("Lifestyle", "new.jpg", 1, now - Duration::days(2));
        let (_, _, service) = service(store);

        let recent = service.get_recent_images("Lifestyle", 7);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].name, "new.jpg");
        assert_eq!(service.get_recent_images("Lifestyle", 30).len(), 2);
    }

    #[test]
    fn statistics_skip_folders_without_images() {
        let (_, _, service) = service(grapes_store());
        let stats = service.get_folder_statistics();
        let folders: Vec<&str> = stats.keys().map(|k| k.as_str()).collect();
        assert_eq!(folders, vec!["Grapes", "Vineyards"]);
        assert_eq!(stats["Vineyards"].total_size, 310);
    }

    #[test]
    fn fallback_prefers_the_mapping_table() {
        const SECTIONS: &[Section] = &[Section {
            name: "valdoDifference",
            images: &[(
                "hero",
                ImageConfig {
                    path: "/images/Grapes/hero.jpg",
                    alt: "Hero",
                    width: 1,
                    height: 1,
                    quality: None,
                    placeholder: None,
                },
            )],
        }];
        static MAPPING: ImageMapping = ImageMapping::new(SECTIONS);

        let (_, _, service) = service(grapes_store());
        let service = service.with_mapping(&MAPPING);
        assert_eq!(service.get_image_with_fallback("valdoDifference", "hero"), "/images/Grapes/hero.jpg");
        assert_eq!(service.get_image_with_fallback("valdoDifference", "b."), "/images/Grapes/b.png");
        assert_eq!(service.get_image_with_fallback("unknown", "hills"), "/images/Vineyards/hills.JPEG");
        assert_eq!(service.get_image_with_fallback("icons", "x"), "/images/placeholder.jpg");
    }

    #[test]
    fn section_folder_table_has_a_default() {
        assert_eq!(folder_for_section("wines"), "Bottle Shots");
        assert_eq!(folder_for_section("casaValdo"), "Casa Valdo");
        assert_eq!(folder_for_section("somethingElse"), "Vineyards");
    }

    #[test]
    fn metadata_title_cases_the_file_stem() {
        let meta = ImageService::get_image_metadata("/images/Vineyards/vineyard_detail-2.jpg");
        assert_eq!(meta.alt, "Vineyard Detail 2");
        assert_eq!(meta.title, meta.alt);
    }

    #[test]
    fn optimized_path_points_at_render_route() {
        let (_, _, service) = service(grapes_store());
        let url = service.get_optimized_image_path("/images/Grapes/a.jpg", 600, 80);
        assert!(url.starts_with("/api/images/render?path="));
        assert!(url.ends_with("&width=600&quality=80"));
        assert!(url.contains("a.jpg"));
    }

    #[test]
    fn public_paths_map_to_relative_ones() {
        let (_, _, service) = service(grapes_store());
        assert_eq!(
            service.relative_path("/images/Casa Valdo/602322.jpg"),
            Some(PathBuf::from("Casa Valdo/602322.jpg"))
        );
        assert_eq!(service.relative_path("/static/x.jpg"), None);
        assert_eq!(service.relative_path("/images/"), None);
        assert_eq!(service.read_image("/images/Grapes/a.jpg").unwrap(), b"Grapes/a.jpg");
        assert!(service.read_image("/elsewhere/a.jpg").is_err());

        assert_eq!(
            service.canonical_path("/images/Grapes//./a.jpg"),
            Some("/images/Grapes/a.jpg".to_string())
        );
        assert_eq!(service.canonical_path("/elsewhere/a.jpg"), None);
        assert_eq!(service.folder_path("Grapes"), "/images/Grapes");
    }
}
