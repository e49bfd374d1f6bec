use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub address: String,
    #[serde(default = "default_images_root")]
    pub images_root: String,
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
    #[serde(default = "default_placeholder_path")]
    pub placeholder_path: String,
    /// Seconds a folder scan stays fresh.
    #[serde(default = "default_folder_cache_duration")]
    pub folder_cache_duration: u64,
    #[serde(default = "default_recent_days")]
    pub recent_days_default: u32,
    #[serde(default = "default_render_quality")]
    pub render_quality_default: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            address: "127.0.0.1".to_string(),
            images_root: default_images_root(),
            public_prefix: default_public_prefix(),
            placeholder_path: default_placeholder_path(),
            folder_cache_duration: default_folder_cache_duration(),
            recent_days_default: default_recent_days(),
            render_quality_default: default_render_quality(),
        }
    }
}

fn default_images_root() -> String {
    "public/images".to_string()
}

fn default_public_prefix() -> String {
    "/images".to_string()
}

fn default_placeholder_path() -> String {
    "/images/placeholder.jpg".to_string()
}

fn default_folder_cache_duration() -> u64 {
    5 * 60
}

fn default_recent_days() -> u32 {
    7
}

fn default_render_quality() -> u8 {
    85
}
