#[macro_use]
extern crate rocket;

use std::env;

use dotenv::dotenv;
use env_logger::Env;
use log::info;
use rocket::{
    figment::{
        providers::{Format, Toml},
        Figment, Profile,
    },
    Config,
};
use vinimg::config::AppConfig;
use vinimg::images::ImageService;
use vinimg::mapping;

#[launch]
fn rocket() -> _ {
    dotenv().ok();

    // Load config
    let mut figment = Figment::from(Config::default())
        .merge(Toml::file("App.toml").nested());

    if let Ok(root) = env::var("IMAGES_ROOT") {
        figment = figment.merge(("images_root", root));
    }

    if let Ok(placeholder) = env::var("PLACEHOLDER_PATH") {
        figment = figment.merge(("placeholder_path", placeholder));
    }

    figment = figment.select(Profile::from_env_or("APP_PROFILE", "default"));

    // Initialize logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config: AppConfig = match figment.extract() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    info!("Configuration loaded successfully");

    let service = ImageService::from_config(&config);
    info!(
        "Serving images from {} ({} folders, cache duration {}s)",
        config.images_root,
        service.get_available_folders().len(),
        config.folder_cache_duration
    );
    info!(
        "Image mapping loaded with {} sections",
        mapping::get_available_sections().len()
    );

    info!(
        "Starting image API server on {}:{}",
        config.address, config.port
    );

    vinimg::server(figment, config, service)
}
