#[macro_use]
extern crate rocket;

pub mod api;
pub mod cache;
pub mod config;
pub mod cors;
pub mod images;
pub mod mapping;
pub mod models;

use rocket::figment::Figment;
use rocket::{Build, Rocket};

use config::AppConfig;
use cors::CORS;
use images::{ImageRenderer, ImageService, MappingImageService};
use mapping::IMAGE_MAPPING;

/// Assembles the HTTP server around an already built image service.
pub fn server(figment: Figment, config: AppConfig, service: ImageService) -> Rocket<Build> {
    let renderer = ImageRenderer::new(config.render_quality_default);
    let mapping_service = MappingImageService::new(&IMAGE_MAPPING, config.placeholder_path.clone());

    rocket::custom(figment)
        .attach(CORS)
        .manage(service)
        .manage(renderer)
        .manage(mapping_service)
        .manage(config)
        .mount(
            "/api/images",
            routes![
                api::images::get_images,
                api::images::post_images,
                api::images::render_image,
            ],
        )
}
