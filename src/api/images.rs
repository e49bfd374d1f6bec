use rocket::http::{ContentType, Header, Status};
use rocket::serde::json::Json;
use rocket::State;
use rocket::{request::Request, response::{self, Responder, Response}};
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use std::str::FromStr;

use crate::api::ApiError;
use crate::config::AppConfig;
use crate::images::{
    ImageRenderer, ImageSelector, ImageService, MappingImageService, RenderFormat, RenderParams,
    SizePreset,
};
use crate::models::{
    ActionResponse, FolderInfoResponse, FoldersResponse, ImagePathResponse, ImageType,
    ImagesResponse, MappingResponse, SectionResponse, SectionsResponse, StatisticsResponse,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Folders,
    Statistics,
    Images,
    FolderInfo,
    Image,
    Random,
    ByType,
    BySize,
    Recent,
    Mapping,
    Sections,
    Section,
    SectionImage,
}

impl FromStr for Action {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "folders" => Ok(Action::Folders),
            "statistics" => Ok(Action::Statistics),
            "images" => Ok(Action::Images),
            "folder-info" => Ok(Action::FolderInfo),
            "image" => Ok(Action::Image),
            "random" => Ok(Action::Random),
            "by-type" => Ok(Action::ByType),
            "by-size" => Ok(Action::BySize),
            "recent" => Ok(Action::Recent),
            "mapping" => Ok(Action::Mapping),
            "sections" => Ok(Action::Sections),
            "section" => Ok(Action::Section),
            "section-image" => Ok(Action::SectionImage),
            other => Err(ApiError::InvalidAction(other.to_string())),
        }
    }
}

#[derive(Debug, Default, FromForm)]
pub struct ImagesQuery {
    pub action: Option<String>,
    pub folder: Option<String>,
    pub index: Option<usize>,
    pub keyword: Option<String>,
    #[field(name = "type")]
    pub image_type: Option<String>,
    pub min: Option<u64>,
    pub max: Option<u64>,
    pub days: Option<u32>,
    pub section: Option<String>,
    pub key: Option<String>,
}

impl ImagesQuery {
    fn folder(&self) -> Result<&str, ApiError> {
        self.folder.as_deref().ok_or(ApiError::MissingParameter("folder"))
    }

    fn section(&self) -> Result<&str, ApiError> {
        self.section.as_deref().ok_or(ApiError::MissingParameter("section"))
    }

    fn selector(&self) -> Option<ImageSelector> {
        match (self.index, &self.keyword) {
            (Some(index), _) => Some(ImageSelector::ByIndex(index)),
            (None, Some(keyword)) => Some(ImageSelector::ByKeyword(keyword.clone())),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ImagesPayload {
    Folders(FoldersResponse),
    Statistics(StatisticsResponse),
    Images(ImagesResponse),
    FolderInfo(FolderInfoResponse),
    ImagePath(ImagePathResponse),
    Mapping(MappingResponse),
    Sections(SectionsResponse),
    Section(SectionResponse),
}

#[get("/?<query..>")]
pub fn get_images(
    query: ImagesQuery,
    service: &State<ImageService>,
    mapping_service: &State<MappingImageService>,
    config: &State<AppConfig>,
) -> Result<JsonWithCache<ImagesPayload>, ApiError> {
    let action: Action = query
        .action
        .as_deref()
        .ok_or(ApiError::MissingParameter("action"))?
        .parse()?;
    log::debug!("Image API action {:?} with {:?}", action, query);

    let payload = match action {
        Action::Folders => ImagesPayload::Folders(FoldersResponse {
            folders: service.get_available_folders(),
        }),
        Action::Statistics => ImagesPayload::Statistics(StatisticsResponse {
            statistics: service.get_folder_statistics(),
        }),
        Action::Images => ImagesPayload::Images(ImagesResponse {
            images: service.get_images_from_folder(query.folder()?).to_vec(),
        }),
        Action::FolderInfo => {
            let folder = query.folder()?;
            let folder_info = service
                .get_folder_info(folder)
                .ok_or_else(|| ApiError::FolderNotFound(folder.to_string()))?;
            ImagesPayload::FolderInfo(FolderInfoResponse { folder_info })
        }
        Action::Image => ImagesPayload::ImagePath(ImagePathResponse {
            image_path: service.get_image(query.folder()?, query.selector().as_ref()),
        }),
        Action::Random => ImagesPayload::ImagePath(ImagePathResponse {
            image_path: service.get_random_image(query.folder()?),
        }),
        Action::ByType => {
            let image_type: ImageType = query
                .image_type
                .as_deref()
                .ok_or(ApiError::MissingParameter("type"))?
                .parse()?;
            ImagesPayload::Images(ImagesResponse {
                images: service.get_images_by_type(query.folder()?, image_type),
            })
        }
        Action::BySize => ImagesPayload::Images(ImagesResponse {
            images: service.get_images_by_size(
                query.folder()?,
                query.min.unwrap_or(0),
                query.max.unwrap_or(u64::MAX),
            ),
        }),
        Action::Recent => ImagesPayload::Images(ImagesResponse {
            images: service.get_recent_images(
                query.folder()?,
                query.days.unwrap_or(config.recent_days_default),
            ),
        }),
        Action::Mapping => {
            let key = query.key.as_deref().unwrap_or("0");
            ImagesPayload::Mapping(MappingResponse {
                path: service.get_image_with_fallback(query.section()?, key),
            })
        }
        Action::Sections => ImagesPayload::Sections(SectionsResponse {
            sections: mapping_service.get_all_sections(),
        }),
        Action::Section => {
            let section = query.section()?;
            let info = mapping_service
                .get_section_info(section)
                .ok_or_else(|| ApiError::SectionNotFound(section.to_string()))?;
            ImagesPayload::Section(SectionResponse { section: info })
        }
        Action::SectionImage => {
            let selector = query.selector().unwrap_or(ImageSelector::ByIndex(0));
            ImagesPayload::ImagePath(ImagePathResponse {
                image_path: mapping_service.get_image(query.section()?, &selector),
            })
        }
    };

    Ok(JsonWithCache {
        inner: payload,
        cache_duration: service.cache_duration().num_seconds().max(0) as u64,
    })
}

#[derive(Debug, Deserialize)]
pub struct CacheActionRequest {
    pub action: String,
    pub folder: Option<String>,
}

#[post("/", format = "json", data = "<request>")]
pub fn post_images(
    request: Json<CacheActionRequest>,
    service: &State<ImageService>,
    renderer: &State<ImageRenderer>,
    mapping_service: &State<MappingImageService>,
) -> Result<Json<ActionResponse>, ApiError> {
    match request.action.as_str() {
        "clear-cache" => {
            service.clear_cache();
            renderer.clear_cache();
            log::debug!(
                "Dropping {} memoized section lookups",
                mapping_service.cached_lookups()
            );
            mapping_service.clear_cache();
            Ok(Json(ActionResponse {
                success: true,
                message: "Cache cleared successfully".to_string(),
            }))
        }
        "refresh-folder" => {
            let folder = request
                .folder
                .as_deref()
                .ok_or(ApiError::MissingParameter("folder"))?;
            service.refresh_folder(folder);
            renderer.refresh_folder(service, folder);
            Ok(Json(ActionResponse {
                success: true,
                message: format!("Folder {} refreshed successfully", folder),
            }))
        }
        other => Err(ApiError::InvalidAction(other.to_string())),
    }
}

#[derive(Debug, FromForm)]
pub struct RenderQuery {
    pub path: String,
    pub width: Option<u32>,
    pub size: Option<String>,
    pub quality: Option<u8>,
    pub format: Option<String>,
}

impl RenderQuery {
    fn to_render_params(&self) -> Result<RenderParams, ApiError> {
        let size: Option<SizePreset> = self.size.as_deref().map(str::parse).transpose()?;
        let format: Option<RenderFormat> = self.format.as_deref().map(str::parse).transpose()?;

        Ok(RenderParams {
            width: self.width,
            size,
            quality: self.quality,
            format,
        })
    }
}

#[get("/render?<query..>")]
pub fn render_image(
    query: RenderQuery,
    service: &State<ImageService>,
    renderer: &State<ImageRenderer>,
) -> Result<ImageResponse, ApiError> {
    let params = query.to_render_params()?;
    let (data, content_type) = renderer.render(service, &query.path, &params)?;

    Ok(ImageResponse { data, content_type })
}

// Responder for rendered image data
pub struct ImageResponse {
    pub data: Vec<u8>,
    pub content_type: String,
}

impl<'r> Responder<'r, 'static> for ImageResponse {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let content_type = match self.content_type.as_str() {
            "image/jpeg" => ContentType::JPEG,
            "image/png" => ContentType::PNG,
            "image/gif" => ContentType::GIF,
            "image/webp" => ContentType::new("image", "webp"),
            _ => ContentType::Binary,
        };
        let etag = format!("\"{:x}\"", md5::compute(&self.data));
        if let Some(if_none_match) = req.headers().get_one("If-None-Match") {
            if if_none_match == etag {
                return Response::build()
                    .status(Status::NotModified)
                    .header(Header::new("ETag", etag))
                    .header(Header::new("Cache-Control", "public, max-age=86400"))
                    .ok();
            }
        }
        Response::build()
            .header(content_type)
            .header(Header::new("Cache-Control", "public, max-age=86400"))
            .header(Header::new("ETag", etag))
            .sized_body(self.data.len(), Cursor::new(self.data))
            .ok()
    }
}

pub struct JsonWithCache<T> {
    pub inner: T,
    pub cache_duration: u64,
}

impl<'r, T: Serialize> Responder<'r, 'static> for JsonWithCache<T> {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let body = serde_json::to_vec(&self.inner).map_err(|e| {
            log::error!("Could not serialize response: {}", e);
            Status::InternalServerError
        })?;

        Response::build()
            .header(ContentType::JSON)
            .header(Header::new(
                "Cache-Control",
                format!("public, max-age={}", self.cache_duration),
            ))
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}
