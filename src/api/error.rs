use crate::images::RenderError;
use crate::models::image::UnknownImageType;
use rocket::http::{ContentType, Status};
use serde_json::json;
use std::io::ErrorKind;

#[derive(Debug)]
pub enum ApiError {
    MissingParameter(&'static str),
    InvalidAction(String),
    InvalidType(UnknownImageType),
    FolderNotFound(String),
    SectionNotFound(String),
    RenderError(RenderError),
}

impl From<RenderError> for ApiError {
    fn from(error: RenderError) -> Self {
        ApiError::RenderError(error)
    }
}

impl From<UnknownImageType> for ApiError {
    fn from(error: UnknownImageType) -> Self {
        ApiError::InvalidType(error)
    }
}

fn json_error(status: Status, error: &str, message: String) -> rocket::response::Result<'static> {
    let body = json!({
        "error": error,
        "message": message
    })
    .to_string();

    rocket::Response::build()
        .status(status)
        .header(ContentType::JSON)
        .sized_body(body.len(), std::io::Cursor::new(body))
        .ok()
}

impl<'r> rocket::response::Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r rocket::Request<'_>) -> rocket::response::Result<'static> {
        match self {
            ApiError::MissingParameter(name) => json_error(
                Status::BadRequest,
                "Missing parameter",
                format!("The '{}' parameter is required for this action", name),
            ),
            ApiError::InvalidAction(action) => json_error(
                Status::BadRequest,
                "Invalid action",
                format!("Unknown action '{}'", action),
            ),
            ApiError::InvalidType(error) => {
                json_error(Status::BadRequest, "Invalid type", error.to_string())
            }
            ApiError::FolderNotFound(folder) => json_error(
                Status::NotFound,
                "Folder not found",
                format!("No images found in folder '{}'", folder),
            ),
            ApiError::SectionNotFound(section) => json_error(
                Status::NotFound,
                "Section not found",
                format!("Section '{}' is not in the image mapping", section),
            ),
            ApiError::RenderError(RenderError::Source(error)) => match error.kind() {
                ErrorKind::NotFound => {
                    json_error(Status::NotFound, "Image not found", error.to_string())
                }
                ErrorKind::InvalidInput => {
                    json_error(Status::BadRequest, "Invalid image path", error.to_string())
                }
                _ => json_error(
                    Status::InternalServerError,
                    "Image read error",
                    error.to_string(),
                ),
            },
            ApiError::RenderError(RenderError::InvalidParameter(message)) => {
                json_error(Status::BadRequest, "Invalid render parameter", message)
            }
            ApiError::RenderError(RenderError::Decode(message)) => json_error(
                Status::UnprocessableEntity,
                "Image decoding error",
                message,
            ),
            ApiError::RenderError(RenderError::Encode(message)) => json_error(
                Status::InternalServerError,
                "Image encoding error",
                message,
            ),
        }
    }
}
