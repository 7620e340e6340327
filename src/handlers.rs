use actix_web::web::{Bytes, Data};
use actix_web::{HttpResponse, Responder};
use serde::de::DeserializeOwned;

use crate::errors::RelayError;
use crate::models::poem::{
    ErrorResponse, PoemRequest, PoemResponse, RegenerateRequest, RegenerateResponse,
};
use crate::service::PoemService;

pub(crate) fn error_response(error: &RelayError) -> HttpResponse {
    HttpResponse::build(error.status_code()).json(ErrorResponse {
        error: error.message().to_string(),
    })
}

/// A missing or blank body reads as `{}`, whatever the content type.
pub(crate) fn parse_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, RelayError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| RelayError::ValidationError(e.to_string()))
}

pub async fn generate_poem(service: Data<PoemService>, body: Bytes) -> impl Responder {
    let request: PoemRequest = match parse_body(&body) {
        Ok(request) => request,
        Err(e) => {
            log::info!("rejected request body: {}", e);
            return error_response(&e);
        }
    };
    log::debug!("generate-poem request: {:?}", request);

    match service.generate_poem(&request).await {
        Ok(poem) => HttpResponse::Ok().json(PoemResponse { poem }),
        Err(e) => {
            log::error!("generate_poem error: {}", e);
            error_response(&e)
        }
    }
}

pub async fn regenerate(service: Data<PoemService>, body: Bytes) -> impl Responder {
    let result = match parse_body::<RegenerateRequest>(&body) {
        Ok(request) => service.regenerate(&request).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(new_text) => HttpResponse::Ok().json(RegenerateResponse { new_text }),
        Err(e @ RelayError::ValidationError(_)) => {
            log::info!("regenerate rejected: {}", e);
            error_response(&e)
        }
        Err(e) => {
            log::error!("regenerate error: {}", e);
            error_response(&e)
        }
    }
}
