//! Generic record handlers shared by the user and ticket endpoints.
//!
//! ```text
//! POST   /user        {"name":"Ada","location":"London","title":"Gala"}
//! GET    /user/{id}
//! PUT    /user/{id}   {"name":"Ada","location":"Paris","title":"Gala"}
//! DELETE /user/{id}
//! GET    /users
//! ```
//!
//! Ticket endpoints use the same handlers instantiated for [`Ticket`](crate::domain::Ticket).

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;

use super::ApiResult;
use super::envelope::Envelope;
use crate::domain::{
    Error, ErrorCode, RecordFields, RecordId, RecordValidationError, Resource, ResourceService,
};

/// Request body for create and update.
///
/// Every field is optional at the JSON level so that absent fields surface
/// as validation errors rather than parse errors.
#[derive(Debug, Default, Deserialize)]
pub struct RecordRequest {
    pub name: Option<String>,
    pub location: Option<String>,
    pub title: Option<String>,
}

impl TryFrom<RecordRequest> for RecordFields {
    type Error = RecordValidationError;

    fn try_from(value: RecordRequest) -> Result<Self, Self::Error> {
        Self::new(value.name, value.location, value.title)
    }
}

fn validate(payload: web::Json<RecordRequest>) -> Result<RecordFields, Error> {
    RecordFields::try_from(payload.into_inner())
        .map_err(|err| Error::invalid_request(err.to_string()))
}

/// Create a record and return it with its assigned id.
pub async fn create<R: Resource>(
    service: web::Data<ResourceService<R>>,
    payload: web::Json<RecordRequest>,
) -> ApiResult<HttpResponse> {
    let fields = validate(payload)?;
    let record = service.create(fields).await?;
    Ok(Envelope::success(StatusCode::CREATED, record).respond())
}

/// Fetch a record by id.
///
/// Every failure, including an unknown id, is reported as an internal error.
pub async fn get<R: Resource>(
    service: web::Data<ResourceService<R>>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = RecordId::new(path.into_inner());
    let record = service
        .get(&id)
        .await
        .map_err(|err| err.with_code(ErrorCode::InternalError))?;
    Ok(Envelope::success(StatusCode::OK, record).respond())
}

/// List every record in the collection.
pub async fn list<R: Resource>(
    service: web::Data<ResourceService<R>>,
) -> ApiResult<HttpResponse> {
    let records = service.list().await?;
    Ok(Envelope::success(StatusCode::OK, records).respond())
}

/// Replace a record's fields and return the updated record.
///
/// An unknown id is not an error: the payload is an empty object.
pub async fn update<R: Resource>(
    service: web::Data<ResourceService<R>>,
    path: web::Path<String>,
    payload: web::Json<RecordRequest>,
) -> ApiResult<HttpResponse> {
    let fields = validate(payload)?;
    let id = RecordId::new(path.into_inner());
    let response = match service.update(&id, fields).await? {
        Some(record) => Envelope::success(StatusCode::OK, record).respond(),
        None => Envelope::success(StatusCode::OK, json!({})).respond(),
    };
    Ok(response)
}

/// Delete a record by id.
pub async fn delete<R: Resource>(
    service: web::Data<ResourceService<R>>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = RecordId::new(path.into_inner());
    service.delete(&id).await?;
    let message = format!("{} successfully deleted!", R::LABEL);
    Ok(Envelope::success(StatusCode::OK, message).respond())
}
