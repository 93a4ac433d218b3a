use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::cart::use_cases::delete::{DeleteCartEntryParams, DeleteCartEntryUseCase};
use business::domain::cart::use_cases::get_all::GetCartUseCase;
use business::domain::cart::use_cases::get_detail::{
    GetCartEntryDetailParams, GetCartEntryDetailUseCase,
};

use crate::api::cart::dto::{CartEntryDetailResponse, CartResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_id_response};
use crate::api::tags::ApiTags;

/// Where the user lands after removing an entry.
pub const CART_LOCATION: &str = "/cart";

pub struct CartApi {
    get_all_use_case: Arc<dyn GetCartUseCase>,
    get_detail_use_case: Arc<dyn GetCartEntryDetailUseCase>,
    delete_use_case: Arc<dyn DeleteCartEntryUseCase>,
}

impl CartApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetCartUseCase>,
        get_detail_use_case: Arc<dyn GetCartEntryDetailUseCase>,
        delete_use_case: Arc<dyn DeleteCartEntryUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_detail_use_case,
            delete_use_case,
        }
    }
}

/// Cart API
///
/// Lists cart entries with their products and removes single entries.
#[OpenApi]
impl CartApi {
    /// View the cart
    ///
    /// Returns every cart entry in insertion order. Always succeeds for an
    /// empty cart.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_all(&self) -> GetCartResponse {
        match self.get_all_use_case.execute().await {
            Ok(lines) => GetCartResponse::Ok(Json(lines.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    502 => GetCartResponse::BadGateway(json),
                    _ => GetCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Cart entry detail
    ///
    /// Delete confirmation view of one entry, with the full size product image.
    #[oai(path = "/cart/:id", method = "get", tag = "ApiTags::Cart")]
    async fn get_detail(&self, id: Path<String>) -> GetCartEntryDetailResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return GetCartEntryDetailResponse::BadRequest(invalid_id_response("cart.invalid_id"));
        };

        match self
            .get_detail_use_case
            .execute(GetCartEntryDetailParams { id })
            .await
        {
            Ok(detail) => GetCartEntryDetailResponse::Ok(Json(detail.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCartEntryDetailResponse::NotFound(json),
                    502 => GetCartEntryDetailResponse::BadGateway(json),
                    _ => GetCartEntryDetailResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a cart entry
    ///
    /// Deletes one entry and redirects to the cart.
    #[oai(path = "/cart/:id/delete", method = "post", tag = "ApiTags::Cart")]
    async fn delete(&self, id: Path<String>) -> DeleteCartEntryResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return DeleteCartEntryResponse::BadRequest(invalid_id_response("cart.invalid_id"));
        };

        match self
            .delete_use_case
            .execute(DeleteCartEntryParams { id })
            .await
        {
            Ok(()) => DeleteCartEntryResponse::SeeOther(CART_LOCATION.to_string()),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteCartEntryResponse::NotFound(json),
                    _ => DeleteCartEntryResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartEntryDetailResponse {
    #[oai(status = 200)]
    Ok(Json<CartEntryDetailResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteCartEntryResponse {
    /// Entry removed; continue at the cart
    #[oai(status = 303)]
    SeeOther(#[oai(header = "Location")] String),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
