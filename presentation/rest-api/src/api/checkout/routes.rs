use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::checkout::pricing::CheckoutView;
use business::domain::checkout::use_cases::confirm::ConfirmCheckoutUseCase;
use business::domain::checkout::use_cases::confirm_one_click::ConfirmOneClickCheckoutUseCase;
use business::domain::checkout::use_cases::view::ViewCheckoutUseCase;
use business::domain::checkout::use_cases::view_one_click::{
    OneClickCheckoutParams, ViewOneClickCheckoutUseCase,
};

use crate::api::checkout::dto::OrderSummaryResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

/// Where the user lands after a checkout, or when there is nothing to check out.
pub const PROMOTIONAL_VIDEOS_LOCATION: &str = "/promotional-videos";

pub struct CheckoutApi {
    view_use_case: Arc<dyn ViewCheckoutUseCase>,
    confirm_use_case: Arc<dyn ConfirmCheckoutUseCase>,
    view_one_click_use_case: Arc<dyn ViewOneClickCheckoutUseCase>,
    confirm_one_click_use_case: Arc<dyn ConfirmOneClickCheckoutUseCase>,
}

impl CheckoutApi {
    pub fn new(
        view_use_case: Arc<dyn ViewCheckoutUseCase>,
        confirm_use_case: Arc<dyn ConfirmCheckoutUseCase>,
        view_one_click_use_case: Arc<dyn ViewOneClickCheckoutUseCase>,
        confirm_one_click_use_case: Arc<dyn ConfirmOneClickCheckoutUseCase>,
    ) -> Self {
        Self {
            view_use_case,
            confirm_use_case,
            view_one_click_use_case,
            confirm_one_click_use_case,
        }
    }
}

/// Checkout API
///
/// Cart checkout and one-click purchase of a single item.
#[OpenApi]
impl CheckoutApi {
    /// View cart checkout
    ///
    /// Prices every cart entry. Redirects to the promotional videos when the
    /// cart has nothing billable.
    #[oai(path = "/checkout", method = "get", tag = "ApiTags::Checkout")]
    async fn view(&self) -> ViewCheckoutResponse {
        match self.view_use_case.execute().await {
            Ok(CheckoutView::Ready(summary)) => ViewCheckoutResponse::Ok(Json(summary.into())),
            Ok(CheckoutView::EmptyCart) => {
                ViewCheckoutResponse::SeeOther(PROMOTIONAL_VIDEOS_LOCATION.to_string())
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    502 => ViewCheckoutResponse::BadGateway(json),
                    _ => ViewCheckoutResponse::InternalError(json),
                }
            }
        }
    }

    /// Confirm cart checkout
    ///
    /// Empties the cart and redirects to the promotional videos.
    #[oai(path = "/checkout", method = "post", tag = "ApiTags::Checkout")]
    async fn confirm(&self) -> ConfirmCheckoutResponse {
        match self.confirm_use_case.execute().await {
            Ok(_) => ConfirmCheckoutResponse::SeeOther(PROMOTIONAL_VIDEOS_LOCATION.to_string()),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ConfirmCheckoutResponse::InternalError(json)
            }
        }
    }

    /// View one-click checkout
    ///
    /// Prices the single product identified by `item_code`. The cart is not read.
    #[oai(
        path = "/checkout/one-click",
        method = "get",
        tag = "ApiTags::Checkout"
    )]
    async fn view_one_click(&self, item_code: Query<Option<String>>) -> ViewOneClickResponse {
        let params = OneClickCheckoutParams {
            item_code: item_code.0.unwrap_or_default(),
        };

        match self.view_one_click_use_case.execute(params).await {
            Ok(summary) => ViewOneClickResponse::Ok(Json(summary.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match one_click_failure(status) {
                    OneClickFailure::BadRequest => ViewOneClickResponse::BadRequest(json),
                    OneClickFailure::NotFound => ViewOneClickResponse::NotFound(json),
                    OneClickFailure::BadGateway => ViewOneClickResponse::BadGateway(json),
                    OneClickFailure::Internal => ViewOneClickResponse::InternalError(json),
                }
            }
        }
    }

    /// Confirm one-click checkout
    ///
    /// Resolves the order for `item_code` and redirects to the promotional
    /// videos. The cart is left untouched.
    #[oai(
        path = "/checkout/one-click",
        method = "post",
        tag = "ApiTags::Checkout"
    )]
    async fn confirm_one_click(
        &self,
        item_code: Query<Option<String>>,
    ) -> ConfirmOneClickResponse {
        let params = OneClickCheckoutParams {
            item_code: item_code.0.unwrap_or_default(),
        };

        match self.confirm_one_click_use_case.execute(params).await {
            Ok(_) => ConfirmOneClickResponse::SeeOther(PROMOTIONAL_VIDEOS_LOCATION.to_string()),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match one_click_failure(status) {
                    OneClickFailure::BadRequest => ConfirmOneClickResponse::BadRequest(json),
                    OneClickFailure::NotFound => ConfirmOneClickResponse::NotFound(json),
                    OneClickFailure::BadGateway => ConfirmOneClickResponse::BadGateway(json),
                    OneClickFailure::Internal => ConfirmOneClickResponse::InternalError(json),
                }
            }
        }
    }
}

enum OneClickFailure {
    BadRequest,
    NotFound,
    BadGateway,
    Internal,
}

fn one_click_failure(status: StatusCode) -> OneClickFailure {
    match status.as_u16() {
        400 => OneClickFailure::BadRequest,
        404 => OneClickFailure::NotFound,
        502 => OneClickFailure::BadGateway,
        _ => OneClickFailure::Internal,
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ViewCheckoutResponse {
    #[oai(status = 200)]
    Ok(Json<OrderSummaryResponse>),
    /// Nothing to check out; continue at the promotional videos
    #[oai(status = 303)]
    SeeOther(#[oai(header = "Location")] String),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ConfirmCheckoutResponse {
    /// Cart emptied; continue at the promotional videos
    #[oai(status = 303)]
    SeeOther(#[oai(header = "Location")] String),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ViewOneClickResponse {
    #[oai(status = 200)]
    Ok(Json<OrderSummaryResponse>),
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
pub enum ConfirmOneClickResponse {
    /// Order placed; continue at the promotional videos
    #[oai(status = 303)]
    SeeOther(#[oai(header = "Location")] String),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
