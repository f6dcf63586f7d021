use crate::application::{
    commands::newsletter::{SubscribeCommand, ToggleInterestCommand},
    dto::{InterestSelectionDto, SubscriptionDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubscribeRequest {
    #[serde(default)]
    pub email: String,
    /// Category labels, e.g. `Air Freight`.
    #[serde(default)]
    pub interests: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/newsletter",
    request_body = SubscribeRequest,
    responses(
        (status = 200, description = "Subscription acknowledged.", body = SubscriptionDto),
        (status = 400, description = "Missing email or unknown interest.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many requests.")
    ),
    tag = "Newsletter"
)]
pub async fn subscribe(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SubscribeRequest>,
) -> HttpResult<Json<SubscriptionDto>> {
    let subscription = state
        .services
        .newsletter_commands
        .subscribe(SubscribeCommand {
            email: payload.email,
            interests: payload.interests,
        })
        .into_http()?;
    Ok(Json(subscription))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ToggleInterestRequest {
    /// Interests picked so far.
    #[serde(default)]
    pub selected: Vec<String>,
    /// The interest the reader clicked.
    pub interest: String,
}

/// Add the clicked interest to the selection, or remove it when already
/// picked. Nothing is stored; the client keeps the returned selection.
#[utoipa::path(
    post,
    path = "/api/v1/newsletter/interests",
    request_body = ToggleInterestRequest,
    responses(
        (status = 200, description = "Updated selection.", body = InterestSelectionDto),
        (status = 400, description = "Unknown or unsupported interest.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Newsletter"
)]
pub async fn toggle_interest(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ToggleInterestRequest>,
) -> HttpResult<Json<InterestSelectionDto>> {
    let selection = state
        .services
        .newsletter_commands
        .toggle_interest(ToggleInterestCommand {
            selected: payload.selected,
            interest: payload.interest,
        })
        .into_http()?;
    Ok(Json(selection))
}
