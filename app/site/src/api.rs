//! Relay for the rendered forms: `POST /api/contact` and `POST /api/newsletter`.
//!
//! Bodies are accepted as JSON or as a urlencoded HTML form post. Each
//! request runs through its own [`SiteContext`], which validates it and
//! forwards it to the form backend at `api.base_url`. The response carries
//! the toast that was raised: 201 when the backend accepted it, 400 when a
//! field is missing or malformed, 502 when the backend failed.

use crate::state::AppState;
use axum::{
    Form, Json,
    extract::{FromRequest, Request, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use client::ApiClient;
use dcore::{ContactForm, NewsletterForm, Outcome, ProjectInquiry, SiteContext};
use serde::de::DeserializeOwned;

/// A form body sent either as JSON or urlencoded.
pub struct Submission<T>(pub T);

impl<S, T> FromRequest<S> for Submission<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let urlencoded = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        if urlencoded {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(value))
        }
    }
}

/// `POST /api/contact`
///
/// A body carrying any of the project details (phone, company, budget,
/// timeline) is treated as a contact page inquiry and folded into the
/// message; anything else is a plain contact request.
pub async fn contact(
    State(state): State<AppState>,
    Submission(mut inquiry): Submission<ProjectInquiry>,
) -> Response {
    let ctx = SiteContext::new(state.api.clone());
    let outcome = if has_details(&inquiry) {
        ctx.submit_inquiry(&mut inquiry).await
    } else {
        let mut form = ContactForm {
            name: inquiry.name,
            email: inquiry.email,
            service: inquiry.service,
            message: inquiry.message,
        };
        ctx.submit_contact(&mut form).await
    };
    respond(&ctx, outcome)
}

/// `POST /api/newsletter`
pub async fn newsletter(
    State(state): State<AppState>,
    Submission(mut form): Submission<NewsletterForm>,
) -> Response {
    let ctx = SiteContext::new(state.api.clone());
    let outcome = ctx.subscribe(&mut form).await;
    respond(&ctx, outcome)
}

fn has_details(inquiry: &ProjectInquiry) -> bool {
    [
        &inquiry.phone,
        &inquiry.company,
        &inquiry.budget,
        &inquiry.timeline,
    ]
    .iter()
    .any(|field| !field.trim().is_empty())
}

fn respond(ctx: &SiteContext<ApiClient>, outcome: Outcome) -> Response {
    let status = match outcome {
        Outcome::Rejected(e) => {
            let body = serde_json::json!({ "error": e.to_string() });
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
        Outcome::Sent => StatusCode::CREATED,
        Outcome::Failed => StatusCode::BAD_GATEWAY,
    };
    (status, Json(ctx.notifier.latest())).into_response()
}
