use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::handlers::AppJson;
use crate::models::{ContactSubmission, EmailAddress, NewsletterSubscription, TrialWaitlistEntry};
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactSubmissionRequest {
    #[schema(value_type = String, example = "jane@example.com")]
    pub email: EmailAddress,
    pub name: String,
    pub subject: String,
    pub message: String,
    pub company: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NewsletterSubscriptionRequest {
    #[schema(value_type = String, example = "jane@example.com")]
    pub email: EmailAddress,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TrialWaitlistRequest {
    #[schema(value_type = String, example = "jane@example.com")]
    pub email: EmailAddress,
    pub full_name: String,
    pub company: Option<String>,
    pub selected_plan: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactSubmissionResponse {
    pub message: String,
    pub submission_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NewsletterSubscriptionResponse {
    pub message: String,
    pub subscription_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TrialWaitlistResponse {
    pub message: String,
    pub waitlist_id: String,
}

// ============ Handlers ============

/// Submit a contact form
#[utoipa::path(
    post,
    path = "/api/v1/contact-submissions",
    request_body = ContactSubmissionRequest,
    responses(
        (status = 201, description = "Contact form accepted", body = ContactSubmissionResponse),
        (status = 422, description = "Validation error")
    ),
    tag = "Marketing"
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ContactSubmissionRequest>,
) -> AppResult<(StatusCode, Json<ContactSubmissionResponse>)> {
    let submission = ContactSubmission {
        email: payload.email,
        name: payload.name,
        subject: payload.subject,
        message: payload.message,
        company: payload.company,
    };

    let submission_id = state.submissions.save_contact(submission).await?;

    Ok((
        StatusCode::CREATED,
        Json(ContactSubmissionResponse {
            message: "Contact form submitted successfully".to_string(),
            submission_id,
        }),
    ))
}

/// Subscribe to the newsletter
#[utoipa::path(
    post,
    path = "/api/v1/newsletter-subscriptions",
    request_body = NewsletterSubscriptionRequest,
    responses(
        (status = 201, description = "Subscription accepted", body = NewsletterSubscriptionResponse),
        (status = 422, description = "Validation error")
    ),
    tag = "Marketing"
)]
pub async fn subscribe_newsletter(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewsletterSubscriptionRequest>,
) -> AppResult<(StatusCode, Json<NewsletterSubscriptionResponse>)> {
    let subscription_id = state
        .submissions
        .save_newsletter(NewsletterSubscription {
            email: payload.email,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(NewsletterSubscriptionResponse {
            message: "Subscribed to newsletter successfully".to_string(),
            subscription_id,
        }),
    ))
}

/// Join the trial waitlist
#[utoipa::path(
    post,
    path = "/api/v1/trial-waitlist",
    request_body = TrialWaitlistRequest,
    responses(
        (status = 201, description = "Waitlist entry accepted", body = TrialWaitlistResponse),
        (status = 422, description = "Validation error")
    ),
    tag = "Marketing"
)]
pub async fn join_trial_waitlist(
    State(state): State<AppState>,
    AppJson(payload): AppJson<TrialWaitlistRequest>,
) -> AppResult<(StatusCode, Json<TrialWaitlistResponse>)> {
    let entry = TrialWaitlistEntry {
        email: payload.email,
        full_name: payload.full_name,
        company: payload.company,
        selected_plan: payload.selected_plan,
    };

    let waitlist_id = state.submissions.save_waitlist(entry).await?;

    Ok((
        StatusCode::CREATED,
        Json(TrialWaitlistResponse {
            message: "Added to trial waitlist successfully".to_string(),
            waitlist_id,
        }),
    ))
}
