use actix_web::{HttpResponse, web};
use anyhow::Context;

use crate::email_log::EmailLog;
use crate::telemetry::spawn_blocking_with_async;

use super::error_chain_fmt;

#[derive(serde::Deserialize)]
pub struct EmailSubmission {
    email: String,
}

#[tracing::instrument(
    name = "Capture an email submission",
    skip(submission, email_log),
    fields(submitted_email = %submission.email)
)]
pub async fn capture_email(
    submission: web::Json<EmailSubmission>,
    email_log: web::Data<EmailLog>,
) -> Result<HttpResponse, CaptureError> {
    let log = email_log.get_ref().clone();
    let email = submission.into_inner().email;

    spawn_blocking_with_async(move || log.append(&email))
        .await
        .context("Failed to run the capture-log append to completion")?
        .context("Failed to append the address to the capture log")?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Email written to CSV successfully"
    })))
}

#[derive(thiserror::Error)]
pub enum CaptureError {
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for CaptureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl actix_web::ResponseError for CaptureError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
    }
}
