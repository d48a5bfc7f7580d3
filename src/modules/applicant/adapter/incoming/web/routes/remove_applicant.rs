use actix_web::{delete, web, Responder};
use tracing::error;

use crate::modules::applicant::application::ports::incoming::use_cases::RemoveApplicantError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/applicants/{applicant_id}")]
pub async fn remove_applicant_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let applicant_id = path.into_inner();

    match data.applicant.remove.execute(applicant_id).await {
        Ok(true) => ApiResponse::success("Successfully deleted applicant"),

        Ok(false) => ApiResponse::not_found("APPLICANT_NOT_FOUND", "Could not find applicant"),

        Err(RemoveApplicantError::RepositoryError(e)) => {
            error!("Repository error removing applicant {}: {}", applicant_id, e);
            ApiResponse::internal_error()
        }
    }
}
