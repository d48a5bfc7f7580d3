use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::applicant::application::ports::incoming::use_cases::GetSingleApplicantError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/applicants/{applicant_id}")]
pub async fn get_single_applicant_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let applicant_id = path.into_inner();

    match data.applicant.get_single.execute(applicant_id).await {
        Ok(Some(applicant)) => ApiResponse::success(applicant),

        Ok(None) => ApiResponse::not_found("APPLICANT_NOT_FOUND", "Could not find applicant"),

        Err(GetSingleApplicantError::RepositoryError(e)) => {
            error!("Repository error fetching applicant {}: {}", applicant_id, e);
            ApiResponse::internal_error()
        }
    }
}
