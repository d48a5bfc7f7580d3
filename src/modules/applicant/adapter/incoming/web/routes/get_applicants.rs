use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::applicant::application::ports::incoming::use_cases::GetApplicantsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/applicants")]
pub async fn get_applicants_handler(data: web::Data<AppState>) -> impl Responder {
    match data.applicant.get_list.execute().await {
        Ok(applicants) => ApiResponse::success(applicants),

        Err(GetApplicantsError::RepositoryError(e)) => {
            error!("Repository error listing applicants: {}", e);
            ApiResponse::internal_error()
        }
    }
}
