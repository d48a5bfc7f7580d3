use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::applicant::application::ports::incoming::use_cases::CreateApplicantError;
use crate::modules::applicant::application::ports::outgoing::{NewApplicantData, NewSkillData};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateApplicantRequest {
    pub name: String,
    pub skills: Vec<SkillEntry>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SkillEntry {
    pub name: String,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/applicants")]
pub async fn create_applicant_handler(
    req: web::Json<CreateApplicantRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let new_applicant = NewApplicantData {
        name: req.name,
        skills: req
            .skills
            .into_iter()
            .map(|skill| NewSkillData { name: skill.name })
            .collect(),
    };

    match data.applicant.create.execute(new_applicant).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateApplicantError::RepositoryError(e)) => {
            error!("Repository error creating applicant: {}", e);
            ApiResponse::internal_error()
        }
    }
}
