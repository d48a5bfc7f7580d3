use actix_web::{patch, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::applicant::application::ports::incoming::use_cases::UpdateApplicantError;
use crate::modules::applicant::application::ports::outgoing::{NewApplicantData, NewSkillData};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateApplicantRequest {
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

#[patch("/api/applicants/{applicant_id}")]
pub async fn update_applicant_handler(
    path: web::Path<i32>,
    req: web::Json<UpdateApplicantRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let applicant_id = path.into_inner();
    let req = req.into_inner();

    let new_applicant = NewApplicantData {
        name: req.name,
        skills: req
            .skills
            .into_iter()
            .map(|skill| NewSkillData { name: skill.name })
            .collect(),
    };

    match data
        .applicant
        .update
        .execute(applicant_id, new_applicant)
        .await
    {
        Ok(Some(updated)) => ApiResponse::success(updated),

        Ok(None) => ApiResponse::not_found("APPLICANT_NOT_FOUND", "Could not find applicant"),

        Err(UpdateApplicantError::RepositoryError(e)) => {
            error!("Repository error updating applicant {}: {}", applicant_id, e);
            ApiResponse::internal_error()
        }
    }
}
