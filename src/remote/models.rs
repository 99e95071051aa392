//! Wire representations of the remote API's records.
//!
//! The board's JSON uses camelCase field names and slightly looser typing
//! than the domain layer wants (optional job type, optional tag list). These
//! DTOs absorb that shape at the boundary so domain types stay clean, the
//! same way a storage layer keeps its records separate from domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::Result;
use crate::domain::{ApplicationRecord, JobRecord, ResumeFile};

/// Job type substituted when the remote record omits one.
const DEFAULT_JOB_TYPE: &str = "Full Time";

/// One job listing as the remote API serializes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDto {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    /// Absent on some older records; defaults to "Full Time" on decode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl From<JobDto> for JobRecord {
    fn from(dto: JobDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            company: dto.company,
            location: dto.location,
            description: dto.description,
            job_type: dto.job_type.unwrap_or_else(|| DEFAULT_JOB_TYPE.to_string()),
            created_at: dto.created_at,
            logo: dto.logo,
            salary_range: dto.salary_range,
            tags: dto.tags.unwrap_or_default(),
        }
    }
}

/// One application as the remote API serializes it.
///
/// The resume travels as its file name only; listing responses never carry
/// the attachment bytes (those go over a separate upload channel owned by
/// the transport layer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDto {
    pub full_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    pub resume: String,
    pub job_id: String,
    pub job_title: String,
    pub created_at: DateTime<Utc>,
}

impl From<&ApplicationRecord> for ApplicationDto {
    fn from(record: &ApplicationRecord) -> Self {
        Self {
            full_name: record.full_name.clone(),
            email: record.email.clone(),
            cover_letter: record.cover_letter.clone(),
            resume: record.resume.file_name.clone(),
            job_id: record.job_id.clone(),
            job_title: record.job_title.clone(),
            created_at: record.submitted_at,
        }
    }
}

impl From<ApplicationDto> for ApplicationRecord {
    fn from(dto: ApplicationDto) -> Self {
        Self {
            full_name: dto.full_name,
            email: dto.email,
            cover_letter: dto.cover_letter,
            resume: ResumeFile {
                file_name: dto.resume,
                content_type: String::new(),
                bytes: Vec::new(),
            },
            job_id: dto.job_id,
            job_title: dto.job_title,
            submitted_at: dto.created_at,
        }
    }
}

/// Decodes a job listing response body.
///
/// # Errors
///
/// Returns [`Decode`](crate::domain::JobdeckError::Decode) when the body is
/// not a JSON array of job records.
pub fn decode_jobs(body: &str) -> Result<Vec<JobRecord>> {
    let dtos: Vec<JobDto> = serde_json::from_str(body)?;
    Ok(dtos.into_iter().map(JobRecord::from).collect())
}

/// Decodes a single-job response body.
///
/// # Errors
///
/// Returns [`Decode`](crate::domain::JobdeckError::Decode) when the body is
/// not a JSON job record.
pub fn decode_job(body: &str) -> Result<JobRecord> {
    let dto: JobDto = serde_json::from_str(body)?;
    Ok(dto.into())
}

/// Decodes an applications listing response body.
///
/// # Errors
///
/// Returns [`Decode`](crate::domain::JobdeckError::Decode) when the body is
/// not a JSON array of application records.
pub fn decode_applications(body: &str) -> Result<Vec<ApplicationRecord>> {
    let dtos: Vec<ApplicationDto> = serde_json::from_str(body)?;
    Ok(dtos.into_iter().map(ApplicationRecord::from).collect())
}

/// Encodes an application for submission.
///
/// # Errors
///
/// Returns [`Decode`](crate::domain::JobdeckError::Decode) if serialization
/// fails, which cannot happen for well-formed records.
pub fn encode_application(record: &ApplicationRecord) -> Result<String> {
    Ok(serde_json::to_string(&ApplicationDto::from(record))?)
}
