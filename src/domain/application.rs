//! Job application model and basic field validation.
//!
//! An [`ApplicationDraft`] is what the form layer collects from the user; it
//! becomes an [`ApplicationRecord`] once validated against a concrete job.
//! Records are sent to the remote collaborator and never stored locally.
//!
//! Validation here is deliberately minimal (presence and basic format): the
//! excluded form layer owns user-facing validation UX, and the remote side
//! owns authoritative checks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::{JobdeckError, Result};
use crate::domain::JobRecord;

/// Minimum accepted length for the applicant's full name, in characters.
const MIN_NAME_CHARS: usize = 3;

/// Maximum accepted resume size in bytes (5 MiB).
const RESUME_SIZE_LIMIT: usize = 5 * 1024 * 1024;

/// Content types accepted for an attached resume: PDF and Word documents.
const ALLOWED_RESUME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// File name used for the empty placeholder resume.
const PLACEHOLDER_RESUME_NAME: &str = "default_resume";

/// A resume attachment, or an empty placeholder when none was provided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeFile {
    /// Original file name as chosen by the user.
    pub file_name: String,
    /// MIME content type reported for the file; empty for the placeholder
    /// and for records decoded from listing responses.
    pub content_type: String,
    /// Raw file bytes; empty for the placeholder.
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    /// Creates an attached resume from an uploaded file.
    #[must_use]
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Creates the empty placeholder used when the applicant attached nothing.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            file_name: PLACEHOLDER_RESUME_NAME.to_string(),
            content_type: String::new(),
            bytes: Vec::new(),
        }
    }

    /// True iff this is the empty placeholder rather than a real attachment.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.file_name == PLACEHOLDER_RESUME_NAME && self.bytes.is_empty()
    }
}

/// Form fields collected from the applicant before validation.
///
/// `resume` is optional at draft stage; [`ApplicationDraft::into_record`]
/// substitutes the placeholder when it is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDraft {
    /// Applicant's full name.
    pub full_name: String,
    /// Applicant's e-mail address.
    pub email: String,
    /// Optional cover letter text.
    pub cover_letter: Option<String>,
    /// Optional resume attachment.
    pub resume: Option<ResumeFile>,
}

impl ApplicationDraft {
    /// Validates the draft against `job` and stamps it into a record.
    ///
    /// The job's identifier and title are copied in from `job`, the
    /// submission timestamp is set to now, and a missing resume becomes the
    /// empty placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`JobdeckError::Validation`] when:
    /// - the full name is shorter than 3 characters,
    /// - the e-mail address is not of the basic `local@domain.tld` shape,
    /// - an attached resume is not a PDF or Word document,
    /// - an attached resume exceeds 5 MiB.
    pub fn into_record(self, job: &JobRecord) -> Result<ApplicationRecord> {
        if self.full_name.trim().chars().count() < MIN_NAME_CHARS {
            return Err(JobdeckError::Validation(
                "Name must be at least 3 characters".to_string(),
            ));
        }
        if !is_basic_email(&self.email) {
            return Err(JobdeckError::Validation("Invalid email address".to_string()));
        }

        let resume = match self.resume {
            Some(resume) => {
                if !ALLOWED_RESUME_TYPES.contains(&resume.content_type.as_str()) {
                    return Err(JobdeckError::Validation(
                        "Only PDF and Word documents are allowed".to_string(),
                    ));
                }
                if resume.bytes.len() > RESUME_SIZE_LIMIT {
                    return Err(JobdeckError::Validation(
                        "File size should not exceed 5MB".to_string(),
                    ));
                }
                resume
            }
            None => ResumeFile::placeholder(),
        };

        Ok(ApplicationRecord {
            full_name: self.full_name,
            email: self.email,
            cover_letter: self.cover_letter,
            resume,
            job_id: job.id.clone(),
            job_title: job.title.clone(),
            submitted_at: Utc::now(),
        })
    }
}

/// A validated job application ready for submission.
///
/// Created through [`ApplicationDraft::into_record`]; also decoded from the
/// remote collaborator when listing previously submitted applications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    /// Applicant's full name.
    pub full_name: String,
    /// Applicant's e-mail address.
    pub email: String,
    /// Optional cover letter text.
    pub cover_letter: Option<String>,
    /// Resume attachment or placeholder.
    pub resume: ResumeFile,
    /// Identifier of the job applied to.
    pub job_id: String,
    /// Title of the job applied to, denormalized for display.
    pub job_title: String,
    /// When the application was submitted.
    pub submitted_at: DateTime<Utc>,
}

/// Checks the basic `local@domain.tld` e-mail shape.
///
/// Exactly one `@` with a non-empty local part, and a domain containing a dot
/// that is neither its first nor last character.
fn is_basic_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn draft() -> ApplicationDraft {
        ApplicationDraft {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            cover_letter: Some("I enjoy engines.".to_string()),
            resume: None,
        }
    }

    fn job() -> JobRecord {
        JobRecord::new("42", "Backend Engineer", "Acme")
    }

    #[test]
    fn valid_draft_becomes_a_record_with_placeholder_resume() {
        let record = draft().into_record(&job()).unwrap();

        assert_eq!(record.job_id, "42");
        assert_eq!(record.job_title, "Backend Engineer");
        assert!(record.resume.is_placeholder());
        assert_eq!(record.resume.file_name, "default_resume");
    }

    #[test]
    fn attached_pdf_resume_is_accepted() {
        let mut d = draft();
        d.resume = Some(ResumeFile::new("cv.pdf", "application/pdf", vec![1, 2, 3]));

        let record = d.into_record(&job()).unwrap();
        assert!(!record.resume.is_placeholder());
        assert_eq!(record.resume.bytes, vec![1, 2, 3]);
    }

    #[test]
    fn short_name_is_rejected() {
        let mut d = draft();
        d.full_name = "Al".to_string();

        let err = d.into_record(&job()).unwrap_err();
        assert!(matches!(err, JobdeckError::Validation(_)));
    }

    #[rstest]
    #[case("plainaddress")]
    #[case("@no-local.com")]
    #[case("two@@ats.com")]
    #[case("no-dot@domain")]
    #[case("dot-at-end@domain.")]
    fn bad_email_is_rejected(#[case] email: &str) {
        let mut d = draft();
        d.email = email.to_string();

        assert!(d.into_record(&job()).is_err());
    }

    #[test]
    fn wrong_resume_type_is_rejected() {
        let mut d = draft();
        d.resume = Some(ResumeFile::new("cv.png", "image/png", vec![0]));

        let err = d.into_record(&job()).unwrap_err();
        assert!(matches!(err, JobdeckError::Validation(_)));
    }

    #[test]
    fn oversized_resume_is_rejected() {
        let mut d = draft();
        d.resume = Some(ResumeFile::new(
            "cv.pdf",
            "application/pdf",
            vec![0; RESUME_SIZE_LIMIT + 1],
        ));

        assert!(d.into_record(&job()).is_err());
    }
}
