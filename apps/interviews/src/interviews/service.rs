use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

use crate::errors::{StoreError, SubmissionError};
use crate::interviews::form::InterviewForm;
use crate::interviews::store::InterviewStore;
use crate::models::interview::InterviewRecord;

/// Result of a listing. A failed read yields no records and sets `load_failed`
/// so the page can show a notice; it is never an error.
#[derive(Debug, Default)]
pub struct InterviewListing {
    pub interviews: Vec<InterviewRecord>,
    pub load_failed: bool,
}

/// Successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Created {
    pub contact_name: String,
    pub recorded_at: DateTime<Utc>,
}

/// Every stored interview, newest first.
pub async fn list_interviews(store: &dyn InterviewStore) -> InterviewListing {
    match store.list_newest_first().await {
        Ok(interviews) => {
            info!("Fetched {} interview records", interviews.len());
            InterviewListing {
                interviews,
                load_failed: false,
            }
        }
        Err(e) => {
            error!("Failed to fetch interview records: {e}");
            InterviewListing {
                interviews: Vec::new(),
                load_failed: true,
            }
        }
    }
}

pub async fn submit_interview(
    store: &dyn InterviewStore,
    form: &InterviewForm,
) -> Result<Created, SubmissionError> {
    submit_interview_at(store, form, Utc::now()).await
}

/// Validates and stores one submission, stamping it with `recorded_at`.
///
/// The existence check and the insert are separate statements. Without the
/// opt-in index in `sql/unique_contact_name.sql`, concurrent submissions of
/// the same name can both be stored.
pub async fn submit_interview_at(
    store: &dyn InterviewStore,
    form: &InterviewForm,
    recorded_at: DateTime<Utc>,
) -> Result<Created, SubmissionError> {
    let fields = form.scalar_fields().inspect_err(|e| warn!("Rejected submission: {e}"))?;

    if store
        .contact_exists(&fields.contact_name)
        .await
        .inspect_err(|e| error!("Duplicate check failed: {e}"))?
    {
        warn!("Duplicate contact rejected: {}", fields.contact_name);
        return Err(SubmissionError::DuplicateContact(fields.contact_name));
    }

    let record = fields.into_record(form.decode_flags(), recorded_at);

    match store.insert(&record).await {
        Ok(()) => {
            info!("Stored interview for {}", record.contact_name);
            Ok(Created {
                contact_name: record.contact_name,
                recorded_at: record.recorded_at,
            })
        }
        Err(StoreError::UniqueViolation) => {
            warn!(
                "Duplicate contact caught by unique index: {}",
                record.contact_name
            );
            Err(SubmissionError::DuplicateContact(record.contact_name))
        }
        Err(e) => {
            error!("Failed to store interview: {e}");
            Err(e.into())
        }
    }
}
