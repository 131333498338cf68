use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use crate::errors::SubmissionError;
use crate::interviews::flags::{
    CheckboxGroup, DecisionDriver, InfoChallenge, InfrastructureChallenge, LongestProcess,
};
use crate::models::interview::InterviewRecord;

/// Department value that defers to the free-text override field.
pub const OTHER_DEPARTMENT: &str = "Other";

/// Fixed department choices offered by the questionnaire.
pub const DEPARTMENTS: &[&str] = &[
    "Finance",
    "Operations",
    "Sales",
    "Human Resources",
    "IT",
    OTHER_DEPARTMENT,
];

/// Raw `application/x-www-form-urlencoded` payload of `POST /submit`.
/// Checkbox groups arrive as repeated keys.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct InterviewForm {
    pub contact_name: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub other_department: Option<String>,
    pub interview_date: Option<String>,
    pub comments: Option<String>,
    #[serde(default)]
    pub longest_process: Vec<String>,
    #[serde(default)]
    pub info_challenge: Vec<String>,
    #[serde(default)]
    pub infrastructure_challenge: Vec<String>,
    #[serde(default)]
    pub decision_driver: Vec<String>,
}

/// Scalar fields after extraction and the department override.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarFields {
    pub contact_name: String,
    pub job_title: Option<String>,
    pub department: String,
    pub interview_date: Option<NaiveDate>,
    pub comments: Option<String>,
}

/// The four checkbox groups decoded into flags.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DecodedFlags {
    pub longest_process: LongestProcess,
    pub info_challenge: InfoChallenge,
    pub infrastructure_challenge: InfrastructureChallenge,
    pub decision_driver: DecisionDriver,
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl InterviewForm {
    /// Pulls the scalar fields, resolving `department == "Other"` to the override.
    pub fn scalar_fields(&self) -> Result<ScalarFields, SubmissionError> {
        let contact_name =
            non_blank(&self.contact_name).ok_or(SubmissionError::MissingField("contact_name"))?;

        let department = match non_blank(&self.department) {
            Some(d) if d == OTHER_DEPARTMENT => non_blank(&self.other_department)
                .ok_or(SubmissionError::MissingField("other_department"))?,
            Some(d) => d,
            None => return Err(SubmissionError::MissingField("department")),
        };

        let interview_date = match non_blank(&self.interview_date) {
            Some(raw) => Some(
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|_| SubmissionError::InvalidDate(raw))?,
            ),
            None => None,
        };

        Ok(ScalarFields {
            contact_name,
            job_title: non_blank(&self.job_title),
            department,
            interview_date,
            comments: non_blank(&self.comments),
        })
    }

    pub fn decode_flags(&self) -> DecodedFlags {
        DecodedFlags {
            longest_process: LongestProcess::from_tokens(&self.longest_process),
            info_challenge: InfoChallenge::from_tokens(&self.info_challenge),
            infrastructure_challenge: InfrastructureChallenge::from_tokens(
                &self.infrastructure_challenge,
            ),
            decision_driver: DecisionDriver::from_tokens(&self.decision_driver),
        }
    }
}

impl ScalarFields {
    pub fn into_record(self, flags: DecodedFlags, recorded_at: DateTime<Utc>) -> InterviewRecord {
        InterviewRecord {
            contact_name: self.contact_name,
            job_title: self.job_title,
            department: self.department,
            interview_date: self.interview_date,
            longest_process: flags.longest_process,
            info_challenge: flags.info_challenge,
            infrastructure_challenge: flags.infrastructure_challenge,
            decision_driver: flags.decision_driver,
            comments: self.comments,
            recorded_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, department: &str) -> InterviewForm {
        InterviewForm {
            contact_name: Some(name.to_string()),
            department: Some(department.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_other_department_uses_override() {
        let mut f = form("Ana Ruiz", "Other");
        f.other_department = Some("Logistics".to_string());
        assert_eq!(f.scalar_fields().unwrap().department, "Logistics");
    }

    #[test]
    fn test_other_department_without_override_rejected() {
        let f = form("Ana Ruiz", "Other");
        assert!(matches!(
            f.scalar_fields(),
            Err(SubmissionError::MissingField("other_department"))
        ));
    }

    #[test]
    fn test_override_ignored_for_fixed_department() {
        let mut f = form("Ana Ruiz", "Finance");
        f.other_department = Some("Logistics".to_string());
        assert_eq!(f.scalar_fields().unwrap().department, "Finance");
    }

    #[test]
    fn test_blank_contact_rejected() {
        let f = form("   ", "Finance");
        assert!(matches!(
            f.scalar_fields(),
            Err(SubmissionError::MissingField("contact_name"))
        ));
    }

    #[test]
    fn test_missing_department_rejected() {
        let f = InterviewForm {
            contact_name: Some("Ana Ruiz".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            f.scalar_fields(),
            Err(SubmissionError::MissingField("department"))
        ));
    }

    #[test]
    fn test_optional_fields_blank_become_none() {
        let mut f = form("Ana Ruiz", "IT");
        f.job_title = Some("".to_string());
        f.comments = Some("  ".to_string());
        f.interview_date = Some("".to_string());
        let fields = f.scalar_fields().unwrap();
        assert_eq!(fields.job_title, None);
        assert_eq!(fields.comments, None);
        assert_eq!(fields.interview_date, None);
    }

    #[test]
    fn test_date_parsed() {
        let mut f = form("Ana Ruiz", "IT");
        f.interview_date = Some("2024-03-15".to_string());
        assert_eq!(
            f.scalar_fields().unwrap().interview_date,
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
    }

    #[test]
    fn test_bad_date_rejected() {
        let mut f = form("Ana Ruiz", "IT");
        f.interview_date = Some("15/03/2024".to_string());
        assert!(matches!(
            f.scalar_fields(),
            Err(SubmissionError::InvalidDate(raw)) if raw == "15/03/2024"
        ));
    }

    #[test]
    fn test_decode_flags_per_group() {
        let f = InterviewForm {
            longest_process: vec!["manual_process".to_string()],
            info_challenge: vec!["scattered_data".to_string(), "bogus".to_string()],
            decision_driver: vec!["cost_reduction".to_string()],
            ..Default::default()
        };
        let flags = f.decode_flags();
        assert!(flags.longest_process.manual_process);
        assert!(flags.info_challenge.scattered_data);
        assert!(!flags.info_challenge.outdated);
        assert_eq!(flags.infrastructure_challenge, InfrastructureChallenge::default());
        assert!(flags.decision_driver.cost_reduction);
    }
}
