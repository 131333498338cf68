use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use crate::interviews::flags::{
    DecisionDriver, InfoChallenge, InfrastructureChallenge, LongestProcess,
};

/// One persisted questionnaire response.
#[derive(Debug, Clone, PartialEq)]
pub struct InterviewRecord {
    pub contact_name: String,
    pub job_title: Option<String>,
    pub department: String,
    pub interview_date: Option<NaiveDate>,
    pub longest_process: LongestProcess,
    pub info_challenge: InfoChallenge,
    pub infrastructure_challenge: InfrastructureChallenge,
    pub decision_driver: DecisionDriver,
    pub comments: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

/// Storage shape of `interview_data`. Flags are SMALLINT 0/1.
#[derive(Debug, Clone, FromRow)]
pub struct InterviewRow {
    pub contact_name: String,
    pub job_title: Option<String>,
    pub department: String,
    pub interview_date: Option<NaiveDate>,

    pub longest_process_manual_process: i16,
    pub longest_process_multiple_sources: i16,
    pub longest_process_waiting_for_reports: i16,
    pub longest_process_data_validation: i16,

    pub info_challenge_outdated: i16,
    pub info_challenge_hard_to_access: i16,
    pub info_challenge_scattered_data: i16,
    pub info_challenge_missing_reports: i16,
    pub info_challenge_hard_to_generate_reports: i16,

    pub infrastructure_challenge_manual_dependency: i16,
    pub infrastructure_challenge_lack_of_standardization: i16,
    pub infrastructure_challenge_vulnerabilities: i16,
    pub infrastructure_challenge_poor_scalability: i16,

    pub decision_driver_resource_optimization: i16,
    pub decision_driver_cost_reduction: i16,
    pub decision_driver_better_planning: i16,
    pub decision_driver_inefficiency_identification: i16,

    pub comments: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

fn to_flag(value: bool) -> i16 {
    i16::from(value)
}

fn from_flag(value: i16) -> bool {
    value != 0
}

impl From<&InterviewRecord> for InterviewRow {
    fn from(r: &InterviewRecord) -> Self {
        InterviewRow {
            contact_name: r.contact_name.clone(),
            job_title: r.job_title.clone(),
            department: r.department.clone(),
            interview_date: r.interview_date,

            longest_process_manual_process: to_flag(r.longest_process.manual_process),
            longest_process_multiple_sources: to_flag(r.longest_process.multiple_sources),
            longest_process_waiting_for_reports: to_flag(r.longest_process.waiting_for_reports),
            longest_process_data_validation: to_flag(r.longest_process.data_validation),

            info_challenge_outdated: to_flag(r.info_challenge.outdated),
            info_challenge_hard_to_access: to_flag(r.info_challenge.hard_to_access),
            info_challenge_scattered_data: to_flag(r.info_challenge.scattered_data),
            info_challenge_missing_reports: to_flag(r.info_challenge.missing_reports),
            info_challenge_hard_to_generate_reports: to_flag(
                r.info_challenge.hard_to_generate_reports,
            ),

            infrastructure_challenge_manual_dependency: to_flag(
                r.infrastructure_challenge.manual_dependency,
            ),
            infrastructure_challenge_lack_of_standardization: to_flag(
                r.infrastructure_challenge.lack_of_standardization,
            ),
            infrastructure_challenge_vulnerabilities: to_flag(
                r.infrastructure_challenge.vulnerabilities,
            ),
            infrastructure_challenge_poor_scalability: to_flag(
                r.infrastructure_challenge.poor_scalability,
            ),

            decision_driver_resource_optimization: to_flag(r.decision_driver.resource_optimization),
            decision_driver_cost_reduction: to_flag(r.decision_driver.cost_reduction),
            decision_driver_better_planning: to_flag(r.decision_driver.better_planning),
            decision_driver_inefficiency_identification: to_flag(
                r.decision_driver.inefficiency_identification,
            ),

            comments: r.comments.clone(),
            recorded_at: r.recorded_at,
        }
    }
}

impl From<InterviewRow> for InterviewRecord {
    fn from(row: InterviewRow) -> Self {
        InterviewRecord {
            contact_name: row.contact_name,
            job_title: row.job_title,
            department: row.department,
            interview_date: row.interview_date,
            longest_process: LongestProcess {
                manual_process: from_flag(row.longest_process_manual_process),
                multiple_sources: from_flag(row.longest_process_multiple_sources),
                waiting_for_reports: from_flag(row.longest_process_waiting_for_reports),
                data_validation: from_flag(row.longest_process_data_validation),
            },
            info_challenge: InfoChallenge {
                outdated: from_flag(row.info_challenge_outdated),
                hard_to_access: from_flag(row.info_challenge_hard_to_access),
                scattered_data: from_flag(row.info_challenge_scattered_data),
                missing_reports: from_flag(row.info_challenge_missing_reports),
                hard_to_generate_reports: from_flag(row.info_challenge_hard_to_generate_reports),
            },
            infrastructure_challenge: InfrastructureChallenge {
                manual_dependency: from_flag(row.infrastructure_challenge_manual_dependency),
                lack_of_standardization: from_flag(
                    row.infrastructure_challenge_lack_of_standardization,
                ),
                vulnerabilities: from_flag(row.infrastructure_challenge_vulnerabilities),
                poor_scalability: from_flag(row.infrastructure_challenge_poor_scalability),
            },
            decision_driver: DecisionDriver {
                resource_optimization: from_flag(row.decision_driver_resource_optimization),
                cost_reduction: from_flag(row.decision_driver_cost_reduction),
                better_planning: from_flag(row.decision_driver_better_planning),
                inefficiency_identification: from_flag(
                    row.decision_driver_inefficiency_identification,
                ),
            },
            comments: row.comments,
            recorded_at: row.recorded_at,
        }
    }
}
