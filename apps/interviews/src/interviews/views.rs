use askama::Template;

use crate::interviews::flags::{
    CheckboxGroup, DecisionDriver, InfoChallenge, InfrastructureChallenge, LongestProcess,
};
use crate::interviews::flash::Flash;
use crate::interviews::form::{DEPARTMENTS, OTHER_DEPARTMENT};
use crate::models::interview::InterviewRecord;

/// Notice shown when the listing could not be loaded.
pub const LOAD_FAILED_NOTICE: &str =
    "Stored interviews could not be loaded right now. Please try again later.";

pub struct CheckboxOption {
    pub token: &'static str,
    pub label: &'static str,
}

pub struct CheckboxGroupView {
    pub field: &'static str,
    pub title: &'static str,
    pub options: Vec<CheckboxOption>,
}

impl CheckboxGroupView {
    fn of<G: CheckboxGroup>(title: &'static str) -> Self {
        CheckboxGroupView {
            field: G::FIELD,
            title,
            options: G::OPTIONS
                .iter()
                .map(|&(token, label)| CheckboxOption { token, label })
                .collect(),
        }
    }
}

/// One table row, pre-formatted for display.
pub struct InterviewRowView {
    pub contact_name: String,
    pub job_title: String,
    pub department: String,
    pub interview_date: String,
    pub longest_process: String,
    pub info_challenge: String,
    pub infrastructure_challenge: String,
    pub decision_driver: String,
    pub comments: String,
    pub recorded_at: String,
}

impl From<&InterviewRecord> for InterviewRowView {
    fn from(r: &InterviewRecord) -> Self {
        InterviewRowView {
            contact_name: r.contact_name.clone(),
            job_title: r.job_title.clone().unwrap_or_default(),
            department: r.department.clone(),
            interview_date: r
                .interview_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            longest_process: r.longest_process.selected_labels().join(", "),
            info_challenge: r.info_challenge.selected_labels().join(", "),
            infrastructure_challenge: r.infrastructure_challenge.selected_labels().join(", "),
            decision_driver: r.decision_driver.selected_labels().join(", "),
            comments: r.comments.clone().unwrap_or_default(),
            recorded_at: r.recorded_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        }
    }
}

/// A notice rendered above the form.
pub struct NoticeView {
    pub kind: &'static str,
    pub message: String,
}

#[derive(Template)]
#[template(path = "interviews.html")]
pub struct InterviewsPage {
    pub notices: Vec<NoticeView>,
    pub departments: Vec<&'static str>,
    pub other_department: &'static str,
    pub groups: Vec<CheckboxGroupView>,
    pub rows: Vec<InterviewRowView>,
}

impl InterviewsPage {
    pub fn new(records: &[InterviewRecord], flash: Option<Flash>, load_failed: bool) -> Self {
        let mut notices = Vec::new();
        if let Some(flash) = flash {
            notices.push(NoticeView {
                kind: flash.kind.as_str(),
                message: flash.message,
            });
        }
        if load_failed {
            notices.push(NoticeView {
                kind: "error",
                message: LOAD_FAILED_NOTICE.to_string(),
            });
        }

        InterviewsPage {
            notices,
            departments: DEPARTMENTS.to_vec(),
            other_department: OTHER_DEPARTMENT,
            groups: vec![
                CheckboxGroupView::of::<LongestProcess>(
                    "Which part of your process takes the longest?",
                ),
                CheckboxGroupView::of::<InfoChallenge>(
                    "What challenges do you face with information?",
                ),
                CheckboxGroupView::of::<InfrastructureChallenge>(
                    "What infrastructure challenges do you face?",
                ),
                CheckboxGroupView::of::<DecisionDriver>(
                    "Which decisions would better data support?",
                ),
            ],
            rows: records.iter().map(InterviewRowView::from).collect(),
        }
    }
}
