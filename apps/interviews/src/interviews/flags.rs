//! Checkbox groups of the interview questionnaire.
//!
//! Each group arrives as zero or more tokens from a fixed vocabulary and is
//! decoded into independent boolean flags. Unknown tokens are ignored.

use std::collections::HashSet;

/// A multi-select questionnaire field decoded into boolean flags.
pub trait CheckboxGroup: Sized {
    /// Form field name carrying the group's tokens.
    const FIELD: &'static str;

    /// Known `(token, label)` pairs in display order.
    const OPTIONS: &'static [(&'static str, &'static str)];

    fn from_tokens(tokens: &[String]) -> Self;

    /// State of each known token, in `OPTIONS` order.
    fn flags(&self) -> Vec<bool>;

    /// Human-readable labels of the flags that are set.
    fn selected_labels(&self) -> Vec<&'static str> {
        Self::OPTIONS
            .iter()
            .zip(self.flags())
            .filter_map(|((_, label), set)| set.then_some(*label))
            .collect()
    }
}

fn token_set(tokens: &[String]) -> HashSet<&str> {
    tokens.iter().map(String::as_str).collect()
}

/// Where the longest part of the interviewee's process goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LongestProcess {
    pub manual_process: bool,
    pub multiple_sources: bool,
    pub waiting_for_reports: bool,
    pub data_validation: bool,
}

impl CheckboxGroup for LongestProcess {
    const FIELD: &'static str = "longest_process";
    const OPTIONS: &'static [(&'static str, &'static str)] = &[
        ("manual_process", "Manual process"),
        ("multiple_sources", "Multiple data sources"),
        ("waiting_for_reports", "Waiting for reports"),
        ("data_validation", "Data validation"),
    ];

    fn from_tokens(tokens: &[String]) -> Self {
        let set = token_set(tokens);
        LongestProcess {
            manual_process: set.contains("manual_process"),
            multiple_sources: set.contains("multiple_sources"),
            waiting_for_reports: set.contains("waiting_for_reports"),
            data_validation: set.contains("data_validation"),
        }
    }

    fn flags(&self) -> Vec<bool> {
        vec![
            self.manual_process,
            self.multiple_sources,
            self.waiting_for_reports,
            self.data_validation,
        ]
    }
}

/// Problems with the information the interviewee works with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InfoChallenge {
    pub outdated: bool,
    pub hard_to_access: bool,
    pub scattered_data: bool,
    pub missing_reports: bool,
    pub hard_to_generate_reports: bool,
}

impl CheckboxGroup for InfoChallenge {
    const FIELD: &'static str = "info_challenge";
    const OPTIONS: &'static [(&'static str, &'static str)] = &[
        ("outdated", "Outdated information"),
        ("hard_to_access", "Hard to access"),
        ("scattered_data", "Scattered data"),
        ("missing_reports", "Missing reports"),
        ("hard_to_generate_reports", "Reports hard to generate"),
    ];

    fn from_tokens(tokens: &[String]) -> Self {
        let set = token_set(tokens);
        InfoChallenge {
            outdated: set.contains("outdated"),
            hard_to_access: set.contains("hard_to_access"),
            scattered_data: set.contains("scattered_data"),
            missing_reports: set.contains("missing_reports"),
            hard_to_generate_reports: set.contains("hard_to_generate_reports"),
        }
    }

    fn flags(&self) -> Vec<bool> {
        vec![
            self.outdated,
            self.hard_to_access,
            self.scattered_data,
            self.missing_reports,
            self.hard_to_generate_reports,
        ]
    }
}

/// Infrastructure pain points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InfrastructureChallenge {
    pub manual_dependency: bool,
    pub lack_of_standardization: bool,
    pub vulnerabilities: bool,
    pub poor_scalability: bool,
}

impl CheckboxGroup for InfrastructureChallenge {
    const FIELD: &'static str = "infrastructure_challenge";
    const OPTIONS: &'static [(&'static str, &'static str)] = &[
        ("manual_dependency", "Dependency on manual work"),
        ("lack_of_standardization", "Lack of standardization"),
        ("vulnerabilities", "Vulnerabilities"),
        ("poor_scalability", "Poor scalability"),
    ];

    fn from_tokens(tokens: &[String]) -> Self {
        let set = token_set(tokens);
        InfrastructureChallenge {
            manual_dependency: set.contains("manual_dependency"),
            lack_of_standardization: set.contains("lack_of_standardization"),
            vulnerabilities: set.contains("vulnerabilities"),
            poor_scalability: set.contains("poor_scalability"),
        }
    }

    fn flags(&self) -> Vec<bool> {
        vec![
            self.manual_dependency,
            self.lack_of_standardization,
            self.vulnerabilities,
            self.poor_scalability,
        ]
    }
}

/// What better data would help decide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecisionDriver {
    pub resource_optimization: bool,
    pub cost_reduction: bool,
    pub better_planning: bool,
    pub inefficiency_identification: bool,
}

impl CheckboxGroup for DecisionDriver {
    const FIELD: &'static str = "decision_driver";
    const OPTIONS: &'static [(&'static str, &'static str)] = &[
        ("resource_optimization", "Resource optimization"),
        ("cost_reduction", "Cost reduction"),
        ("better_planning", "Better planning"),
        ("inefficiency_identification", "Identifying inefficiencies"),
    ];

    fn from_tokens(tokens: &[String]) -> Self {
        let set = token_set(tokens);
        DecisionDriver {
            resource_optimization: set.contains("resource_optimization"),
            cost_reduction: set.contains("cost_reduction"),
            better_planning: set.contains("better_planning"),
            inefficiency_identification: set.contains("inefficiency_identification"),
        }
    }

    fn flags(&self) -> Vec<bool> {
        vec![
            self.resource_optimization,
            self.cost_reduction,
            self.better_planning,
            self.inefficiency_identification,
        ]
    }
}
