use std::collections::HashSet;
use std::fmt;

use chrono::{Local, NaiveDate};

use crate::model::{Company, HIRING_STATUS_VALUES, VISA_VALUES};

/// One finding from the dataset checks, tied to the record that caused it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LintIssue {
    pub index: usize,
    pub company: String,
    pub kind: LintKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LintKind {
    DuplicateName,
    DuplicateUrl,
    InvalidVisa(String),
    InvalidHiringStatus(String),
    HqCount(usize),
    InvalidDate(String),
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LintKind::DuplicateName => {
                write!(f, "[{}] '{}': duplicate company name", self.index, self.company)
            }
            LintKind::DuplicateUrl => write!(
                f,
                "[{}] '{}': careers_url already used by another entry",
                self.index, self.company
            ),
            LintKind::InvalidVisa(value) => write!(
                f,
                "[{}] '{}': invalid visa_sponsorship value '{}'",
                self.index, self.company, value
            ),
            LintKind::InvalidHiringStatus(value) => write!(
                f,
                "[{}] '{}': invalid hiring_status value '{}'",
                self.index, self.company, value
            ),
            LintKind::HqCount(count) => write!(
                f,
                "[{}] '{}': expected exactly one HQ location, found {}",
                self.index, self.company, count
            ),
            LintKind::InvalidDate(value) => write!(
                f,
                "[{}] '{}': last_updated '{}' is not a valid past date (YYYY-MM-DD)",
                self.index, self.company, value
            ),
        }
    }
}

/// Runs the data-contract checks over the whole master set and reports every
/// finding. Rendering stays permissive; these rules only gate the `--lint`
/// mode used when curating the dataset.
pub fn lint_dataset(companies: &[Company]) -> Vec<LintIssue> {
    let mut issues: Vec<LintIssue> = Vec::new();
    let mut seen_names: HashSet<String> = HashSet::new();
    let mut seen_urls: HashSet<String> = HashSet::new();

    for (index, company) in companies.iter().enumerate() {
        let issue = |kind: LintKind| LintIssue {
            index,
            company: company.name.clone(),
            kind,
        };

        let name_key = company.name.trim().to_lowercase();
        if !seen_names.insert(name_key) {
            issues.push(issue(LintKind::DuplicateName));
        }

        let url_key = company.careers_url.trim().to_lowercase();
        if !seen_urls.insert(url_key) {
            issues.push(issue(LintKind::DuplicateUrl));
        }

        if !VISA_VALUES.contains(&company.visa_sponsorship.as_str()) {
            issues.push(issue(LintKind::InvalidVisa(company.visa_sponsorship.clone())));
        }

        if let Some(status) = company.hiring_status.as_deref() {
            if !HIRING_STATUS_VALUES.contains(&status) {
                issues.push(issue(LintKind::InvalidHiringStatus(status.to_string())));
            }
        }

        if !company.locations.is_empty() {
            let hq_count = company.locations.iter().filter(|l| l.is_hq).count();
            if hq_count != 1 {
                issues.push(issue(LintKind::HqCount(hq_count)));
            }
        }

        if let Some(raw) = company.last_updated.as_deref() {
            if !is_valid_past_date(raw) {
                issues.push(issue(LintKind::InvalidDate(raw.to_string())));
            }
        }
    }

    issues
}

fn is_valid_past_date(raw: &str) -> bool {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date <= Local::now().date_naive(),
        Err(_) => false,
    }
}
