use serde::{Deserialize, Serialize};

/// Visa sponsorship tokens the directory contract allows.
pub const VISA_VALUES: [&str; 3] = ["YES", "NO", "SENIOR_ONLY"];

/// Remote policy tokens the directory contract allows.
pub const REMOTE_VALUES: [&str; 4] = ["GLOBAL", "EU_ONLY", "HYBRID", "ON_SITE"];

/// Hiring status tokens the directory contract allows.
pub const HIRING_STATUS_VALUES: [&str; 2] = ["ACTIVE", "FREEZE"];

/// One office location of a company.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Location {
    pub city: String,
    pub country: String,
    pub is_hq: bool,
}

/// A single company record from the directory.
///
/// Records are read-only for the whole session; the master set is built once
/// by the loader and only ever filtered, never mutated. `visa_sponsorship`
/// and `remote_policy` are kept as the raw tokens from the data file because
/// the filter engine compares the exact stored value and the badge
/// classifier has to cope with tokens outside the known vocabulary.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Company {
    pub name: String,
    #[serde(default)]
    pub visa_sponsorship: String,
    pub locations: Vec<Location>,
    pub remote_policy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,
    pub careers_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hiring_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl Company {
    pub fn hiring_frozen(&self) -> bool {
        self.hiring_status.as_deref() == Some("FREEZE")
    }
}
