use crate::model::Company;

/// Dropdown-style selector with the `all` sentinel meaning "no constraint".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selector {
    #[default]
    All,
    Value(String),
}

impl Selector {
    /// Parses user input. Empty input and `all` (any case) mean no
    /// constraint; anything else is matched verbatim against the record.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Selector::All
        } else {
            Selector::Value(trimmed.to_string())
        }
    }

    pub fn matches(&self, actual: &str) -> bool {
        match self {
            Selector::All => true,
            Selector::Value(value) => value == actual,
        }
    }
}

/// The three pieces of filter input: free-text query plus the two selectors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub visa: Selector,
    pub remote: Selector,
}

impl FilterState {
    pub fn matches(&self, company: &Company) -> bool {
        matches_search(company, &self.query.to_lowercase())
            && self.visa.matches(&company.visa_sponsorship)
            && self.remote.matches(&company.remote_policy)
    }

    /// Recomputes the filtered subsequence from scratch over the full master
    /// set. Relative order is preserved; the master set is never touched.
    pub fn apply<'a>(&self, master: &'a [Company]) -> Vec<&'a Company> {
        master.iter().filter(|c| self.matches(c)).collect()
    }
}

// Search is an OR across name, tech stack and location city/country,
// case-insensitive substring. An empty query matches everything.
fn matches_search(company: &Company, query_lower: &str) -> bool {
    if query_lower.is_empty() {
        return true;
    }
    if company.name.to_lowercase().contains(query_lower) {
        return true;
    }
    if let Some(tech_stack) = company.tech_stack.as_ref() {
        if tech_stack
            .iter()
            .any(|t| t.to_lowercase().contains(query_lower))
        {
            return true;
        }
    }
    company.locations.iter().any(|l| {
        l.country.to_lowercase().contains(query_lower) || l.city.to_lowercase().contains(query_lower)
    })
}
