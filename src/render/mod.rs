use colored::Colorize;
use itertools::Itertools;

use crate::model::{Company, Location};

pub const NO_MATCHES_TEXT: &str = "No companies match your filters.";
pub const LOAD_ERROR_TEXT: &str = "Error loading data. Please try again later.";

/// Three-way badge classification with a catch-all default. Anything that is
/// not exactly `NO` or `SENIOR_ONLY` (unknown tokens and the absent-field
/// empty string included) counts as sponsored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisaBadge {
    Sponsored,
    No,
    SeniorOnly,
}

impl VisaBadge {
    pub fn classify(raw: &str) -> Self {
        match raw {
            "NO" => VisaBadge::No,
            "SENIOR_ONLY" => VisaBadge::SeniorOnly,
            _ => VisaBadge::Sponsored,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VisaBadge::Sponsored => "Visa Sponsored",
            VisaBadge::No => "No Visa",
            VisaBadge::SeniorOnly => "Senior Visa",
        }
    }

    pub fn style(self) -> &'static str {
        match self {
            VisaBadge::Sponsored => "yes",
            VisaBadge::No => "no",
            VisaBadge::SeniorOnly => "senior",
        }
    }
}

/// Everything needed to draw one company card, already formatted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    pub badge: VisaBadge,
    pub hiring_freeze: bool,
    pub location_line: String,
    pub remote_line: String,
    pub tech_tags: Vec<String>,
    pub careers_url: String,
}

/// A complete replacement of the display area. Committing a `View` reprints
/// the whole listing; no card retains state across renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    Listing { count_label: String, cards: Vec<Card> },
    LoadFailed { message: String },
}

impl View {
    pub fn load_failed() -> Self {
        View::LoadFailed {
            message: LOAD_ERROR_TEXT.to_string(),
        }
    }

    /// Writes the view to stdout. This is the only place rendering touches
    /// the terminal; everything upstream is a pure function of the records.
    pub fn commit(&self) {
        match self {
            View::LoadFailed { message } => {
                println!("{}", message.bold().red());
            }
            View::Listing { count_label, cards } => {
                println!("{}", count_label.bold().white());
                if cards.is_empty() {
                    println!();
                    println!("{}", NO_MATCHES_TEXT);
                    return;
                }
                for card in cards {
                    println!();
                    commit_card(card);
                }
            }
        }
    }
}

/// Pure render step: ordered records in, `View` out. Display order equals
/// input order; no sorting is applied anywhere.
pub fn render(companies: &[&Company]) -> View {
    View::Listing {
        count_label: count_label(companies.len()),
        cards: companies.iter().map(|c| build_card(c)).collect(),
    }
}

pub fn count_label(n: usize) -> String {
    format!("Showing {n} companies")
}

/// Joins locations with `" | "`. The per-entry format keeps the trailing
/// space before an empty HQ marker, so non-HQ entries end in a space.
pub fn location_line(locations: &[Location]) -> String {
    locations
        .iter()
        .map(|l| {
            format!(
                "{}, {} {}",
                l.city,
                l.country,
                if l.is_hq { "(HQ)" } else { "" }
            )
        })
        .join(" | ")
}

/// Replaces only the first underscore with a space. Later underscores stay,
/// so `FULLY_REMOTE_OK` reads `FULLY REMOTE_OK`.
pub fn remote_policy_text(raw: &str) -> String {
    raw.replacen('_', " ", 1)
}

fn build_card(company: &Company) -> Card {
    Card {
        name: company.name.clone(),
        badge: VisaBadge::classify(&company.visa_sponsorship),
        hiring_freeze: company.hiring_frozen(),
        location_line: location_line(&company.locations),
        remote_line: remote_policy_text(&company.remote_policy),
        tech_tags: company.tech_stack.clone().unwrap_or_default(),
        careers_url: company.careers_url.clone(),
    }
}

fn commit_card(card: &Card) {
    let badge = match card.badge.style() {
        "no" => card.badge.label().bold().red(),
        "senior" => card.badge.label().bold().yellow(),
        _ => card.badge.label().bold().green(),
    };
    if card.hiring_freeze {
        println!(
            "{} [{}] [{}]",
            card.name.bold().white(),
            badge,
            "Hiring Freeze".bold().red()
        );
    } else {
        println!("{} [{}]", card.name.bold().white(), badge);
    }
    println!("  📍 {}", card.location_line);
    println!("  🏠 Remote: {}", card.remote_line.bold());
    if !card.tech_tags.is_empty() {
        let tags = card.tech_tags.iter().map(|t| format!("[{t}]")).join(" ");
        println!("  {}", tags.cyan());
    }
    println!("  careers: {}", card.careers_url.blue());
}
