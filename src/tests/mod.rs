use crate::filter::{FilterState, Selector};
use crate::model::{Company, Location};
use crate::render::{self, View, VisaBadge};
use crate::runner::Session;

fn location(city: &str, country: &str, is_hq: bool) -> Location {
    Location {
        city: city.to_string(),
        country: country.to_string(),
        is_hq,
    }
}

fn company(name: &str, visa: &str, remote: &str, locations: Vec<Location>) -> Company {
    Company {
        name: name.to_string(),
        visa_sponsorship: visa.to_string(),
        locations,
        remote_policy: remote.to_string(),
        tech_stack: Some(vec!["Rust".to_string()]),
        careers_url: format!("https://{}.example/careers", name.to_lowercase()),
        hiring_status: None,
        last_updated: None,
    }
}

fn visa_trio() -> Vec<Company> {
    vec![
        company(
            "Alpha",
            "YES",
            "GLOBAL",
            vec![location("Amsterdam", "Netherlands", true)],
        ),
        company(
            "Beta",
            "NO",
            "HYBRID",
            vec![location("Berlin", "Germany", true)],
        ),
        company(
            "Gamma",
            "SENIOR_ONLY",
            "ON_SITE",
            vec![location("Ghent", "Belgium", true)],
        ),
    ]
}

#[test]
fn count_label_always_equals_filtered_length() {
    let master = visa_trio();
    let states = [
        FilterState::default(),
        FilterState {
            query: "berlin".to_string(),
            ..Default::default()
        },
        FilterState {
            visa: Selector::Value("SENIOR_ONLY".to_string()),
            ..Default::default()
        },
        FilterState {
            query: "no-such-company".to_string(),
            ..Default::default()
        },
    ];
    for state in states {
        let filtered = state.apply(&master);
        match render::render(&filtered) {
            View::Listing { count_label, cards } => {
                assert_eq!(count_label, format!("Showing {} companies", filtered.len()));
                assert_eq!(cards.len(), filtered.len());
            }
            View::LoadFailed { .. } => panic!("expected a listing"),
        }
    }
}

#[test]
fn filtered_subsequence_is_an_ordered_subset_of_the_master_set() {
    let master = visa_trio();
    let state = FilterState {
        remote: Selector::Value("HYBRID".to_string()),
        ..Default::default()
    };
    let filtered = state.apply(&master);
    let mut master_iter = master.iter();
    for picked in &filtered {
        // each filtered record must appear later in the master order
        assert!(master_iter.any(|m| std::ptr::eq(m, *picked)));
    }
}

#[test]
fn visa_selector_no_yields_exactly_the_no_visa_card() {
    let master = visa_trio();
    let state = FilterState {
        visa: Selector::Value("NO".to_string()),
        ..Default::default()
    };
    let filtered = state.apply(&master);
    assert_eq!(filtered.len(), 1);
    match render::render(&filtered) {
        View::Listing { cards, .. } => {
            assert_eq!(cards.len(), 1);
            assert_eq!(cards[0].badge, VisaBadge::No);
            assert_eq!(cards[0].badge.label(), "No Visa");
        }
        View::LoadFailed { .. } => panic!("expected a listing"),
    }
}

#[test]
fn location_query_matches_on_city() {
    let master = visa_trio();
    let state = FilterState {
        query: "berlin".to_string(),
        ..Default::default()
    };
    let filtered = state.apply(&master);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Beta");
}

// An empty but successfully loaded set still gets a count label; a failed
// load drops the label entirely, which `View::load_failed` models as a
// separate variant.
#[test]
fn empty_master_set_renders_zero_count_and_no_cards() {
    let session = Session::from_records(Vec::new(), FilterState::default());
    match session.view() {
        View::Listing { count_label, cards } => {
            assert_eq!(count_label, "Showing 0 companies");
            assert!(cards.is_empty());
        }
        View::LoadFailed { .. } => panic!("expected a listing"),
    }
}

#[test]
fn load_failed_view_has_no_count_label() {
    match View::load_failed() {
        View::LoadFailed { message } => assert_eq!(message, render::LOAD_ERROR_TEXT),
        View::Listing { .. } => panic!("expected the failure variant"),
    }
}

// Mixed HQ/non-HQ locations keep the trailing space before the empty marker.
#[test]
fn mixed_hq_locations_render_with_trailing_space() {
    let c = company(
        "Delta",
        "YES",
        "GLOBAL",
        vec![
            location("City1", "Country1", true),
            location("City2", "Country2", false),
        ],
    );
    let filtered = vec![&c];
    match render::render(&filtered) {
        View::Listing { cards, .. } => {
            assert_eq!(
                cards[0].location_line,
                "City1, Country1 (HQ) | City2, Country2 "
            );
        }
        View::LoadFailed { .. } => panic!("expected a listing"),
    }
}

#[test]
fn absent_tech_stack_renders_zero_tags() {
    let mut c = company("Epsilon", "YES", "GLOBAL", vec![]);
    c.tech_stack = None;
    let filtered = vec![&c];
    match render::render(&filtered) {
        View::Listing { cards, .. } => assert!(cards[0].tech_tags.is_empty()),
        View::LoadFailed { .. } => panic!("expected a listing"),
    }

    c.tech_stack = Some(Vec::new());
    let filtered = vec![&c];
    match render::render(&filtered) {
        View::Listing { cards, .. } => assert!(cards[0].tech_tags.is_empty()),
        View::LoadFailed { .. } => panic!("expected a listing"),
    }
}

#[test]
fn unknown_visa_token_still_gets_the_sponsored_badge() {
    let c = company("Zeta", "ASK_US", "GLOBAL", vec![]);
    let filtered = vec![&c];
    match render::render(&filtered) {
        View::Listing { cards, .. } => {
            assert_eq!(cards[0].badge, VisaBadge::Sponsored);
            assert_eq!(cards[0].badge.label(), "Visa Sponsored");
        }
        View::LoadFailed { .. } => panic!("expected a listing"),
    }
}

#[test]
fn cards_keep_master_order_and_careers_links() {
    let master = visa_trio();
    let state = FilterState::default();
    let filtered = state.apply(&master);
    match render::render(&filtered) {
        View::Listing { cards, .. } => {
            let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
            assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
            assert!(cards.iter().all(|c| !c.careers_url.is_empty()));
        }
        View::LoadFailed { .. } => panic!("expected a listing"),
    }
}
