use crate::model::Company;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

pub fn infer_format_from_path(path: &str) -> Option<OutputFormat> {
    let lower = path.trim().to_lowercase();
    if lower.ends_with(".json") {
        return Some(OutputFormat::Json);
    }
    if lower.ends_with(".txt") {
        return Some(OutputFormat::Text);
    }
    None
}

/// One `name\tcareers_url` line per filtered record, master-set order.
pub fn render_text(records: &[&Company]) -> Vec<u8> {
    let mut out = String::new();
    for r in records {
        out.push_str(&r.name);
        out.push('\t');
        out.push_str(&r.careers_url);
        out.push('\n');
    }
    out.into_bytes()
}

pub fn render_json(records: &[&Company]) -> Vec<u8> {
    serde_json::to_vec_pretty(records).unwrap_or_else(|_| b"[]\n".to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Location;

    fn company(name: &str) -> Company {
        Company {
            name: name.to_string(),
            visa_sponsorship: "YES".to_string(),
            locations: vec![Location {
                city: "Oslo".to_string(),
                country: "Norway".to_string(),
                is_hq: true,
            }],
            remote_policy: "GLOBAL".to_string(),
            tech_stack: None,
            careers_url: format!("https://{}.example/careers", name.to_lowercase()),
            hiring_status: None,
            last_updated: None,
        }
    }

    #[test]
    fn format_parse_and_inference() {
        assert_eq!(OutputFormat::parse("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse(" TEXT "), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::parse("yaml"), None);
        assert_eq!(infer_format_from_path("out.json"), Some(OutputFormat::Json));
        assert_eq!(infer_format_from_path("out.txt"), Some(OutputFormat::Text));
        assert_eq!(infer_format_from_path("out"), None);
    }

    #[test]
    fn text_output_is_one_line_per_record() {
        let a = company("Alpha");
        let b = company("Beta");
        let records = vec![&a, &b];
        let rendered = String::from_utf8(render_text(&records)).unwrap();
        assert_eq!(
            rendered,
            "Alpha\thttps://alpha.example/careers\nBeta\thttps://beta.example/careers\n"
        );
    }

    #[test]
    fn json_output_round_trips_records() {
        let a = company("Alpha");
        let records = vec![&a];
        let rendered = render_json(&records);
        let parsed: Vec<Company> = serde_json::from_slice(&rendered).unwrap();
        assert_eq!(parsed, vec![a]);
    }
}
