use crate::cli::args::CliArgs;
use crate::model::{REMOTE_VALUES, VISA_VALUES};

fn validate_selector(raw: &str, vocabulary: &[&str], flag: &str) -> Result<(), String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        return Ok(());
    }
    if vocabulary.contains(&trimmed) {
        return Ok(());
    }
    Err(format!(
        "invalid --{flag} '{raw}', expected all or one of {}",
        vocabulary.join(", ")
    ))
}

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if let Some(raw) = args.visa.as_deref() {
        validate_selector(raw, &VISA_VALUES, "visa")?;
    }
    if let Some(raw) = args.remote.as_deref() {
        validate_selector(raw, &REMOTE_VALUES, "remote")?;
    }
    if let Some(raw) = args.output_format.as_deref() {
        if crate::output::OutputFormat::parse(raw).is_none() {
            return Err(format!(
                "invalid --output-format '{raw}', expected text or json"
            ));
        }
    }
    if let Some(timeout) = args.timeout {
        if timeout == 0 {
            return Err("invalid --timeout, expected positive integer".to_string());
        }
    }
    Ok(())
}
