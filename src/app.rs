use std::io::Write;

use clap::{error::ErrorKind, Parser};
use colored::Colorize;
use tokio::fs::OpenOptions;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::filter::{FilterState, Selector};
use crate::lint;
use crate::loader::DataSource;
use crate::output;
use crate::render::View;
use crate::runner::{Options, Session};

fn print_banner() {
    println!(
        "visascout v{} - company directory browser",
        env!("CARGO_PKG_VERSION")
    );
}

fn format_kv_line(label: &str, value: &str) {
    println!(":: {:<10}: {}", label, value);
}

fn selector_text(selector: &Selector) -> String {
    match selector {
        Selector::All => "all".to_string(),
        Selector::Value(value) => value.clone(),
    }
}

fn describe_filters(filter: &FilterState) -> String {
    format!(
        "query=\"{}\" visa={} remote={}",
        filter.query,
        selector_text(&filter.visa),
        selector_text(&filter.remote)
    )
}

#[derive(Clone, Debug)]
struct RunConfig {
    source: DataSource,
    timeout: Option<u64>,
    filter: FilterState,
    interactive: bool,
    lint: bool,
    output: Option<String>,
    output_format: Option<String>,
    no_color: bool,
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let no_color = args.no_color || cfg.no_color.unwrap_or(false);
    let interactive = args.interactive || cfg.interactive.unwrap_or(false);

    let source_raw = args
        .source
        .or(cfg.source)
        .unwrap_or_else(|| "./data/companies.json".to_string());
    let source = match DataSource::parse(&source_raw) {
        DataSource::File(path) => DataSource::File(config::expand_tilde_string(&path)),
        url => url,
    };

    let timeout = args.timeout.or(cfg.timeout);

    let filter = FilterState {
        query: args.query.or(cfg.query).unwrap_or_default(),
        visa: Selector::parse(args.visa.or(cfg.visa).unwrap_or_default().as_str()),
        remote: Selector::parse(args.remote.or(cfg.remote).unwrap_or_default().as_str()),
    };

    let output = args
        .output
        .or(cfg.output)
        .map(|p| config::expand_tilde_string(&p));
    let output_format = args.output_format.or(cfg.output_format);

    Ok(RunConfig {
        source,
        timeout,
        filter,
        interactive,
        lint: args.lint,
        output,
        output_format,
        no_color,
    })
}

async fn run_async(run: RunConfig) -> Result<(), String> {
    let options = Options {
        source: run.source.clone(),
        timeout_seconds: run.timeout,
        filter: run.filter.clone(),
    };

    // Load failures replace the whole display area, count label included;
    // the diagnostic itself goes to stderr via main.
    let session = match Session::open(options).await {
        Ok(session) => session,
        Err(e) => {
            View::load_failed().commit();
            return Err(e.to_string());
        }
    };

    if run.lint {
        let issues = lint::lint_dataset(session.master());
        if issues.is_empty() {
            println!(
                "{} records checked, no issues found",
                session.master().len()
            );
            return Ok(());
        }
        for issue in &issues {
            println!("{}", issue.to_string().red());
        }
        return Err(format!("{} dataset issue(s) found", issues.len()));
    }

    format_kv_line("Source", run.source.location());
    format_kv_line("Companies", &session.master().len().to_string());
    format_kv_line("Filters", &describe_filters(session.filter()));
    println!();

    session.view().commit();

    if let Some(outfile_path) = run.output.as_ref() {
        write_output(&session, outfile_path, run.output_format.as_deref()).await?;
    }

    if run.interactive {
        run_interactive(session).await?;
    }

    Ok(())
}

async fn write_output(
    session: &Session,
    path: &str,
    format: Option<&str>,
) -> Result<(), String> {
    let format = format
        .and_then(output::OutputFormat::parse)
        .or_else(|| output::infer_format_from_path(path))
        .unwrap_or(output::OutputFormat::Text);

    let filtered = session.filtered();
    let rendered = match format {
        output::OutputFormat::Text => output::render_text(&filtered),
        output::OutputFormat::Json => output::render_json(&filtered),
    };

    let mut outfile = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .await
        .map_err(|e| format!("failed to open output file: {e}"))?;
    outfile
        .write_all(&rendered)
        .await
        .map_err(|_| "failed to write output file".to_string())?;
    Ok(())
}

// The terminal analog of per-keystroke filtering: every accepted input
// synchronously recomputes the subsequence and reprints the listing.
async fn run_interactive(mut session: Session) -> Result<(), String> {
    println!();
    println!("type to search; :visa VALUE, :remote VALUE, :clear, :quit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => return Err(format!("failed to read input: {e}")),
        };
        let line = line.trim().to_string();
        if let Some(rest) = line.strip_prefix(':') {
            let mut parts = rest.splitn(2, ' ');
            let command = parts.next().unwrap_or_default();
            let value = parts.next().unwrap_or("").trim();
            match command {
                "quit" | "q" | "exit" => break,
                "visa" => session.set_visa(Selector::parse(value)),
                "remote" => session.set_remote(Selector::parse(value)),
                "clear" => session.clear_filters(),
                other => {
                    println!("unknown command :{other} (try :visa, :remote, :clear, :quit)");
                    continue;
                }
            }
        } else {
            session.set_query(line);
        }
        session.view().commit();
    }
    Ok(())
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{e}");
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    if args.init_config {
        let path = config::default_config_path()
            .ok_or_else(|| "could not determine home directory".to_string())?;
        config::ensure_default_config_file(&path)?;
        println!("config written to {}", path.display());
        return Ok(());
    }

    let user_config_path = args.config.clone().map(|p| config::expand_tilde(&p));
    let cfg = match user_config_path.as_ref() {
        Some(path) => config::load_config(path, false)?,
        None => match config::default_config_path() {
            Some(path) => config::load_config(&path, true)?,
            None => ConfigFile::default(),
        },
    };

    let run = build_run_config(args, cfg)?;
    if run.no_color {
        colored::control::set_override(false);
    }
    print_banner();

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to build runtime: {e}"))?;
    rt.block_on(run_async(run))
}
