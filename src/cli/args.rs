use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "visascout",
    version,
    about = "terminal browser for the visa-sponsoring companies directory",
    long_about = "Visascout loads a companies.json directory, renders the companies as cards and narrows the listing with a free-text search plus visa and remote-policy selectors.\n\nExamples:\n  visascout\n  visascout -q berlin --visa YES\n  visascout -s https://example.com/companies.json --remote HYBRID\n  visascout -i\n\nTip: Use --config to persist the data source and keep invocations short."
)]
pub struct CliArgs {
    #[arg(
        short = 's',
        long = "source",
        value_name = "PATH_OR_URL",
        help_heading = "Input",
        help = "Company data location: a local JSON file or an http(s) URL."
    )]
    pub source: Option<String>,

    #[arg(
        short = 'C',
        long = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.visascout/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        short = 'T',
        long = "timeout",
        value_name = "SECONDS",
        help_heading = "Input",
        help = "Fetch timeout in seconds (no timeout when omitted)."
    )]
    pub timeout: Option<u64>,

    #[arg(
        short = 'q',
        long = "query",
        value_name = "TEXT",
        help_heading = "Filters",
        help = "Free-text search over name, tech stack and locations (case-insensitive)."
    )]
    pub query: Option<String>,

    #[arg(
        long = "visa",
        value_name = "VALUE",
        help_heading = "Filters",
        help = "Visa sponsorship selector: all, YES, NO or SENIOR_ONLY."
    )]
    pub visa: Option<String>,

    #[arg(
        long = "remote",
        value_name = "VALUE",
        help_heading = "Filters",
        help = "Remote policy selector: all, GLOBAL, EU_ONLY, HYBRID or ON_SITE."
    )]
    pub remote: Option<String>,

    #[arg(
        short = 'i',
        long = "interactive",
        help_heading = "Mode",
        help = "Start an interactive prompt; every input re-filters and re-renders."
    )]
    pub interactive: bool,

    #[arg(
        long = "lint",
        help_heading = "Mode",
        help = "Check the dataset (duplicates, value vocabularies, HQ count, dates) and exit."
    )]
    pub lint: bool,

    #[arg(
        long = "init-config",
        help_heading = "Mode",
        help = "Write the default config template to ~/.visascout/config.yml and exit."
    )]
    pub init_config: bool,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help_heading = "Output",
        help = "Write the filtered records to a file."
    )]
    pub output: Option<String>,

    #[arg(
        short = 'A',
        long = "output-format",
        value_name = "FORMAT",
        help_heading = "Output",
        help = "Output format (text or json); inferred from the file extension when omitted."
    )]
    pub output_format: Option<String>,

    #[arg(
        short = 'n',
        long = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,
}
