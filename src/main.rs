use anyhow::Context;
use canonkit::{init_logging, load_program, Report, TranslationSession, ViewerConfig};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing::{debug, info};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

#[derive(Parser)]
#[command(
    name = "canonkit",
    version,
    long_version = LONG_VERSION,
    about = "Replay a canonical motion call stream and report toolpath geometry"
)]
struct Cli {
    /// JSON array of call records (use - for stdin)
    input: PathBuf,

    /// Viewer settings file (.toml or .json); defaults to the user config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report the geometry produced by this program line
    #[arg(short, long)]
    select: Option<u32>,

    /// Camera field of view in degrees, used for framing
    #[arg(long, default_value_t = 45.0)]
    fov: f32,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Write log events as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json)?;

    let config = ViewerConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load viewer settings")?;
    debug!("Viewer settings: {:?}", config);

    let records = load_program(&cli.input)?;
    info!("Loaded {} calls from {}", records.len(), cli.input.display());

    let mut session = TranslationSession::with_options(config.session_options());
    session.replay(&records);

    let report = Report::build(&session, cli.select, cli.fov);
    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        println!("{}", report);
    }

    Ok(())
}
