use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;

use xls_preview::AppError;
use xls_preview::config::{self, OutputMode, RunOptions};
use xls_preview::download::HttpFetcher;
use xls_preview::input;
use xls_preview::logging;
use xls_preview::pipeline;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Workbook URL; prompted for on stdin when omitted
    #[arg(long, env = "XLS_PREVIEW_URL")]
    url: Option<String>,

    /// Number of leading rows shown per sheet
    #[arg(long, short = 'n', default_value_t = config::DEFAULT_PREVIEW_ROWS)]
    rows: usize,

    /// Output mode: 'preview' prints sheet previews, 'extract' prints the Part. rows as JSON
    #[arg(long, short = 'm', default_value = "preview")]
    mode: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: Cli) -> Result<()> {
    let mode = match OutputMode::from_str(&cli.mode) {
        Ok(mode) => mode,
        Err(_) => anyhow::bail!("Invalid output mode: {}", cli.mode),
    };

    let options = RunOptions {
        preview_rows: cli.rows,
        mode,
        timeout: Duration::from_secs(cli.timeout),
    };

    let raw_url = match cli.url {
        Some(url) => url,
        None => {
            let stdin = io::stdin();
            input::prompt_url(&mut stdin.lock(), &mut io::stderr())
                .context("Unable to read the workbook URL")?
        }
    };

    let fetcher = HttpFetcher::new(options.timeout).context("Unable to create HTTP client")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    pipeline::run(&raw_url, &fetcher, &options, &mut out, &mut io::stderr())?;
    out.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::initialize(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let code = err
                .downcast_ref::<AppError>()
                .map(AppError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
