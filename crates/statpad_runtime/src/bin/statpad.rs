//! StatPad CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use statpad_runtime::{OutputFormat, Repl, RuntimeConfig, RustylineEditor, Session};
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    queries: Vec<String>,
    catalog: Option<PathBuf>,
    batch_mode: bool,
    json: bool,
    seed: bool,
    classify_only: bool,
    verbose: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-v" | "--verbose" => config.verbose = true,
            "--json" => config.json = true,
            "--seed" => config.seed = true,
            "--classify" => config.classify_only = true,
            "--catalog" => {
                let path = args.next().ok_or("--catalog requires a file")?;
                config.catalog = Some(PathBuf::from(path));
            }
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option: {flag}").into());
            }
            query => config.queries.push(query.to_string()),
        }
    }

    Ok(config)
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Returns `Ok(false)` if any query failed.
fn run(args: Vec<String>) -> Result<bool, Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(true);
    }

    if cli.show_version {
        println!("statpad {}", env!("CARGO_PKG_VERSION"));
        return Ok(true);
    }

    init_logging(cli.verbose);

    let mut config = RuntimeConfig::default()
        .with_seed(cli.seed)
        .with_format(if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        })
        .with_banner(cli.queries.is_empty());
    if let Some(path) = &cli.catalog {
        config = config.with_catalog_path(path.clone());
    }

    let session = Session::from_config(&config)?;
    let mut all_ok = true;
    for query in &cli.queries {
        let answer = if cli.classify_only {
            session.describe(query)
        } else {
            session.respond(query)
        };
        match answer {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("\x1b[31mError: {e}\x1b[0m");
                all_ok = false;
            }
        }
    }

    if cli.batch_mode {
        return Ok(all_ok);
    }

    let editor = RustylineEditor::new(config.history_size)?;
    let mut repl = Repl::with_editor(editor)
        .with_session(session)
        .with_prompt(config.prompt.clone())
        .with_banner(config.show_banner);
    repl.run()?;
    Ok(true)
}

fn print_help() {
    println!(
        "\x1b[1mStatPad\x1b[0m - Ask basketball statistics questions in plain English

\x1b[1mUSAGE:\x1b[0m
    statpad [OPTIONS] [QUERIES...]

\x1b[1mARGUMENTS:\x1b[0m
    [QUERIES...]    Queries to answer before starting the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help          Print help information
    -V, --version       Print version information
    -b, --batch         Answer the queries and exit (no REPL)
    -v, --verbose       Log classification decisions to stderr
        --json          Print responses as JSON
        --catalog FILE  Load a catalog snapshot
        --seed          Start from the built-in teams, seasons and sample games
        --classify      Print how each query is understood instead of answering it

\x1b[1mENVIRONMENT:\x1b[0m
    RUST_LOG            Log filter, e.g. statpad_parser=trace (overrides -v)

\x1b[1mEXAMPLES:\x1b[0m
    statpad --seed
    statpad --seed -b \"Lakers vs Warriors last 10 games\"
    statpad --seed -b --json \"What are Stephen Curry stats in 2023-24\"
    statpad -b --classify \"Compare Stephen Curry and LeBron James in 2023-24\"
    statpad --catalog league.msgpack

\x1b[1mREPL COMMANDS:\x1b[0m
    :help                Show help
    :json / :text        Switch output format
    :classify <query>    Show how a query is understood
    :load <file>         Load a catalog snapshot
    :save <file>         Save the catalog to a snapshot
    :teams / :seasons    List teams or seasons
    :quit, Ctrl+D        Exit REPL
    Ctrl+C               Cancel current input"
    );
}
