use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};
use vigenere::cipher::Direction;
use vigenere::config::AnalysisConfig;
use vigenere::VgResult;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with analysis thresholds. Flags given on the command line win over it.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encrypt text with a repeating key
    Encrypt(cmd::transform::TransformArgs),
    /// Decrypt text with a repeating key
    Decrypt(cmd::transform::TransformArgs),
    /// Recover key candidates from ciphertext alone
    Crack(cmd::crack::CrackArgs),
    /// Numbered menu on stdin/stdout
    Interactive(cmd::interactive::InteractiveArgs),
}

fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// File config (if any) as the base, explicit subcommand flags merged on top.
fn resolve_config(
    path: &Option<String>,
    cli_config: &AnalysisConfig,
    sub_matches: Option<&ArgMatches>,
) -> VgResult<AnalysisConfig> {
    let Some(path) = path else {
        return Ok(cli_config.clone());
    };

    info!("⚖️  Loading analysis config from: {}", path);
    let mut config = AnalysisConfig::load_from_file(path)?;
    if let Some(matches) = sub_matches {
        config.merge_from_cli(cli_config, matches);
    }
    config.validate()?;
    Ok(config)
}

fn main() {
    // Raw matches keep track of which flags the user actually typed
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(cli.debug);

    let sub_matches = matches.subcommand().map(|(_, m)| m);

    let result = match &cli.command {
        Commands::Encrypt(args) => cmd::transform::run(args, Direction::Encrypt),
        Commands::Decrypt(args) => cmd::transform::run(args, Direction::Decrypt),
        Commands::Crack(args) => resolve_config(&cli.config, &args.config, sub_matches)
            .and_then(|config| cmd::crack::run(args, config)),
        Commands::Interactive(args) => resolve_config(&cli.config, &args.config, sub_matches)
            .and_then(|config| cmd::interactive::run(config)),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
