use clap::Parser;
use encdec::cli::run;
use encdec::CipherError;
use log::LevelFilter;
use std::io;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("ENCDEC_VERSION");
const PROFILE: &str = env!("ENCDEC_PROFILE");
const GIT_HASH: &str = env!("ENCDEC_GIT_HASH");

#[derive(Parser)]
#[command(name = "encdec")]
#[command(author, about = "Shift and unicode substitution cipher", long_about = None)]
#[command(after_help = "Pairs: -mode enc|dec, -alg shift|unicode, -key N, -data TEXT, -in FILE, -out FILE")]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Log level for diagnostics on stderr (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Flag/value pairs, e.g. -mode enc -key 5 -data "abc"
    #[arg(
        value_name = "PAIRS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pairs: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("encdec {} {} ({})", PROFILE, VERSION, GIT_HASH);
        return ExitCode::SUCCESS;
    }

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    let mut stdout = io::stdout().lock();
    match run(cli.pairs.as_slice(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ CipherError::OddArgumentCount(_)) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
