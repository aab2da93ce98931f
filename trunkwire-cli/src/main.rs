use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use trunkwire_cli::{commands, Cli, Commands};

fn init_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<bool> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Decode { payloads } => commands::decode_payloads(&payloads, &mut out),
        Commands::Frames { file: Some(path) } => {
            let file = File::open(&path)
                .with_context(|| format!("opening {}", path.display()))?;
            let source = path.display().to_string();
            commands::decode_frames(BufReader::new(file), &source, &mut out)?;
            Ok(true)
        }
        Commands::Frames { file: None } => {
            commands::decode_frames(io::stdin().lock(), "stdin", &mut out)?;
            Ok(true)
        }
        Commands::Protocols => {
            commands::list_protocols(&mut out)?;
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(&cli);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
