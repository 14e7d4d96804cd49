use std::io::BufRead;

use clap::Parser;
use pwned_client::{BreachChecker, Config};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pwned-check")]
#[command(about = "Check a password against the Have I Been Pwned range API")]
#[command(
    long_about = "Reads a password from the first line of stdin and checks it against the \
                  k-anonymity range API. Only the first five characters of the password's \
                  SHA-1 hash are sent over the wire. Exits with status 1 when the password \
                  is compromised."
)]
struct Args {
    /// Base URL of the range API
    #[arg(long)]
    endpoint: Option<String>,

    /// User-Agent header sent with the range query
    #[arg(long)]
    user_agent: Option<String>,

    /// Connection establishment timeout in seconds (0 = no limit)
    #[arg(long)]
    connect_timeout: Option<u64>,

    /// Timeout in seconds waiting for the response after connecting (0 = no limit)
    #[arg(long)]
    timeout: Option<u64>,

    /// Occurrence count a password may reach before being rejected
    #[arg(long)]
    minimum: Option<u64>,

    /// Print only the occurrence count
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("failed to read password from stdin: {0}")]
    Stdin(#[from] std::io::Error),

    #[error("no password provided on stdin")]
    EmptyInput,

    #[error(transparent)]
    Lookup(#[from] pwned_client::Error),
}

fn config_from(args: &Args) -> Config {
    let mut config = Config::default();
    if let Some(endpoint) = &args.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(user_agent) = &args.user_agent {
        config.user_agent = user_agent.clone();
    }
    if let Some(seconds) = args.connect_timeout {
        config.connection_timeout = seconds;
    }
    if let Some(seconds) = args.timeout {
        config.remote_processing_timeout = seconds;
    }
    if let Some(count) = args.minimum {
        config.minimum_occurrences = count;
    }
    config
}

/// Reads the password from the first line of `input`, stripping only the
/// line terminator. Interior whitespace is part of the password.
fn read_password(input: &mut impl BufRead) -> Result<String, Error> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    let password = line.trim_end_matches(['\r', '\n']);
    if password.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(password.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let config = config_from(&args);

    let password = read_password(&mut std::io::stdin().lock())?;

    let checker = BreachChecker::new(config)?;
    let count = checker.count_for(&password).await?;
    let minimum = checker.config().minimum_occurrences;
    let compromised = count > minimum;

    if args.quiet {
        println!("{count}");
    } else if compromised {
        println!("COMPROMISED: seen {count} times in breach data (threshold {minimum})");
    } else {
        println!("ok: seen {count} times in breach data (threshold {minimum})");
    }

    if compromised {
        std::process::exit(1);
    }

    Ok(())
}
