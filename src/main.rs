//! blockpath: request path gatekeeper.
//!
//! ```text
//!     Client Request                ┌────────────────────────────────┐
//!     ──────────────────────────────▶ TraceLayer ─▶ TimeoutLayer     │
//!                                   │      │                         │
//!                                   │      ▼                         │
//!                                   │  BlockPathLayer ── match ──▶ status (+ body)
//!                                   │      │ no match                │
//!                                   │      ▼                         │
//!                                   │  echo application              │
//!                                   └────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use blockpath::config::validation::unsendable_statuses;
use blockpath::config::{
    read_config, validate_config, validate_config_strict, ConfigError, ServerConfig,
};
use blockpath::interceptor::{Decision, Interceptor};
use blockpath::lifecycle::{signals::shutdown_on_signal, Shutdown};
use blockpath::observability::init_logging;
use blockpath::HttpServer;

#[derive(Parser)]
#[command(name = "blockpath")]
#[command(about = "Block HTTP requests by path pattern", long_about = None)]
struct Cli {
    /// Configuration file (TOML, or JSON with a .json extension).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve an echo application behind the gate
    Serve,
    /// Validate the configuration and exit
    Check {
        /// Also reject status codes that HTTP cannot send
        #[arg(long)]
        strict: bool,
    },
    /// Print the decision for each path
    Eval {
        /// Request paths, escaped as they would arrive on the wire
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

fn read(path: Option<&PathBuf>) -> Result<ServerConfig, ConfigError> {
    match path {
        Some(path) => read_config(path),
        None => Ok(ServerConfig::default()),
    }
}

fn validate(config: &ServerConfig, strict: bool) -> Result<(), ConfigError> {
    let result = if strict {
        validate_config_strict(config)
    } else {
        validate_config(config)
    };
    result.map_err(ConfigError::Validation)
}

async fn serve(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        rules = config.blockpath.elements.len(),
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(config)?;

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    tokio::spawn(shutdown_on_signal(shutdown));

    server.run(listener, receiver).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn check(config: &ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let interceptor = Interceptor::from_config(&config.blockpath, config.name.clone())?;
    println!("configuration OK: {} rule(s)", interceptor.rules().len());
    for (index, rule) in interceptor.rules().iter().enumerate() {
        println!("  [{}] {:?} -> {}", index, rule.pattern(), rule.status_code());
    }
    for (index, status) in unsendable_statuses(config) {
        println!(
            "  warning: rule {index} status {status} is not a valid HTTP status; blocks answer 500"
        );
    }
    Ok(())
}

fn eval(config: &ServerConfig, paths: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let interceptor = Interceptor::from_config(&config.blockpath, config.name.clone())?;
    for path in paths {
        match interceptor.handle(path) {
            Decision::Forward => println!("{path}\tforward"),
            Decision::Block { status_code, body: Some(body) } => {
                println!("{path}\tblock {status_code} {body:?}")
            }
            Decision::Block { status_code, body: None } => println!("{path}\tblock {status_code}"),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match read(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Installed before validation so its warnings are visible.
    init_logging(&config.observability.log_level);

    let strict = matches!(cli.command, Commands::Check { strict: true });
    let result = match validate(&config, strict) {
        Ok(()) => match cli.command {
            Commands::Serve => serve(config).await,
            Commands::Check { .. } => check(&config),
            Commands::Eval { paths } => eval(&config, &paths),
        },
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
