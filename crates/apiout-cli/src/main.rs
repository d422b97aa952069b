// Rust guideline compliant 2026-10-16

//! apiout CLI Application
//!
//! Previews the exact HTTP responses the apiout envelope layer produces.

use anyhow::Context;
use apiout_cli::commands::{self, send::SendArgs};
use apiout_cli::{init_tracing, render_response, LogOptions};
use apiout_core::{Config, Dispatcher};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "apiout",
    version,
    about = "apiout: uniform JSON response envelopes for HTTP APIs",
    long_about = "Renders the HTTP response (status line, headers and JSON envelope) that the apiout dispatcher writes for a given outcome.",
    after_help = "Examples:\n  apiout success --type dataFound --data '{\"key\":\"value\"}'\n  apiout error --error \"already exists\" --message \"A record with this name already exists.\"\n  apiout error --error \"input validation error\" --message \"Name is required.\" --id 42\n  apiout send --status 404 --error \"not found\"\n  apiout topics\n"
)]
struct Cli {
    /// Emit diagnostic log events for error responses
    #[arg(long, global = true)]
    debug: bool,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Write log events to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Pretty-print the JSON body
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Render a success response (status 200)
    Success {
        /// Message type of the response
        #[arg(long = "type")]
        msg_type: String,

        /// JSON payload
        #[arg(long)]
        data: Option<String>,
    },

    /// Render an error response (status 500)
    Error {
        /// Lower-level error text
        #[arg(long)]
        error: String,

        /// Human-readable message explaining how to resolve the error
        #[arg(long)]
        message: String,

        /// Identifier of an already-created record the client should retry against
        #[arg(long)]
        id: Option<i64>,
    },

    /// Render a manually assembled envelope with any status code
    Send {
        /// HTTP status code
        #[arg(long)]
        status: u16,

        /// Message type; derived from the status code when omitted
        #[arg(long = "type")]
        msg_type: Option<String>,

        /// Mark the response as successful
        #[arg(long)]
        ok: bool,

        /// JSON payload
        #[arg(long)]
        data: Option<String>,

        /// Lower-level error text
        #[arg(long)]
        error: Option<String>,

        /// Human-readable error message
        #[arg(long)]
        message: Option<String>,

        /// Timestamp; the current time is used when omitted
        #[arg(long)]
        datetime: Option<String>,
    },

    /// List the predefined message types
    Topics,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _guard = init_tracing(&LogOptions {
        log_level: cli.log_level.clone(),
        log_file: cli.log_file.clone(),
    })?;

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.debug |= cli.debug;
    config.apply();
    let dispatcher = Dispatcher::from_config(&config);

    let response = match cli.command {
        Some(Commands::Success { msg_type, data }) => {
            commands::success::execute(&dispatcher, msg_type, data)?
        }
        Some(Commands::Error { error, message, id }) => {
            commands::error::execute(&dispatcher, error, message, id)?
        }
        Some(Commands::Send {
            status,
            msg_type,
            ok,
            data,
            error,
            message,
            datetime,
        }) => commands::send::execute(
            &dispatcher,
            SendArgs {
                status,
                msg_type,
                ok,
                data,
                error,
                message,
                datetime,
            },
        )?,
        Some(Commands::Topics) => {
            print!("{}", commands::topics::execute());
            return Ok(());
        }
        None => {
            println!("Use --help for usage information");
            return Ok(());
        }
    };

    print!("{}", render_response(&response, cli.pretty));
    Ok(())
}
