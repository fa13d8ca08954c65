//! TaskNotes MCP Server - Main Entry Point
//!
//! This is the main entry point for the TaskNotes MCP server application.
//! The actual implementation is in the `tasknotes_mcp` library.

use anyhow::Result;
use clap::Parser;
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use tasknotes_mcp::logging::{self, LogLevel};
use tasknotes_mcp::{Storage, TaskNotesServerHandler};

/// TaskNotes MCP Server - a daily task checklist and notes pad via Model Context Protocol
///
/// Data is kept in TaskNotes.txt in your documents directory.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Append log output to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, value_enum, default_value_t)]
    log_level: LogLevel,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_level, args.log_file.as_deref())?;

    let storage = Storage::at_default_location();
    log::info!("TaskNotes starting with data file {}", storage.file_path().display());

    let handler = TaskNotesServerHandler::new(storage);
    serve_stdio(handler).await?;
    Ok(())
}
