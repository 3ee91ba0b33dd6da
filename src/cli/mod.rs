//! CLI module for trocco-mcp.
//!
//! Subcommands:
//! - `mcp`: Run the MCP server (stdio transport)
//! - `tools`: Print the advertised tool catalogue

mod mcp;
mod tools;

use clap::{Parser, Subcommand};

/// trocco-mcp - TROCCO API tools for MCP clients
#[derive(Parser)]
#[command(name = "trocco-mcp")]
#[command(about = "MCP server exposing the TROCCO data pipeline API as tools")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the MCP server (stdio transport for local use)
    Mcp,

    /// Print every tool with its description and input schema as JSON
    Tools,
}

impl App {
    /// Run the CLI application.
    pub async fn run(self) -> color_eyre::Result<()> {
        match self.command {
            Command::Mcp => self.run_mcp().await,
            Command::Tools => self.run_tools(),
        }
    }
}
