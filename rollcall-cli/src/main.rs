//! Rollcall CLI - tutorial attendance in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rollcall_core::OperationResult;

mod commands;
mod output;

use commands::{add, clear, delete, edit, export, find, list, mark, status};

/// Rollcall - track students and tutorial attendance
#[derive(Parser)]
#[command(name = "rollcall", version, about, long_about = None)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a person to the roster
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        student_id: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: String,
        /// Tag to attach (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Edit the person at INDEX in the displayed list
    Edit {
        #[arg(allow_hyphen_values = true)]
        index: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        student_id: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Replacement tags (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Remove all tags
        #[arg(long)]
        clear_tags: bool,
    },

    /// Delete the person at INDEX in the displayed list
    Delete {
        #[arg(allow_hyphen_values = true)]
        index: String,
    },

    /// Show persons whose name contains any of the keywords
    Find {
        #[arg(required = true)]
        keywords: Vec<String>,
    },

    /// Show all persons
    List,

    /// Remove every person from the roster
    Clear {
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },

    /// Mark the person at INDEX as present for TUTORIAL
    Mark {
        #[arg(allow_hyphen_values = true)]
        index: String,
        #[arg(allow_hyphen_values = true)]
        tutorial: String,
    },

    /// Mark the person at INDEX as absent for TUTORIAL
    Unmark {
        #[arg(allow_hyphen_values = true)]
        index: String,
        #[arg(allow_hyphen_values = true)]
        tutorial: String,
    },

    /// Show roster and attendance summary
    Status,

    /// Export the full roster to a CSV file
    Export {
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    commands::init_logging();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("event=cli_failed module=cli error={}", e);
            if json {
                let failure: OperationResult<()> = OperationResult::fail(e.to_string());
                match serde_json::to_string_pretty(&failure) {
                    Ok(text) => println!("{}", text),
                    Err(_) => output::error(&e.to_string()),
                }
            } else {
                output::error(&e.to_string());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let json = cli.json;
    match cli.command {
        Commands::Add { name, student_id, phone, email, tags } => {
            add::run(&name, &student_id, &phone, &email, &tags, json)
        }
        Commands::Edit { index, name, student_id, phone, email, tags, clear_tags } => {
            let args = edit::EditArgs { name, student_id, phone, email, tags, clear_tags };
            edit::run(&index, args, json)
        }
        Commands::Delete { index } => delete::run(&index, json),
        Commands::Find { keywords } => find::run(&keywords, json),
        Commands::List => list::run(json),
        Commands::Clear { force } => clear::run(force, json),
        Commands::Mark { index, tutorial } => mark::run_mark(&index, &tutorial, json),
        Commands::Unmark { index, tutorial } => mark::run_unmark(&index, &tutorial, json),
        Commands::Status => status::run(json),
        Commands::Export { file } => export::run(&file, json),
    }
}
