mod menu;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{FilmographyIndex, Gender};
use menu::Menu;
use query::QueryEngine;
use render::{format_count, format_decimal, OutputFormat};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

/// Filmdex - movie cast and actor filmography lookups
#[derive(Parser)]
#[command(name = "filmdex")]
#[command(about = "Look up who acted in a movie, or what an actor acted in", long_about = None)]
struct Cli {
    /// Path to the tab-separated filmography file
    #[arg(short, long, default_value = "data/imdb_data_sample.tsv")]
    data_file: PathBuf,

    /// Print lookup results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (the default)
    Menu,

    /// Show the cast of a movie
    Title {
        /// Movie title (case-insensitive exact match)
        title: String,

        /// Only show cast members of this gender (male/female)
        #[arg(long)]
        gender: Option<Gender>,
    },

    /// Show every role an actor played
    Actor {
        /// Actor name as "first last" (case-insensitive exact match)
        name: String,
    },
}

fn main() -> Result<ExitCode> {
    // Logs go to stderr so they never interleave with menu output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let start = Instant::now();
    let index = FilmographyIndex::load_from_file(&cli.data_file)
        .with_context(|| format!("Failed to load filmography from {}", cli.data_file.display()))?;
    let elapsed = start.elapsed();

    // One-shot lookups exit with status 1 when nothing matched
    let found = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            print_startup_report(&index, &cli.data_file, elapsed.as_secs_f64());
            handle_menu(&index, format)?;
            true
        }
        Commands::Title { title, gender } => {
            handle_title(&mut io::stdout().lock(), &index, &title, gender, format)?
        }
        Commands::Actor { name } => handle_actor(&mut io::stdout().lock(), &index, &name, format)?,
    };

    Ok(ExitCode::from(exit_status(found)))
}

fn exit_status(found: bool) -> u8 {
    if found {
        0
    } else {
        1
    }
}

fn print_startup_report(index: &FilmographyIndex, data_file: &Path, secs: f64) {
    println!(
        "Indexed {} rows from {} in {}s",
        format_count(index.row_count()),
        data_file.display(),
        format_decimal(secs)
    );
    let megabytes = index.approx_memory_bytes() as f64 / (1u64 << 20) as f64;
    println!("Using {}MB of memory", format_decimal(megabytes));
}

/// Handle the 'menu' command
fn handle_menu(index: &FilmographyIndex, format: OutputFormat) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(QueryEngine::new(index), stdin.lock(), stdout.lock(), format)
        .run()
        .context("Interactive session failed")
}

/// Handle the 'title' command. Returns whether the title was found.
fn handle_title<W: Write>(
    out: &mut W,
    index: &FilmographyIndex,
    title: &str,
    gender: Option<Gender>,
    format: OutputFormat,
) -> Result<bool> {
    let result = match QueryEngine::new(index).lookup_title(title, gender) {
        Ok(result) => result,
        Err(e) => {
            render::write_error(out, &e, format)?;
            return Ok(false);
        }
    };

    if format == OutputFormat::Text {
        let heading = match gender {
            Some(g) => format!("Cast of '{}' ({} only):", title, g),
            None => format!("Cast of '{}':", title),
        };
        writeln!(out, "{}", heading.bold().blue())?;
    }
    render::write_title(out, &result, format)?;
    Ok(true)
}

/// Handle the 'actor' command. Returns whether the actor was found.
fn handle_actor<W: Write>(
    out: &mut W,
    index: &FilmographyIndex,
    name: &str,
    format: OutputFormat,
) -> Result<bool> {
    let result = match QueryEngine::new(index).lookup_actor(name) {
        Ok(result) => result,
        Err(e) => {
            render::write_error(out, &e, format)?;
            return Ok(false);
        }
    };

    if format == OutputFormat::Text {
        writeln!(
            out,
            "{}",
            format!("Roles for '{}' ({} total):", name, result.appearances.len())
                .bold()
                .blue()
        )?;
    }
    render::write_actor(out, &result, format)?;
    Ok(true)
}
