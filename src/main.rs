mod core;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::core::catalog::{add_cities, Catalog, Outcome, SessionReport};
use crate::core::{secrets, store};

/// Input value that ends an interactive add session.
const SENTINEL: &str = "ex";

#[derive(Parser)]
#[command(name = "atlas", version, about = "Edit a JSON catalog of states and cities")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add cities to a state, keeping the list sorted and deduplicated
    Add {
        /// State name (matched case-insensitively)
        state: String,
        /// Cities to add; with none given, reads them interactively until 'ex'
        cities: Vec<String>,
        /// Catalog file to edit
        #[arg(short, long, default_value = store::DEFAULT_FILE)]
        file: PathBuf,
    },

    /// List states, or the cities of one state
    #[command(alias = "ls")]
    List {
        /// State name (matched case-insensitively)
        state: Option<String>,
        /// Catalog file to read
        #[arg(short, long, default_value = store::DEFAULT_FILE)]
        file: PathBuf,
    },

    /// Generate two random URL-safe secret tokens
    Secrets,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Add { state, cities, file } => cmd_add(&file, &state, cities)?,
        Commands::List { state, file } => cmd_list(&file, state.as_deref())?,
        Commands::Secrets => cmd_secrets(),
    }

    Ok(())
}

fn cmd_add(file: &Path, state: &str, cities: Vec<String>) -> Result<()> {
    let mut catalog = store::load(file)?;

    // Resolve the stored name once so status lines echo the canonical casing.
    let Some(stored_name) = catalog.find_region(state).map(|r| r.name.clone()) else {
        println!("State {} not found", state);
        // A miss still writes the file back, as a no-op save.
        return store::save(file, &catalog);
    };

    if cities.is_empty() {
        interactive_session(&mut catalog, &stored_name)?;
    } else {
        report_outcomes(&stored_name, add_cities(&mut catalog, state, &cities));
    }

    store::save(file, &catalog)
}

/// Thin interactive adapter over `add_cities`: prompt for one city per line
/// until the sentinel or EOF, echoing the outcome after each entry.
fn interactive_session(catalog: &mut Catalog, state: &str) -> Result<()> {
    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        print!("Enter city name (type '{}' to exit): ", SENTINEL);
        std::io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF ends the session like the sentinel does
        }
        let city = line.trim_end_matches(['\r', '\n']);
        if city.eq_ignore_ascii_case(SENTINEL) {
            break;
        }

        report_outcomes(state, add_cities(catalog, state, [city]));
    }

    Ok(())
}

fn report_outcomes(state: &str, report: SessionReport) {
    match report {
        SessionReport::NotFound => println!("State {} not found", state),
        SessionReport::Applied(outcomes) => {
            for (city, outcome) in outcomes {
                match outcome {
                    Outcome::Added => println!("Added {} to {}", city, state),
                    Outcome::AlreadyExists => println!("{} already exists in {}", city, state),
                }
            }
        }
    }
}

fn cmd_list(file: &Path, state: Option<&str>) -> Result<()> {
    let catalog = store::load(file)?;

    match state {
        Some(name) => {
            let Some(region) = catalog.find_region(name) else {
                println!("State {} not found", name);
                return Ok(());
            };
            for city in &region.cities {
                println!("{}", city);
            }
            println!("\n{} city(ies) in {}", region.cities.len(), region.name);
        }
        None => {
            if catalog.states.is_empty() {
                println!("No states in catalog");
                return Ok(());
            }
            println!("{:<30} {}", "STATE", "CITIES");
            println!("{}", "-".repeat(40));
            for region in &catalog.states {
                println!("{:<30} {}", region.name, region.cities.len());
            }
            println!("\n{} state(s)", catalog.states.len());
        }
    }

    Ok(())
}

fn cmd_secrets() {
    println!("JWT_SECRET_KEY = {}", secrets::token_urlsafe());
    println!("SECRET_KEY = {}", secrets::token_urlsafe());
}
