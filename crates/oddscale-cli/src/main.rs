//! Oddscale CLI — entry point.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use rand::{Rng, SeedableRng};

use oddscale::{is_resolvable, max_weighings, ItemId};
use oddscale_cli::interactive::run_weigh;
use oddscale_cli::report::{render_weighings, run_simulation};

#[derive(Parser)]
#[command(
    name = "oddscale",
    about = "Find the single odd item among identical ones with the fewest balance weighings",
    version
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a search against a simulated scale (default).
    Simulate {
        /// Number of candidate items.
        #[arg(short, long, default_value_t = 9)]
        items: u32,

        /// Identifier of the odd item. Chosen at random when omitted.
        #[arg(short, long)]
        fake: Option<u32>,

        /// Seed for the random odd-item choice.
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Search interactively: you load the pans and report each reading.
    Weigh {
        /// Number of candidate items, numbered from 0.
        #[arg(short, long)]
        items: Option<u32>,

        /// Explicit comma-separated item identifiers.
        #[arg(long, value_delimiter = ',', conflicts_with = "items")]
        ids: Option<Vec<u32>>,
    },

    /// Check whether a population size is resolvable.
    Check {
        /// Population size.
        items: usize,
    },

    /// Print capabilities as JSON.
    Info,

    /// Generate shell completion scripts.
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Simulate {
        items: 9,
        fake: None,
        seed: None,
        json: false,
    }) {
        Commands::Simulate {
            items,
            fake,
            seed,
            json,
        } => {
            let fake = match fake {
                Some(f) => {
                    if f >= items {
                        eprintln!("Error: --fake must be in 0..{items}");
                        std::process::exit(1);
                    }
                    f
                }
                // An empty population is rejected by the search itself.
                None if items == 0 => 0,
                None => pick_fake(items, seed),
            };

            let report = run_simulation(items, fake)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("The odd item is: {}", report.located);
                println!("Took {} weighings:", report.weighings.len());
                print!("{}", render_weighings(&report.weighings));
            }
        }

        Commands::Weigh { items, ids } => {
            let ids: Vec<ItemId> = match ids {
                Some(ids) => ids,
                None => (0..items.unwrap_or(9)).collect(),
            };
            run_weigh(&ids)?;
        }

        Commands::Check { items } => match max_weighings(items) {
            Some(bound) => {
                println!("Population {items}: resolvable, at most {bound} weighings");
            }
            None => {
                eprintln!("Population {items}: cannot be reduced to a base case");
                std::process::exit(1);
            }
        },

        Commands::Info => {
            let resolvable: Vec<usize> = (1..=30).filter(|&n| is_resolvable(n)).collect();
            let info = serde_json::json!({
                "name": "oddscale",
                "version": env!("CARGO_PKG_VERSION"),
                "base_cases": [1, 3],
                "default_population": 9,
                "resolvable_sizes_up_to_30": resolvable,
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "oddscale", &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Pick a random odd item, optionally seeded for reproducible runs.
fn pick_fake(items: u32, seed: Option<u64>) -> ItemId {
    let mut rng = match seed {
        Some(s) => rand::rngs::StdRng::seed_from_u64(s),
        None => rand::rngs::StdRng::from_os_rng(),
    };
    rng.random_range(0..items)
}
