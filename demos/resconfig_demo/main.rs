//! # resconfig demo application
//!
//! A sample CLI tool that builds a [`Container`] from command-line flags and
//! inspects what was loaded. It exists to demonstrate and manually verify
//! resconfig's features.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example resconfig_demo -- \
//!     -d demos/resconfig_demo/res/primary -d demos/resconfig_demo/res/fallback \
//!     -l app.toml -l local.toml list
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature                  | How to exercise it                                              |
//! |--------------------------|-----------------------------------------------------------------|
//! | First-match resolution   | `-l app.toml list` (primary shadows fallback)                   |
//! | Fallback directory       | `-l local.toml list` (only present in fallback)                 |
//! | Union merge              | `-l app.toml -l local.toml get tags`                            |
//! | Key prefixing            | `-f json -l db.json --prepend get db.url`                       |
//! | YAML / XML handlers      | `-f yaml -l cache.yaml list`, `-f xml -l site.xml list`         |
//! | Resolution only          | `resolve app.toml`                                              |
//! | Load tracing             | `RUST_LOG=resconfig=debug cargo run --example resconfig_demo …` |

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use resconfig::{ConfigArgs, Container, Handler};

/// resconfig demo: load configuration resources and inspect the store.
#[derive(Parser, Debug)]
#[command(name = "resconfig-demo")]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every key in the store.
    List,
    /// Print a single key.
    Get { key: String },
    /// Show which file a resource name resolves to.
    Resolve { resource: String },
}

fn list(container: &Container) {
    let mut entries: Vec<_> = container.handler().store().iter().collect();
    entries.sort_by_key(|(key, _)| *key);
    let width = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (key, value) in entries {
        println!("{key:<width$}  {value}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let container = cli.config.into_container().unwrap_or_else(|e| {
        eprintln!("Failed to load config:\n{e}");
        std::process::exit(1);
    });

    match cli.command {
        Commands::List => list(&container),
        Commands::Get { key } => match container.read(&key) {
            Ok(Some(value)) => println!("{key}  {value}"),
            Ok(None) => {
                eprintln!("Key not set: {key}");
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        Commands::Resolve { resource } => match container.handler().resolve(&resource) {
            Some(path) => println!("{}", path.display()),
            None => {
                eprintln!("{resource} not found in any resource directory");
                std::process::exit(1);
            }
        },
    }
}
