//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use petmatch_domain::{CategoryFilter, FilterQuery, VoteDirection};
use std::path::PathBuf;

/// Output format for listings and results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Human-readable cards
    Table,
    /// JSON output
    Json,
}

impl From<OutputFormatArg> for petmatch_domain::OutputFormat {
    fn from(format: OutputFormatArg) -> Self {
        match format {
            OutputFormatArg::Table => petmatch_domain::OutputFormat::Table,
            OutputFormatArg::Json => petmatch_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for petmatch
#[derive(Parser, Debug)]
#[command(name = "petmatch")]
#[command(author, version, about = "Browse adoptable pets, keep favorites, take the personality quiz")]
#[command(long_about = r#"
petmatch talks to a Pet Catalog Service and lets you browse its listing,
save favorites and find out what your three favourite picks say about you.

Configuration files are loaded from (in priority order):
1. PETMATCH_* environment variables (e.g. PETMATCH_API__BASE_URL)
2. --config <path>     Explicit config file
3. ./petmatch.toml     Project-level config
4. ~/.config/petmatch/config.toml   Global config

Example:
  petmatch list --search mi
  petmatch favorites --category Cat -o json
  petmatch quiz --local
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormatArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Catalog service base URL (overrides configuration)
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,
}

impl Cli {
    /// The subcommand to run; a bare `petmatch` lists the home view
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::List(FilterArgs::default()))
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the home listing
    List(FilterArgs),

    /// Show saved favorites
    Favorites(FilterArgs),

    /// Show the category options for a listing
    Categories {
        /// Use the favorites listing instead of the home listing
        #[arg(long)]
        favorites: bool,
    },

    /// Save a pet to your favorites
    Favorite {
        /// Image URL identifying the pet
        image_url: String,
        /// Category ("dog", "cat", ...)
        category: String,
        /// Optional note stored with the favorite
        #[arg(long)]
        comment: Option<String>,
    },

    /// Vote on a saved favorite
    Vote {
        /// Server id of the favorite
        id: String,
        /// up or down
        direction: VoteDirection,
    },

    /// Pick three pets and get a personality reading
    Quiz {
        /// Classify locally instead of asking the catalog service
        #[arg(long)]
        local: bool,
    },

    /// Show how to reach the adoption team
    Adopt,
}

/// Search and category narrowing shared by the listing commands
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Case-insensitive text matched against name and description
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Exact category, or "all"
    #[arg(short, long, default_value = "all")]
    pub category: String,
}

impl FilterArgs {
    pub fn to_query(&self) -> FilterQuery {
        let Ok(category) = self.category.parse::<CategoryFilter>();
        FilterQuery::new(self.search.clone(), category)
    }
}
