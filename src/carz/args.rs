use clap::{Args, Parser, Subcommand};

/// Returns the version string, with git hash and commit date appended for
/// builds from a checkout.
/// Format: "0.4.2" without git, "0.4.2@abc1234 2024-01-15 14:30" with it
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "carz", bin_name = "carz", version = get_version())]
#[command(about = "Command-line client for a remote car registry", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Registry server base URL (overrides config)
    #[arg(long, global = true, value_name = "URL")]
    pub server_url: Option<String>,

    /// Collection code (overrides config)
    #[arg(long, global = true, value_name = "CODE")]
    pub code: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the cars in the collection
    #[command(alias = "ls")]
    List,

    /// Show every detail of one car
    #[command(alias = "v")]
    View {
        /// Server id of the car
        id: i64,
    },

    /// Add a car to the collection
    #[command(alias = "a")]
    Add {
        #[command(flatten)]
        fields: CarFieldArgs,
    },

    /// Edit a car; omitted fields keep their current value
    #[command(alias = "e")]
    Edit {
        /// Server id of the car
        id: i64,

        #[command(flatten)]
        fields: CarFieldArgs,
    },

    /// Delete a car from the collection
    #[command(alias = "rm")]
    Delete {
        /// Server id of the car
        id: i64,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (server-url, code)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// The form fields shared by add and edit.
#[derive(Args, Debug, Default)]
pub struct CarFieldArgs {
    /// Brand (e.g. Opel)
    #[arg(long)]
    pub brand: Option<String>,

    /// Model (e.g. Astra)
    #[arg(long)]
    pub model: Option<String>,

    /// Commissioning year (e.g. 2015)
    #[arg(long)]
    pub year: Option<i32>,

    /// Fuel consumption in l/100km; a comma decimal like 5,5 works too
    #[arg(long, value_name = "L/100KM")]
    pub consumption: Option<String>,

    /// Mark the car electric (zeroes the consumption); --electric=false reverts
    #[arg(long, num_args = 0..=1, default_missing_value = "true", require_equals = true, value_name = "BOOL")]
    pub electric: Option<bool>,

    /// Owner's name
    #[arg(long)]
    pub owner: Option<String>,
}
