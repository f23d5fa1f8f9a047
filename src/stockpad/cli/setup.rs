use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "stockpad", bin_name = "stockpad", version = get_version())]
#[command(about = "Track stock, record sales, and watch for low stock and expiring goods", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the inventory data (defaults to $STOCKPAD_HOME or the user data dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show totals, today's sales, forecast and alerts (default)
    #[command(alias = "d")]
    Dashboard,

    /// Add an item to the inventory
    #[command(alias = "a")]
    Add {
        /// Item name
        name: String,

        /// Category (e.g. Dairy, Hardware)
        category: String,

        /// Units in stock
        #[arg(allow_hyphen_values = true)]
        stock: String,

        /// Unit price
        #[arg(allow_hyphen_values = true)]
        price: String,

        /// Expiration date (YYYY-MM-DD); marks the item as perishable
        #[arg(long, short = 'e', value_name = "DATE")]
        expires: Option<String>,
    },

    /// Record a sale of an item
    #[command(alias = "s")]
    Sell {
        /// Item id (see `stockpad items`)
        item: String,

        /// Units sold
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },

    /// Set the stock of an item
    Stock {
        /// Item id
        item: String,

        /// New stock level
        #[arg(allow_hyphen_values = true)]
        stock: String,
    },

    /// Delete an item (its sales stay on record)
    #[command(alias = "rm")]
    Delete {
        /// Item id
        item: String,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// List items
    #[command(alias = "ls")]
    Items,

    /// List recorded sales
    Sales,

    /// Show the most recent transactions, newest first
    #[command(alias = "tx")]
    Transactions,

    /// Show perishable items and their expiration status
    Perishables,

    /// Show low-stock alerts
    Alerts,

    /// Get or set configuration
    Config {
        /// Configuration key (currency, highlight-low-stock)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_dashboard() {
        let cli = Cli::try_parse_from(["stockpad"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn add_with_expiration() {
        let cli =
            Cli::try_parse_from(["stockpad", "add", "Milk", "Dairy", "6", "1.2", "-e", "2025-01-02"])
                .unwrap();
        match cli.command {
            Some(Commands::Add { name, expires, .. }) => {
                assert_eq!(name, "Milk");
                assert_eq!(expires.as_deref(), Some("2025-01-02"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn negative_quantities_reach_validation() {
        let cli = Cli::try_parse_from(["stockpad", "sell", "17", "-3"]).unwrap();
        match cli.command {
            Some(Commands::Sell { quantity, .. }) => assert_eq!(quantity, "-3"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["stockpad", "items", "--data-dir", "/tmp/x", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
    }
}
