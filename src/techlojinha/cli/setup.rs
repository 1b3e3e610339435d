use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "techlojinha", bin_name = "techlojinha", version)]
#[command(about = "Gestão de estoque da Techlojinha", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Keep the data file in the per-user data directory
    #[arg(short, long, global = true, help_heading = "Options")]
    pub global: bool,

    /// Data file to use (overrides TECHLOJINHA_DATA and --global)
    #[arg(short, long, global = true, value_name = "PATH", help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Add a product to a category (creates the category if needed)
    #[command(aliases = ["a", "adicionar"])]
    Add {
        /// Category, e.g. "Processador"
        category: String,
        /// Product, e.g. "Ryzen 5 5600"
        product: String,
    },

    /// Sell one unit of a product
    #[command(aliases = ["v", "vender"])]
    Sell {
        /// Category, exactly as listed
        category: String,
        /// Product, exactly as listed
        product: String,
    },

    /// Show the products of a category (all categories if omitted)
    #[command(aliases = ["b", "buscar"])]
    Search {
        /// Category to look up
        category: Option<String>,
    },

    /// Show the whole stock
    #[command(alias = "ls")]
    List,

    /// Print the path of the data file
    Path,

    /// Interactive form: add, sell and search in one session
    #[command(alias = "form")]
    Shell,
}
