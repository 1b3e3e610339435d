use super::logging;
use super::print::print_result;
use super::setup::{Cli, Commands};
use super::shell;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use techlojinha::api::StockApi;
use techlojinha::config::{StockConfig, StockPaths, DATA_FILE_ENV};
use techlojinha::error::{Result, StockError};
use techlojinha::model::Scope;
use techlojinha::store::fs::FileStore;
use tracing::debug;

struct AppContext {
    api: StockApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = resolve_config(&cli)?;
    debug!(
        data_file = %config.data_file.display(),
        scope = ?config.scope,
        "configuration resolved"
    );

    match cli.command.unwrap_or(Commands::List) {
        Commands::Path => handle_path(&config),
        Commands::Add { category, product } => {
            handle_add(&mut open_context(&config), &category, &product)
        }
        Commands::Sell { category, product } => {
            handle_sell(&mut open_context(&config), &category, &product)
        }
        Commands::Search { category } => {
            handle_search(&open_context(&config), category.as_deref())
        }
        Commands::List => handle_list(&open_context(&config)),
        Commands::Shell => handle_shell(&mut open_context(&config)),
    }
}

fn open_context(config: &StockConfig) -> AppContext {
    AppContext {
        api: StockApi::open(FileStore::new(config.data_file.clone())),
    }
}

fn resolve_config(cli: &Cli) -> Result<StockConfig> {
    let project = std::env::current_dir().map_err(StockError::Io)?;
    let scope = if cli.global {
        Scope::Global
    } else {
        Scope::Project
    };

    let global = match ProjectDirs::from("com", "techlojinha", "techlojinha") {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None if scope == Scope::Global => {
            return Err(StockError::Store(
                "Could not determine the user data directory".to_string(),
            ))
        }
        None => project.clone(),
    };

    let paths = StockPaths { project, global };
    let from_env = std::env::var_os(DATA_FILE_ENV).map(PathBuf::from);
    Ok(StockConfig::resolve(&paths, scope, cli.file.clone(), from_env))
}

fn handle_path(config: &StockConfig) -> Result<()> {
    println!("{}", config.data_file.display());
    Ok(())
}

fn handle_add(ctx: &mut AppContext, category: &str, product: &str) -> Result<()> {
    let result = ctx.api.add(category, product);
    if result.is_noop() {
        // Blank fields: show the stock unchanged.
        print_result(&ctx.api.list());
        return Ok(());
    }
    print_result(&result);
    Ok(())
}

fn handle_sell(ctx: &mut AppContext, category: &str, product: &str) -> Result<()> {
    let result = ctx.api.sell(category, product);
    print_result(&result);
    Ok(())
}

fn handle_search(ctx: &AppContext, category: Option<&str>) -> Result<()> {
    let result = ctx.api.search(category.unwrap_or_default());
    print_result(&result);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    print_result(&ctx.api.list());
    Ok(())
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell::run(&mut ctx.api, stdin.lock(), stdout.lock()).map_err(StockError::Io)
}
