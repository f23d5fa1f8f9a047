//! # CLI Layer
//!
//! This module is **one possible UI client** for stockpad, not the
//! application itself. It is the only place that:
//! - Knows about terminal I/O (stdout, stderr, stdin for confirmations)
//! - Installs the log subscriber
//! - Turns errors into an exit code
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the data dir, opens the session, loads config
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::print::{
    print_messages, render_alerts, render_dashboard, render_items, render_perishables,
    render_sales, render_transactions,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use stockpad::api::{ItemForm, SaleForm, StockApi};
use stockpad::config::StockConfig;
use stockpad::error::{Result, StockError};
use stockpad::model::ItemId;
use stockpad::store::fs::FsBlobStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "STOCKPAD_HOME";
const LOG_ENV: &str = "STOCKPAD_LOG";

struct AppContext {
    api: StockApi<FsBlobStore>,
    config: StockConfig,
    data_dir: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Dashboard) | None => handle_dashboard(&ctx),
        Some(Commands::Add {
            name,
            category,
            stock,
            price,
            expires,
        }) => handle_add(&mut ctx, name, category, stock, price, expires),
        Some(Commands::Sell { item, quantity }) => handle_sell(&mut ctx, item, quantity),
        Some(Commands::Stock { item, stock }) => handle_stock(&mut ctx, &item, &stock),
        Some(Commands::Delete { item, yes }) => handle_delete(&mut ctx, &item, yes),
        Some(Commands::Items) => {
            print!("{}", render_items(&ctx.api.overview().items, &ctx.config));
            Ok(())
        }
        Some(Commands::Sales) => {
            print!("{}", render_sales(&ctx.api.overview().sales, &ctx.config));
            Ok(())
        }
        Some(Commands::Transactions) => {
            let rows = ctx.api.overview().transactions;
            print!("{}", render_transactions(&rows, &ctx.config));
            Ok(())
        }
        Some(Commands::Perishables) => {
            print!("{}", render_perishables(&ctx.api.overview().perishables));
            Ok(())
        }
        Some(Commands::Alerts) => {
            print!("{}", render_alerts(&ctx.api.overview().alerts));
            Ok(())
        }
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "stockpad=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "stockpad", "stockpad")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            StockError::PersistenceFailure(format!(
                "could not determine a data directory; pass --data-dir or set {}",
                HOME_ENV
            ))
        })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    debug!(data_dir = %data_dir.display(), "opening inventory");

    let config = StockConfig::load(&data_dir)?;
    let api = StockApi::open(FsBlobStore::new(data_dir.clone()));

    Ok(AppContext {
        api,
        config,
        data_dir,
    })
}

fn handle_dashboard(ctx: &AppContext) -> Result<()> {
    let overview = ctx.api.overview();
    print!(
        "{}",
        render_dashboard(&overview.dashboard, &overview.alerts, &ctx.config)
    );
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    category: String,
    stock: String,
    price: String,
    expires: Option<String>,
) -> Result<()> {
    let form = ItemForm {
        name,
        category,
        stock,
        price,
        is_perishable: expires.is_some(),
        expiration_date: expires,
    };
    let result = ctx.api.add_item(&form)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_sell(ctx: &mut AppContext, item: String, quantity: String) -> Result<()> {
    let form = SaleForm {
        item_id: item,
        quantity,
    };
    let result = ctx.api.record_sale(&form)?;
    print_messages(&result.messages);
    for sale in &result.recorded_sales {
        println!("Total: {}", ctx.config.money(sale.total));
    }
    Ok(())
}

fn handle_stock(ctx: &mut AppContext, item: &str, stock: &str) -> Result<()> {
    let id = parse_id(item)?;
    let result = ctx.api.edit_stock(id, stock)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, item: &str, yes: bool) -> Result<()> {
    let id = parse_id(item)?;
    let name = ctx.api.inventory().item(id)?.name.clone();

    if !yes && !confirm(&format!("Delete item {} ({})?", name, id))? {
        println!("Cancelled.");
        return Ok(());
    }

    let result = ctx.api.delete_item(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            for key in StockConfig::KEYS {
                println!("{} = {}", key, ctx.config.get(key)?);
            }
        }
        (Some(key), None) => println!("{} = {}", key, ctx.config.get(&key)?),
        (Some(key), Some(value)) => {
            ctx.config.set(&key, &value)?;
            ctx.config.save(&ctx.data_dir)?;
            println!("{} = {}", key, ctx.config.get(&key)?);
        }
    }
    Ok(())
}

fn parse_id(raw: &str) -> Result<ItemId> {
    raw.parse()
        .map_err(|_| StockError::invalid("item", format!("'{}' is not an item id", raw)))
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}
