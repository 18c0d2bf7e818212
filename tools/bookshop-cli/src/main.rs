//! Bookshop CLI - storefront front end for the bookshop domain library.
//!
//! Commands:
//! - `bookshop catalog` - List and search books
//! - `bookshop shop` - Interactive shopping session with cart and checkout
//! - `bookshop demo` - Scripted checkout from cart to placed order
//! - `bookshop orders` - Search and update orders
//! - `bookshop products` - Search and delete catalog products
//! - `bookshop offers` - List and delete promotional offers
//! - `bookshop config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    CatalogArgs, ConfigArgs, DemoArgs, OffersArgs, OrdersArgs, ProductsArgs, ShopArgs,
};

/// Bookshop CLI - browse books, fill a cart and check out
#[derive(Parser)]
#[command(name = "bookshop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List and search the catalog
    Catalog(CatalogArgs),

    /// Start an interactive shopping session
    Shop(ShopArgs),

    /// Run a scripted checkout
    Demo(DemoArgs),

    /// Search and manage orders
    Orders(OrdersArgs),

    /// Search and delete catalog products
    Products(ProductsArgs),

    /// List and delete offers
    Offers(OffersArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.json);

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Shop(args) => commands::shop::run(args, &ctx).await,
        Commands::Demo(args) => commands::demo::run(args, &ctx).await,
        Commands::Orders(args) => commands::orders::run(args, &ctx).await,
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Offers(args) => commands::offers::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
