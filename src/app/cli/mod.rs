//! CLI adapter: the terminal plays the role the browser pages played.

mod admin;
mod bill;
mod cart;
mod menu;

use clap::{Parser, Subcommand};

use crate::domain::AppError;
use crate::ports::{ChangeNotifier, StateChange};

#[derive(Parser)]
#[command(name = "bistro")]
#[command(version)]
#[command(
    about = "Menu, cart and billing for a small restaurant storefront",
    long_about = None
)]
struct Cli {
    /// Serve the embedded seed menu instead of the remote API
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the menu, optionally filtered by a search query
    #[clap(visible_alias = "m")]
    Menu {
        /// Substring to match against name, description and category
        query: Option<String>,
        /// Skip the remote sync and render the persisted catalog as-is
        #[arg(long)]
        no_sync: bool,
    },
    /// Cart operations
    #[clap(visible_alias = "c")]
    Cart {
        #[command(subcommand)]
        command: cart::CartCommands,
    },
    /// Freeze the cart into a bill and clear it
    Checkout,
    /// Issued-bill operations
    Bill {
        #[command(subcommand)]
        command: bill::BillCommands,
    },
    /// Store the customer display name used on bills
    Name {
        /// Display name
        name: String,
    },
    /// Catalog administration (requires login)
    #[clap(visible_alias = "a")]
    Admin {
        #[command(subcommand)]
        command: admin::AdminCommands,
    },
}

/// Notifier that paints transient feedback to the terminal, the stand-in
/// for an auto-dismissing popup.
struct TerminalNotifier;

impl ChangeNotifier for TerminalNotifier {
    fn notify(&self, change: &StateChange) {
        if let StateChange::ItemAdded { name } = change {
            println!("🛒 {} added to cart!", name);
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Menu { query, no_sync } => menu::run_menu(cli.offline, query.as_deref(), no_sync),
        Commands::Cart { command } => cart::run_cart(cli.offline, command),
        Commands::Checkout => cart::run_checkout(cli.offline),
        Commands::Bill { command } => bill::run_bill(cli.offline, command),
        Commands::Name { name } => run_name(cli.offline, &name),
        Commands::Admin { command } => admin::run_admin(cli.offline, command),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_name(offline: bool, name: &str) -> Result<(), AppError> {
    let engine = crate::open(offline)?;
    engine.set_customer_name(name)?;
    println!("✅ Bills will be issued to {}", name);
    Ok(())
}

/// Open the storefront and attach the terminal notifier.
pub(crate) fn open_storefront(offline: bool) -> Result<crate::DefaultStorefront, AppError> {
    let mut engine = crate::open(offline)?;
    engine.set_notifier(Box::new(TerminalNotifier));
    Ok(engine)
}
