//! Cart and checkout commands.

use clap::Subcommand;

use crate::domain::{AppError, CartChange};
use crate::services::format_amount;

#[derive(Subcommand)]
pub enum CartCommands {
    /// Show cart lines and the running total
    #[clap(visible_alias = "ls")]
    Show,
    /// Add one unit of a menu item
    Add {
        /// Menu item id
        id: u32,
    },
    /// Change a line's quantity by a delta (negative to remove units)
    Qty {
        /// Menu item id
        id: u32,
        /// Quantity delta, e.g. 2 or -1
        #[arg(allow_hyphen_values = true)]
        delta: i32,
    },
}

pub fn run_cart(offline: bool, command: CartCommands) -> Result<(), AppError> {
    let mut engine = super::open_storefront(offline)?;

    match command {
        CartCommands::Show => print_cart(&engine),
        CartCommands::Add { id } => {
            match engine.add_to_cart(id) {
                Ok(_) => {}
                // A dead id is a warning at the surface, not a failure;
                // the engine stays explicit underneath.
                Err(AppError::ItemNotFound(id)) => {
                    eprintln!("⚠️  No menu item with id {}", id);
                }
                Err(e) => return Err(e),
            }
            print_cart(&engine)
        }
        CartCommands::Qty { id, delta } => {
            match engine.change_qty(id, delta)? {
                CartChange::Set(qty) => println!("Quantity of #{} is now {}", id, qty),
                CartChange::Removed => println!("Removed #{} from the cart", id),
                CartChange::Ignored => println!("Nothing to change for #{}", id),
            }
            print_cart(&engine)
        }
    }
}

pub fn run_checkout(offline: bool) -> Result<(), AppError> {
    let mut engine = super::open_storefront(offline)?;
    match engine.checkout() {
        Ok(bill) => {
            println!("✅ Thank you for your order!");
            println!("   {} — total ₹{}", bill.bill_no, format_amount(bill.total));
            println!("   Run 'bistro bill show' for the receipt.");
            Ok(())
        }
        Err(AppError::EmptyCart) => {
            eprintln!("Your cart is empty.");
            std::process::exit(1);
        }
        Err(e) => Err(e),
    }
}

fn print_cart(engine: &crate::DefaultStorefront) -> Result<(), AppError> {
    if engine.cart_lines().is_empty() {
        println!("Your cart is empty.");
        return Ok(());
    }
    for line in engine.cart_lines() {
        println!(
            "  {} ×{}  ₹{}",
            line.name,
            line.qty,
            format_amount(line.subtotal())
        );
    }
    println!("Total: ₹{}", format_amount(engine.cart_total()));
    Ok(())
}
