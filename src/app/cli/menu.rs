//! Menu browsing command.

use crate::domain::AppError;
use crate::services::format_amount;

pub fn run_menu(offline: bool, query: Option<&str>, no_sync: bool) -> Result<(), AppError> {
    let mut engine = super::open_storefront(offline)?;

    if !no_sync && !engine.sync_menu() {
        // Best-effort read: keep rendering whatever was last persisted.
        eprintln!("⚠️  Could not reach the menu service; showing the last saved menu.");
    }

    let sections = engine.menu(query);
    if sections.is_empty() {
        println!("No dishes found. Try another search.");
        return Ok(());
    }

    for section in sections {
        println!("\n== {} ==", section.category);
        for item in section.items {
            let in_cart = engine.quantity_of(item.id);
            let marker = if in_cart > 0 { format!("  [x{} in cart]", in_cart) } else { String::new() };
            println!("  #{:<3} {} — ₹{}{}", item.id, item.name, format_amount(item.price), marker);
            if !item.desc.is_empty() {
                println!("       {}", item.desc);
            }
        }
    }
    Ok(())
}
