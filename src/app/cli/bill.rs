//! Billing view and HTML export.

use std::fs;
use std::path::PathBuf;

use clap::Subcommand;

use crate::domain::{AppError, BillingSnapshot};
use crate::services::{format_amount, render_receipt};

#[derive(Subcommand)]
pub enum BillCommands {
    /// Print the last issued bill
    Show,
    /// Write the last issued bill as a standalone HTML receipt
    Export {
        /// Output path; defaults to Bistro_Bill_<date>.html
        path: Option<PathBuf>,
    },
}

pub fn run_bill(offline: bool, command: BillCommands) -> Result<(), AppError> {
    let engine = crate::open(offline)?;
    let Some(bill) = engine.last_bill()? else {
        println!("No order found.");
        return Ok(());
    };

    match command {
        BillCommands::Show => print_bill(&bill),
        BillCommands::Export { path } => {
            let path = path.unwrap_or_else(|| {
                PathBuf::from(format!("Bistro_Bill_{}.html", bill.issued_at.format("%Y-%m-%d")))
            });
            fs::write(&path, render_receipt(&bill)?)?;
            println!("✅ Receipt written to {}", path.display());
            Ok(())
        }
    }
}

fn print_bill(bill: &BillingSnapshot) -> Result<(), AppError> {
    println!("{}", bill.bill_no);
    println!("Date: {}", bill.issued_at.format("%Y-%m-%d %H:%M:%S"));
    println!("Customer: {}", bill.customer);
    println!();
    for line in &bill.lines {
        println!(
            "  {} ×{} @ ₹{}  = ₹{}",
            line.name,
            line.qty,
            format_amount(line.unit_price),
            format_amount(line.subtotal())
        );
    }
    println!();
    println!("Total: ₹{}", format_amount(bill.total));
    Ok(())
}
