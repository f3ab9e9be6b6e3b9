//! HTML receipt rendering for issued bills.

use include_dir::{Dir, include_dir};
use minijinja::{Environment, context};

use crate::domain::{AppError, BillingSnapshot};

static ASSETS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets");

const RECEIPT_TEMPLATE: &str = "receipt.html";

/// Format an amount for display: Indian digit grouping, decimals only when
/// the amount is not whole. Presentation only; stored totals stay raw.
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = (amount.abs() * 100.0).round() / 100.0;
    let whole = rounded.trunc() as u64;
    let paise = ((rounded - rounded.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::new();
    if digits.len() <= 3 {
        grouped.push_str(&digits);
    } else {
        // Indian convention: last three digits, then groups of two.
        let (head, tail) = digits.split_at(digits.len() - 3);
        let head_bytes = head.as_bytes();
        let mut parts: Vec<&str> = Vec::new();
        let mut end = head_bytes.len();
        while end > 2 {
            parts.push(std::str::from_utf8(&head_bytes[end - 2..end]).unwrap());
            end -= 2;
        }
        parts.push(std::str::from_utf8(&head_bytes[..end]).unwrap());
        parts.reverse();
        grouped.push_str(&parts.join(","));
        grouped.push(',');
        grouped.push_str(tail);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if paise > 0 {
        out.push_str(&format!(".{:02}", paise));
    }
    out
}

/// Render a standalone HTML receipt for an issued bill.
pub fn render_receipt(bill: &BillingSnapshot) -> Result<String, AppError> {
    let raw = ASSETS_DIR
        .get_file(RECEIPT_TEMPLATE)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::config_error("Embedded receipt template missing"))?;

    let mut env = Environment::new();
    env.add_template(RECEIPT_TEMPLATE, raw)?;
    let template = env.get_template(RECEIPT_TEMPLATE)?;

    let lines: Vec<_> = bill
        .lines
        .iter()
        .map(|line| {
            context! {
                name => line.name,
                qty => line.qty,
                unit_price => format_amount(line.unit_price),
                subtotal => format_amount(line.subtotal()),
            }
        })
        .collect();

    let html = template.render(context! {
        bill_no => bill.bill_no,
        date => bill.issued_at.format("%Y-%m-%d").to_string(),
        time => bill.issued_at.format("%H:%M:%S").to_string(),
        customer => bill.customer,
        lines => lines,
        total => format_amount(bill.total),
    })?;

    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cart;
    use crate::domain::MenuItem;
    use chrono::{TimeZone, Utc};

    #[test]
    fn format_amount_groups_indian_style() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(50.0), "50");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(1000.0), "1,000");
        assert_eq!(format_amount(123456.0), "1,23,456");
        assert_eq!(format_amount(12345678.0), "1,23,45,678");
        assert_eq!(format_amount(120.5), "120.50");
    }

    #[test]
    fn receipt_contains_lines_total_and_bill_no() {
        let item = MenuItem {
            id: 1,
            name: "Masala Dosa".to_string(),
            category: "Tiffin".to_string(),
            price: 50.0,
            desc: String::new(),
            img: String::new(),
        };
        let mut cart = Cart::default();
        cart.add(&item);
        cart.change_qty(1, 2);

        let at = Utc.with_ymd_and_hms(2026, 1, 5, 18, 45, 0).unwrap();
        let bill = BillingSnapshot::issue(&cart, "Mani", at).unwrap();
        let html = render_receipt(&bill).unwrap();

        assert!(html.contains(&bill.bill_no));
        assert!(html.contains("Masala Dosa"));
        assert!(html.contains("Mani"));
        assert!(html.contains("150"));
        assert!(html.contains("2026-01-05"));
    }
}
