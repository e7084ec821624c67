//! Fixed-width product table and amount formatting.

use stockkeep_core::Entity;
use stockkeep_inventory::Product;

pub const EMPTY_INVENTORY: &str = "Inventory is empty.";

const ID_WIDTH: usize = 10;
const NAME_WIDTH: usize = 50;
const QUANTITY_WIDTH: usize = 17;
const PRICE_WIDTH: usize = 19;

fn separator() -> String {
    // Four cells, each padded by one space on both sides, plus five borders.
    "-".repeat(ID_WIDTH + NAME_WIDTH + QUANTITY_WIDTH + PRICE_WIDTH + 4 * 2 + 5)
}

fn row(id: &str, name: &str, quantity: &str, price: &str) -> String {
    format!(
        "| {id:<ID_WIDTH$} | {name:<NAME_WIDTH$} | {quantity:<QUANTITY_WIDTH$} | {price:<PRICE_WIDTH$} |"
    )
}

/// Render products as a bordered table, or the empty-inventory notice.
pub fn render<'a>(products: impl IntoIterator<Item = &'a Product>) -> String {
    let mut products = products.into_iter().peekable();
    if products.peek().is_none() {
        return EMPTY_INVENTORY.to_string();
    }

    let line = separator();
    let mut lines = vec![
        line.clone(),
        row("Product ID", "Name", "Quantity In Stock", "Price"),
        line.clone(),
    ];
    for product in products {
        lines.push(row(
            &product.id().to_string(),
            product.name(),
            &product.quantity().to_string(),
            &format_amount(product.price()),
        ));
        lines.push(line.clone());
    }
    lines.join("\n")
}

/// Two decimals with `,` thousands grouping, e.g. `1,234.50`.
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

/// Amount prefixed with a currency symbol, e.g. `$25.00`.
pub fn format_money(symbol: &str, value: f64) -> String {
    format!("{symbol}{}", format_amount(value))
}
