//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for line identity and formatting.

use super::models::CartLine;

/// Derives the cart line identity for a product + variant combination.
///
/// The composite key is what makes "add the same shirt in the same size and
/// color twice" increment a quantity while "add it in another color" creates
/// a second line. Unselected variants contribute an empty segment so the
/// result is deterministic.
///
/// Example output: `"4-M-Navy"`, `"1--Black"`, `"2--"`.
pub fn line_id(product_id: &str, size: Option<&str>, color: Option<&str>) -> String {
    format!(
        "{}-{}-{}",
        product_id,
        size.unwrap_or(""),
        color.unwrap_or("")
    )
}

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x Premium Wireless Headphones, 1x Modern Backpack"`.
pub fn format_line_summary(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|l| format!("{}x {}", l.quantity, l.product.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats an amount for display, rounding to cents.
///
/// Stored totals stay unrounded; this is the single place rounding happens.
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}
