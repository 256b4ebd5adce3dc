//! Price formatting for display.

/// Format a whole-dollar amount the Québécois way: space-grouped thousands
/// followed by the currency sign, e.g. `1 250 000 $`.
#[must_use]
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }
    grouped.push_str(" $");
    grouped
}
