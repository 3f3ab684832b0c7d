/// Render an amount in cents as dollars with thousands separators, e.g. `$1,299.00`.
pub fn format_cents(cents: u64) -> String {
    let dollars = (cents / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${grouped}.{:02}", cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_cents() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(9000), "$90.00");
        assert_eq!(format_cents(129_999), "$1,299.99");
        assert_eq!(format_cents(100_000_000), "$1,000,000.00");
    }
}
