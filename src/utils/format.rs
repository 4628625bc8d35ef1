/// Format a unit price or subtotal for display.
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(29.99), "$29.99");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(139.9), "$139.90");
    }
}
