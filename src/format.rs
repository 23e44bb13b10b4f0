//! Fixed-locale currency formatting
//!
//! All plan amounts are Brazilian reais; reports format them with the
//! pt-BR convention: `R$` prefix, `.` thousands separator, `,` decimals.

/// Format an amount as BRL, e.g. `R$ 819.980,00`
pub fn format_brl(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{frac:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_and_decimals() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(999.0), "R$ 999,00");
        assert_eq!(format_brl(38_000.0), "R$ 38.000,00");
        assert_eq!(format_brl(819_980.0), "R$ 819.980,00");
        assert_eq!(format_brl(1_234_567.89), "R$ 1.234.567,89");
    }

    #[test]
    fn test_rounding_to_cents() {
        assert_eq!(format_brl(13_200.005), "R$ 13.200,01");
        assert_eq!(format_brl(0.994), "R$ 0,99");
    }

    #[test]
    fn test_negative_amounts() {
        // Not expected from the projection, but the formatter stays total
        assert_eq!(format_brl(-1_000.0), "-R$ 1.000,00");
    }
}
