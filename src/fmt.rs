/// Format an amount as dollars with thousands separators: $1,234.56
pub fn money(value: f64) -> String {
    let negative = value < 0.0;
    let with_commas = group_thousands(&format!("{:.2}", value.abs()));
    if negative {
        format!("-${with_commas}")
    } else {
        format!("${with_commas}")
    }
}

fn group_thousands(decimal: &str) -> String {
    let (int_part, dec_part) = decimal.split_once('.').unwrap_or((decimal, "00"));
    let mut out = Vec::new();
    for (i, ch) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    let grouped: String = out.into_iter().rev().collect();
    format!("{grouped}.{dec_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(money(1234.56), "$1,234.56");
        assert_eq!(money(1000000.99), "$1,000,000.99");
        assert_eq!(money(42.1), "$42.10");
        assert_eq!(money(0.0), "$0.00");
    }

    #[test]
    fn money_keeps_sign_outside_the_symbol() {
        assert_eq!(money(-500.0), "-$500.00");
    }

    #[test]
    fn money_rounds_to_cents() {
        assert_eq!(money(12.346), "$12.35");
        assert_eq!(money(999.999), "$1,000.00");
    }
}
