// templates/format.rs

/// 1250000 -> "1,250,000"
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-dollar price with separators, e.g. "$890,000".
/// Prices are non-negative; cents are rounded away.
pub fn price(amount: f64) -> String {
    format!("${}", thousands(amount.max(0.0).round() as u64))
}

/// Bathrooms, square feet: "3.5" stays "3.5", "2.0" prints as "2".
pub fn quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
