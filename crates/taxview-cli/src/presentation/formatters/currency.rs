/// Format a value as currency with thousands separators: `$15,000`,
/// `-$1,234.50`. Whole-dollar amounts drop the cents.
pub fn format_currency(value: f64, symbol: &str) -> String {
    let negative = value < 0.0;
    let cents_total = (value.abs() * 100.0).round() as u64;
    let dollars = cents_total / 100;
    let cents = cents_total % 100;

    let body = if cents == 0 {
        group_thousands(dollars)
    } else {
        format!("{}.{:02}", group_thousands(dollars), cents)
    };

    if negative {
        format!("-{}{}", symbol, body)
    } else {
        format!("{}{}", symbol, body)
    }
}

/// Insert thousands separators into a non-negative integer.
pub fn group_thousands(n: u64) -> String {
    let s = n.to_string();
    let len = s.len();
    if len <= 3 {
        return s;
    }
    let first_len = len % 3;
    let first_len = if first_len == 0 { 3 } else { first_len };
    let mut out = s[..first_len].to_string();
    for i in (first_len..len).step_by(3) {
        out.push(',');
        out.push_str(&s[i..i + 3]);
    }
    out
}
