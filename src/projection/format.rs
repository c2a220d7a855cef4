//! Number formatting for result lines

/// `2896541` -> `"2,896,541"`
pub fn format_thousands(n: u64) -> String {
    group_digits(&n.to_string())
}

/// Insert a comma every three digits from the right
fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Experience with separators and at most two decimals, trailing zeros dropped.
/// `4.5` -> `"4.5"`, `35.0` -> `"35"`, `1154.0` -> `"1,154"`
pub fn format_experience(xp: f64) -> String {
    let fixed = format!("{:.2}", xp.max(0.0));
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac.trim_end_matches('0');

    let whole = group_digits(whole);
    if frac.is_empty() {
        whole
    } else {
        format!("{}.{}", whole, frac)
    }
}
