/// 1) Trim surrounding whitespace.
pub fn clean_str(raw: &str) -> String {
    raw.trim().to_string()
}

/// 2) Best-effort integer coercion. Integral decimals such as `"40.0"` are
/// accepted; anything else (text, fractions, empty) yields `None`.
pub fn coerce_int(raw: &str) -> Option<i64> {
    let s = raw.trim();
    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }
    let f = s.parse::<f64>().ok()?;
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
