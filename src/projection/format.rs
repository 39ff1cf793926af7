//! Display formatting shared by the projections

/// Placeholder for absent optional fields
pub const NOT_AVAILABLE: &str = "N/A";

/// Unit suffix for areas
pub const AREA_UNIT: &str = "km²";

/// Group digits in threes: `1234567` -> `"1,234,567"`
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Grouped decimal with up to three fraction digits, trailing zeros trimmed
pub fn group_decimal(value: f64) -> String {
    if !value.is_finite() || value < 0.0 {
        return NOT_AVAILABLE.to_string();
    }
    let millis = (value * 1000.0).round() as u64;
    let whole = group_digits(millis / 1000);
    let frac = millis % 1000;
    if frac == 0 {
        whole
    } else {
        let frac = format!("{:03}", frac);
        format!("{}.{}", whole, frac.trim_end_matches('0'))
    }
}

pub fn population(value: Option<u64>) -> String {
    value.map(group_digits).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn area(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{} {}", group_decimal(v), AREA_UNIT),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Join non-empty parts with ", ", or N/A when there are none
pub fn join_or_na<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = parts
        .into_iter()
        .filter(|s| !s.as_ref().is_empty())
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        joined
    }
}

pub fn text_or_na(value: Option<&str>) -> String {
    value
        .filter(|s| !s.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}
