/// Format a probability as a percentage
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Format a probability with a fixed number of decimals for axis labels
pub fn format_probability(value: f64) -> String {
    format!("{:.1}", value)
}

/// Format an integer with thousands separators
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
