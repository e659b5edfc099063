//! Formatting utilities.

/// Group an integer's digits in thousands with `.` (Italian style).
pub fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let bytes: Vec<_> = s.bytes().rev().collect();
    let chunks: Vec<_> = bytes
        .chunks(3)
        .map(|chunk| chunk.iter().rev().map(|&b| b as char).collect::<String>())
        .collect();
    chunks.into_iter().rev().collect::<Vec<_>>().join(".")
}

/// Format a kilogram figure the way the dataset writes it: `.` between
/// thousands, `,` before at most two decimals, no decimals for whole numbers.
pub fn format_kg(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    let whole = format_thousands(cents / 100);

    match cents % 100 {
        0 => format!("{}{}", sign, whole),
        frac => format!("{}{},{:02}", sign, whole, frac),
    }
}

/// Format a signed percentage with two decimals and a decimal comma.
pub fn format_percentage(value: f64) -> String {
    format!("{:+.2}%", value).replace('.', ",")
}
