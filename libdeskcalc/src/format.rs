//! Number formatting for the display buffer.

/// Text for a computed value.
///
/// Uses the shortest representation that parses back to the same `f64`, so
/// `5.0` becomes `"5"` and `0.1 + 0.2` keeps its full tail. Negative zero is
/// shown as `"0"`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Insert thousands separators into the integer part of a buffer text.
///
/// Display only: the grouped text never goes back into the buffer.
pub fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };

    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot_pos) => unsigned.split_at(dot_pos),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}{}", sign, grouped, frac_part)
}
