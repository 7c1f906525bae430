//! Display formatting for dates, prices and model text (en-IN locale).

use chrono::NaiveDate;

use crate::domain::Price;

/// Numeric date as rendered in tables: `15/8/2024`.
#[must_use]
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%-d/%-m/%Y").to_string()
}

/// Long date as rendered on event cards: `15 August 2024`.
#[must_use]
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Date as rendered on the event detail page: `Thu Aug 15 2024`.
#[must_use]
pub fn format_detail_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Rupee amount with Indian digit grouping: `₹1,50,000`, `₹99.5`.
///
/// Fractional digits appear only when non-zero.
#[must_use]
pub fn format_inr(price: Price) -> String {
    let mut out = String::from("₹");
    out.push_str(&group_indian(price.major_part()));
    let fraction = price.minor_part();
    if fraction != 0 {
        let digits = format!("{fraction:02}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

/// Groups digits as 12,34,56,789: the last three together, then pairs.
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = left;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// Escapes text for inclusion in HTML element content.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes `text` and turns each line break into `<br />`.
#[must_use]
pub fn text_to_html(text: &str) -> String {
    text.lines().map(escape_html).collect::<Vec<_>>().join("<br />")
}
