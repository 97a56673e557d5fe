//! Text formatting for views (pt-BR dates, excerpts)

use chrono::{DateTime, Datelike, NaiveDate};

/// Shown for empty optional values
pub const NOT_INFORMED: &str = "Não informado";

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Parse `YYYY-MM-DD` or a full RFC 3339 timestamp
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// `18 de outubro de 2026`
pub fn long_date(value: Option<&str>) -> String {
    match value {
        None => NOT_INFORMED.to_string(),
        Some(raw) if raw.trim().is_empty() => NOT_INFORMED.to_string(),
        Some(raw) => match parse_date(raw) {
            Some(date) => format!(
                "{:02} de {} de {}",
                date.day(),
                MONTHS[date.month0() as usize],
                date.year()
            ),
            None => raw.to_string(),
        },
    }
}

/// `18/10/2026`
pub fn short_date(value: Option<&str>) -> String {
    match value {
        None => NOT_INFORMED.to_string(),
        Some(raw) if raw.trim().is_empty() => NOT_INFORMED.to_string(),
        Some(raw) => match parse_date(raw) {
            Some(date) => date.format("%d/%m/%Y").to_string(),
            None => raw.to_string(),
        },
    }
}

/// First `max` characters followed by an ellipsis
pub fn excerpt(text: &str, max: usize) -> String {
    let head: String = text.chars().take(max).collect();
    format!("{}...", head)
}

/// The value, or [`NOT_INFORMED`] when missing or blank
pub fn or_not_informed(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_INFORMED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_date() {
        assert_eq!(long_date(Some("2026-10-18")), "18 de outubro de 2026");
        assert_eq!(long_date(Some("2024-03-05")), "05 de março de 2024");
        assert_eq!(
            long_date(Some("2024-12-01T10:00:00-03:00")),
            "01 de dezembro de 2024"
        );
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date(Some("2026-10-18")), "18/10/2026");
        assert_eq!(short_date(None), NOT_INFORMED);
        assert_eq!(short_date(Some("ontem")), "ontem");
    }

    #[test]
    fn test_blank_date_is_not_informed() {
        assert_eq!(short_date(Some("")), NOT_INFORMED);
        assert_eq!(short_date(Some("   ")), NOT_INFORMED);
        assert_eq!(long_date(Some("")), NOT_INFORMED);
        assert_eq!(long_date(None), NOT_INFORMED);
    }

    #[test]
    fn test_excerpt_counts_characters() {
        assert_eq!(excerpt("Ótimo café", 5), "Ótimo...");
        assert_eq!(excerpt("curto", 100), "curto...");
    }

    #[test]
    fn test_or_not_informed() {
        assert_eq!(or_not_informed(Some("(31) 3333-0000")), "(31) 3333-0000");
        assert_eq!(or_not_informed(Some("")), NOT_INFORMED);
        assert_eq!(or_not_informed(None), NOT_INFORMED);
    }
}
