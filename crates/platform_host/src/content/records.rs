use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One row of the `papers` collection.
pub struct Paper {
    /// Row identifier (numeric ids are normalized to strings).
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Paper title.
    pub title: String,
    /// Author list as a display string; `null` reads as empty.
    #[serde(default, deserialize_with = "text_or_empty")]
    pub authors: String,
    /// External URL of the paper.
    pub url: String,
    /// Publication year. Numeric strings are accepted; anything else reads as unknown.
    #[serde(default, deserialize_with = "lenient_year")]
    pub year: Option<i32>,
    /// Date the entry was added (`YYYY-MM-DD`).
    #[serde(default)]
    pub date: Option<String>,
    /// Optional short description.
    #[serde(default)]
    pub desc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One row of the `links` collection.
pub struct LinkRecord {
    /// Row identifier (numeric ids are normalized to strings).
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Link title.
    pub title: String,
    /// Target URL.
    pub url: String,
    /// Date the entry was added (`YYYY-MM-DD`).
    #[serde(default)]
    pub date: Option<String>,
    /// Author or publisher, when known.
    #[serde(default)]
    pub authors: Option<String>,
    /// Optional short description.
    #[serde(default)]
    pub desc: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(raw) => Ok(raw),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, found {other}"
        ))),
    }
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(raw) => raw,
        other => other.to_string(),
    })
}

fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let year = match Value::deserialize(deserializer)? {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|y| y.fract() == 0.0).map(|y| y as i64)),
        Value::String(raw) => raw.trim().parse::<i64>().ok(),
        _ => None,
    };
    Ok(year.and_then(|year| i32::try_from(year).ok()))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Formats a `YYYY-MM-DD` (optionally followed by a time part) date as `Mon D, YYYY`.
///
/// Dates are interpreted as UTC calendar dates, so no timezone shift can move them to the
/// previous day. Missing or unparseable values render as `Unknown`.
pub fn format_record_date(date: Option<&str>) -> String {
    date.and_then(parse_calendar_date)
        .map(|(year, month, day)| {
            format!("{} {day}, {year}", MONTH_ABBREVIATIONS[(month - 1) as usize])
        })
        .unwrap_or_else(|| "Unknown".to_string())
}

fn parse_calendar_date(raw: &str) -> Option<(i32, u32, u32)> {
    let date_part = raw.trim().get(..10)?;
    let mut parts = date_part.split('-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    let day = parts.next()?.parse::<u32>().ok()?;
    if parts.next().is_some() || !(1..=12).contains(&month) {
        return None;
    }
    if !(1..=days_in_month(year, month)).contains(&day) {
        return None;
    }
    Some((year, month, day))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn formats_dates_like_a_utc_short_month_label() {
        assert_eq!(format_record_date(Some("2024-03-05")), "Mar 5, 2024");
        assert_eq!(
            format_record_date(Some("2023-12-31T23:59:00Z")),
            "Dec 31, 2023"
        );
    }

    #[test]
    fn missing_or_invalid_dates_render_unknown() {
        assert_eq!(format_record_date(None), "Unknown");
        assert_eq!(format_record_date(Some("")), "Unknown");
        assert_eq!(format_record_date(Some("2024-13-01")), "Unknown");
        assert_eq!(format_record_date(Some("yesterday!")), "Unknown");
    }

    #[test]
    fn impossible_calendar_days_render_unknown() {
        assert_eq!(format_record_date(Some("2024-02-31")), "Unknown");
        assert_eq!(format_record_date(Some("2023-02-29")), "Unknown");
        assert_eq!(format_record_date(Some("2024-04-31")), "Unknown");
        assert_eq!(format_record_date(Some("2024-02-29")), "Feb 29, 2024");
        assert_eq!(format_record_date(Some("2000-02-29")), "Feb 29, 2000");
    }

    #[test]
    fn one_loose_paper_row_does_not_sink_the_collection() {
        let papers: Vec<Paper> = serde_json::from_str(
            r#"[
                {"id": 1, "title": "Attention", "authors": "Vaswani et al.", "url": "https://arxiv.org/abs/1706.03762", "year": 2017},
                {"id": 2, "title": "Dropout", "authors": null, "url": "https://jmlr.org/dropout", "year": "2018"},
                {"id": 3, "title": "Draft", "authors": "Me", "url": "https://drafts.test/3", "year": "soon"}
            ]"#,
        )
        .expect("papers");

        assert_eq!(papers.len(), 3);
        assert_eq!(papers[0].year, Some(2017));
        assert_eq!(papers[1].authors, "");
        assert_eq!(papers[1].year, Some(2018));
        assert_eq!(papers[2].year, None);
    }

    #[test]
    fn records_accept_numeric_ids_and_missing_optionals() {
        let paper: Paper = serde_json::from_str(
            r#"{"id": 7, "title": "Attention", "authors": "Vaswani et al.", "url": "https://arxiv.org/abs/1706.03762"}"#,
        )
        .expect("paper");
        assert_eq!(paper.id, "7");
        assert_eq!(paper.year, None);
        assert_eq!(paper.desc, None);

        let link: LinkRecord = serde_json::from_str(
            r#"{"id": "a1", "title": "Blog", "url": "https://example.com", "date": null, "authors": null}"#,
        )
        .expect("link");
        assert_eq!(link.id, "a1");
        assert_eq!(link.authors, None);
    }
}
