use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

static DESCRIPTION_RE: OnceLock<Regex> = OnceLock::new();

// "15 Jan 2020 - Some text": day, month abbreviation, year, spaced hyphen, rest.
fn description_re() -> &'static Regex {
    DESCRIPTION_RE.get_or_init(|| {
        Regex::new(
            r"(?isx)
            ^\s*
            ([0-9]{1,2})
            \s+
            (jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)
            \s+
            ([0-9]{4})
            \s+-\s+
            (.+)",
        )
        .expect("description regex is valid")
    })
}

fn month_number(abbr: &str) -> Option<u32> {
    let m = match abbr.to_ascii_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(m)
}

/// Split a snippet into its description and the date stamp Google prefixes to
/// dated pages.
///
/// Only the exact `"D Mon YYYY - "` shape is recognized. Anything else comes
/// back unchanged with no date. A stamp that names an impossible day
/// (`31 Feb 2020`) still has its prefix removed, but yields no date.
pub fn parse_description(raw: &str) -> (String, Option<NaiveDate>) {
    let Some(cap) = description_re().captures(raw) else {
        return (raw.to_string(), None);
    };

    let description = cap[4].to_string();

    let day = cap[1].trim_start_matches('0').parse::<u32>().ok();
    let month = month_number(&cap[2]);
    let year = cap[3].parse::<i32>().ok();

    let date = match (day, month, year) {
        (Some(d), Some(m), Some(y)) => NaiveDate::from_ymd_opt(y, m, d),
        _ => None,
    };

    (description, date)
}
