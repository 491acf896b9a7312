//! Metric derivation for the dashboard. Everything here is a pure function
//! of one [`RawRecord`]; defaults make the whole pass total.

use crate::airtable::RawRecord;

const UP: &str = "↑";
const DOWN: &str = "↓";

/// Display-ready values for one render of the panel.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedMetrics {
    pub updated: String,
    pub inbox_count: f64,
    pub weekly_replies: f64,
    pub reply_change: String,
    pub wait_time_hours: f64,
    pub wait_change: String,
    pub fcr_rate: f64,
    /// Empty when the source field is absent; the template cell collapses.
    pub fcr_change: String,
    pub hours_per_week: f64,
    pub hours_per_day: f64,
    pub rp_codes_sent: f64,
    pub fs_codes_sent: f64,
    pub rp_weekly_cost: String,
    pub fs_weekly_cost: String,
    pub rp_annual_cost: String,
    pub fs_annual_cost: String,
}

pub fn format(raw: &RawRecord) -> FormattedMetrics {
    FormattedMetrics {
        updated: raw.text("Update", ""),
        inbox_count: raw.number("Inbox Count", 0.0),
        weekly_replies: raw.number("7D Emails", 0.0),
        reply_change: string_change_sentence(&raw.text("7D Change", "0%")),
        wait_time_hours: raw.number("Wait Time", 0.0),
        wait_change: numeric_change_sentence(raw.number("Wait Time Change", 0.0)),
        fcr_rate: raw.number("% FCR Rate", 0.0),
        fcr_change: fcr_change_sentence(&raw.text("% FCR Rate Change", "")),
        hours_per_week: round_tenth(raw.number("Hours Per Week", 0.0)),
        hours_per_day: round_tenth(raw.number("Hours Per Day", 0.0)),
        rp_codes_sent: raw.number("7D RP Codes Sent", 0.0),
        fs_codes_sent: raw.number("7D FS Codes Sent", 0.0),
        rp_weekly_cost: raw.text("7D RP Code Cost", "$0"),
        fs_weekly_cost: raw.text("7D FS Code Cost", "$0"),
        rp_annual_cost: abbreviate_annual_cost(&raw.text("Annual RP Code Cost", "$0")),
        fs_annual_cost: abbreviate_annual_cost(&raw.text("Annual FS Code Cost", "$0")),
    }
}

/// Round to one decimal, half away from zero.
fn round_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Week-over-week sentence for a delta that arrives pre-formatted as a
/// string (possibly with a unit suffix like "%"). Direction comes from the
/// presence of a literal '-', not from numeric sign.
fn string_change_sentence(value: &str) -> String {
    let arrow = if value.contains('-') { DOWN } else { UP };
    format!("{arrow} {} from last week", value.replace('-', ""))
}

/// Week-over-week sentence for the numeric wait-time delta, in hours.
fn numeric_change_sentence(delta: f64) -> String {
    let arrow = if delta < 0.0 { DOWN } else { UP };
    format!("{arrow} {}h from last week", fmt_number(delta.abs()))
}

/// FCR is the one metric whose sentence is omitted when the field is empty.
fn fcr_change_sentence(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        string_change_sentence(value)
    }
}

/// Compress a currency string like "$12,345" to "$12k" (nearest thousand).
/// Anything that does not parse as an integer after stripping '$' and ','
/// comes back unchanged.
pub fn abbreviate_annual_cost(cost: &str) -> String {
    let cleaned: String = cost.chars().filter(|c| *c != '$' && *c != ',').collect();
    match cleaned.trim().parse::<i64>() {
        Ok(n) => {
            let thousands = (n.unsigned_abs() as f64 / 1000.0).round() as i64;
            let sign = if n < 0 { "-" } else { "" };
            format!("{sign}${thousands}k")
        }
        Err(_) => cost.to_string(),
    }
}

/// Render a count the way the panel expects: no trailing ".0" on whole
/// numbers, plain decimal otherwise.
pub fn fmt_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}
