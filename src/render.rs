//! Substitution of formatted metrics into the fixed 800x480 panel markup.
//! Pure templating; every decision has already been made by the formatter.

use crate::config::AssetUrls;
use crate::metrics::{fmt_number, FormattedMetrics};

/// Embedded dashboard markup
const DASHBOARD_TEMPLATE: &str = include_str!("dashboard.html");

pub struct Renderer {
    assets: AssetUrls,
}

impl Renderer {
    pub fn new(assets: AssetUrls) -> Self {
        Self { assets }
    }

    pub fn render(&self, m: &FormattedMetrics) -> String {
        DASHBOARD_TEMPLATE
            .replace("{{font_display}}", &self.assets.display_font)
            .replace("{{font_serif}}", &self.assets.serif_font)
            .replace("{{font_mono}}", &self.assets.mono_font)
            .replace("{{logo_url}}", &self.assets.logo)
            .replace("{{updated}}", &m.updated)
            .replace("{{inbox_count}}", &fmt_number(m.inbox_count))
            .replace("{{weekly_replies}}", &fmt_number(m.weekly_replies))
            .replace("{{reply_change}}", &m.reply_change)
            .replace("{{fcr_rate}}", &fmt_number(m.fcr_rate))
            .replace("{{fcr_change}}", &m.fcr_change)
            .replace("{{rp_codes_sent}}", &fmt_number(m.rp_codes_sent))
            .replace("{{fs_codes_sent}}", &fmt_number(m.fs_codes_sent))
            .replace("{{wait_time}}", &fmt_number(m.wait_time_hours))
            .replace("{{wait_change}}", &m.wait_change)
            .replace("{{rp_weekly_cost}}", &m.rp_weekly_cost)
            .replace("{{rp_annual_cost}}", &m.rp_annual_cost)
            .replace("{{hours_per_week}}", &fmt_number(m.hours_per_week))
            .replace("{{hours_per_day}}", &fmt_number(m.hours_per_day))
            .replace("{{fs_weekly_cost}}", &m.fs_weekly_cost)
            .replace("{{fs_annual_cost}}", &m.fs_annual_cost)
    }
}
