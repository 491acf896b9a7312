use clap::Parser;

pub const AIRTABLE_API_BASE: &str = "https://api.airtable.com/v0";

const DEFAULT_BASE_ID: &str = "appFaytZ8b3ovaOUd";
const DEFAULT_TABLE: &str = "Email Logs";
const DEFAULT_SORT_FIELD: &str = "Update";

const ASSET_REPO: &str = "https://github.com/MaxTemkin/mpc-dashboard-assets";

#[derive(Parser, Debug)]
#[clap(name = "inkboard", version)]
pub struct Args {
    /// Address to listen on
    #[clap(long, default_value = "0.0.0.0:3000")]
    pub listen: String,

    /// Airtable base identifier
    #[clap(long, default_value = DEFAULT_BASE_ID)]
    pub base_id: String,

    /// Airtable table holding the metric log
    #[clap(long, default_value = DEFAULT_TABLE)]
    pub table: String,

    /// Airtable API root (override for testing)
    #[clap(long, default_value = AIRTABLE_API_BASE)]
    pub api_base: String,

    /// Airtable bearer token. Absence is reported per-request, not at
    /// startup, so the panel shows the error instead of the daemon dying.
    #[clap(long, env = "AIRTABLE_TOKEN", hide_env_values = true)]
    pub airtable_token: Option<String>,
}

/// Deployment-specific knobs, resolved once at startup. The formatter never
/// sees this; only the fetcher and the renderer do.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen: String,
    pub api_base: String,
    pub base_id: String,
    pub table: String,
    pub sort_field: String,
    pub api_token: Option<String>,
    pub assets: AssetUrls,
}

/// Font and image assets referenced by the dashboard template.
#[derive(Debug, Clone)]
pub struct AssetUrls {
    pub display_font: String,
    pub serif_font: String,
    pub mono_font: String,
    pub logo: String,
}

impl Default for AssetUrls {
    fn default() -> Self {
        Self {
            display_font: format!("{ASSET_REPO}/raw/refs/heads/main/Caraque_Trial_BdMelted.ttf"),
            serif_font: format!("{ASSET_REPO}/raw/refs/heads/main/Gaya.otf"),
            mono_font: format!("{ASSET_REPO}/raw/refs/heads/main/OlympeMono-Regular.otf"),
            logo: format!("{ASSET_REPO}/blob/main/MagicPuzzleCompanyEmailSM.png?raw=true"),
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            listen: args.listen,
            api_base: args.api_base,
            base_id: args.base_id,
            table: args.table,
            sort_field: DEFAULT_SORT_FIELD.to_string(),
            api_token: args.airtable_token,
            assets: AssetUrls::default(),
        }
    }
}
