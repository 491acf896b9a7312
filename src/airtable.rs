use crate::config::Config;
use crate::error::DashboardError;
use anyhow::{anyhow, Context, Result};
use log::debug;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Fetches the single most-recently-updated row from the Airtable table.
/// The rest of the system only ever sees the resulting [`RawRecord`].
#[derive(Clone)]
pub struct AirtableClient {
    client: Client,
    base_url: Url,
    base_id: String,
    table: String,
    sort_field: String,
    token: Option<String>,
}

#[derive(Deserialize)]
struct RecordPage {
    #[serde(default)]
    records: Vec<Record>,
    error: Option<Value>,
}

#[derive(Deserialize)]
struct Record {
    #[serde(default)]
    fields: Map<String, Value>,
}

impl AirtableClient {
    pub fn new(cfg: &Config) -> Result<Self> {
        let base_url = Url::parse(&cfg.api_base).context("invalid Airtable API base URL")?;
        let client = Client::builder()
            .build()
            .context("failed to build reqwest client")?;
        Ok(Self {
            client,
            base_url,
            base_id: cfg.base_id.clone(),
            table: cfg.table.clone(),
            sort_field: cfg.sort_field.clone(),
            token: cfg.api_token.clone(),
        })
    }

    fn record_url(&self) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("Airtable API base cannot be a base"))?
            .push(&self.base_id)
            .push(&self.table);
        Ok(url)
    }

    /// One bounded GET, sorted descending on the update field, one record.
    pub async fn latest_record(&self) -> Result<RawRecord, DashboardError> {
        let token = self.token.as_ref().ok_or(DashboardError::MissingToken)?;
        let url = self.record_url()?;
        debug!("[airtable] fetching latest record from {url}");

        let resp = self
            .client
            .get(url)
            .bearer_auth(token)
            .query(&[
                ("maxRecords", "1"),
                ("sort[0][field]", self.sort_field.as_str()),
                ("sort[0][direction]", "desc"),
            ])
            .send()
            .await
            .context("Airtable request failed")?;

        let page: RecordPage = resp
            .json()
            .await
            .context("failed to parse Airtable response")?;

        if let Some(err) = page.error {
            return Err(DashboardError::Upstream(err.to_string()));
        }
        let record = page
            .records
            .into_iter()
            .next()
            .ok_or_else(|| DashboardError::NoData(self.table.clone()))?;
        Ok(RawRecord::new(record.fields))
    }
}

/// The field mapping of one Airtable row. Every accessor declares its
/// default and its coercion rule; only absence (or an unusable JSON type)
/// falls back to the default. A present `0` or `""` is kept.
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    fields: Map<String, Value>,
}

impl RawRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// String field. JSON numbers are rendered decimal, since Airtable
    /// formula columns flip between the two without warning.
    pub fn text(&self, field: &str, default: &str) -> String {
        match self.fields.get(field) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => default.to_string(),
        }
    }

    /// Numeric field. Numeric-looking strings are parsed.
    pub fn number(&self, field: &str, default: f64) -> f64 {
        match self.fields.get(field) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(default),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
            _ => default,
        }
    }
}
