//! HTTP client for the expense API
//!
//! `GET /api/expenses` lists records, `POST /api/expenses` creates one. No
//! auth, pagination or query parameters are involved.

use async_trait::async_trait;
use std::time::Duration;

use super::ExpenseStore;
use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseDraft, ExpenseRecord};

const EXPENSES_PATH: &str = "/api/expenses";

/// Remote store reached over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpExpenseStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpExpenseStore {
    /// Create a client for `base_url` with a per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ExpenseResult<Self> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ExpenseError::Config("API base URL is empty".into()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ExpenseError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Create a client from user settings
    pub fn from_settings(settings: &Settings) -> ExpenseResult<Self> {
        Self::new(settings.api_base_url.clone(), settings.request_timeout())
    }

    /// The base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn expenses_url(&self) -> String {
        format!("{}{}", self.base_url, EXPENSES_PATH)
    }

    /// Read the body and fail on a non-2xx status
    async fn read_success(resp: reqwest::Response, what: &str) -> ExpenseResult<String> {
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(ExpenseError::Transport(format!(
                "{} failed: {} - {}",
                what,
                status,
                text.trim()
            )));
        }
        Ok(text)
    }
}

/// Decode a list body, skipping records that do not fit the wire format
///
/// A body that is not a JSON array is a transport error.
fn decode_list(text: &str) -> ExpenseResult<Vec<ExpenseRecord>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(text)
        .map_err(|e| ExpenseError::Transport(format!("Invalid expense list: {}", e)))?;

    let records = values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<ExpenseRecord>(value.clone()) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Skipping unreadable expense {}: {}", value, e);
                None
            }
        })
        .collect();
    Ok(records)
}

#[async_trait]
impl ExpenseStore for HttpExpenseStore {
    async fn list_expenses(&self) -> ExpenseResult<Vec<ExpenseRecord>> {
        let url = self.expenses_url();
        log::debug!("GET {}", url);

        let resp = self.client.get(&url).send().await?;
        let text = Self::read_success(resp, "Listing expenses").await?;

        let records = decode_list(&text)?;
        log::debug!("Fetched {} expenses", records.len());
        Ok(records)
    }

    async fn create_expense(&self, draft: &ExpenseDraft) -> ExpenseResult<ExpenseRecord> {
        let url = self.expenses_url();
        log::debug!("POST {} {:?}", url, draft);

        let resp = self.client.post(&url).json(draft).send().await?;
        let text = Self::read_success(resp, "Creating expense").await?;

        let record: ExpenseRecord = serde_json::from_str(&text)
            .map_err(|e| ExpenseError::Transport(format!("Invalid created expense: {}", e)))?;
        log::info!("Created expense {}", record.id);
        Ok(record)
    }
}
