//! Payment history query parameters.

use serde::{Deserialize, Serialize};

const DEFAULT_PAGE: &str = "1";
const DEFAULT_LIMIT: &str = "20";

/// Query parameters for `GET /payments/history`.
///
/// Every parameter is forwarded to the upstream unchanged, `page` and
/// `limit` included; only those two get defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentHistoryQuery {
    #[serde(default = "default_page")]
    pub page: String,
    #[serde(default = "default_limit")]
    pub limit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

impl Default for PaymentHistoryQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            status: None,
            order_code: None,
            date_from: None,
            date_to: None,
        }
    }
}

impl PaymentHistoryQuery {
    /// Encode as a URL query string (without the leading `?`).
    ///
    /// Empty filters are dropped.
    pub fn to_query_string(&self) -> String {
        let mut params = vec![
            ("page", self.page.clone()),
            ("limit", self.limit.clone()),
        ];
        let filters = [
            ("status", &self.status),
            ("orderCode", &self.order_code),
            ("dateFrom", &self.date_from),
            ("dateTo", &self.date_to),
        ];
        for (key, value) in filters {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                params.push((key, value.to_owned()));
            }
        }
        params
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn default_page() -> String {
    DEFAULT_PAGE.to_owned()
}

fn default_limit() -> String {
    DEFAULT_LIMIT.to_owned()
}
