use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Pagination metadata attached to every list response.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PageMeta {
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub last_page: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
    /// Absolute URL of the next page, `null` on the last one
    #[serde(default)]
    pub next_page_url: Option<String>,
}

/// A single page of a list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items that failed to decode are dropped with a warning.
    #[serde(
        deserialize_with = "skip_malformed_items",
        bound(deserialize = "T: DeserializeOwned")
    )]
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: PageMeta,
}

fn skip_malformed_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = Vec::<serde_json::Value>::deserialize(deserializer)?;
    let total = values.len();

    let items: Vec<T> = values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<T>(value) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("Dropping malformed list item: {e}");
                None
            }
        })
        .collect();

    if items.len() < total {
        warn!("Kept {} of {total} item(s) on this page", items.len());
    }
    Ok(items)
}

/// Whether every page of a paginated listing was retrieved.
#[derive(Debug, Clone, PartialEq)]
pub enum Completeness {
    Complete,
    /// A page after the first failed; `items` holds the pages before it.
    Partial { pages_fetched: usize, reason: String },
}

/// All items gathered from a paginated listing, in page order.
#[derive(Debug, Clone)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub completeness: Completeness,
}

impl<T> Paginated<T> {
    pub fn complete(items: Vec<T>) -> Self {
        Self {
            items,
            completeness: Completeness::Complete,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completeness == Completeness::Complete
    }
}
