//! Page fetching with rate-limit retry, and pagination on top of it

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument, warn};

use super::core::ApiClient;
use super::retry::{Sleeper, retry_after};
use crate::data_fetcher::models::{Completeness, Page, Paginated};
use crate::error::AppError;

/// Query parameters attached to a request (and to every follow-up page request).
pub type Query<'a> = [(&'a str, String)];

impl<S: Sleeper> ApiClient<S> {
    /// Fetches a single page.
    ///
    /// - 200: the decoded page
    /// - 429: waits Retry-After + 1 seconds (5 + 1 without the header) and
    ///   sends the same request again, until the response is something else
    ///   or the configured retry cap is reached
    /// - anything else: logged and returned as an error, never retried
    ///
    /// # Arguments
    /// * `url` - Absolute URL; `next_page_url` values are passed through as-is
    /// * `query` - Extra query parameters
    /// * `operation` - Human-readable label used in log lines and errors
    #[instrument(skip(self, query))]
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &Query<'_>,
        operation: &str,
    ) -> Result<Page<T>, AppError> {
        let mut rate_limited = 0u32;

        let response = loop {
            let response = match self.http.get(url).query(query).send().await {
                Ok(resp) => resp,
                Err(e) => {
                    error!("Request failed while {operation}: {e} (URL: {url})");
                    return Err(if e.is_timeout() {
                        AppError::network_timeout(url)
                    } else if e.is_connect() {
                        AppError::network_connection(url, e.to_string())
                    } else {
                        AppError::ApiFetch(e)
                    });
                }
            };

            if response.status() != StatusCode::TOO_MANY_REQUESTS {
                break response;
            }

            if self.retry.exhausted(rate_limited) {
                error!("Still rate limited after {rate_limited} retries while {operation}");
                return Err(AppError::rate_limit_exhausted(rate_limited, url));
            }

            let wait = self.retry.wait_for(retry_after(response.headers()));
            rate_limited += 1;
            warn!(
                "Error: 429 {operation}. Sleeping for {} seconds (retry {rate_limited})",
                wait.as_secs()
            );
            self.sleeper.sleep(wait).await;
        };

        let status = response.status();
        debug!("Response status: {status}");

        if status != StatusCode::OK {
            error!("Error: {} {operation} (URL: {url})", status.as_u16());
            return Err(AppError::api_status(status.as_u16(), operation, url));
        }

        let body = response.text().await.map_err(|e| {
            error!("Failed to read response body while {operation}: {e}");
            AppError::ApiFetch(e)
        })?;
        debug!("Response length: {} bytes", body.len());

        serde_json::from_str::<Page<T>>(&body).map_err(|e| {
            error!("Failed to parse API response while {operation}: {e} (URL: {url})");
            if body.trim().is_empty() {
                AppError::api_no_data("Response body is empty", url)
            } else {
                AppError::api_unexpected_structure(e.to_string(), url)
            }
        })
    }

    /// Fetches every page of a listing by following `meta.next_page_url`.
    ///
    /// A failed first page is an error. A failure on a later page stops the
    /// walk and returns what was gathered so far marked as
    /// [`Completeness::Partial`].
    pub async fn fetch_all_pages<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &Query<'_>,
        operation: &str,
    ) -> Result<Paginated<T>, AppError> {
        let first = self.fetch_page::<T>(url, query, operation).await?;
        let mut items = first.data;
        let mut next_page_url = first.meta.next_page_url;
        let mut pages_fetched = 1usize;

        while let Some(next_url) = next_page_url {
            match self.fetch_page::<T>(&next_url, query, operation).await {
                Ok(page) => {
                    items.extend(page.data);
                    next_page_url = page.meta.next_page_url;
                    pages_fetched += 1;
                }
                Err(e) => {
                    warn!(
                        "Stopped after {pages_fetched} page(s) while {operation}; keeping {} partial item(s): {e}",
                        items.len()
                    );
                    return Ok(Paginated {
                        items,
                        completeness: Completeness::Partial {
                            pages_fetched,
                            reason: e.to_string(),
                        },
                    });
                }
            }
        }

        info!(
            "Fetched {} item(s) over {pages_fetched} page(s) while {operation}",
            items.len()
        );
        Ok(Paginated::complete(items))
    }
}
