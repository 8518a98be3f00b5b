//! Cursor-based feed fetch.

use crate::config::Config;
use crate::error_handling::FetchError;
use crate::feed::FeedDocument;

/// Fetches one batch of vehicle locations from the feed.
///
/// The cursor (epoch millis, 0 meaning "no prior fetch") is passed to the
/// feed as the `t` parameter so only updates since that point are returned;
/// the feed is free to answer with an empty batch or a full snapshot. On
/// success returns the decoded document and the feed's reported last-update
/// time, which becomes the cursor for the next invocation.
///
/// # Errors
///
/// Returns a [`FetchError`] on transport failure, non-success status, an
/// undecodable body, a feed-reported error body, or a document without a
/// last-update time. The caller leaves its cursor unmodified in every error
/// case, so the next scheduled tick retries the same window.
pub async fn fetch(
    client: &reqwest::Client,
    config: &Config,
    cursor: i64,
) -> Result<(FeedDocument, i64), FetchError> {
    let cursor_param = cursor.to_string();
    let mut params = vec![
        ("command", "vehicleLocations"),
        ("a", config.agency.as_str()),
        ("t", cursor_param.as_str()),
    ];
    if let Some(route) = &config.route {
        params.push(("r", route.as_str()));
    }

    let response = client.get(&config.feed_url).query(&params).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    let document: FeedDocument = quick_xml::de::from_str(&body)?;

    if let Some(fault) = &document.error {
        return Err(FetchError::Feed {
            message: fault.message.clone().unwrap_or_else(|| "unspecified feed error".into()),
            should_retry: fault.should_retry(),
        });
    }

    let new_cursor = document.last_time.as_ref().ok_or(FetchError::MissingLastTime)?.time;

    Ok((document, new_cursor))
}
