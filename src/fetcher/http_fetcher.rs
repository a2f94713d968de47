use anyhow::Result;
use async_trait::async_trait;
use tracing::info;
use wreq::Client;
use wreq_util::Emulation;

use crate::error::FetchError;
use crate::fetcher::PageFetcher;

const BOT_MARKERS: [&str; 2] = ["blocked", "bot detected"];

/// Production fetcher backed by a browser-emulating HTTP client.
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .emulation(Emulation::Firefox136)
            .build()?;

        Ok(HttpPageFetcher { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|source| FetchError::Network {
                url: url.to_string(),
                source,
            })?;

        validate_html(url, &html)?;
        info!("Fetched {} characters from {}", html.len(), url);

        Ok(html)
    }
}

/// Reject responses that came back 200 but do not carry a usable page:
/// empty bodies, non-HTML payloads and block interstitials.
pub fn validate_html(url: &str, html: &str) -> Result<(), FetchError> {
    if html.trim().is_empty() {
        return Err(FetchError::EmptyBody {
            url: url.to_string(),
        });
    }

    if !html.contains("<html") && !html.contains("<div") && !html.contains("<body") {
        return Err(FetchError::NotHtml {
            url: url.to_string(),
        });
    }

    let lowered = html.to_lowercase();
    if BOT_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        return Err(FetchError::BotDetected {
            url: url.to_string(),
        });
    }

    Ok(())
}
