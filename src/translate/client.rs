//! Translation service client
//!
//! One request/response operation: the full lyric sheet goes out, an ordered
//! list of translated lines comes back. Length validation against the source
//! is the overlay's job; this client only surfaces transport and credential
//! failures.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    lines: &'a [String],
    target_language: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    lines: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct TranslateClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl TranslateClient {
    const DEFAULT_BASE_URL: &'static str = "https://translate.petal.dev/api";
    const USER_AGENT: &'static str = "petal/0.1.0 (https://github.com/petal-player)";

    pub fn new(base_url: Option<&str>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(Self::USER_AGENT)
                .timeout(std::time::Duration::from_secs(15))
                .build()
                .expect("failed to create reqwest client"),
            base_url: base_url.unwrap_or(Self::DEFAULT_BASE_URL).to_string(),
            api_key,
        }
    }

    /// Translate `lines` into `target_language`, preserving order.
    ///
    /// Fails before sending anything when no API key is configured.
    pub async fn translate(
        &self,
        lines: &[String],
        target_language: &str,
    ) -> anyhow::Result<Vec<String>> {
        let Some(key) = self.api_key.as_deref() else {
            anyhow::bail!("translation API key not configured (set [translator].api_key)");
        };

        let url = format!("{}/translate", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(key)
            .json(&TranslateRequest {
                lines,
                target_language,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("translation service error: {}", response.status());
        }

        let body: TranslateResponse = response.json().await?;
        Ok(body.lines)
    }
}
