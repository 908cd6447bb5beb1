//! Brand mark resolution for the header.
//!
//! One best-effort GET for the studio logo, guarded by a short timeout.
//! Any failure falls back to the glyph mark; nothing retries and nothing
//! surfaces to the user beyond a debug log.

use std::time::Duration;

use tracing::debug;

use crate::config::BrandingConfig;

/// Shown in the header when no logo could be fetched.
pub const FALLBACK_GLYPH: &str = "🤖";

/// What the header renders next to the studio name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandMark {
    /// The logo was fetched; a terminal cell can't show the bitmap, so the
    /// header renders the accent badge instead of the fallback glyph.
    Logo { bytes: usize },
    Glyph,
}

impl BrandMark {
    pub fn symbol(&self) -> &'static str {
        match self {
            BrandMark::Logo { .. } => "◉",
            BrandMark::Glyph => FALLBACK_GLYPH,
        }
    }
}

/// Fetch the configured logo once, or fall back to the glyph.
pub async fn resolve_brand_mark(config: &BrandingConfig) -> BrandMark {
    if !config.fetch_logo {
        return BrandMark::Glyph;
    }
    let timeout = Duration::from_secs(config.fetch_timeout_secs);
    match fetch_logo(&config.logo_url, timeout).await {
        Some(bytes) => BrandMark::Logo { bytes: bytes.len() },
        None => BrandMark::Glyph,
    }
}

/// A single GET with a timeout. Returns the raw bytes, or `None` on any
/// failure whatsoever.
pub async fn fetch_logo(url: &str, timeout: Duration) -> Option<Vec<u8>> {
    let client = match reqwest::Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(e) => {
            debug!("logo client build failed: {e}");
            return None;
        }
    };

    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            debug!("logo fetch failed: {e}");
            return None;
        }
    };

    if !response.status().is_success() {
        debug!("logo fetch returned {}", response.status());
        return None;
    }

    match response.bytes().await {
        Ok(bytes) if !bytes.is_empty() => Some(bytes.to_vec()),
        Ok(_) => {
            debug!("logo fetch returned an empty body");
            None
        }
        Err(e) => {
            debug!("logo body read failed: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_fetch_uses_glyph() {
        let config = BrandingConfig {
            fetch_logo: false,
            ..BrandingConfig::default()
        };
        assert_eq!(resolve_brand_mark(&config).await, BrandMark::Glyph);
    }

    #[tokio::test]
    async fn test_unreachable_url_falls_back() {
        let bytes = fetch_logo("http://127.0.0.1:9/logo.jpg", Duration::from_millis(200)).await;
        assert!(bytes.is_none());
    }

    #[test]
    fn test_mark_symbols() {
        assert_eq!(BrandMark::Glyph.symbol(), FALLBACK_GLYPH);
        assert_eq!(BrandMark::Logo { bytes: 42 }.symbol(), "◉");
    }
}
