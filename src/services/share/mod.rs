// Share-intent links for the current quote

use crate::models::quote::Quote;

/// Build the share URL for `quote` on top of an intent endpoint.
///
/// The quote text and author go into a single percent-encoded `text`
/// parameter; an endpoint that already has a query string is extended
/// with `&` instead of `?`.
pub fn tweet_intent_url(base_url: &str, quote: &Quote) -> String {
    let base = base_url.trim();
    let separator = if base.contains('?') { '&' } else { '?' };
    format!(
        "{}{}text={}",
        base,
        separator,
        urlencoding::encode(&quote.attributed())
    )
}

/// Open the share link in the system browser.
pub fn open_share_link(base_url: &str, quote: &Quote) -> anyhow::Result<()> {
    let url = tweet_intent_url(base_url, quote);
    log::info!("Opening share link: {}", url);
    webbrowser::open(&url)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::DEFAULT_SHARE_BASE_URL;

    #[test]
    fn test_intent_url_encodes_text() {
        let quote = Quote::new("Less is more.", "Mies");
        assert_eq!(
            tweet_intent_url(DEFAULT_SHARE_BASE_URL, &quote),
            "https://twitter.com/intent/tweet?text=%22Less%20is%20more.%22%20-%20Mies"
        );
    }

    #[test]
    fn test_intent_url_appends_to_existing_query() {
        let quote = Quote::new("A&B", "C");
        let url = tweet_intent_url("https://example.com/share?via=quotes", &quote);
        assert_eq!(url, "https://example.com/share?via=quotes&text=%22A%26B%22%20-%20C");
    }
}
