//! Campaign URL builder

use log::debug;
use url::Url;

use crate::error::ToolResult;

/// Values offered for `utm_source`
pub const SUGGESTED_SOURCES: &[&str] = &["google", "facebook", "twitter", "linkedin", "email", "other"];

/// Values offered for `utm_medium`
pub const SUGGESTED_MEDIUMS: &[&str] = &["cpc", "social", "email", "banner", "referral", "other"];

/// Campaign parameters; blank values are left out of the URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UtmParams {
    pub source: String,
    pub medium: String,
    pub campaign: String,
    pub term: String,
    pub content: String,
}

impl UtmParams {
    /// The query pairs in the order they are appended
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("utm_source", self.source.as_str()),
            ("utm_medium", self.medium.as_str()),
            ("utm_campaign", self.campaign.as_str()),
            ("utm_term", self.term.as_str()),
            ("utm_content", self.content.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
    }

    /// Append the campaign parameters to a base URL
    ///
    /// Existing query parameters of the base URL are kept.
    pub fn build(&self, base_url: &str) -> ToolResult<Url> {
        let mut url = Url::parse(base_url.trim())?;

        let pairs: Vec<_> = self.pairs().collect();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        debug!("built campaign url {}", url);
        Ok(url)
    }
}
