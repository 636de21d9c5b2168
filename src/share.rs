//! Share links: the encoded config travels in the URL fragment.

use url::Url;

/// Extracts the encoded config from user input.
///
/// Accepts an absolute URL (its fragment is used), a `#fragment`, or a bare
/// encoded string. Returns `None` when there is nothing to decode.
#[must_use]
pub fn fragment_of(input: &str) -> Option<String> {
    let input = input.trim();

    let fragment = match Url::parse(input) {
        Ok(url) => url.fragment().unwrap_or_default().to_string(),
        Err(_) => input.strip_prefix('#').unwrap_or(input).to_string(),
    };

    (!fragment.is_empty()).then_some(fragment)
}

/// Returns `base` with its fragment replaced by `encoded`.
#[must_use]
pub fn share_url(base: &Url, encoded: &str) -> Url {
    let mut url = base.clone();
    url.set_fragment(Some(encoded));
    url
}
