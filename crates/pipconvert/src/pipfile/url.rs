//! Credential stripping for `[[source]]` URLs.

use tracing::debug;
use url::Url;

/// Remove any `user[:password]@` userinfo from `url`.
///
/// The rest of the URL is kept exactly as written: no port, query, or trailing
/// slash is added, and the host is not re-cased. URLs without credentials are
/// returned unchanged. Input that is not a valid absolute URL is an error.
///
/// When the userinfo cannot be cut out of the text as written, the URL is
/// returned in its normalized form instead. Credentials are never returned.
pub fn strip_credentials(url: &str) -> Result<String, url::ParseError> {
    let parsed = Url::parse(url)?;
    if !has_credentials(&parsed) {
        return Ok(url.to_owned());
    }

    let mut redacted = parsed;
    // Both setters only fail for URLs without a host, and userinfo implies one.
    let _ = redacted.set_username("");
    let _ = redacted.set_password(None);

    match splice_userinfo(url) {
        Some(spliced) if Url::parse(&spliced).is_ok_and(|reparsed| reparsed == redacted) => {
            Ok(spliced)
        }
        _ => {
            debug!("Falling back to the normalized URL to drop credentials");
            Ok(redacted.into())
        }
    }
}

fn has_credentials(url: &Url) -> bool {
    !url.username().is_empty() || url.password().is_some()
}

/// Cut the userinfo out of the authority of `url` as written.
///
/// The authority starts after the scheme and any run of `/` or `\`, and ends
/// at the first of `/`, `\`, `?` or `#`.
fn splice_userinfo(url: &str) -> Option<String> {
    let (scheme, rest) = url.split_once(':')?;
    let authority = rest.trim_start_matches(['/', '\\']);
    let authority_start = scheme.len() + 1 + (rest.len() - authority.len());
    let authority_len = authority
        .find(['/', '\\', '?', '#'])
        .unwrap_or(authority.len());
    let at = authority[..authority_len].rfind('@')?;
    Some(format!("{}{}", &url[..authority_start], &authority[at + 1..]))
}
