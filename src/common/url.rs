//! URL normalization and joining used to identify specification documents.

use url::Url;

/// Normalizes a document URL: absolutizes a bare path against the current
/// working directory using the `file` scheme, strips the fragment (the
/// fragment is the JSON pointer half of a `$ref`, not part of document
/// identity), and lets the underlying `url` crate collapse `.`/`..`
/// segments and percent-encode the path consistently.
pub fn normalize_url(raw: &str) -> Result<String, url::ParseError> {
    let mut parsed = match Url::parse(raw) {
        Ok(u) => u,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let cwd = std::env::current_dir().unwrap_or_default();
            let base = Url::from_directory_path(&cwd)
                .unwrap_or_else(|_| Url::parse("file:///").unwrap());
            base.join(raw)?
        }
        Err(e) => return Err(e),
    };
    parsed.set_fragment(None);
    Ok(parsed.to_string())
}

/// Joins a (possibly relative) reference URL against a base document URL.
///
/// An empty `rel` means "same document as `base`".
pub fn url_join(base: &str, rel: &str) -> Result<String, url::ParseError> {
    if rel.is_empty() {
        return Ok(base.to_owned());
    }
    let base_url = Url::parse(base)?;
    let joined = base_url.join(rel)?;
    Ok(joined.to_string())
}

/// Returns the directory (parent) of a document URL, i.e. the URL with its
/// last path segment removed — used to resolve sibling documents referenced
/// by a relative `$ref`.
pub fn url_dirname(u: &str) -> Result<String, url::ParseError> {
    let mut parsed = Url::parse(u)?;
    parsed.set_fragment(None);
    parsed.set_query(None);
    if let Ok(mut segs) = parsed.path_segments_mut() {
        segs.pop();
        segs.push("");
    }
    Ok(parsed.to_string())
}
