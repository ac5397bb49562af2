//! Document fetcher: retrieves raw specification bytes by URL.
//!
//! The actual network/file I/O is a named external collaborator per the
//! design's scope — this module only defines the `Getter` interface, a
//! `file://` implementation (mandatory per the design), and an optional
//! `http(s)://` implementation behind the `http` feature.

use thiserror::Error;
use url::Url;

/// A hint for which parser should consume the fetched bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentType {
    Json,
    Yaml,
}

impl ContentType {
    /// Infers a content type from a URL's path extension, defaulting to JSON
    /// (the wire format's `$ref`-bearing documents are JSON or YAML; JSON is
    /// the more common default per the design's §6 "Content-type hint").
    pub fn from_url(url: &str) -> Self {
        let lower = url.to_ascii_lowercase();
        if lower.ends_with(".yaml") || lower.ends_with(".yml") {
            ContentType::Yaml
        } else {
            ContentType::Json
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FetchError {
    #[error("url `{0}` is not reachable: {1}")]
    Unreachable(String, String),

    #[error("access to `{0}` is forbidden")]
    Forbidden(String),

    #[error("fetching `{0}` returned non-2xx status: {1}")]
    NonSuccess(String, u16),

    #[error("unable to decode bytes fetched from `{0}`: {1}")]
    Decode(String, String),

    #[error("unsupported url scheme in `{0}`")]
    UnsupportedScheme(String),
}

/// A single-method interface used by the resolver to fetch a document's raw
/// bytes and a content-type hint. Production configurations plug in a
/// concrete `Getter`; tests plug in an in-memory one.
pub trait Getter {
    fn load(&self, url: &str) -> Result<(Vec<u8>, ContentType), FetchError>;
}

/// Allows a caller to remap a URL before it's fetched — e.g. redirecting a
/// production host to a local fixture in tests.
pub type UrlLoadHook = std::sync::Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Fetches `file://` and relative-path documents straight off disk. This is
/// the mandatory scheme per the design.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileGetter;

impl Getter for FileGetter {
    fn load(&self, url: &str) -> Result<(Vec<u8>, ContentType), FetchError> {
        let path = file_path_from_url(url)?;
        let bytes = std::fs::read(&path)
            .map_err(|e| FetchError::Unreachable(url.to_owned(), e.to_string()))?;
        Ok((bytes, ContentType::from_url(url)))
    }
}

fn file_path_from_url(url: &str) -> Result<std::path::PathBuf, FetchError> {
    if let Ok(parsed) = Url::parse(url) {
        if parsed.scheme() == "file" {
            return parsed
                .to_file_path()
                .map_err(|_| FetchError::UnsupportedScheme(url.to_owned()));
        }
        if !parsed.scheme().is_empty() && parsed.scheme() != "file" {
            return Err(FetchError::UnsupportedScheme(url.to_owned()));
        }
    }
    Ok(std::path::PathBuf::from(url))
}

/// Fetches `http://`/`https://` documents with a blocking client. Kept
/// behind a feature flag: the design treats the HTTP client itself as an
/// external collaborator, and single-threaded preparation (§5) only needs a
/// blocking call at the fetch boundary.
#[cfg(feature = "http")]
#[derive(Clone, Debug, Default)]
pub struct HttpGetter {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl HttpGetter {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

#[cfg(feature = "http")]
impl Getter for HttpGetter {
    fn load(&self, url: &str) -> Result<(Vec<u8>, ContentType), FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Unreachable(url.to_owned(), e.to_string()))?;
        let status = resp.status();
        if status.as_u16() == 403 {
            return Err(FetchError::Forbidden(url.to_owned()));
        }
        if !status.is_success() {
            return Err(FetchError::NonSuccess(url.to_owned(), status.as_u16()));
        }
        let bytes = resp
            .bytes()
            .map_err(|e| FetchError::Decode(url.to_owned(), e.to_string()))?;
        Ok((bytes.to_vec(), ContentType::from_url(url)))
    }
}

/// Dispatches to `FileGetter` or `HttpGetter` based on the URL scheme,
/// applying the `UrlLoadHook` (if any) first.
pub struct DefaultGetter {
    pub hook: Option<UrlLoadHook>,
    #[cfg(feature = "http")]
    http: HttpGetter,
    file: FileGetter,
}

impl Default for DefaultGetter {
    fn default() -> Self {
        Self {
            hook: None,
            #[cfg(feature = "http")]
            http: HttpGetter::new(),
            file: FileGetter,
        }
    }
}

impl Getter for DefaultGetter {
    #[tracing::instrument(level = "debug", skip(self))]
    fn load(&self, url: &str) -> Result<(Vec<u8>, ContentType), FetchError> {
        let effective = match &self.hook {
            Some(hook) => hook(url),
            None => url.to_owned(),
        };
        let scheme = Url::parse(&effective).ok().map(|u| u.scheme().to_owned());
        match scheme.as_deref() {
            Some("http") | Some("https") => {
                #[cfg(feature = "http")]
                {
                    self.http.load(&effective)
                }
                #[cfg(not(feature = "http"))]
                {
                    Err(FetchError::UnsupportedScheme(effective))
                }
            }
            _ => self.file.load(&effective),
        }
    }
}
