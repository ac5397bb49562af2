//! JSON Pointer (RFC 6901) splitting, composition and escaping.
//!
//! A JSON Reference string is `<url>#<pointer>`. The pointer half always
//! starts with `#`; the empty pointer `#` denotes the document root.

/// Splits a `$ref` string into its `(url, pointer)` halves.
///
/// Either half may be empty. The pointer half, when non-empty, retains its
/// leading `#`. An input with no `#` at all is treated as a bare URL with an
/// empty (root) pointer.
pub fn jr_split(reference: &str) -> (&str, &str) {
    match reference.find('#') {
        Some(idx) => (&reference[..idx], &reference[idx..]),
        None => (reference, ""),
    }
}

/// Joins a url half and a pointer half back into a `$ref` string.
pub fn jr_compose(url: &str, pointer: &str) -> String {
    if pointer.is_empty() {
        url.to_owned()
    } else {
        format!("{url}{pointer}")
    }
}

/// Splits a JSON pointer into its unescaped segments.
///
/// `#` and `""` both yield an empty segment list (pointer to the document
/// root). A leading `#` is stripped if present; a bare leading `/` is
/// tolerated the same way.
pub fn jp_split(pointer: &str) -> Vec<String> {
    let stripped = pointer.strip_prefix('#').unwrap_or(pointer);
    if stripped.is_empty() {
        return Vec::new();
    }
    stripped
        .split('/')
        .skip(1)
        .map(unescape_segment)
        .collect()
}

/// Escapes a single raw segment per RFC 6901 (`~` -> `~0`, `/` -> `~1`).
pub fn escape_segment(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

/// Unescapes a single raw segment per RFC 6901 (`~1` -> `/`, `~0` -> `~`).
///
/// Order matters: `~1` must be restored before `~0`, otherwise `~01` would
/// wrongly decode to `/` instead of `~1`.
pub fn unescape_segment(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

/// Composes a pointer out of raw (unescaped) segments, prefixed with `#`.
///
/// If `base` is given, the segments are appended to it (used to extend the
/// pointer path while descending during construction).
pub fn jp_compose(segments: &[String], base: Option<&str>) -> String {
    let mut out = base.unwrap_or("#").to_owned();
    for seg in segments {
        out.push('/');
        out.push_str(&escape_segment(seg));
    }
    out
}

/// Appends a single segment to an existing pointer.
pub fn jp_push(pointer: &str, segment: &str) -> String {
    format!("{pointer}/{}", escape_segment(segment))
}

/// Returns `true` if `pointer` starts with `prefix` at a segment boundary
/// (i.e. `prefix` is `pointer` itself, or is followed by `/` or end).
pub fn starts_with_prefix(pointer: &str, prefix: &str) -> bool {
    if prefix.is_empty() || prefix == "#" {
        return true;
    }
    pointer == prefix || pointer.starts_with(&format!("{prefix}/"))
}

/// Returns the remainder of `pointer` after stripping `prefix`, as segments.
///
/// Panics-free: returns an empty vec if `prefix` is not actually a prefix.
pub fn remainder(pointer: &str, prefix: &str) -> Vec<String> {
    if prefix.is_empty() || prefix == "#" {
        return jp_split(pointer);
    }
    if pointer == prefix {
        return Vec::new();
    }
    match pointer.strip_prefix(prefix) {
        Some(rest) => jp_split(rest),
        None => Vec::new(),
    }
}
