//! URL detection.
//!
//! Finds URLs in plain text so they can be kept as single segments. A URL
//! is a known scheme followed by `://` and a run of non-space characters.
//! Trailing sentence punctuation (`.`, `,`, `)` ...) is left outside.

use std::sync::LazyLock;

use regex::Regex;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)\b(?:https?|ftps?|file|wss?)://[^\s<>"'`\x1b]*[^\s<>"'`\x1b.,;:!?)\]}]"#,
    )
    .expect("URL pattern is valid")
});

/// One run of plain text: either a URL or the text between URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlRun<'a> {
    Text(&'a str),
    Url(&'a str),
}

/// Split `text` into URL and non-URL runs, in order.
///
/// Empty text runs are not produced.
pub fn url_runs(text: &str) -> Vec<UrlRun<'_>> {
    let mut runs = Vec::new();
    let mut last = 0;

    for m in URL_PATTERN.find_iter(text) {
        if m.start() > last {
            runs.push(UrlRun::Text(&text[last..m.start()]));
        }
        runs.push(UrlRun::Url(m.as_str()));
        last = m.end();
    }

    if last < text.len() {
        runs.push(UrlRun::Text(&text[last..]));
    }

    runs
}
