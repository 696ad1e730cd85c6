use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Summaries longer than this many characters are truncated
pub const MAX_SUMMARY_CHARS: usize = 120;

const ELLIPSIS: &str = "...";
const CODE_FENCE: &str = "```";

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#\s+(.*)").expect("valid regex"));

static EMPHASIS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[*_`]").expect("valid regex"));

/// Convert `\r\n` and lone `\r` line endings to `\n`
pub fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if !content.contains('\r') {
        return Cow::Borrowed(content);
    }
    Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Extract the post title from the first `# ` heading line
///
/// Returns `fallback` when no line starts with `#` followed by whitespace.
///
/// # Examples
///
/// ```
/// use blog_registry::extract_title;
///
/// assert_eq!(extract_title("# My Title\n\nBody", "1"), "My Title");
/// assert_eq!(extract_title("No heading here", "1"), "1");
/// ```
pub fn extract_title(content: &str, fallback: &str) -> String {
    TITLE_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| fallback.to_string())
}

/// Extract the summary from the first prose paragraph
///
/// Paragraphs are separated by a blank line. Headings, code fences and blank
/// paragraphs are skipped. Emphasis and code markers are removed and the result is
/// truncated to [`MAX_SUMMARY_CHARS`] characters, ellipsis included.
/// Returns an empty string when no paragraph qualifies.
pub fn extract_summary(content: &str) -> String {
    content
        .split("\n\n")
        .map(str::trim)
        .find(|p| !p.is_empty() && !p.starts_with('#') && !p.starts_with(CODE_FENCE))
        .map(|p| truncate_summary(&EMPHASIS_RE.replace_all(p, "")))
        .unwrap_or_default()
}

fn truncate_summary(text: &str) -> String {
    if text.chars().count() <= MAX_SUMMARY_CHARS {
        return text.to_string();
    }

    let keep = MAX_SUMMARY_CHARS - ELLIPSIS.len();
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
