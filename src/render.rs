//! Plain text to HTML.
//!
//! Entry files are plain text: blank lines separate paragraphs, single
//! newlines are kept as line breaks, and bare `http(s)://` URLs become links.
//! Everything else is escaped. The output is trusted by the page templates
//! and embedded without further escaping.

use regex::Regex;
use std::sync::LazyLock;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s<]+").expect("URL pattern is valid"));

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap bare URLs in already-escaped text with anchors that open in a new tab.
///
/// Runs after [`escape_html`], so the matched text is inserted as-is into both
/// the `href` and the link body.
pub fn autolink(escaped: &str) -> String {
    URL_RE
        .replace_all(
            escaped,
            r#"<a href="${0}" target="_blank" rel="noopener noreferrer">${0}</a>"#,
        )
        .into_owned()
}

/// Split normalized text into paragraphs on blank (or whitespace-only) lines.
fn paragraphs(text: &str) -> Vec<String> {
    let mut paras = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.split('\n') {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paras.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paras.push(current.join("\n"));
    }
    paras
}

/// Render an entry's raw text as a sequence of `<p>` blocks joined by newlines.
///
/// Returns an empty string when the text has no paragraphs.
pub fn text_to_html(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    paragraphs(&normalized)
        .iter()
        .map(|p| {
            let linked = autolink(&escape_html(p));
            format!("<p>{}</p>", linked.replace('\n', "<br>"))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_five_characters() {
        assert_eq!(
            escape_html(r#"& < > " '"#),
            "&amp; &lt; &gt; &quot; &#x27;"
        );
    }

    #[test]
    fn text_is_escaped() {
        let html = text_to_html("A & B <C>");
        assert_eq!(html, "<p>A &amp; B &lt;C&gt;</p>");
    }

    #[test]
    fn script_tags_do_not_survive() {
        let html = text_to_html("<script>alert('x')</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"));
    }

    #[test]
    fn url_is_linked_once() {
        let html = text_to_html("see https://example.com/x?y=1 now");
        assert_eq!(
            html,
            r#"<p>see <a href="https://example.com/x?y=1" target="_blank" rel="noopener noreferrer">https://example.com/x?y=1</a> now</p>"#
        );
        assert_eq!(html.matches("<a ").count(), 1);
    }

    #[test]
    fn url_with_ampersand_is_not_double_escaped() {
        let html = text_to_html("https://example.com/?a=1&b=2");
        assert!(html.contains(r#"href="https://example.com/?a=1&amp;b=2""#));
        assert!(!html.contains("&amp;amp;"));
    }

    #[test]
    fn plain_http_is_linked() {
        let html = text_to_html("http://example.org");
        assert!(html.contains(r#"<a href="http://example.org""#));
    }

    #[test]
    fn url_stops_at_whitespace() {
        let html = text_to_html("https://a.example\tand https://b.example\nend");
        assert_eq!(html.matches("<a ").count(), 2);
        assert!(html.contains(">https://a.example</a>"));
        assert!(html.contains(">https://b.example</a><br>end"));
    }

    #[test]
    fn splits_on_blank_lines() {
        let html = text_to_html("line1\n\nline2\n\n\nline3");
        assert_eq!(html, "<p>line1</p>\n<p>line2</p>\n<p>line3</p>");
    }

    #[test]
    fn whitespace_only_lines_separate_paragraphs() {
        let html = text_to_html("one\n   \ntwo\n\t\nthree");
        assert_eq!(html.matches("<p>").count(), 3);
    }

    #[test]
    fn single_newline_becomes_br() {
        assert_eq!(text_to_html("a\nb"), "<p>a<br>b</p>");
    }

    #[test]
    fn crlf_and_cr_are_normalized() {
        assert_eq!(text_to_html("a\r\nb\r\n\r\nc\rd"), "<p>a<br>b</p>\n<p>c<br>d</p>");
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(text_to_html(""), "");
        assert_eq!(text_to_html("\n\n  \n"), "");
    }

    #[test]
    fn leading_and_trailing_blank_lines_are_dropped() {
        assert_eq!(text_to_html("\n\nhello\n\n"), "<p>hello</p>");
    }
}
