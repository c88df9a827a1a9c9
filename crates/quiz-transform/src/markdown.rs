//! Inline Markdown <-> rich-text codec.
//!
//! Only the inline subset that quiz titles and descriptions carry is
//! handled: bold (`**` or `__`), emphasis (`*` or `_`) and inline code
//! (`` ` ``). Rich text uses the `<b>`, `<i>` and `<code>` tags block
//! editors exchange. The reverse direction normalizes bold to `**` and
//! emphasis to `*`, so differing marker styles converge after one round
//! trip. Unclosed markers and unknown tags pass through verbatim.

/// Convert inline Markdown to rich-text markup.
pub fn markdown_to_rich(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while !rest.is_empty() {
        if let Some(converted) = convert_bold(rest, "**")
            .or_else(|| convert_bold(rest, "__"))
            .or_else(|| convert_emphasis(rest, '*'))
            .or_else(|| convert_emphasis(rest, '_'))
            .or_else(|| convert_code(rest))
        {
            out.push_str(&converted.0);
            rest = converted.1;
        } else {
            let ch = rest.chars().next().unwrap_or_default();
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }
    out
}

fn convert_bold<'a>(rest: &'a str, marker: &str) -> Option<(String, &'a str)> {
    let inner = rest.strip_prefix(marker)?;
    let end = inner.find(marker).filter(|end| *end > 0)?;
    let converted = format!("<b>{}</b>", markdown_to_rich(&inner[..end]));
    Some((converted, &inner[end + marker.len()..]))
}

fn convert_emphasis(rest: &str, marker: char) -> Option<(String, &str)> {
    let inner = rest.strip_prefix(marker)?;
    let end = inner.find(marker).filter(|end| *end > 0)?;
    let converted = format!("<i>{}</i>", markdown_to_rich(&inner[..end]));
    Some((converted, &inner[end + marker.len_utf8()..]))
}

fn convert_code(rest: &str) -> Option<(String, &str)> {
    let inner = rest.strip_prefix('`')?;
    let end = inner.find('`').filter(|end| *end > 0)?;
    // Code spans are literal; no nested conversion.
    let converted = format!("<code>{}</code>", &inner[..end]);
    Some((converted, &inner[end + 1..]))
}

/// Convert rich-text markup back to inline Markdown.
pub fn rich_to_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while !rest.is_empty() {
        if let Some(converted) = revert_span(rest, "<b>", "</b>", "**")
            .or_else(|| revert_span(rest, "<i>", "</i>", "*"))
            .or_else(|| revert_code(rest))
        {
            out.push_str(&converted.0);
            rest = converted.1;
        } else {
            let ch = rest.chars().next().unwrap_or_default();
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }
    out
}

fn revert_span<'a>(
    rest: &'a str,
    open: &str,
    close: &str,
    marker: &str,
) -> Option<(String, &'a str)> {
    let inner = rest.strip_prefix(open)?;
    let end = inner.find(close)?;
    let converted = format!("{marker}{}{marker}", rich_to_markdown(&inner[..end]));
    Some((converted, &inner[end + close.len()..]))
}

fn revert_code(rest: &str) -> Option<(String, &str)> {
    let inner = rest.strip_prefix("<code>")?;
    let end = inner.find("</code>")?;
    let converted = format!("`{}`", &inner[..end]);
    Some((converted, &inner[end + "</code>".len()..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_and_emphasis_convert() {
        assert_eq!(markdown_to_rich("**bold** text"), "<b>bold</b> text");
        assert_eq!(markdown_to_rich("__bold__ text"), "<b>bold</b> text");
        assert_eq!(markdown_to_rich("an *em* word"), "an <i>em</i> word");
        assert_eq!(markdown_to_rich("an _em_ word"), "an <i>em</i> word");
    }

    #[test]
    fn code_span_is_literal() {
        assert_eq!(markdown_to_rich("run `ls **x**`"), "run <code>ls **x**</code>");
    }

    #[test]
    fn nested_markers_convert_inside_bold() {
        assert_eq!(
            markdown_to_rich("**bold *and em* tail**"),
            "<b>bold <i>and em</i> tail</b>"
        );
    }

    #[test]
    fn unclosed_markers_pass_through() {
        assert_eq!(markdown_to_rich("**open"), "**open");
        assert_eq!(markdown_to_rich("`tick"), "`tick");
        assert_eq!(markdown_to_rich("plain"), "plain");
    }

    #[test]
    fn reverse_normalizes_marker_style() {
        assert_eq!(rich_to_markdown("<b>bold</b>"), "**bold**");
        assert_eq!(rich_to_markdown("<i>em</i>"), "*em*");
        assert_eq!(rich_to_markdown("<code>x</code>"), "`x`");
        // __bold__ and **bold** are byte-different but converge.
        assert_eq!(
            rich_to_markdown(&markdown_to_rich("__bold__")),
            rich_to_markdown(&markdown_to_rich("**bold**"))
        );
    }

    #[test]
    fn unknown_tags_pass_through() {
        assert_eq!(rich_to_markdown("<mark>hi</mark>"), "<mark>hi</mark>");
    }

    #[test]
    fn round_trip_is_stable() {
        for input in ["**a** and *b* and `c`", "plain", "x *y* z"] {
            assert_eq!(rich_to_markdown(&markdown_to_rich(input)), input);
        }
    }
}
