//! HTML escaping for text content and attribute values

use std::fmt::{self, Write};

/// Escape `&`, `<`, `>`, `"` and `'` for use as element text.
///
/// `\r` is written as `&#13;`; parsers fold a literal CR into LF.
pub fn write_escaped_text<W: Write>(w: &mut W, s: &str) -> fmt::Result {
    let mut last = 0;
    for (i, b) in s.bytes().enumerate() {
        let replacement = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#39;",
            b'\r' => "&#13;",
            _ => continue,
        };
        w.write_str(&s[last..i])?;
        w.write_str(replacement)?;
        last = i + 1;
    }
    w.write_str(&s[last..])
}

/// Escape `&`, `"` and control characters for a double-quoted attribute value.
///
/// Control characters are written as hex character references rather than
/// rejected.
pub fn write_escaped_attr<W: Write>(w: &mut W, s: &str) -> fmt::Result {
    let mut last = 0;
    for (i, b) in s.bytes().enumerate() {
        match b {
            b'&' => {
                w.write_str(&s[last..i])?;
                w.write_str("&amp;")?;
            }
            b'"' => {
                w.write_str(&s[last..i])?;
                w.write_str("&quot;")?;
            }
            0x00..=0x1f | 0x7f => {
                w.write_str(&s[last..i])?;
                write!(w, "&#x{:02X};", b)?;
            }
            _ => continue,
        }
        last = i + 1;
    }
    w.write_str(&s[last..])
}

pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    // Writing into a String cannot fail.
    let _ = write_escaped_text(&mut out, s);
    out
}

pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let _ = write_escaped_attr(&mut out, s);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("plain", "plain" ; "untouched")]
    #[test_case("a & b", "a &amp; b" ; "ampersand")]
    #[test_case("<script>", "&lt;script&gt;" ; "angle brackets")]
    #[test_case(r#"say "hi""#, "say &quot;hi&quot;" ; "double quotes")]
    #[test_case("it's", "it&#39;s" ; "single quote")]
    #[test_case("ünïcødé ○", "ünïcødé ○" ; "multibyte passthrough")]
    fn text_escaping(input: &str, expected: &str) {
        assert_eq!(escape_text(input), expected);
    }

    #[test_case("a&b", "a&amp;b" ; "ampersand")]
    #[test_case(r#"{"k":1}"#, "{&quot;k&quot;:1}" ; "json quotes")]
    #[test_case("<ok>", "<ok>" ; "angle brackets kept")]
    #[test_case("line\nbreak", "line&#x0A;break" ; "newline")]
    #[test_case("bell\u{7}", "bell&#x07;" ; "bell")]
    #[test_case("del\u{7f}", "del&#x7F;" ; "delete")]
    fn attr_escaping(input: &str, expected: &str) {
        assert_eq!(escape_attr(input), expected);
    }
}

#[cfg(test)]
mod escape_extra_tests {
    use super::*;

    #[test]
    fn text_escapes_markup_and_carriage_returns() {
        assert_eq!(escape_text("a<b> & 'c'"), "a&lt;b&gt; &amp; &#39;c&#39;");
        assert_eq!(escape_text("a\r\nb"), "a&#13;\nb");
    }

    #[test]
    fn attr_escapes_controls_as_hex() {
        assert_eq!(escape_attr("x\"y\r"), "x&quot;y&#x0D;");
    }
}
