/// Escape special characters for use inside a C# regular string literal.
///
/// This function escapes:
/// - The simple escapes C# defines (`\0`, `\a`, `\b`, `\f`, `\n`, `\r`, `\t`, `\v`)
/// - Remaining control characters as `\uXXXX`
/// - Double quote and backslash
/// - The Unicode line terminators U+0085, U+2028 and U+2029, which end a
///   line in C# source
///
/// # Examples
///
/// ```
/// use valobj_openapi_util::strings::escape;
///
/// assert_eq!(escape("hello"), "hello");
/// assert_eq!(escape("say \"hi\""), "say \\\"hi\\\"");
/// assert_eq!(escape("line1\nline2"), "line1\\nline2");
/// ```
pub fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut last = 0;

    for (i, ch) in s.char_indices() {
        let escaped: Option<String> = match ch {
            '\0' => Some("\\0".into()),
            '\u{0007}' => Some("\\a".into()),
            '\u{0008}' => Some("\\b".into()),
            '\u{000C}' => Some("\\f".into()),
            '\n' => Some("\\n".into()),
            '\r' => Some("\\r".into()),
            '\t' => Some("\\t".into()),
            '\u{000B}' => Some("\\v".into()),
            '"' => Some("\\\"".into()),
            '\\' => Some("\\\\".into()),
            '\u{0085}' | '\u{2028}' | '\u{2029}' => Some(format!("\\u{:04x}", ch as u32)),
            c if c.is_control() => Some(format!("\\u{:04x}", c as u32)),
            _ => None,
        };

        if let Some(esc) = escaped {
            result.push_str(&s[last..i]);
            result.push_str(&esc);
            last = i + ch.len_utf8();
        }
    }

    result.push_str(&s[last..]);
    result
}
