use super::escape::escape;

/// Render text as a C# regular string literal.
///
/// Wraps the escaped text in double quotes.
///
/// # Examples
///
/// ```
/// use valobj_openapi_util::strings::as_string;
///
/// assert_eq!(as_string("hello"), "\"hello\"");
/// assert_eq!(as_string("say \"hi\""), "\"say \\\"hi\\\"\"");
/// assert_eq!(as_string("back\\slash"), "\"back\\\\slash\"");
/// ```
pub fn as_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    out.push_str(&escape(s));
    out.push('"');
    out
}
