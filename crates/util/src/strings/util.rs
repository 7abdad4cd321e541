/// Check if a character may start a C# identifier.
///
/// # Examples
///
/// ```
/// use valobj_openapi_util::strings::is_identifier_start;
///
/// assert!(is_identifier_start('a'));
/// assert!(is_identifier_start('_'));
/// assert!(!is_identifier_start('5'));
/// assert!(!is_identifier_start('.'));
/// ```
pub fn is_identifier_start(ch: char) -> bool {
    ch == '_' || ch.is_alphabetic()
}

/// Check if a character may continue a C# identifier.
///
/// # Examples
///
/// ```
/// use valobj_openapi_util::strings::is_identifier_part;
///
/// assert!(is_identifier_part('a'));
/// assert!(is_identifier_part('5'));
/// assert!(is_identifier_part('_'));
/// assert!(!is_identifier_part('-'));
/// ```
pub fn is_identifier_part(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}

/// Check if `name` is a single identifier, optionally `@`-prefixed.
///
/// # Examples
///
/// ```
/// use valobj_openapi_util::strings::is_identifier;
///
/// assert!(is_identifier("Vogen"));
/// assert!(is_identifier("@class"));
/// assert!(!is_identifier("1st"));
/// assert!(!is_identifier(""));
/// ```
pub fn is_identifier(name: &str) -> bool {
    let name = name.strip_prefix('@').unwrap_or(name);
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_part),
        _ => false,
    }
}

/// Check if `name` is a dotted sequence of identifiers, e.g. a namespace.
///
/// # Examples
///
/// ```
/// use valobj_openapi_util::strings::is_qualified_name;
///
/// assert!(is_qualified_name("MyCompany.Api"));
/// assert!(!is_qualified_name("MyCompany..Api"));
/// assert!(!is_qualified_name("MyCompany.Api."));
/// ```
pub fn is_qualified_name(name: &str) -> bool {
    !name.is_empty() && name.split('.').all(is_identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_ascii() {
        assert!(is_identifier("Age"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("Value2"));
    }

    #[test]
    fn test_identifier_unicode_letters() {
        assert!(is_identifier("Größe"));
    }

    #[test]
    fn test_identifier_rejects_punctuation() {
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier("a b"));
        assert!(!is_identifier("@"));
    }

    #[test]
    fn test_qualified_single_segment() {
        assert!(is_qualified_name("App"));
    }

    #[test]
    fn test_qualified_rejects_empty() {
        assert!(!is_qualified_name(""));
        assert!(!is_qualified_name("."));
    }

    #[test]
    fn test_qualified_rejects_global_alias() {
        assert!(!is_qualified_name("global::App"));
    }
}
