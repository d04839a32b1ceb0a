//! C identifier helpers.

/// Keywords of C99 and C++11 that can never name a symbol or typedef.
const RESERVED: &[&str] = &[
    "alignas", "alignof", "auto", "bool", "break", "case", "catch", "char", "class", "const",
    "constexpr", "continue", "default", "delete", "do", "double", "else", "enum", "explicit",
    "extern", "false", "float", "for", "friend", "goto", "if", "inline", "int", "long",
    "mutable", "namespace", "new", "noexcept", "nullptr", "operator", "private", "protected",
    "public", "register", "restrict", "return", "short", "signed", "sizeof", "static",
    "struct", "switch", "template", "this", "throw", "true", "try", "typedef", "typename",
    "union", "unsigned", "using", "virtual", "void", "volatile", "while", "_Bool",
];

/// Whether `s` is a valid, non-reserved C identifier.
///
/// # Examples
/// ```
/// use cprelude_core::utils::is_c_identifier;
/// assert!(is_c_identifier("GC_malloc"));
/// assert!(!is_c_identifier("9lives"));
/// assert!(!is_c_identifier("int"));
/// ```
pub fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_') && !RESERVED.contains(&s)
}

/// Convert a file name or free-form label to MACRO_CASE.
///
/// Any run of characters that cannot appear in an identifier becomes a
/// single `_`; a leading digit gets a `_` prefix.
///
/// # Examples
/// ```
/// use cprelude_core::utils::to_macro_case;
/// assert_eq!(to_macro_case("runtime-prelude.h"), "RUNTIME_PRELUDE_H");
/// assert_eq!(to_macro_case("fooBar"), "FOO_BAR");
/// ```
pub fn to_macro_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 1);
    let mut prev_lower = false;
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            if c.is_ascii_uppercase() && prev_lower && !result.ends_with('_') {
                result.push('_');
            }
            result.push(c.to_ascii_uppercase());
            prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        } else {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            prev_lower = false;
        }
    }
    while result.ends_with('_') {
        result.pop();
    }
    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    result
}
