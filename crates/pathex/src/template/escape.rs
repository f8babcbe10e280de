/// Escaping helpers for building regular expression source
///
/// Two flavours: literal text that must match itself exactly, and the body of a
/// user-written `(pattern)` group which keeps its own regex syntax but must not
/// open or close groups of its own.

/// Escapes every regex metacharacter so `text` matches itself (pure function)
///
/// # Examples
///
/// ```
/// use pathex::template::escape_string;
///
/// assert_eq!(escape_string("/users"), "/users");
/// assert_eq!(escape_string("/file.json"), "/file\\.json");
/// assert_eq!(escape_string("a+b(c)"), "a\\+b\\(c\\)");
/// ```
pub fn escape_string(text: &str) -> String {
    regex::escape(text)
}

/// Escapes the characters of a group body that would break the enclosing capture
///
/// Bare `(`, `)` and `$` are escaped; escape pairs already present in the
/// body (`\d`, `\(`) are kept as written.
///
/// # Examples
///
/// ```
/// use pathex::template::escape_group;
///
/// assert_eq!(escape_group("\\d+"), "\\d+");
/// assert_eq!(escape_group("a|b"), "a|b");
/// assert_eq!(escape_group("x$"), "x\\$");
/// ```
pub fn escape_group(group: &str) -> String {
    let mut escaped = String::with_capacity(group.len());
    let mut chars = group.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                escaped.push(c);
                if let Some(next) = chars.next() {
                    escaped.push(next);
                }
            }
            '(' | ')' | '$' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }

    escaped
}
