/// Escape the characters that have special meaning in a regular expression.
///
/// Each of `. * + ? ^ $ { } ( ) | [ ] \` is prefixed with a single
/// backslash; every other character passes through. Escaping is not
/// idempotent: escaping twice doubles the backslashes.
///
/// # Examples
///
/// ```
/// use value_utils::strings::escape_reg_exp;
///
/// assert_eq!(escape_reg_exp("abc"), "abc");
/// assert_eq!(escape_reg_exp("^[a-z]*$^"), "\\^\\[a-z\\]\\*\\$\\^");
/// ```
pub fn escape_reg_exp(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut last = 0;

    for (i, ch) in s.char_indices() {
        if is_syntax_char(ch) {
            result.push_str(&s[last..i]);
            result.push('\\');
            result.push(ch);
            last = i + ch.len_utf8();
        }
    }

    result.push_str(&s[last..]);
    result
}

fn is_syntax_char(ch: char) -> bool {
    matches!(
        ch,
        '.' | '*' | '+' | '?' | '^' | '$' | '{' | '}' | '(' | ')' | '|' | '[' | ']' | '\\'
    )
}
