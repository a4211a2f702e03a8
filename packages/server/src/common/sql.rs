//! SQL helpers shared by the Postgres queries

/// Escape `\`, `%` and `_` so user input matches literally inside `LIKE ... ESCAPE '\'`
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_off"), r"50\%\_off");
        assert_eq!(escape_like(r"a\b"), r"a\\b");
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        assert_eq!(escape_like("Cafe A"), "Cafe A");
        assert_eq!(escape_like(""), "");
    }
}
