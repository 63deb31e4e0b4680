/// Trim whitespace and drop empty entries from user-provided patterns.
///
/// Order and duplicates are preserved; only blank entries are removed.
pub(super) fn sanitize_patterns(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_are_trimmed_and_filtered() {
        let cleaned = sanitize_patterns(vec![
            " ./src/**/*.ts ".into(),
            String::new(),
            "   ".into(),
            "./index.html".into(),
        ]);
        assert_eq!(cleaned, vec!["./src/**/*.ts", "./index.html"]);
    }

    #[test]
    fn duplicates_survive_sanitizing() {
        let cleaned = sanitize_patterns(vec!["a".into(), "a".into()]);
        assert_eq!(cleaned, vec!["a", "a"]);
    }
}
