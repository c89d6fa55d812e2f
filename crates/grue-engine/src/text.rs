//! Small helpers for player-facing text.

/// Prefix a name with "a" or "an".
pub fn with_article(name: &str) -> String {
    let vowel = name
        .chars()
        .next()
        .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'));
    if vowel {
        format!("an {name}")
    } else {
        format!("a {name}")
    }
}

/// Join items as "x", "x and y", or "x, y and z".
pub fn join_with(items: &[String], last: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., tail] => format!("{} {last} {tail}", init.join(", ")),
    }
}

/// Names with articles, joined with "and".
pub fn list_with_articles(names: &[String]) -> String {
    let items: Vec<String> = names.iter().map(|n| with_article(n)).collect();
    join_with(&items, "and")
}

/// Uppercase the first character.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Collapse whitespace and lowercase.
pub fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Terminate every non-empty line with a newline and concatenate.
pub fn lines(parts: &[String]) -> String {
    let mut out = String::new();
    for part in parts.iter().filter(|p| !p.is_empty()) {
        out.push_str(part);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn articles() {
        assert_eq!(with_article("lunch"), "a lunch");
        assert_eq!(with_article("elvish sword"), "an elvish sword");
    }

    #[test]
    fn joining() {
        let names = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(join_with(&names(&[]), "or"), "");
        assert_eq!(join_with(&names(&["a"]), "or"), "a");
        assert_eq!(join_with(&names(&["a", "b", "c"]), "or"), "a, b or c");
        assert_eq!(
            list_with_articles(&names(&["lunch", "clove of garlic"])),
            "a lunch and a clove of garlic"
        );
    }

    #[test]
    fn line_termination() {
        let parts = vec!["Taken.".to_string(), String::new(), "The troll swings.".to_string()];
        assert_eq!(lines(&parts), "Taken.\nThe troll swings.\n");
        assert_eq!(normalize("  Pick   UP "), "pick up");
    }
}
