//! Move-list parsing.
//!
//! Source files store a creature's learnable moves as one text field, either
//! as a bracketed list literal or as a bare comma-separated list:
//!
//! ```text
//! ['Tackle', 'Growl', "King's Shield"]
//! Tackle, Growl
//! ```

use std::collections::BTreeSet;

/// Parses a raw move-list field into a set of move names.
///
/// Empty items are skipped and duplicates collapse. An empty field, or one
/// with unbalanced brackets or quotes, yields an empty set.
///
/// # Examples
///
/// ```
/// use tier_transform::moves::parse_move_list;
///
/// let moves = parse_move_list("['Tackle', 'Growl', 'Tackle']");
/// assert_eq!(moves.len(), 2);
/// assert!(moves.contains("Growl"));
/// assert!(parse_move_list("['Tackle'").is_empty());
/// ```
pub fn parse_move_list(raw: &str) -> BTreeSet<String> {
    let trimmed = raw.trim();
    let body = match (trimmed.starts_with('['), trimmed.ends_with(']')) {
        (true, true) if trimmed.len() >= 2 => &trimmed[1..trimmed.len() - 1],
        (false, false) => trimmed,
        _ => return BTreeSet::new(),
    };

    let mut moves = BTreeSet::new();
    for item in body.split(',') {
        match unquote(item.trim()) {
            Some(name) if !name.is_empty() => {
                moves.insert(name.to_string());
            }
            Some(_) => {}
            None => return BTreeSet::new(),
        }
    }
    moves
}

/// Strips one layer of matching quotes; `None` when a quote is unbalanced.
fn unquote(item: &str) -> Option<&str> {
    for quote in ['\'', '"'] {
        if item.starts_with(quote) {
            return (item.len() >= 2 && item.ends_with(quote))
                .then(|| item[1..item.len() - 1].trim());
        }
        if item.ends_with(quote) {
            return None;
        }
    }
    Some(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &str) -> Vec<String> {
        parse_move_list(raw).into_iter().collect()
    }

    #[test]
    fn list_literal() {
        assert_eq!(
            names("['Psystrike', 'Recover', 'Aura Sphere']"),
            vec!["Aura Sphere", "Psystrike", "Recover"]
        );
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(names("['Tackle', 'Tackle', \"Tackle\"]"), vec!["Tackle"]);
    }

    #[test]
    fn apostrophes_inside_double_quotes() {
        assert_eq!(
            names("['Tackle', \"King's Shield\"]"),
            vec!["King's Shield", "Tackle"]
        );
    }

    #[test]
    fn bare_comma_list() {
        assert_eq!(names("Growl, Tackle,,"), vec!["Growl", "Tackle"]);
    }

    #[test]
    fn empty_inputs() {
        assert!(parse_move_list("").is_empty());
        assert!(parse_move_list("   ").is_empty());
        assert!(parse_move_list("[]").is_empty());
        assert!(parse_move_list("['']").is_empty());
    }

    #[test]
    fn malformed_inputs_are_empty() {
        assert!(parse_move_list("['Tackle', 'Growl'").is_empty());
        assert!(parse_move_list("'Tackle', 'Growl']").is_empty());
        assert!(parse_move_list("['Tackle, 'Growl']").is_empty());
        assert!(parse_move_list("[").is_empty());
        assert!(parse_move_list("]").is_empty());
    }
}
