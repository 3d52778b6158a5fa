use super::tokens::tokenize;

/// Check whether `query` spells out initials of successive words in `text`.
///
/// Single greedy pass: each token whose first character equals the next
/// pending query character (ASCII case-insensitive) consumes it, other
/// tokens are skipped, and a consumed character is never revisited. Only
/// the first character of a token is ever compared. An empty query matches
/// any text.
pub fn matches(text: &str, query: &str) -> bool {
    let mut pending = query.chars().peekable();

    for token in tokenize(text) {
        let Some(&wanted) = pending.peek() else {
            break;
        };
        if token
            .chars()
            .next()
            .is_some_and(|first| first.eq_ignore_ascii_case(&wanted))
        {
            pending.next();
        }
    }

    pending.peek().is_none()
}
