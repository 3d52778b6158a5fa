/// Characters that end the current word; the next alphanumeric starts a new one.
const DELIMITERS: [char; 5] = ['-', '_', '/', '\\', '.'];

/// Split `text` into word tokens.
///
/// A token is a run of ASCII letters and digits. A new token starts at the
/// beginning of the text, after any of `- _ / \ .`, and where a lowercase
/// letter is followed by an uppercase one. Every other character is dropped
/// without ending the current token.
///
/// The returned iterator is lazy and cheap to clone, so a sequence can be
/// restarted by cloning it before consumption.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        rest: text,
        prev: None,
    }
}

#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
    prev: Option<char>,
}

impl Tokens<'_> {
    fn starts_word(&self, current: char) -> bool {
        match self.prev {
            None => true,
            Some(prev) if DELIMITERS.contains(&prev) => true,
            Some(prev) => prev.is_ascii_lowercase() && current.is_ascii_uppercase(),
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut word = String::new();

        while let Some(ch) = self.rest.chars().next() {
            if !word.is_empty() && self.starts_word(ch) {
                return Some(word);
            }
            self.prev = Some(ch);
            self.rest = &self.rest[ch.len_utf8()..];
            if ch.is_ascii_alphanumeric() {
                word.push(ch);
            }
        }

        (!word.is_empty()).then_some(word)
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}
