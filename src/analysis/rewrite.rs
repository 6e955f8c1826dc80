//! Token-boundary aware text rewriting.
//!
//! Matches are decided on analyzed terms, never on raw substrings: `"a"` does
//! not match inside `"am"`, and `"man"` matches `"Man,"`. The punctuation that
//! surrounded a replaced word in the raw text is kept around the replacement.

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::Token;
use crate::analysis::token_filter::punctuation::SENTENCE_PUNCTUATION;
use crate::analysis::{normalize, term_analyzer};

/// Replace every whole-word occurrence of `word` (case-insensitive) in `text`.
///
/// Returns `None` when `word` does not occur.
///
/// # Examples
///
/// ```
/// use textio::analysis::replace_word;
///
/// assert_eq!(
///     replace_word("The man walked, man!", "MAN", "Man").as_deref(),
///     Some("The Man walked, Man!")
/// );
/// assert_eq!(replace_word("I am here", "a", "A"), None);
/// ```
pub fn replace_word(text: &str, word: &str, replacement: &str) -> Option<String> {
    replace_phrase(text, &[normalize(word)], replacement)
}

/// Replace every non-overlapping run of consecutive words whose terms equal
/// `phrase` with `replacement`.
///
/// `phrase` must already be normalized (see [`normalize`]). Leading punctuation
/// of the first replaced word and trailing punctuation of the last one survive;
/// the spacing inside the matched run is replaced along with the words.
pub fn replace_phrase(text: &str, phrase: &[String], replacement: &str) -> Option<String> {
    if phrase.is_empty() || phrase.iter().any(|term| term.is_empty()) {
        return None;
    }

    let tokens: Vec<Token> = term_analyzer().analyze(text).collect();
    let mut output = String::with_capacity(text.len() + replacement.len());
    let mut cursor = 0;
    let mut replaced = 0;
    let mut i = 0;

    while i + phrase.len() <= tokens.len() {
        let window = &tokens[i..i + phrase.len()];
        if !window.iter().zip(phrase).all(|(token, term)| &token.text == term) {
            i += 1;
            continue;
        }

        let first = &window[0];
        let last = &window[window.len() - 1];
        output.push_str(&text[cursor..first.start_offset]);
        output.push_str(leading_punctuation(first.raw(text)));
        output.push_str(replacement);
        output.push_str(trailing_punctuation(last.raw(text)));

        cursor = last.end_offset;
        replaced += 1;
        i += phrase.len();
    }

    if replaced == 0 {
        return None;
    }

    output.push_str(&text[cursor..]);
    Some(output)
}

/// Whether `phrase` occurs in `terms` as consecutive entries.
pub fn contains_phrase(terms: &[String], phrase: &[String]) -> bool {
    !phrase.is_empty() && terms.windows(phrase.len()).any(|window| window == phrase)
}

fn leading_punctuation(raw: &str) -> &str {
    let rest = raw.trim_start_matches(SENTENCE_PUNCTUATION);
    &raw[..raw.len() - rest.len()]
}

fn trailing_punctuation(raw: &str) -> &str {
    let rest = raw.trim_end_matches(SENTENCE_PUNCTUATION);
    &raw[rest.len()..]
}
