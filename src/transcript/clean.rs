//! Filler-word removal for transcript lines.

/// Remove filler words ("um", "uh", ...) from a line of transcript text.
/// Matching is case-insensitive and ignores punctuation attached to the
/// word, so "Um," is dropped when "um" is listed. Leftover whitespace
/// collapses to single spaces. An empty filler list is a no-op.
pub fn strip_filler_words(text: &str, fillers: &[String]) -> String {
    if fillers.is_empty() {
        return text.to_string();
    }
    text.split_whitespace()
        .filter(|word| {
            let bare = word.trim_matches(|c: char| !c.is_alphanumeric());
            !fillers.iter().any(|f| bare.eq_ignore_ascii_case(f))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fillers(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn removes_listed_words_case_insensitively() {
        let out = strip_filler_words("Um, so we were, uh, thinking", &fillers(&["um", "uh"]));
        assert_eq!(out, "so we were, thinking");
    }

    #[test]
    fn empty_list_leaves_text_untouched() {
        let text = "um well exactly";
        assert_eq!(strip_filler_words(text, &[]), text);
    }

    #[test]
    fn does_not_remove_partial_matches() {
        let out = strip_filler_words("the umbrella is uh useful", &fillers(&["um", "uh"]));
        assert_eq!(out, "the umbrella is useful");
    }

    #[test]
    fn collapses_whitespace_left_by_removal() {
        let out = strip_filler_words("uh  uh   hello", &fillers(&["uh"]));
        assert_eq!(out, "hello");
    }
}
