//! Speaker-turn segmentation.
//!
//! Collapses a word-level transcript with per-word speaker labels into one
//! line per speaker turn: consecutive words from the same speaker merge,
//! a change of speaker starts a new line.

/// One transcribed word with its attributed speaker.
///
/// Either field may be absent when the provider returns a partial word
/// record; such tokens are skipped during segmentation (see [`segment`]).
#[derive(Debug, Clone, PartialEq)]
pub struct WordToken<S> {
    pub speaker: Option<S>,
    pub text: Option<String>,
}

impl<S> WordToken<S> {
    pub fn new(speaker: S, text: impl Into<String>) -> Self {
        Self {
            speaker: Some(speaker),
            text: Some(text.into()),
        }
    }
}

/// One speaker turn: the space-joined words of a maximal run of
/// consecutive tokens sharing the same speaker.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeakerLine<S> {
    pub speaker: S,
    pub text: String,
}

/// Group word tokens into per-speaker lines.
///
/// Single left-to-right pass. Tokens missing a speaker or carrying no text
/// are skipped: they do not end the run they fall inside, do not start a
/// new one, and contribute nothing to the output. One malformed word
/// record must not discard the rest of the transcript. Runs merge only
/// when physically consecutive; the same speaker returning after an
/// interruption starts a fresh line. Empty input produces empty output,
/// not an error.
///
/// Speakers are opaque: they are only ever compared for equality, never
/// assumed numeric or bounded.
pub fn segment<S, I>(tokens: I) -> Vec<SpeakerLine<S>>
where
    S: PartialEq,
    I: IntoIterator<Item = WordToken<S>>,
{
    let mut lines = Vec::new();
    let mut current_speaker: Option<S> = None;
    let mut current_words: Vec<String> = Vec::new();

    for token in tokens {
        let (speaker, text) = match (token.speaker, token.text) {
            (Some(s), Some(t)) if !t.is_empty() => (s, t),
            _ => continue,
        };

        match current_speaker.take() {
            None => {
                current_speaker = Some(speaker);
                current_words.push(text);
            }
            Some(previous) if previous == speaker => {
                current_speaker = Some(previous);
                current_words.push(text);
            }
            Some(previous) => {
                lines.push(SpeakerLine {
                    speaker: previous,
                    text: current_words.join(" "),
                });
                current_words = vec![text];
                current_speaker = Some(speaker);
            }
        }
    }

    // The last run has no trailing speaker change to trigger it.
    if let Some(speaker) = current_speaker {
        if !current_words.is_empty() {
            lines.push(SpeakerLine {
                speaker,
                text: current_words.join(" "),
            });
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(speaker: u32, text: &str) -> WordToken<u32> {
        WordToken::new(speaker, text)
    }

    #[test]
    fn empty_input_yields_no_lines() {
        let lines = segment(Vec::<WordToken<u32>>::new());
        assert!(lines.is_empty());
    }

    #[test]
    fn single_token_yields_single_line() {
        let lines = segment(vec![tok(0, "hello")]);
        assert_eq!(
            lines,
            vec![SpeakerLine {
                speaker: 0,
                text: "hello".to_string()
            }]
        );
    }

    #[test]
    fn consecutive_words_from_one_speaker_merge() {
        let lines = segment(vec![tok(0, "hi"), tok(0, "there")]);
        assert_eq!(
            lines,
            vec![SpeakerLine {
                speaker: 0,
                text: "hi there".to_string()
            }]
        );
    }

    #[test]
    fn alternating_speakers_are_not_merged() {
        let lines = segment(vec![tok(0, "hi"), tok(1, "yo"), tok(0, "ok")]);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "hi");
        assert_eq!(lines[1].text, "yo");
        assert_eq!(lines[2].text, "ok");
        assert_eq!(lines[0].speaker, 0);
        assert_eq!(lines[1].speaker, 1);
        assert_eq!(lines[2].speaker, 0);
    }

    #[test]
    fn runs_do_not_merge_across_an_interruption() {
        // A A B A A -> three lines, not one merged A line
        let lines = segment(vec![
            tok(0, "we"),
            tok(0, "were"),
            tok(1, "what"),
            tok(0, "talking"),
            tok(0, "earlier"),
        ]);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "we were");
        assert_eq!(lines[1].text, "what");
        assert_eq!(lines[2].text, "talking earlier");
    }

    #[test]
    fn token_without_speaker_is_skipped_and_run_survives() {
        let tokens = vec![
            tok(0, "hi"),
            WordToken {
                speaker: None,
                text: Some("bad".to_string()),
            },
            tok(0, "there"),
        ];
        let lines = segment(tokens);
        assert_eq!(
            lines,
            vec![SpeakerLine {
                speaker: 0,
                text: "hi there".to_string()
            }]
        );
    }

    #[test]
    fn token_without_text_is_skipped() {
        let tokens = vec![
            tok(0, "hi"),
            WordToken {
                speaker: Some(0),
                text: None,
            },
            tok(1, "yo"),
        ];
        let lines = segment(tokens);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "hi");
        assert_eq!(lines[1].text, "yo");
    }

    #[test]
    fn token_with_empty_text_is_skipped() {
        let lines = segment(vec![tok(0, "hi"), tok(0, ""), tok(0, "there")]);
        assert_eq!(lines[0].text, "hi there");
    }

    #[test]
    fn only_malformed_tokens_yield_no_lines() {
        let tokens: Vec<WordToken<u32>> = vec![WordToken {
            speaker: None,
            text: Some("x".to_string()),
        }];
        assert!(segment(tokens).is_empty());
    }

    #[test]
    fn output_rejoins_to_the_valid_input_words() {
        let tokens = vec![
            tok(2, "so"),
            tok(2, "anyway,"),
            tok(0, "right"),
            tok(2, "as"),
            tok(2, "I"),
            tok(2, "said"),
            tok(1, "sure"),
        ];
        let expected: Vec<String> = tokens
            .iter()
            .filter_map(|t| t.text.clone())
            .collect();
        let lines = segment(tokens);
        let rejoined = lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(rejoined, expected.join(" "));
        // One line per maximal run: 2 2 | 0 | 2 2 2 | 1
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn speaker_ids_are_opaque() {
        // Works for any equality-comparable speaker type, not just integers.
        let tokens = vec![
            WordToken::new("alice", "good"),
            WordToken::new("alice", "morning"),
            WordToken::new("bob", "hey"),
        ];
        let lines = segment(tokens);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].speaker, "alice");
        assert_eq!(lines[0].text, "good morning");
        assert_eq!(lines[1].speaker, "bob");
    }
}
