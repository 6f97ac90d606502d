fn is_sentence_terminator(c: char) -> bool {
    c == '.' || c == '?' || c == '!'
}

/// Splits text into sentence fragments.
///
/// A fragment ends immediately after `.`, `!` or `?`; the terminator stays
/// attached to its fragment and any whitespace after the split point is
/// consumed. Text after the last terminator becomes one trailing fragment.
/// A terminated fragment always contains at least its terminator, so empty
/// fragments are never returned; empty input yields no fragments.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !is_sentence_terminator(c) {
            continue;
        }
        let end = idx + c.len_utf8();
        fragments.push(&text[start..end]);
        start = end;
        while let Some(&(ws_idx, ws)) = chars.peek() {
            if !ws.is_whitespace() {
                break;
            }
            chars.next();
            start = ws_idx + ws.len_utf8();
        }
    }
    if start < text.len() {
        fragments.push(&text[start..]);
    }

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_two_sentences() {
        let fragments = split_sentences("Is this a test? Yes it is.");
        assert_eq!(fragments, vec!["Is this a test?", "Yes it is."]);
    }

    #[test]
    fn test_split_keeps_terminator_attached() {
        let fragments = split_sentences("Hello world. How are you?");
        assert_eq!(fragments, vec!["Hello world.", "How are you?"]);
    }

    #[test]
    fn test_split_no_terminator_yields_one_fragment() {
        let fragments = split_sentences("no punctuation here");
        assert_eq!(fragments, vec!["no punctuation here"]);
    }

    #[test]
    fn test_split_trailing_fragment_without_terminator() {
        let fragments = split_sentences("First. second half");
        assert_eq!(fragments, vec!["First.", "second half"]);
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn test_split_text_ending_at_terminator_has_no_empty_tail() {
        let fragments = split_sentences("Done.");
        assert_eq!(fragments, vec!["Done."]);
    }

    #[test]
    fn test_split_consecutive_terminators() {
        // "?!" splits into two fragments, each holding one terminator.
        let fragments = split_sentences("Really?! Yes.");
        assert_eq!(fragments, vec!["Really?", "!", "Yes."]);
    }

    #[test]
    fn test_split_consumes_whitespace_run() {
        let fragments = split_sentences("One.   \t Two.");
        assert_eq!(fragments, vec!["One.", "Two."]);
    }

    #[test]
    fn test_split_multibyte_whitespace_boundary() {
        let fragments = split_sentences("Перше.\u{a0}Друге.");
        assert_eq!(fragments, vec!["Перше.", "Друге."]);
    }
}
