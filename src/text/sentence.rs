use super::Word;

/// One sentence fragment: its words in source order, plus whether any `?`
/// terminated it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    words: Vec<Word>,
    is_question: bool,
}

impl Sentence {
    /// Tokenizes a sentence fragment.
    ///
    /// Words are maximal runs of alphanumeric characters (Unicode letters
    /// and digits, not just ASCII). Any `?` outside a word marks the
    /// sentence as a question; `.` and `!` end words without setting the
    /// flag. A buffer still open at end of input is emitted as a final
    /// word, which covers fragments with no trailing punctuation.
    pub fn parse(fragment: &str) -> Self {
        let mut words = Vec::new();
        let mut current = String::new();
        let mut is_question = false;

        for c in fragment.chars() {
            if c.is_alphanumeric() {
                current.push(c);
            } else {
                if !current.is_empty() {
                    words.push(Word::new(std::mem::take(&mut current)));
                }
                if c == '?' {
                    is_question = true;
                }
            }
        }
        if !current.is_empty() {
            words.push(Word::new(current));
        }

        Self { words, is_question }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn is_question(&self) -> bool {
        self.is_question
    }
}
