pub mod sentence;
pub mod splitter;
pub mod word;

pub use sentence::Sentence;
pub use splitter::split_sentences;
pub use word::Word;

/// A parsed text: its sentences in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    sentences: Vec<Sentence>,
}

impl Text {
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }
}

/// Parses raw text into sentences and words in a single pass.
pub fn parse_text(raw: &str) -> Text {
    let sentences = split_sentences(raw)
        .into_iter()
        .map(Sentence::parse)
        .collect();
    Text { sentences }
}
