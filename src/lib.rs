pub mod cli;
pub mod input;
pub mod query;
pub mod text;

pub use query::find_words_in_question_sentences;
pub use text::{parse_text, Sentence, Text, Word};
