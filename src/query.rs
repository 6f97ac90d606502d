use crate::text::{Text, Word};

/// Collects the unique words of exactly `word_length` characters that appear
/// in question sentences, in first-occurrence order (sentence order, then
/// word order within a sentence).
///
/// Duplicates are removed by exact text equality, so "What" and "what" stay
/// distinct. A non-positive `word_length` matches nothing, since every word
/// has at least one character. The membership check is linear; result sets
/// here are a handful of words.
pub fn find_words_in_question_sentences(text: &Text, word_length: i64) -> Vec<&Word> {
    let mut matches: Vec<&Word> = Vec::new();

    for sentence in text.sentences() {
        if !sentence.is_question() {
            continue;
        }
        for word in sentence.words() {
            if word.len() as i64 == word_length
                && !matches.iter().any(|m| m.as_str() == word.as_str())
            {
                matches.push(word);
            }
        }
    }

    matches
}
