use std::fmt;

/// A single word: a maximal run of alphanumeric characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters, not bytes. "який" is 4, not 8.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
