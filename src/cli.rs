// CLI shell - argument parsing, prompts, and result printing.
// All business logic lives in text/ and query; this layer only moves
// strings in and lines out.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use crate::input::load_file;
use crate::query::find_words_in_question_sentences;
use crate::text::parse_text;

/// Find the unique words of a given length in a text's question sentences.
#[derive(Parser, Debug)]
#[command(name = "inquest", version, about)]
pub struct Cli {
    /// Read the text from a file instead of prompting for it
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Word length to search for; prompted for when omitted
    #[arg(long)]
    pub length: Option<i64>,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let raw = match &self.file {
            Some(path) => {
                load_file(path).with_context(|| format!("cannot load {}", path.display()))?
            }
            None => prompt_line("Enter text:")?,
        };

        let length = match self.length {
            Some(n) => n,
            None => parse_length(&prompt_line("Enter word length:")?)?,
        };

        let text = parse_text(&raw);
        let matches = find_words_in_question_sentences(&text, length);

        println!("Words of length {} in question sentences:", length);
        for word in matches {
            println!("{}", word);
        }

        Ok(())
    }
}

/// Parses the word length typed at the interactive prompt.
pub fn parse_length(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| anyhow!("invalid word length: {:?}", input.trim()))
}

fn prompt_line(prompt: &str) -> Result<String> {
    println!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read input")?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
