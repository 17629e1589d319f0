//! Text tokenizers
//!
//! Provides the `Tokenizer` trait and the two tokenizers the engine switches
//! between. Every tokenizer is lossless: concatenating the text of the tokens
//! it returns reproduces its input exactly.

use std::ops::Range;

use crate::script::Granularity;

/// Represents a single token with its position in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text, whitespace included
    pub text: String,

    /// Byte range in the source text
    pub range: Range<usize>,

    /// Token index in the sequence
    pub index: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, range: Range<usize>, index: usize) -> Self {
        Self {
            text: text.into(),
            range,
            index,
        }
    }
}

/// Trait for tokenizers that split text into tokens
pub trait Tokenizer: Send + Sync {
    /// Split `text` into tokens covering it without gaps
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Get the name of this tokenizer
    fn name(&self) -> &str;

    /// Clone this tokenizer into a Box
    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

impl Clone for Box<dyn Tokenizer> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Build the tokenizer matching a granularity
pub fn tokenizer_for(granularity: Granularity) -> Box<dyn Tokenizer> {
    match granularity {
        Granularity::CharacterLevel => Box::new(CharacterTokenizer),
        Granularity::WordLevel => Box::new(WordTokenizer::new()),
    }
}

// ============================================================================
// Built-in Tokenizers
// ============================================================================

/// Character-level tokenizer (splits into individual characters)
#[derive(Debug, Clone, Default)]
pub struct CharacterTokenizer;

impl Tokenizer for CharacterTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.char_indices()
            .enumerate()
            .map(|(index, (pos, ch))| {
                Token::new(ch.to_string(), pos..pos + ch.len_utf8(), index)
            })
            .collect()
    }

    fn name(&self) -> &str {
        "character"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

/// Word tokenizer.
///
/// Emits maximal runs of word characters, whitespace and punctuation as
/// separate tokens, so a change in spacing never drags the neighbouring word
/// into the diff.
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    /// Emit each punctuation character as its own token instead of a run
    pub split_punctuation: bool,
}

impl WordTokenizer {
    pub fn new() -> Self {
        Self {
            split_punctuation: true,
        }
    }

    pub fn with_split_punctuation(mut self, split: bool) -> Self {
        self.split_punctuation = split;
        self
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut current_start = 0;
        let mut current_type: Option<TokenType> = None;

        for (pos, ch) in text.char_indices() {
            let char_type = classify_char(ch);

            match current_type {
                None => {
                    current_start = pos;
                    current_type = Some(char_type);
                }
                Some(prev_type)
                    if prev_type == char_type
                        && !(prev_type == TokenType::Punctuation && self.split_punctuation) => {}
                Some(_) => {
                    let index = tokens.len();
                    tokens.push(Token::new(&text[current_start..pos], current_start..pos, index));
                    current_start = pos;
                    current_type = Some(char_type);
                }
            }
        }

        if current_type.is_some() {
            let index = tokens.len();
            tokens.push(Token::new(
                &text[current_start..],
                current_start..text.len(),
                index,
            ));
        }

        tokens
    }

    fn name(&self) -> &str {
        "word"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenType {
    Word,
    Punctuation,
    Whitespace,
}

fn classify_char(ch: char) -> TokenType {
    if ch.is_whitespace() {
        TokenType::Whitespace
    } else if ch.is_ascii_punctuation() {
        TokenType::Punctuation
    } else {
        TokenType::Word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_character_tokenizer() {
        let tokens = CharacterTokenizer.tokenize("abc");

        assert_eq!(texts(&tokens), vec!["a", "b", "c"]);
        assert_eq!(tokens[2].range, 2..3);
        assert_eq!(tokens[2].index, 2);
    }

    #[test]
    fn test_character_tokenizer_multibyte() {
        let tokens = CharacterTokenizer.tokenize("سلام");

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[1].range, 2..4);
    }

    #[test]
    fn test_word_tokenizer() {
        let tokens = WordTokenizer::new().tokenize("The cat sat.");

        assert_eq!(texts(&tokens), vec!["The", " ", "cat", " ", "sat", "."]);
        assert_eq!(tokens[4].range, 8..11);
    }

    #[test]
    fn test_word_tokenizer_keeps_whitespace_runs() {
        let tokens = WordTokenizer::new().tokenize("  a  b\n");

        assert_eq!(texts(&tokens), vec!["  ", "a", "  ", "b", "\n"]);
    }

    #[test]
    fn test_word_tokenizer_punctuation() {
        let split = WordTokenizer::new().tokenize("wait...");
        let grouped = WordTokenizer::new()
            .with_split_punctuation(false)
            .tokenize("wait...");

        assert_eq!(texts(&split), vec!["wait", ".", ".", "."]);
        assert_eq!(texts(&grouped), vec!["wait", "..."]);
    }

    #[test]
    fn test_tokenizers_are_lossless() {
        let input = "Line one,\r\n\tline  two; (three) — done.";
        for tokenizer in [tokenizer_for(Granularity::WordLevel), tokenizer_for(Granularity::CharacterLevel)] {
            let joined: String = tokenizer.tokenize(input).into_iter().map(|t| t.text).collect();
            assert_eq!(joined, input, "{} tokenizer lost text", tokenizer.name());
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(WordTokenizer::new().tokenize("").is_empty());
        assert!(CharacterTokenizer.tokenize("").is_empty());
    }
}
