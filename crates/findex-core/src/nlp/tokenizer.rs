use unicode_segmentation::UnicodeSegmentation;

use crate::ports::Tokenizer;

/// Splits on Unicode word boundaries (UAX #29); punctuation is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordTokenizer;

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(str::to_string).collect()
    }
}
