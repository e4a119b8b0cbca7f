//! Language detection and the per-language normalization pipeline.

pub mod detector;
pub mod normalizer;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;

pub use detector::WhatlangDetector;
pub use normalizer::{Pipeline, TextNormalizer};
pub use stemmer::SnowballStemmer;
pub use stopwords::StopWordList;
pub use tokenizer::UnicodeWordTokenizer;
