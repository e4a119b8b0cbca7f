//! Term frequency counting and TF-IDF weights.
//!
//! Corpus-level helpers take plain text slices so they can be applied to raw
//! document text or to normalized text alike.

use std::collections::HashMap;

use crate::domain::TermVector;

/// Frequency of each token, as whole-valued weights.
#[allow(clippy::cast_precision_loss)] // token counts never approach 2^52
pub fn vectorize<S: AsRef<str>>(tokens: &[S]) -> TermVector {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_ref()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(term, count)| (term.to_string(), count as f64))
        .collect()
}

/// Occurrences of `term` among the whitespace tokens of `document`.
pub fn term_frequency(term: &str, document: &str) -> usize {
    document.split_whitespace().filter(|token| *token == term).count()
}

/// Number of documents containing `term` anywhere in their text.
pub fn document_frequency<S: AsRef<str>>(term: &str, corpus: &[S]) -> usize {
    corpus
        .iter()
        .filter(|document| document.as_ref().contains(term))
        .count()
}

/// `ln(N / df)`, or `ln(N + 1)` for a term absent from the corpus.
#[allow(clippy::cast_precision_loss)]
pub fn inverse_document_frequency<S: AsRef<str>>(term: &str, corpus: &[S]) -> f64 {
    let n = corpus.len() as f64;
    match document_frequency(term, corpus) {
        0 => (n + 1.0).ln(),
        df => (n / df as f64).ln(),
    }
}

#[allow(clippy::cast_precision_loss)]
pub fn tf_idf<S: AsRef<str>>(term: &str, document: &str, corpus: &[S]) -> f64 {
    term_frequency(term, document) as f64 * inverse_document_frequency(term, corpus)
}

/// Number of whitespace-separated terms.
pub fn document_length(document: &str) -> usize {
    document.split_whitespace().count()
}

/// TF-IDF weights for a token sequence against a (normalized) corpus.
pub fn tf_idf_vector<S: AsRef<str>>(tokens: &[String], corpus: &[S]) -> TermVector {
    vectorize(tokens)
        .iter()
        .map(|(term, tf)| (term.to_string(), tf * inverse_document_frequency(term, corpus)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectorize_counts() {
        let v = vectorize(&["cat", "dog", "cat"]);
        assert_eq!(v.len(), 2);
        assert!((v.weight("cat") - 2.0).abs() < f64::EPSILON);
        assert!((v.weight("dog") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_vectorize_empty() {
        let tokens: [&str; 0] = [];
        assert!(vectorize(&tokens).is_empty());
    }

    #[test]
    fn test_term_frequency_is_token_exact() {
        assert_eq!(term_frequency("cat", "cat catalog cat"), 2);
        assert_eq!(term_frequency("cat", "Cat"), 0);
        assert_eq!(term_frequency("cat", ""), 0);
    }

    #[test]
    fn test_document_frequency_is_substring() {
        let corpus = ["cat dog", "catalog", "bird"];
        assert_eq!(document_frequency("cat", &corpus), 2);
        assert_eq!(document_frequency("fish", &corpus), 0);
    }

    #[test]
    fn test_idf_values() {
        let corpus = ["cat dog", "dog bird", "bird"];
        assert!((inverse_document_frequency("cat", &corpus) - 3.0_f64.ln()).abs() < 1e-12);
        assert!((inverse_document_frequency("dog", &corpus) - 1.5_f64.ln()).abs() < 1e-12);
        // Unseen terms use the smoothed default.
        assert!((inverse_document_frequency("fish", &corpus) - 4.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_idf_in_every_document_is_zero() {
        let corpus = ["dog", "dog dog"];
        assert!(inverse_document_frequency("dog", &corpus).abs() < 1e-12);
    }

    #[test]
    fn test_idf_empty_corpus_is_finite() {
        let corpus: [&str; 0] = [];
        let idf = inverse_document_frequency("cat", &corpus);
        assert!(idf.is_finite());
        assert!(idf.abs() < 1e-12);
    }

    #[test]
    fn test_idf_non_increasing_in_document_frequency() {
        // Fixed N = 6; the term appears in 1..=6 documents.
        let mut previous = f64::INFINITY;
        for df in 1..=6 {
            let corpus: Vec<&str> = (0..6).map(|i| if i < df { "term" } else { "other" }).collect();
            let idf = inverse_document_frequency("term", &corpus);
            assert!(idf <= previous, "idf rose at df={df}");
            previous = idf;
        }
    }

    #[test]
    fn test_tf_idf() {
        let corpus = ["cat cat dog", "dog bird"];
        let weight = tf_idf("cat", corpus[0], &corpus);
        assert!((weight - 2.0 * 2.0_f64.ln()).abs() < 1e-12);
        assert!(tf_idf("dog", corpus[0], &corpus).abs() < 1e-12);
    }

    #[test]
    fn test_document_length() {
        assert_eq!(document_length("  one two   three "), 3);
        assert_eq!(document_length(""), 0);
    }

    #[test]
    fn test_tf_idf_vector() {
        let corpus = ["cat dog", "dog bird"];
        let tokens = vec!["cat".to_string(), "cat".to_string(), "dog".to_string()];
        let v = tf_idf_vector(&tokens, &corpus);
        assert!((v.weight("cat") - 2.0 * 2.0_f64.ln()).abs() < 1e-12);
        assert!(v.weight("dog").abs() < 1e-12);
    }
}
