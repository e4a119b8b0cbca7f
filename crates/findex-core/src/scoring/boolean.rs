//! Boolean matching over raw, unnormalized document text.
//!
//! Terms are the whitespace-split pieces of the query and match as
//! case-sensitive substrings, so `cat` matches inside `catalog`.

use crate::domain::Document;

fn query_terms(query: &str) -> impl Iterator<Item = &str> {
    query.split_whitespace()
}

/// Every query term occurs in the text. Vacuously true for an empty query.
pub fn is_relevant_exact(query: &str, document: &Document) -> bool {
    query_terms(query).all(|term| document.text.contains(term))
}

/// At least one query term occurs in the text. False for an empty query.
pub fn is_relevant_extended(query: &str, document: &Document) -> bool {
    query_terms(query).any(|term| document.text.contains(term))
}

/// Matching documents in corpus order.
pub fn exact_matches(query: &str, documents: &[Document]) -> Vec<Document> {
    documents
        .iter()
        .filter(|doc| is_relevant_exact(query, doc))
        .cloned()
        .collect()
}

/// Matching documents in corpus order.
pub fn extended_matches(query: &str, documents: &[Document]) -> Vec<Document> {
    documents
        .iter()
        .filter(|doc| is_relevant_extended(query, doc))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Language;
    use pretty_assertions::assert_eq;

    fn corpus() -> Vec<Document> {
        vec![
            Document::new("a.txt", "cat dog", Language::English),
            Document::new("b.txt", "dog bird", Language::English),
            Document::new("c.txt", "The catalog lists Birds", Language::English),
        ]
    }

    fn names(docs: &[Document]) -> Vec<&str> {
        docs.iter().map(|d| d.filename.as_str()).collect()
    }

    #[test]
    fn test_exact_requires_every_term() {
        let docs = corpus();
        assert_eq!(names(&exact_matches("dog", &docs)), vec!["a.txt", "b.txt"]);
        assert_eq!(names(&exact_matches("cat dog", &docs)), vec!["a.txt"]);
        assert!(exact_matches("cat bird fish", &docs).is_empty());
    }

    #[test]
    fn test_extended_requires_any_term() {
        let docs = corpus();
        assert_eq!(
            names(&extended_matches("cat bird", &docs)),
            vec!["a.txt", "b.txt", "c.txt"]
        );
        assert!(extended_matches("fish", &docs).is_empty());
    }

    #[test]
    fn test_substring_match_inside_words() {
        let docs = corpus();
        assert_eq!(names(&exact_matches("cat", &docs)), vec!["a.txt", "c.txt"]);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let docs = corpus();
        assert_eq!(names(&exact_matches("Birds", &docs)), vec!["c.txt"]);
        assert!(exact_matches("DOG", &docs).is_empty());
    }

    #[test]
    fn test_results_keep_corpus_order() {
        let mut docs = corpus();
        docs.reverse();
        assert_eq!(
            names(&extended_matches("dog", &docs)),
            vec!["b.txt", "a.txt"]
        );
    }

    #[test]
    fn test_extended_is_superset_of_exact() {
        let docs = corpus();
        for query in ["dog", "cat dog", "cat bird", "bird Birds", "fish cat"] {
            let exact = exact_matches(query, &docs);
            let extended = extended_matches(query, &docs);
            for doc in &exact {
                assert!(extended.contains(doc), "{query}: {} missing", doc.filename);
            }
        }
    }

    #[test]
    fn test_empty_query_is_vacuous() {
        let docs = corpus();
        assert_eq!(exact_matches("   ", &docs).len(), docs.len());
        assert!(extended_matches("", &docs).is_empty());
    }
}
