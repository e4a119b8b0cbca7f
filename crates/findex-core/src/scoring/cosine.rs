use crate::domain::{ScoreMap, TermVector};

/// `dot(a, b) / (|a| * |b|)`, defined as 0 when either vector has zero norm.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a > 0.0 && norm_b > 0.0 {
        // Clamp rounding overshoot so identical vectors never exceed 1.
        (a.dot(b) / (norm_a * norm_b)).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Similarity of the query to every document vector, keyed by filename.
pub fn cosine_similarities<'a, I>(query: &TermVector, documents: I) -> ScoreMap
where
    I: IntoIterator<Item = (&'a str, &'a TermVector)>,
{
    documents
        .into_iter()
        .map(|(filename, vector)| (filename.to_string(), cosine_similarity(query, vector)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(pairs: &[(&str, f64)]) -> TermVector {
        pairs.iter().map(|(t, w)| ((*t).to_string(), *w)).collect()
    }

    #[test]
    fn test_identical_vectors() {
        let a = vector(&[("cat", 1.0), ("dog", 1.0)]);
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_scale_invariance() {
        let a = vector(&[("cat", 1.0), ("dog", 2.0)]);
        let b = vector(&[("cat", 3.0), ("dog", 6.0)]);
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_orthogonal_vectors() {
        let a = vector(&[("cat", 1.0)]);
        let b = vector(&[("dog", 1.0)]);
        assert!(cosine_similarity(&a, &b).abs() < 1e-12);
    }

    #[test]
    fn test_partial_overlap() {
        let q = vector(&[("cat", 1.0)]);
        let d = vector(&[("cat", 1.0), ("dog", 1.0)]);
        assert!((cosine_similarity(&q, &d) - 1.0 / 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_zero_vector_on_either_side() {
        let empty = TermVector::new();
        let d = vector(&[("cat", 1.0)]);
        assert!(cosine_similarity(&empty, &d).abs() < f64::EPSILON);
        assert!(cosine_similarity(&d, &empty).abs() < f64::EPSILON);
        assert!(cosine_similarity(&empty, &empty).abs() < f64::EPSILON);
        assert!(!cosine_similarity(&empty, &empty).is_nan());
    }

    #[test]
    fn test_cosine_similarities_scores_every_document() {
        let q = vector(&[("cat", 1.0)]);
        let a = vector(&[("cat", 1.0)]);
        let b = TermVector::new();
        let scores = cosine_similarities(&q, [("a.txt", &a), ("b.txt", &b)]);
        assert_eq!(scores.len(), 2);
        assert!((scores["a.txt"] - 1.0).abs() < 1e-12);
        assert!(scores["b.txt"].abs() < f64::EPSILON);
    }
}
