use crate::domain::{Document, ScoreMap, ScoredDocument};

/// Orders documents by descending score. The sort is stable, so equal scores
/// keep their corpus order. Documents missing from `scores` rank as 0.
pub fn rank_documents(documents: Vec<Document>, scores: &ScoreMap) -> Vec<ScoredDocument> {
    let mut ranked: Vec<ScoredDocument> = documents
        .into_iter()
        .map(|doc| {
            let score = scores.get(&doc.filename).copied().unwrap_or(0.0);
            ScoredDocument::scored(doc, score)
        })
        .collect();

    ranked.sort_by(|a, b| {
        let a = a.score.unwrap_or(0.0);
        let b = b.score.unwrap_or(0.0);
        b.total_cmp(&a)
    });
    ranked
}
