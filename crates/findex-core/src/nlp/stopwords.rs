use std::collections::HashSet;

use crate::domain::Language;
use crate::ports::StopWords;

/// NLTK English stop-word corpus.
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Common Arabic function words: prepositions, pronouns, particles, demonstratives.
const ARABIC: &[&str] = &[
    "في", "من", "إلى", "الى", "على", "عن", "مع", "حتى", "منذ", "عند", "لدى", "بين", "خلال",
    "نحو", "ضد", "حول", "دون", "تحت", "فوق", "أمام", "وراء", "قبل", "بعد", "و", "ف", "ثم",
    "أو", "او", "أم", "بل", "لكن", "إن", "ان", "أن", "إذا", "اذا", "إذ", "لو", "لولا",
    "كي", "لم", "لن", "لا", "ما", "ماذا", "لماذا", "كيف", "أين", "متى", "هل", "قد", "لقد",
    "سوف", "كان", "كانت", "يكون", "تكون", "ليس", "ليست", "هو", "هي", "هم", "هن", "هما", "أنا",
    "انا", "نحن", "أنت", "انت", "أنتم", "انتم", "أنتما", "هذا", "هذه", "ذلك", "تلك", "هؤلاء",
    "أولئك", "هنا", "هناك", "الذي", "التي", "الذين", "اللذان", "اللتان", "اللواتي", "كل",
    "بعض", "غير", "أي", "اي", "أيضا", "ايضا", "كما", "مثل", "عندما", "بينما", "حيث", "لذلك",
    "إلا", "الا", "فقط", "جدا", "كذلك", "هكذا", "به", "بها", "له", "لها", "لهم", "فيه", "فيها",
    "منه", "منها", "عليه", "عليها", "إليه", "اليه", "وهو", "وهي", "وقد", "وكان", "وفي", "ومن",
    "ولا", "وما", "يا", "ال",
];

#[derive(Debug, Clone)]
pub struct StopWordList {
    words: HashSet<&'static str>,
}

impl StopWordList {
    pub fn english() -> Self {
        Self::from_words(ENGLISH)
    }

    pub fn arabic() -> Self {
        Self::from_words(ARABIC)
    }

    pub fn for_language(language: Language) -> Self {
        match language {
            Language::English => Self::english(),
            Language::Arabic => Self::arabic(),
        }
    }

    fn from_words(words: &[&'static str]) -> Self {
        Self {
            words: words.iter().copied().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl StopWords for StopWordList {
    fn is_stop_word(&self, token: &str) -> bool {
        self.words.contains(token)
    }
}
