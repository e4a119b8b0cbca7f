pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

pub trait Stemmer: Send + Sync {
    fn stem(&self, token: &str) -> String;
}

pub trait StopWords: Send + Sync {
    fn is_stop_word(&self, token: &str) -> bool;
}
