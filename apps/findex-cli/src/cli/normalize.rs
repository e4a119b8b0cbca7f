use std::process::ExitCode;

use anyhow::Result;
use findex_core::domain::Language;
use findex_core::nlp::TextNormalizer;

use super::Context;

pub fn run(ctx: &Context, text: &str, language: &str) -> Result<ExitCode> {
    let language = Language::from_code(language)?;
    let tokens = TextNormalizer::default().try_normalize(text, language)?;

    if ctx.json {
        println!(
            "{}",
            serde_json::json!({ "language": language, "tokens": tokens })
        );
    } else {
        println!("{}", tokens.join(" "));
    }
    Ok(ExitCode::SUCCESS)
}
