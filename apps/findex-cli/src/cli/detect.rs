use std::process::ExitCode;

use anyhow::Result;
use findex_core::domain::Language;
use findex_core::nlp::WhatlangDetector;
use findex_core::ports::LanguageDetector;

use super::Context;

pub fn run(ctx: &Context, text: &str) -> Result<ExitCode> {
    let detector = WhatlangDetector::new().reliable_only(ctx.config.ingest.reliable_detection);
    let code = detector.detect(text)?;
    let supported = Language::from_code(&code).is_ok();

    if ctx.json {
        println!(
            "{}",
            serde_json::json!({ "language": code, "supported": supported })
        );
    } else if supported {
        println!("{code}");
    } else {
        println!("{code} (not supported for indexing)");
    }
    Ok(ExitCode::SUCCESS)
}
