use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use findex_core::domain::Language;
use findex_core::nlp::WhatlangDetector;
use findex_core::services::{IngestionResult, IngestionService};

use super::Context;

pub fn run(ctx: &Context, path: &Path, language: Option<&str>) -> Result<ExitCode> {
    let language = language.map(Language::from_code).transpose()?;
    let detector = WhatlangDetector::new().reliable_only(ctx.config.ingest.reliable_detection);

    let service = IngestionService::new(ctx.open_store()?, Arc::new(detector))
        .with_extensions(ctx.config.ingest.extensions.clone());
    let result = service.index_path(path, language)?;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }

    if result.errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

fn print_result(result: &IngestionResult) {
    println!(
        "Indexed {} new, {} updated, {} unchanged",
        result.documents_indexed, result.documents_updated, result.documents_skipped
    );
    if !result.errors.is_empty() {
        eprintln!();
        eprintln!("{} files skipped:", result.errors.len());
        for error in &result.errors {
            eprintln!("  {error}");
        }
    }
}
