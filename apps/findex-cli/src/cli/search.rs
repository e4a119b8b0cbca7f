use std::process::ExitCode;

use anyhow::Result;
use findex_core::domain::{RetrievalModel, SearchResponse};
use findex_core::services::{RetrievalEngine, SearchService, validate_query};

use super::{Context, preview};

pub fn run(
    ctx: &Context,
    query: &str,
    model: Option<&str>,
    limit: Option<usize>,
) -> Result<ExitCode> {
    // An empty query is reported before a bad model tag.
    validate_query(query)?;
    let model: RetrievalModel = match model {
        Some(tag) => tag.parse()?,
        None => ctx.config.search.model()?,
    };
    let limit = limit.or(ctx.config.search.default_limit);

    let service = SearchService::new(
        ctx.open_store()?,
        RetrievalEngine::from_config(&ctx.config.search),
    );
    let response = service.search_response(query, model, limit)?;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_search(&response);
    }

    if response.results.is_empty() {
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}

fn print_search(response: &SearchResponse) {
    if response.results.is_empty() {
        println!("No results found for: \"{}\"", response.query);
        return;
    }

    println!();
    println!("Query: \"{}\" ({})", response.query, response.model);
    if response.count < response.total_count {
        println!(
            "Found: {} results (showing {})",
            response.total_count, response.count
        );
    } else {
        println!("Found: {} results", response.count);
    }
    println!();

    for (i, result) in response.results.iter().enumerate() {
        let doc = &result.document;
        let score = result
            .score
            .map(|score| format!(" | Score: {score:.4}"))
            .unwrap_or_default();
        println!("[{}] {} ({}){score}", i + 1, doc.filename, doc.language);
        println!("    {}", preview(&doc.text, 100));
        println!();
    }
}
