use std::process::ExitCode;

use anyhow::Result;
use findex_core::domain::Document;
use findex_core::services::{RetrievalEngine, SearchService};

use super::{Context, preview};

pub fn run(ctx: &Context) -> Result<ExitCode> {
    let service = SearchService::new(ctx.open_store()?, RetrievalEngine::default());
    let documents = service.list_documents()?;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&documents)?);
    } else {
        print_documents(&documents);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_documents(documents: &[Document]) {
    if documents.is_empty() {
        println!("No documents indexed. Run `findex index <PATH>` first.");
        return;
    }

    println!();
    println!("{} documents:", documents.len());
    println!();
    for doc in documents {
        println!("  {} [{}]", doc.filename, doc.language);
        println!("    {}", preview(&doc.text, 80));
    }
    println!();
}
