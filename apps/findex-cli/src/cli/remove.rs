use std::process::ExitCode;

use anyhow::Result;
use findex_core::services::remove_document;

use super::Context;

pub fn run(ctx: &Context, filename: &str) -> Result<ExitCode> {
    let store = ctx.open_store()?;
    remove_document(store.as_ref(), filename)?;

    if ctx.json {
        println!("{}", serde_json::json!({ "removed": filename }));
    } else {
        println!("Removed {filename}");
    }
    Ok(ExitCode::SUCCESS)
}
