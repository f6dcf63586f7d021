// src/bin/write_openapi_snapshot.rs
use anyhow::{Context, Result};
use logiinsight::presentation::http::openapi;
use std::path::PathBuf;

/// Usage: `write_openapi_snapshot [PATH]`. Without a path the location comes
/// from `OPENAPI_SNAPSHOT_PATH` or the default snapshot file.
fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let output_path = match std::env::args().nth(1) {
        Some(arg) => {
            let path = PathBuf::from(&arg);
            openapi::write_openapi_snapshot_to(&path)
                .with_context(|| format!("writing {}", path.display()))?;
            arg
        }
        None => openapi::write_openapi_snapshot().context("writing OpenAPI snapshot")?,
    };
    println!("OpenAPI snapshot written to {output_path}");
    Ok(())
}
