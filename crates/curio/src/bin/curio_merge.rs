//! `curio-merge` — apply a partial-update patch to a catalogue document.
//!
//! Usage:
//!   curio-merge '<patch-json>'
//!
//! The document is read from stdin. The patch is the first argument. The
//! merged document is printed to stdout.

use std::io::{self, Read, Write};

use curio_document::Document;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CURIO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let patch = match args.get(1) {
        Some(p) => p.clone(),
        None => {
            eprintln!("First argument must be a patch object.");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match merge(buf.trim(), &patch) {
        Ok(result) => {
            io::stdout().write_all(result.as_bytes()).unwrap();
            io::stdout().write_all(b"\n").unwrap();
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn merge(document: &str, patch: &str) -> Result<String, String> {
    let root: serde_json::Value =
        serde_json::from_str(document).map_err(|e| format!("invalid document: {e}"))?;
    let patch: serde_json::Value =
        serde_json::from_str(patch).map_err(|e| format!("invalid patch: {e}"))?;
    let mut doc = Document::new(root).map_err(|e| e.to_string())?;
    doc.merge(&patch).map_err(|e| e.to_string())?;
    serde_json::to_string_pretty(doc.as_value()).map_err(|e| e.to_string())
}
