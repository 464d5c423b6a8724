//! `curio-nest` — build a single-branch patch from a dotted key.
//!
//! Usage:
//!   curio-nest <dotted-key>
//!
//! The leaf value is read from stdin as JSON. The nested object is
//! printed to stdout:
//!
//!   $ echo '[{"_id":"a1","delete":true}]' | curio-nest provenance.auctionHistory
//!   {"provenance":{"auctionHistory":[{"_id":"a1","delete":true}]}}

use std::io::{self, Read, Write};

use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CURIO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let key = match args.get(1) {
        Some(k) => k.clone(),
        None => {
            eprintln!("First argument must be a dotted key.");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match nest(&key, buf.trim()) {
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

fn nest(key: &str, leaf: &str) -> Result<String, String> {
    let value: serde_json::Value =
        serde_json::from_str(leaf).map_err(|e| format!("invalid leaf value: {e}"))?;
    let nested = curio_path::nest(key, value).map_err(|e| e.to_string())?;
    serde_json::to_string(&nested).map_err(|e| e.to_string())
}
