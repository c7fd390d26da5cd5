//! Nitro fixture generator
//!
//! ```bash
//! cargo run -p nitro_fixtures -- -tx-out out/tx.json \
//!     -receipt-out out/receipts.json -header-out out/headers.json
//! ```
//!
//! Flags are accepted with one or two dashes. Without a transaction output
//! path the tool exits with status 2.

use std::process;

use anyhow::{Context, Result};
use log::info;
use nitro_fixtures::cli::{init_logger, parse_args, GeneratorArgs, MISSING_TX_OUT};

fn main() -> Result<()> {
    let args: GeneratorArgs = parse_args();

    let Some(paths) = args.fixture_paths() else {
        eprintln!("{MISSING_TX_OUT}");
        process::exit(2);
    };

    init_logger(args.verbose);
    info!("Nitro fixture generator");
    info!("  Transactions: {}", paths.tx_out.display());
    if let Some(path) = &paths.receipt_out {
        info!("  Receipts:     {}", path.display());
    }
    if let Some(path) = &paths.header_out {
        info!("  Headers:      {}", path.display());
    }

    paths
        .write_all()
        .context("Failed to generate fixtures")?;

    Ok(())
}
