//! Re-decodes fixture files written by `nitro_fixtures` and checks every
//! recorded expectation.
//!
//! ```bash
//! cargo run -p nitro_fixtures --bin verify_fixtures -- --tx out/tx.json \
//!     --receipt out/receipts.json --header out/headers.json
//! ```

use anyhow::{Context, Result};
use log::info;
use nitro_fixtures::{
    cli::{init_logger, parse_args, VerifierArgs},
    read_json,
    verify::{verify_header_fixtures, verify_receipt_fixtures, verify_tx_fixtures},
    HeaderFixtureFile, ReceiptFixtureFile, TxFixtureFile,
};

fn main() -> Result<()> {
    let args: VerifierArgs = parse_args();
    init_logger(args.verbose);

    let txs: TxFixtureFile = read_json(&args.tx)
        .with_context(|| format!("Failed to read {}", args.tx.display()))?;
    let count = verify_tx_fixtures(&txs)
        .with_context(|| format!("Transaction fixtures in {} are invalid", args.tx.display()))?;
    info!("{}: {} tx vectors ok", args.tx.display(), count);

    if let Some(path) = &args.receipt {
        let receipts: ReceiptFixtureFile =
            read_json(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let count = verify_receipt_fixtures(&receipts)
            .with_context(|| format!("Receipt fixtures in {} are invalid", path.display()))?;
        info!("{}: {} receipt vectors ok", path.display(), count);
    }

    if let Some(path) = &args.header {
        let headers: HeaderFixtureFile =
            read_json(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let count = verify_header_fixtures(&headers)
            .with_context(|| format!("Header fixtures in {} are invalid", path.display()))?;
        info!("{}: {} header vectors ok", path.display(), count);
    }

    Ok(())
}
