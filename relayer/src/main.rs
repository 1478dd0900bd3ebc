//! Signal relayer
//!
//! Local stand-in for the submission pipeline: run the prediction
//! engine, obtain a dev-mode seal for its journal, submit the result
//! to an in-process ledger, and read the committed state back. The
//! networked proof market plugs in at exactly the same two seams (the
//! seal source and the `ProofVerifier` implementation).

use alloy_primitives::{Address, B256, U256};
use anyhow::{Context, Result};
use clap::Parser;
use prediction_engine::{history, predict};
use sha2::{Digest, Sha256};
use signal_ledger::{dev_seal, DevModeVerifier, SignalLedger};

#[derive(Parser, Debug)]
#[command(name = "relayer")]
#[command(about = "Compute a trading signal, seal it, and commit it to the ledger")]
struct Args {
    /// Current ETH price in wei used as the prediction input.
    #[arg(long, env = "CURRENT_PRICE", default_value = "3700000000000000000")]
    current_price: u64,

    /// Trusted image id (32-byte hex). Defaults to a digest of the
    /// embedded engine data, standing in for a real build id.
    #[arg(long, env = "IMAGE_ID")]
    image_id: Option<B256>,

    /// Ledger owner address.
    #[arg(long, env = "OWNER", default_value = "0x00000000000000000000000000000000000000aa")]
    owner: Address,
}

/// Dev stand-in for the engine build id: a digest over everything the
/// computation bakes in.
fn default_image_id() -> B256 {
    let mut hasher = Sha256::new();
    for (day, price) in history::PRICE_HISTORY {
        hasher.update(day.to_be_bytes());
        hasher.update(price.to_be_bytes());
    }
    hasher.update(history::BASE_USD_PRICE.to_be_bytes());
    hasher.update(history::PROJECTION_DAY.to_be_bytes());
    B256::from_slice(&hasher.finalize())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let image_id = args.image_id.unwrap_or_else(default_image_id);
    let current_price = U256::from(args.current_price);

    tracing::info!(%current_price, %image_id, "running prediction engine");

    // Off-chain: compute and seal.
    let prediction = predict(current_price).context("prediction engine failed")?;
    tracing::info!(
        action = %prediction.action,
        confidence = prediction.confidence,
        predicted_price = %prediction.predicted_price,
        "prediction computed"
    );

    let journal = prediction.to_journal();
    let digest = signal_journal::digest(&journal);
    let seal = dev_seal(image_id, digest);
    tracing::info!(journal = %hex::encode(journal), %digest, "journal sealed (dev mode)");

    // On-chain stand-in: submit through the validated ledger.
    let mut ledger = SignalLedger::new(args.owner, image_id, DevModeVerifier);
    let event = ledger
        .set_signal(
            prediction.action.into(),
            prediction.confidence,
            prediction.predicted_price,
            &seal,
        )
        .context("ledger rejected the submission")?;

    tracing::info!(timestamp = event.timestamp, "ledger accepted the signal");

    let committed = ledger.latest_signal();
    println!("{}", serde_json::to_string_pretty(&committed)?);
    Ok(())
}
