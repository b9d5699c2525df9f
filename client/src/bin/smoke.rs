use std::io;

use anchor_client::solana_sdk::signer::Signer;
use anchor_fundamental_client::{logging, provider::Provider, runner};
use tracing::info;

fn main() -> anyhow::Result<()> {
    logging::init();

    let provider = Provider::env()?;
    info!(
        cluster = %provider.cluster().url(),
        payer = %provider.payer().pubkey(),
        "provider ready"
    );
    let program = provider.anchor_fundamental()?;

    runner::run(&program, &mut io::stdout().lock())?;

    Ok(())
}
