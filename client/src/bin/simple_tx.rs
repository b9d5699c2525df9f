use anchor_client::{
    solana_client::rpc_client::RpcClient,
    solana_sdk::signer::Signer,
};
use anchor_fundamental_client::{
    config::ScriptConfig,
    logging,
    transactions::{self, AIRDROP_LAMPORTS, SEEDED_ACCOUNT_SEED, SIMPLE_TX_RENT_BYTES},
    wallet::{self, PollConfig},
};
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    logging::init();
    let config = ScriptConfig::from_env()?;

    let client = RpcClient::new_with_commitment(config.rpc_url.clone(), config.commitment);

    let payer_keypair = wallet::seeded_payer(&config.seed_phrase)?;
    let payer = payer_keypair.pubkey();
    info!("Using payer address: {}", payer);

    if let Err(err) =
        wallet::airdrop_and_confirm(&client, &payer, AIRDROP_LAMPORTS, PollConfig::default())
    {
        error!("Error requesting airdrop: {err}");
    }
    wallet::log_balance(&client, &payer)?;

    let derived = transactions::seeded_address(&payer, SEEDED_ACCOUNT_SEED)?;
    info!("Program id {}", derived);

    if let Ok(existing) = client.get_account(&derived) {
        info!("Program is already created {:#?}", existing);
        return Ok(());
    }

    let rent_exempt = client.get_minimum_balance_for_rent_exemption(SIMPLE_TX_RENT_BYTES)?;
    let (_, create) =
        transactions::create_seeded_account(&payer, SEEDED_ACCOUNT_SEED, rent_exempt, 0)?;

    let signature =
        transactions::send_instructions(&client, &[create], &payer, &[&payer_keypair])?;
    info!(%signature, "seeded account created");

    Ok(())
}
