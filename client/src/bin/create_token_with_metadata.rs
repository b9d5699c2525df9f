use anchor_client::{
    solana_client::rpc_client::RpcClient,
    solana_sdk::{signature::Keypair, signer::Signer},
};
use anchor_fundamental_client::{
    config::ScriptConfig,
    logging,
    transactions::{self, TokenSpec, AIRDROP_LAMPORTS},
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

    let mint_keypair = Keypair::new();
    let mint = mint_keypair.pubkey();
    info!("Mint program id {}", mint);

    let mint_rent = client.get_minimum_balance_for_rent_exemption(transactions::mint_space())?;
    let spec = TokenSpec::default();
    let plan = transactions::mint_with_metadata(&payer, &mint, mint_rent, &spec)?;
    info!("Metadata address {}", plan.metadata);

    let signature = transactions::send_instructions(
        &client,
        &plan.instructions,
        &payer,
        &[&payer_keypair, &mint_keypair],
    )
    .inspect_err(|err| error!("{err:#?}"))?;
    info!(%signature, "token minted");

    let mint_account = client.get_account(&mint)?;
    info!("Mint account {:#?}", mint_account);

    let balance = client.get_token_account_balance(&plan.token_account)?;
    info!("ATA balance = {:#?}", balance);

    transactions::check_minted_balance(&plan.token_account, &spec, &balance.amount)?;

    Ok(())
}
