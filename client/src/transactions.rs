//! Instruction builders and the send path used by the RPC scripts.
//!
//! Builders are pure so they can be checked without a cluster; everything that
//! touches the network takes an [`RpcClient`].

use anchor_client::{
    solana_client::rpc_client::RpcClient,
    solana_sdk::{
        commitment_config::CommitmentConfig,
        instruction::Instruction,
        message::Message,
        native_token::LAMPORTS_PER_SOL,
        pubkey::Pubkey,
        signature::{Keypair, Signature},
        system_instruction, system_program,
        transaction::Transaction,
    },
};
use anchor_spl::{
    associated_token::spl_associated_token_account,
    metadata::mpl_token_metadata::{
        self, instructions::CreateMetadataAccountV3Builder, types::DataV2,
    },
    token::spl_token::{self, solana_program::program_pack::Pack},
};
use tracing::debug;

use crate::{QuestError, Result};

pub const AIRDROP_LAMPORTS: u64 = 1000 * LAMPORTS_PER_SOL;

/// Seed of the system-owned account created by `simple_tx` and `complex_tx`.
pub const SEEDED_ACCOUNT_SEED: &str = "test_program_001";
/// `simple_tx` funds its account as if it held this many bytes.
pub const SIMPLE_TX_RENT_BYTES: usize = 1500;
pub const COMPLEX_TX_CREATE_EXTRA: u64 = 2_000_000;
pub const COMPLEX_TX_TRANSFER_EXTRA: u64 = 100_000;

const METADATA_SEED: &[u8] = b"metadata";

pub fn seeded_address(base: &Pubkey, seed: &str) -> Result<Pubkey> {
    Ok(Pubkey::create_with_seed(base, seed, &system_program::id())?)
}

/// `create_account_with_seed` where `payer` is both funder and base.
pub fn create_seeded_account(
    payer: &Pubkey,
    seed: &str,
    lamports: u64,
    space: u64,
) -> Result<(Pubkey, Instruction)> {
    let address = seeded_address(payer, seed)?;
    let instruction = system_instruction::create_account_with_seed(
        payer,
        &address,
        payer,
        seed,
        lamports,
        space,
        &system_program::id(),
    );

    Ok((address, instruction))
}

/// Create the seeded account and spread lamports between it and
/// `static_wallet`, in one transaction.
///
/// Order: create, transfer to static, transfer to seeded, transfer to static.
pub fn fan_out_instructions(
    payer: &Pubkey,
    seed: &str,
    static_wallet: &Pubkey,
    rent_exempt: u64,
) -> Result<Vec<Instruction>> {
    let (seeded, create) =
        create_seeded_account(payer, seed, rent_exempt + COMPLEX_TX_CREATE_EXTRA, 0)?;

    let transfer_amount = rent_exempt + COMPLEX_TX_TRANSFER_EXTRA;
    let to_seeded = system_instruction::transfer(payer, &seeded, transfer_amount);
    let to_static = system_instruction::transfer(payer, static_wallet, transfer_amount);

    Ok(vec![create, to_static.clone(), to_seeded, to_static])
}

/// Token minted by `create_token_with_metadata`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSpec {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub decimals: u8,
    /// Amount minted to the payer, in base units.
    pub amount: u64,
}

impl Default for TokenSpec {
    fn default() -> Self {
        TokenSpec {
            name: "Seven Seas Gold".to_string(),
            symbol: "GOLD".to_string(),
            uri: "https://thisisnot.arealurl/info.json".to_string(),
            decimals: 2,
            amount: 100,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MintPlan {
    pub mint: Pubkey,
    pub metadata: Pubkey,
    pub token_account: Pubkey,
    pub instructions: Vec<Instruction>,
}

pub fn mint_space() -> usize {
    spl_token::state::Mint::LEN
}

/// Metadata PDA: `["metadata", metadata_program, mint]`.
pub fn metadata_address(mint: &Pubkey) -> Pubkey {
    let program_id = mpl_token_metadata::ID;
    let (address, _bump) = Pubkey::find_program_address(
        &[METADATA_SEED, program_id.as_ref(), mint.as_ref()],
        &program_id,
    );
    address
}

/// Instructions that create `mint`, attach metadata, open the payer's
/// associated token account and mint `spec.amount` into it.
///
/// The payer is mint authority, freeze authority and update authority.
pub fn mint_with_metadata(
    payer: &Pubkey,
    mint: &Pubkey,
    mint_rent: u64,
    spec: &TokenSpec,
) -> Result<MintPlan> {
    let token_program = spl_token::id();

    let create_mint_account = system_instruction::create_account(
        payer,
        mint,
        mint_rent,
        mint_space() as u64,
        &token_program,
    );

    let init_mint = spl_token::instruction::initialize_mint2(
        &token_program,
        mint,
        payer,
        Some(payer),
        spec.decimals,
    )
    .map_err(|err| QuestError::Instruction(format!("initialize_mint2: {err}")))?;

    let metadata = metadata_address(mint);
    let create_metadata = CreateMetadataAccountV3Builder::new()
        .metadata(metadata)
        .mint(*mint)
        .mint_authority(*payer)
        .payer(*payer)
        .update_authority(*payer, true)
        .data(DataV2 {
            name: spec.name.clone(),
            symbol: spec.symbol.clone(),
            uri: spec.uri.clone(),
            seller_fee_basis_points: 0,
            creators: None,
            collection: None,
            uses: None,
        })
        .is_mutable(true)
        .instruction();

    let token_account =
        spl_associated_token_account::get_associated_token_address_with_program_id(
            payer,
            mint,
            &token_program,
        );
    let create_token_account =
        spl_associated_token_account::instruction::create_associated_token_account(
            payer,
            payer,
            mint,
            &token_program,
        );

    let mint_to = spl_token::instruction::mint_to_checked(
        &token_program,
        mint,
        &token_account,
        payer,
        &[payer],
        spec.amount,
        spec.decimals,
    )
    .map_err(|err| QuestError::Instruction(format!("mint_to_checked: {err}")))?;

    Ok(MintPlan {
        mint: *mint,
        metadata,
        token_account,
        instructions: vec![
            create_mint_account,
            init_mint,
            create_metadata,
            create_token_account,
            mint_to,
        ],
    })
}

/// Compare a token account balance, as reported by RPC in base units, with
/// the amount `spec` mints.
pub fn check_minted_balance(
    account: &Pubkey,
    spec: &TokenSpec,
    actual_amount: &str,
) -> Result<()> {
    let expected = spec.amount.to_string();
    if actual_amount != expected {
        return Err(QuestError::UnexpectedBalance {
            account: account.to_string(),
            expected,
            actual: actual_amount.to_string(),
        });
    }

    Ok(())
}

/// Sign `instructions` with a fresh blockhash, send and wait for confirmation.
pub fn send_instructions(
    client: &RpcClient,
    instructions: &[Instruction],
    payer: &Pubkey,
    signers: &[&Keypair],
) -> Result<Signature> {
    let (recent_blockhash, _) =
        client.get_latest_blockhash_with_commitment(CommitmentConfig::confirmed())?;

    let message = Message::new(instructions, Some(payer));
    let tx = Transaction::new(signers, message, recent_blockhash);

    debug!("Sending tx... {:#?}", tx);
    Ok(client.send_and_confirm_transaction(&tx)?)
}
