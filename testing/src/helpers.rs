use {
    anchor_client::anchor_lang::{InstructionData, ToAccountMetas},
    litesvm::{types::TransactionResult, LiteSVM},
    solana_sdk::{
        instruction::Instruction, native_token::LAMPORTS_PER_SOL, signature::Keypair,
        signer::Signer, transaction::Transaction,
    },
};

/// Lamports airdropped to every keypair created by [`funded_keypair`].
pub const FUNDING_LAMPORTS: u64 = 10 * LAMPORTS_PER_SOL;

/// New keypair with [`FUNDING_LAMPORTS`] in its account.
pub fn funded_keypair(svm: &mut LiteSVM) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), FUNDING_LAMPORTS)
        .expect("airdrop into a fresh svm");
    keypair
}

/// Send `ixs` in one transaction paid and signed by `payer`. `co_signers`
/// lists any keypairs other than the payer.
#[allow(clippy::result_large_err)]
pub fn send_as(
    svm: &mut LiteSVM,
    ixs: &[Instruction],
    payer: &Keypair,
    co_signers: &[&Keypair],
) -> TransactionResult {
    let signers: Vec<&Keypair> = std::iter::once(payer)
        .chain(co_signers.iter().copied())
        .collect();
    let tx = Transaction::new_signed_with_payer(
        ixs,
        Some(&payer.pubkey()),
        &signers,
        svm.latest_blockhash(),
    );

    svm.send_transaction(tx)
}

pub fn anchor_fundamental_initialize() -> Instruction {
    Instruction {
        program_id: anchor_fundamental::ID,
        data: anchor_fundamental::instruction::Initialize {}.data(),
        accounts: anchor_fundamental::accounts::Initialize {}.to_account_metas(None),
    }
}

pub fn token_minter_initialize(metadata: token_minter::Metadata) -> Instruction {
    Instruction {
        program_id: token_minter::ID,
        data: token_minter::instruction::Initialize { metadata }.data(),
        accounts: token_minter::accounts::Initialize {}.to_account_metas(None),
    }
}
