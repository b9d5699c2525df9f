use std::path::PathBuf;

use solana_sdk::{pubkey::Pubkey, signature::Keypair};

use crate::helpers::funded_keypair;

pub const ANCHOR_FUNDAMENTAL_SO: &str = "anchor_fundamental.so";
pub const TOKEN_MINTER_SO: &str = "token_minter.so";

/// `target/deploy` of the workspace, where `anchor build` leaves the programs.
pub fn deploy_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../target/deploy")
}

pub struct SetupResult {
    pub svm: litesvm::LiteSVM,
    pub payer: Keypair,
}

/// Fresh SVM with both programs loaded and a funded payer.
pub fn setup() -> Result<SetupResult, std::io::Error> {
    let mut svm = litesvm::LiteSVM::new();

    load_program(&mut svm, anchor_fundamental::ID, ANCHOR_FUNDAMENTAL_SO)?;
    load_program(&mut svm, token_minter::ID, TOKEN_MINTER_SO)?;

    let payer = funded_keypair(&mut svm);

    Ok(SetupResult { svm, payer })
}

fn load_program(
    svm: &mut litesvm::LiteSVM,
    program_id: Pubkey,
    file_name: &str,
) -> Result<(), std::io::Error> {
    svm.add_program_from_file(program_id, deploy_dir().join(file_name))
}
