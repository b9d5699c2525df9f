use solana_program::{instruction::Instruction, pubkey::Pubkey};
use solana_sdk::{
    instruction::InstructionError, signer::Signer, system_instruction,
    transaction::TransactionError,
};
use testing::{
    helpers::{
        anchor_fundamental_initialize, funded_keypair, send_as, token_minter_initialize,
        FUNDING_LAMPORTS,
    },
    setup::setup,
};

fn gold() -> token_minter::Metadata {
    token_minter::Metadata {
        name: "Seven Seas Gold".to_string(),
        symbol: "GOLD".to_string(),
        decimal: 2,
    }
}

#[test]
fn test_initialize() {
    let mut env = setup().expect("build the programs with `anchor build` first");

    let result = send_as(
        &mut env.svm,
        &[anchor_fundamental_initialize()],
        &env.payer,
        &[],
    );

    let meta = result.expect("initialize failed");
    assert_ne!(meta.signature.to_string(), "");
    assert!(
        meta.logs.iter().any(|log| log.contains(&format!(
            "Greetings from: {}",
            anchor_fundamental::ID
        ))),
        "missing greeting in {:?}",
        meta.logs
    );
}

#[test]
fn test_initialize_is_single_instruction() {
    let mut env = setup().unwrap();

    let meta = send_as(
        &mut env.svm,
        &[anchor_fundamental_initialize()],
        &env.payer,
        &[],
    )
    .unwrap();

    let invocations = meta
        .logs
        .iter()
        .filter(|log| log.starts_with(&format!("Program {} invoke", anchor_fundamental::ID)))
        .count();
    assert_eq!(invocations, 1);
}

#[test]
fn test_token_minter_initialize() {
    let mut env = setup().unwrap();

    let meta = send_as(
        &mut env.svm,
        &[token_minter_initialize(gold())],
        &env.payer,
        &[],
    )
    .expect("token-minter initialize failed");

    assert!(meta
        .logs
        .iter()
        .any(|log| log.contains("Token metadata: Seven Seas Gold (GOLD), 2 decimals")));
    assert!(meta.logs.iter().any(|log| log.starts_with("Program data: ")));
}

#[test]
fn test_token_minter_accepts_empty_metadata() {
    let mut env = setup().unwrap();

    let result = send_as(
        &mut env.svm,
        &[token_minter_initialize(token_minter::Metadata::default())],
        &env.payer,
        &[],
    );

    assert!(result.is_ok(), "empty metadata rejected: {:?}", result);
}

#[test]
fn test_unknown_instruction_is_rejected() {
    let mut env = setup().unwrap();

    let bogus = Instruction {
        program_id: anchor_fundamental::ID,
        accounts: vec![],
        data: vec![0u8; 8],
    };

    let failed = send_as(&mut env.svm, &[bogus], &env.payer, &[])
        .expect_err("unknown discriminator must fail");

    assert!(matches!(
        failed.err,
        TransactionError::InstructionError(0, InstructionError::Custom(_))
    ));
}

#[test]
fn test_undeployed_program_is_rejected() {
    let mut env = setup().unwrap();

    let mut ix = anchor_fundamental_initialize();
    ix.program_id = Pubkey::new_unique();

    let result = send_as(&mut env.svm, &[ix], &env.payer, &[]);
    assert!(result.is_err());
}

#[test]
fn test_co_signer_joins_payer() {
    let mut env = setup().unwrap();
    assert_eq!(env.svm.get_balance(&env.payer.pubkey()), Some(FUNDING_LAMPORTS));

    let sender = funded_keypair(&mut env.svm);
    let transfer = system_instruction::transfer(&sender.pubkey(), &env.payer.pubkey(), 1_000);

    let meta = send_as(
        &mut env.svm,
        &[transfer, anchor_fundamental_initialize()],
        &env.payer,
        &[&sender],
    )
    .expect("payer plus co-signer failed");

    assert!(meta.logs.iter().any(|log| log.contains("Greetings from")));
    assert_eq!(
        env.svm.get_balance(&sender.pubkey()),
        Some(FUNDING_LAMPORTS - 1_000)
    );
}
