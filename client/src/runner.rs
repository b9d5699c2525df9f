//! The `initialize` smoke check: one remote call, one reported signature.

use std::io::Write;
use std::ops::Deref;

use anchor_client::{
    solana_sdk::{pubkey::Pubkey, signature::Signature, signer::Signer},
    Program,
};
use tracing::{debug, info};

use crate::Result;

/// Text printed in front of the signature on success.
pub const SIGNATURE_PREFIX: &str = "Your transaction signature";

/// A program whose `initialize` entry point takes no arguments.
pub trait InitializeRpc {
    fn program_id(&self) -> Pubkey;

    /// Send `initialize` and block until the cluster confirms or rejects it.
    fn initialize(&self) -> Result<Signature>;
}

/// Handle to the deployed `anchor-fundamental` program.
pub struct FundamentalProgram<C> {
    program: Program<C>,
}

impl<C, S> FundamentalProgram<C>
where
    C: Deref<Target = S> + Clone,
    S: Signer,
{
    pub fn new(program: Program<C>) -> Self {
        Self { program }
    }
}

impl<C, S> InitializeRpc for FundamentalProgram<C>
where
    C: Deref<Target = S> + Clone,
    S: Signer,
{
    fn program_id(&self) -> Pubkey {
        self.program.id()
    }

    fn initialize(&self) -> Result<Signature> {
        let signature = self
            .program
            .request()
            .accounts(anchor_fundamental::accounts::Initialize {})
            .args(anchor_fundamental::instruction::Initialize {})
            .send()?;

        Ok(signature)
    }
}

/// Handle to the deployed `token-minter` program.
pub struct TokenMinterProgram<C> {
    program: Program<C>,
}

impl<C, S> TokenMinterProgram<C>
where
    C: Deref<Target = S> + Clone,
    S: Signer,
{
    pub fn new(program: Program<C>) -> Self {
        Self { program }
    }

    pub fn program_id(&self) -> Pubkey {
        self.program.id()
    }

    pub fn initialize(&self, metadata: token_minter::Metadata) -> Result<Signature> {
        debug!(name = %metadata.name, symbol = %metadata.symbol, "sending token-minter initialize");

        let signature = self
            .program
            .request()
            .accounts(token_minter::accounts::Initialize {})
            .args(token_minter::instruction::Initialize { metadata })
            .send()?;

        Ok(signature)
    }
}

/// Invoke `initialize` exactly once and report the signature to `out`.
///
/// Errors from the remote call are returned unchanged; nothing is written in
/// that case.
pub fn run<R, W>(rpc: &R, out: &mut W) -> Result<Signature>
where
    R: InitializeRpc + ?Sized,
    W: Write,
{
    info!(program_id = %rpc.program_id(), "invoking initialize");
    let signature = rpc.initialize()?;
    report(&signature, out)?;

    Ok(signature)
}

pub fn report<W: Write>(signature: &Signature, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{SIGNATURE_PREFIX} {signature}")
}
