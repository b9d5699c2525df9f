#![doc = include_str!("../README.md")]
#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

declare_id!("ByLuugnVw2LSxdZDapEe9NMXkNeoZR2KyhDMnF4QaXgD");

#[program]
pub mod token_minter {
    use super::*;

    /// Accept the metadata of a token to be minted.
    ///
    /// # Arguments
    ///
    /// * `metadata` - Display name, ticker symbol and decimal places
    ///
    /// # Emits
    ///
    /// * [`TokenMetadataInitialized`]
    pub fn initialize(_ctx: Context<Initialize>, metadata: Metadata) -> Result<()> {
        msg!(
            "Token metadata: {} ({}), {} decimals",
            metadata.name,
            metadata.symbol,
            metadata.decimal
        );

        emit!(TokenMetadataInitialized {
            name: metadata.name,
            symbol: metadata.symbol,
            decimal: metadata.decimal,
        });

        Ok(())
    }
}

#[derive(Accounts)]
pub struct Initialize {}

/// Token description passed to [`token_minter::initialize`].
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct Metadata {
    /// Display name (e.g. "Seven Seas Gold").
    pub name: String,
    /// Ticker symbol (e.g. "GOLD").
    pub symbol: String,
    /// Number of decimal places.
    pub decimal: u16,
}

/// Emitted by [`token_minter::initialize`].
#[event]
pub struct TokenMetadataInitialized {
    pub name: String,
    pub symbol: String,
    pub decimal: u16,
}
