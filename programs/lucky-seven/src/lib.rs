//! Lucky Seven — positional-match number lottery on Solana.
//!
//! Players register a credit ledger, pick seven numbers, and play them
//! against a freshly drawn winning sequence. Numbers match by position;
//! the fixed prize table pays from two matches up to the 5,000,000-credit
//! jackpot, and every play costs two credits.

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod scoring;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod lucky_seven {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    pub fn register_player(ctx: Context<RegisterPlayer>) -> Result<()> {
        instructions::register_player::handler(ctx)
    }

    pub fn play_round(ctx: Context<PlayRound>, numbers: Vec<u8>) -> Result<()> {
        instructions::play_round::handler(ctx, numbers)
    }

    pub fn close_player(ctx: Context<ClosePlayer>) -> Result<()> {
        instructions::close_player::handler(ctx)
    }
}
