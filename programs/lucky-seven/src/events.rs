use anchor_lang::prelude::*;

use crate::constants::TICKET_LEN;

#[event]
pub struct GameInitialized {
    pub authority: Pubkey,
}

#[event]
pub struct PlayerRegistered {
    pub player: Pubkey,
    pub starting_balance: i64,
}

#[event]
pub struct RoundPlayed {
    pub player: Pubkey,
    pub numbers: [u8; TICKET_LEN],
    pub win_numbers: [u8; TICKET_LEN],
    pub match_count: u8,
    pub prize: u64,
    /// Player balance after the round.
    pub money: i64,
    pub round_index: u64,
}

#[event]
pub struct PlayerClosed {
    pub player: Pubkey,
    pub rent_recovered: u64,
}
