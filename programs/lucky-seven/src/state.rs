use anchor_lang::prelude::*;

// ── GameState PDA ── seeds: ["game_state"]
#[account]
pub struct GameState {
    pub authority: Pubkey,
    pub rounds_played: u64,
    pub bump: u8,
}

impl GameState {
    pub const SIZE: usize = 8 + 32 + 8 + 1;
}

// ── PlayerAccount PDA ── seeds: ["player", player pubkey]
// The per-player credit ledger. `balance` is read before scoring and
// written after; it may go negative and is never clamped here.
#[account]
pub struct PlayerAccount {
    pub player: Pubkey,
    pub balance: i64,
    pub rounds_played: u64,
    pub total_won: u64,
    pub bump: u8,
}

impl PlayerAccount {
    pub const SIZE: usize = 8 + 32 + 8 + 8 + 8 + 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_sizes_cover_serialized_len() {
        let game_state = GameState {
            authority: Pubkey::default(),
            rounds_played: 0,
            bump: 0,
        };
        // 8-byte discriminator on top of the Borsh payload
        assert_eq!(game_state.try_to_vec().unwrap().len() + 8, GameState::SIZE);

        let player = PlayerAccount {
            player: Pubkey::default(),
            balance: 0,
            rounds_played: 0,
            total_won: 0,
            bump: 0,
        };
        assert_eq!(player.try_to_vec().unwrap().len() + 8, PlayerAccount::SIZE);
    }
}
