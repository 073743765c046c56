use anchor_lang::prelude::*;

use crate::constants::TICKET_LEN;
use crate::errors::LuckySevenError;
use crate::events::RoundPlayed;
use crate::scoring;
use crate::state::*;
use crate::utils::draw_winning_numbers;

#[derive(Accounts)]
pub struct PlayRound<'info> {
    pub player: Signer<'info>,

    #[account(
        mut,
        seeds = [b"player", player.key().as_ref()],
        bump = player_account.bump,
    )]
    pub player_account: Account<'info, PlayerAccount>,

    #[account(
        mut,
        seeds = [b"game_state"],
        bump = game_state.bump,
    )]
    pub game_state: Account<'info, GameState>,
}

pub fn handler(ctx: Context<PlayRound>, numbers: Vec<u8>) -> Result<()> {
    scoring::validate_numbers(&numbers)?;

    let winning = draw_winning_numbers()?;

    // Read the prior balance, score, write the new balance back. The scorer
    // is pure; this handler owns all persistence. A wrong-length ticket
    // fails here before any state is touched.
    let player_account = &mut ctx.accounts.player_account;
    let result = scoring::score(&numbers, &winning, player_account.balance)?;

    player_account.balance = result.balance_after;
    player_account.rounds_played = player_account
        .rounds_played
        .checked_add(1)
        .ok_or(LuckySevenError::MathOverflow)?;
    player_account.total_won = player_account
        .total_won
        .checked_add(result.prize)
        .ok_or(LuckySevenError::MathOverflow)?;

    let game_state = &mut ctx.accounts.game_state;
    game_state.rounds_played = game_state
        .rounds_played
        .checked_add(1)
        .ok_or(LuckySevenError::MathOverflow)?;

    // Length was checked by score above
    let mut played = [0u8; TICKET_LEN];
    played.copy_from_slice(&numbers);

    emit!(RoundPlayed {
        player: ctx.accounts.player.key(),
        numbers: played,
        win_numbers: winning,
        match_count: result.match_count,
        prize: result.prize,
        money: result.balance_after,
        round_index: game_state.rounds_played,
    });

    Ok(())
}
