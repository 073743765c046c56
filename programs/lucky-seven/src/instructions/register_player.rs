use anchor_lang::prelude::*;
use crate::constants::STARTING_BALANCE;
use crate::events::PlayerRegistered;
use crate::state::*;

#[derive(Accounts)]
pub struct RegisterPlayer<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        init,
        payer = player,
        space = PlayerAccount::SIZE,
        seeds = [b"player", player.key().as_ref()],
        bump,
    )]
    pub player_account: Account<'info, PlayerAccount>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RegisterPlayer>) -> Result<()> {
    let player_account = &mut ctx.accounts.player_account;
    player_account.player = ctx.accounts.player.key();
    player_account.balance = STARTING_BALANCE;
    player_account.rounds_played = 0;
    player_account.total_won = 0;
    player_account.bump = ctx.bumps.player_account;

    emit!(PlayerRegistered {
        player: player_account.player,
        starting_balance: STARTING_BALANCE,
    });

    Ok(())
}
