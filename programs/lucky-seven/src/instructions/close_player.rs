use anchor_lang::prelude::*;
use crate::errors::LuckySevenError;
use crate::events::PlayerClosed;
use crate::state::*;

#[derive(Accounts)]
pub struct ClosePlayer<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        mut,
        close = player,
        seeds = [b"player", player_account.player.as_ref()],
        bump = player_account.bump,
        constraint = player_account.player == player.key() @ LuckySevenError::Unauthorized,
    )]
    pub player_account: Account<'info, PlayerAccount>,
}

pub fn handler(ctx: Context<ClosePlayer>) -> Result<()> {
    let rent = ctx.accounts.player_account.to_account_info().lamports();

    emit!(PlayerClosed {
        player: ctx.accounts.player_account.player,
        rent_recovered: rent,
    });

    Ok(())
}
