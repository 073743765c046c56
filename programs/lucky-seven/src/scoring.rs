use anchor_lang::prelude::*;

use crate::constants::{MAX_NUMBER, TICKET_COST, TICKET_LEN};
use crate::errors::LuckySevenError;

/// Outcome of scoring one played ticket against one winning draw.
///
/// Nothing here is persisted: ownership transfers to the caller, which
/// writes `balance_after` back into the player account.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundResult {
    pub match_count: u8,
    pub prize: u64,
    pub balance_after: i64,
}

/// Prize for a given number of positional matches. Total over all inputs;
/// anything below two matches pays nothing.
pub fn prize_for_matches(match_count: u8) -> u64 {
    match match_count {
        2 => 5,
        3 => 20,
        4 => 300,
        5 => 1_800,
        6 => 200_000,
        7 => 5_000_000,
        _ => 0,
    }
}

/// Domain check for played numbers: every value must sit in 1..=MAX_NUMBER.
/// Shape (length) is [`score`]'s concern, not this one's.
pub fn validate_numbers(numbers: &[u8]) -> Result<()> {
    for &n in numbers {
        require!(
            (1..=MAX_NUMBER).contains(&n),
            LuckySevenError::NumberOutOfRange
        );
    }
    Ok(())
}

/// Score one round: count positional matches, look up the prize, charge the
/// ticket. Pure — reads nothing but its arguments and mutates nothing.
///
/// Numbers match by position, not by value: a ticket holding every winning
/// number in the wrong order scores zero. Both sequences must hold exactly
/// [`TICKET_LEN`] numbers; a short or long ticket is a contract violation,
/// never an implicit run of misses.
pub fn score(ticket: &[u8], winning: &[u8], prior_balance: i64) -> Result<RoundResult> {
    require!(
        ticket.len() == TICKET_LEN,
        LuckySevenError::InvalidTicketLength
    );
    require!(
        winning.len() == TICKET_LEN,
        LuckySevenError::InvalidTicketLength
    );

    let mut match_count: u8 = 0;
    for i in 0..TICKET_LEN {
        if ticket[i] == winning[i] {
            match_count += 1;
        }
    }

    let prize = prize_for_matches(match_count);

    // May go negative; clamping, if any, is the caller's policy.
    let balance_after = prior_balance
        .checked_add(prize as i64)
        .ok_or(LuckySevenError::MathOverflow)?
        .checked_sub(TICKET_COST)
        .ok_or(LuckySevenError::MathOverflow)?;

    Ok(RoundResult {
        match_count,
        prize,
        balance_after,
    })
}
