use anchor_lang::prelude::*;

#[error_code]
pub enum LuckySevenError {
    #[msg("Ticket must contain exactly 7 numbers")]
    InvalidTicketLength,
    #[msg("Ticket number outside the playable range")]
    NumberOutOfRange,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Unauthorized: caller does not own this account")]
    Unauthorized,
}
