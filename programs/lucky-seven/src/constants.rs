/// Numbers per ticket; the winning draw has the same length.
pub const TICKET_LEN: usize = 7;

/// Cost of one play, in ledger credits.
pub const TICKET_COST: i64 = 2;

/// Playable numbers run 1..=MAX_NUMBER.
pub const MAX_NUMBER: u8 = 36;

/// Credits granted to a freshly registered player.
pub const STARTING_BALANCE: i64 = 100;
