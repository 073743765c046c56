use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;

use crate::constants::{MAX_NUMBER, TICKET_LEN};

/// Map a 32-byte entropy buffer to a full draw, one number per ticket slot,
/// each in 1..=MAX_NUMBER.
pub fn numbers_from_seed(seed: &[u8; 32]) -> [u8; TICKET_LEN] {
    let mut numbers = [0u8; TICKET_LEN];
    for (slot, byte) in numbers.iter_mut().zip(seed.iter()) {
        *slot = byte % MAX_NUMBER + 1;
    }
    numbers
}

/// Draw a fresh winning sequence for one play.
///
/// Entropy is the hashed clock (timestamp + slot). Not a VRF: a deployment
/// that needs an unpredictable draw must bring its own oracle.
pub fn draw_winning_numbers() -> Result<[u8; TICKET_LEN]> {
    let clock = Clock::get()?;

    let mut entropy = [0u8; 16];
    entropy[..8].copy_from_slice(&clock.unix_timestamp.to_le_bytes());
    entropy[8..].copy_from_slice(&clock.slot.to_le_bytes());

    Ok(numbers_from_seed(&hash(&entropy).to_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_fills_every_slot_in_range() {
        let seed = hash(b"fixed test seed").to_bytes();
        let numbers = numbers_from_seed(&seed);
        for n in numbers {
            assert!((1..=MAX_NUMBER).contains(&n));
        }
    }

    #[test]
    fn same_seed_same_draw() {
        let seed = hash(b"another seed").to_bytes();
        assert_eq!(numbers_from_seed(&seed), numbers_from_seed(&seed));
    }

    #[test]
    fn draw_length_matches_ticket() {
        let seed = [0u8; 32];
        assert_eq!(numbers_from_seed(&seed).len(), TICKET_LEN);
    }
}
