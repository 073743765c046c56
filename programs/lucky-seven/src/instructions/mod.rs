pub mod close_player;
pub mod initialize;
pub mod play_round;
pub mod register_player;

#[allow(ambiguous_glob_reexports)]
pub use close_player::*;
pub use initialize::*;
pub use play_round::*;
pub use register_player::*;
