//! Table-side game rules driving the AI controllers
//!
//! Players, dealing, step legality, suggestion resolution and the headless
//! turn loop.

pub mod deal;
pub mod movement;
pub mod player;
pub mod session;
pub mod suggestion;

pub use deal::{deal_cards, make_solution};
pub use movement::{attempt_step, is_occupied, roll_dice, BlockReason, StepOutcome};
pub use player::Player;
pub use session::{GameEnd, GameEvent, GameEventLog, GameEventType, GameSession, GameSummary};
pub use suggestion::{resolve_accusation, resolve_suggestion, AccusationOutcome, SuggestionOutcome};
