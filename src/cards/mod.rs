//! Card domain - suspects, weapons, rooms and the envelope triplet

pub mod card;

pub use card::{full_deck, Card, CardCategory, Room, Suspect, Triplet, Weapon};
