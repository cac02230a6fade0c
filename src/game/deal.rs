//! Envelope selection and dealing

use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::{full_deck, Room, Suspect, Triplet, Weapon};
use crate::game::player::Player;

/// Pick the hidden suspect, weapon and room uniformly
pub fn make_solution<R: Rng + ?Sized>(rng: &mut R) -> Triplet {
    let suspect = Suspect::ALL[rng.gen_range(0..Suspect::ALL.len())];
    let weapon = Weapon::ALL[rng.gen_range(0..Weapon::ALL.len())];
    let room = Room::ALL[rng.gen_range(0..Room::ALL.len())];
    Triplet::new(suspect, weapon, room)
}

/// Shuffle everything but the envelope and deal it round-robin
///
/// Existing hands are cleared first. With no players nothing is dealt.
pub fn deal_cards<R: Rng + ?Sized>(players: &mut [Player], solution: &Triplet, rng: &mut R) {
    for p in players.iter_mut() {
        p.hand.clear();
    }
    if players.is_empty() {
        return;
    }

    let mut deck: Vec<_> = full_deck()
        .into_iter()
        .filter(|c| !solution.contains(*c))
        .collect();
    deck.shuffle(rng);

    let n = players.len();
    for (i, card) in deck.into_iter().enumerate() {
        players[i % n].hand.push(card);
    }
}
