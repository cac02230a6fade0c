//! Belief notebook - candidate sets under elimination logic
//!
//! Tracks which suspects, weapons and rooms can still be in the envelope,
//! which cards the owner has direct evidence for, and per-room visit and
//! suggestion counters used for movement scoring.
//!
//! Candidate sets only ever shrink. Once every category is down to a single
//! card the notebook has converged and stays converged.

use ahash::AHashMap;
use rand::seq::IteratorRandom;
use rand::Rng;
use std::collections::BTreeSet;
use std::fmt::Write as _;

use crate::ai::scoring;
use crate::cards::{Card, Room, Suspect, Triplet, Weapon};
use crate::core::config::ScoringConfig;

/// Knowledge state of a single AI player
///
/// Ordered sets keep candidate sampling reproducible under a seeded RNG.
#[derive(Debug, Clone)]
pub struct Notebook {
    possible_suspects: BTreeSet<Suspect>,
    possible_weapons: BTreeSet<Weapon>,
    possible_rooms: BTreeSet<Room>,
    seen_cards: BTreeSet<Card>,
    room_visits: AHashMap<Room, u32>,
    room_suggestions: AHashMap<Room, u32>,
    last_room: Option<Room>,
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new()
    }
}

impl Notebook {
    /// Fresh notebook: every card is still a candidate
    pub fn new() -> Self {
        Self {
            possible_suspects: Suspect::ALL.into_iter().collect(),
            possible_weapons: Weapon::ALL.into_iter().collect(),
            possible_rooms: Room::ALL.into_iter().collect(),
            seen_cards: BTreeSet::new(),
            room_visits: Room::ALL.into_iter().map(|r| (r, 0)).collect(),
            room_suggestions: Room::ALL.into_iter().map(|r| (r, 0)).collect(),
            last_room: None,
        }
    }

    // === Card knowledge ===

    /// Cards in our own hand can't be in the envelope
    pub fn note_own_hand<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        for card in cards {
            self.note_seen_card(card);
        }
    }

    /// Record direct evidence for `card` and drop it from its candidate set
    ///
    /// Idempotent. Returns true if the card was new.
    pub fn note_seen_card(&mut self, card: Card) -> bool {
        if !self.seen_cards.insert(card) {
            return false;
        }

        match card {
            Card::Suspect(s) => {
                self.possible_suspects.remove(&s);
            }
            Card::Weapon(w) => {
                self.possible_weapons.remove(&w);
            }
            Card::Room(r) => {
                self.possible_rooms.remove(&r);
            }
        }
        true
    }

    /// Nobody could refute `triplet`
    ///
    /// Each element we have no card evidence for must be in the envelope, so
    /// its category collapses to that element. Elements we have seen carry no
    /// information and leave their category alone. An element that an earlier
    /// inference already excluded is ignored as well, which keeps the sets
    /// from ever growing back.
    pub fn process_unrefuted_suggestion(&mut self, triplet: Triplet) {
        if !self.is_seen(Card::Suspect(triplet.suspect)) {
            collapse(&mut self.possible_suspects, triplet.suspect);
        }
        if !self.is_seen(Card::Weapon(triplet.weapon)) {
            collapse(&mut self.possible_weapons, triplet.weapon);
        }
        if !self.is_seen(Card::Room(triplet.room)) {
            collapse(&mut self.possible_rooms, triplet.room);
        }
    }

    pub fn is_seen(&self, card: Card) -> bool {
        self.seen_cards.contains(&card)
    }

    pub fn seen_cards(&self) -> &BTreeSet<Card> {
        &self.seen_cards
    }

    pub fn possible_suspects(&self) -> &BTreeSet<Suspect> {
        &self.possible_suspects
    }

    pub fn possible_weapons(&self) -> &BTreeSet<Weapon> {
        &self.possible_weapons
    }

    pub fn possible_rooms(&self) -> &BTreeSet<Room> {
        &self.possible_rooms
    }

    pub fn is_possible_room(&self, room: Room) -> bool {
        self.possible_rooms.contains(&room)
    }

    // === Room tracking ===

    /// Record that we just entered `room`
    pub fn note_room_visit(&mut self, room: Room) {
        *self.room_visits.entry(room).or_insert(0) += 1;
        self.last_room = Some(room);
    }

    /// Record that we made a suggestion in `room`
    pub fn note_room_suggestion(&mut self, room: Room) {
        *self.room_suggestions.entry(room).or_insert(0) += 1;
    }

    pub fn visit_count(&self, room: Room) -> u32 {
        self.room_visits.get(&room).copied().unwrap_or(0)
    }

    pub fn suggestion_count(&self, room: Room) -> u32 {
        self.room_suggestions.get(&room).copied().unwrap_or(0)
    }

    pub fn last_room(&self) -> Option<Room> {
        self.last_room
    }

    // === Scoring ===

    /// Desirability of `room` as a movement or passage target
    pub fn score_room(&self, room: Room, config: &ScoringConfig) -> f32 {
        scoring::score_room(self, room, config)
    }

    /// Highest score over every room
    pub fn best_room_score(&self, config: &ScoringConfig) -> f32 {
        Room::ALL
            .into_iter()
            .map(|room| self.score_room(room, config))
            .fold(f32::NEG_INFINITY, f32::max)
    }

    // === Candidate choice ===

    /// Uniform pick among candidate suspects (any suspect if none remain)
    pub fn choose_suspect_candidate<R: Rng + ?Sized>(&self, rng: &mut R) -> Suspect {
        pick(&self.possible_suspects, &Suspect::ALL, rng)
    }

    /// Uniform pick among candidate weapons (any weapon if none remain)
    pub fn choose_weapon_candidate<R: Rng + ?Sized>(&self, rng: &mut R) -> Weapon {
        pick(&self.possible_weapons, &Weapon::ALL, rng)
    }

    /// The envelope, if every category is down to exactly one candidate
    pub fn current_singleton_hypothesis(&self) -> Option<Triplet> {
        Some(Triplet::new(
            single(&self.possible_suspects)?,
            single(&self.possible_weapons)?,
            single(&self.possible_rooms)?,
        ))
    }

    /// Human-readable dump for debugging
    pub fn summary(&self) -> String {
        let mut out = String::from("=== NOTEBOOK SUMMARY ===\n");
        let _ = writeln!(out, "Possible suspects: {}", join(&self.possible_suspects));
        let _ = writeln!(out, "Possible weapons : {}", join(&self.possible_weapons));
        let _ = writeln!(out, "Possible rooms   : {}", join(&self.possible_rooms));
        let _ = writeln!(out, "Seen cards       : {}", join(&self.seen_cards));
        out.push_str("Room visits      :\n");
        for room in Room::ALL {
            let _ = writeln!(
                out,
                "  {}: visits={}, suggestions={}",
                room,
                self.visit_count(room),
                self.suggestion_count(room)
            );
        }
        let last = self.last_room.map(|r| r.name()).unwrap_or("-");
        let _ = writeln!(out, "Last room        : {}", last);
        out
    }
}

fn collapse<T: Ord + Copy>(set: &mut BTreeSet<T>, element: T) {
    if set.contains(&element) {
        set.retain(|x| *x == element);
    }
}

fn single<T: Copy>(set: &BTreeSet<T>) -> Option<T> {
    if set.len() == 1 {
        set.iter().next().copied()
    } else {
        None
    }
}

fn pick<T: Copy, R: Rng + ?Sized>(candidates: &BTreeSet<T>, domain: &[T], rng: &mut R) -> T {
    if let Some(choice) = candidates.iter().copied().choose(rng) {
        return choice;
    }
    let idx = rng.gen_range(0..domain.len());
    domain[idx]
}

fn join<T: std::fmt::Display>(set: &BTreeSet<T>) -> String {
    set.iter().map(|x| x.to_string()).collect::<Vec<_>>().join(", ")
}
