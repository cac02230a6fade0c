//! AI player - notebook-driven implementation of `AgentController`
//!
//! Combines the belief notebook, the move-decision engine and the
//! suggestion / passage / accusation policy behind one seeded RNG.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::ai::context::{MoveContext, PlayerView};
use crate::ai::movement::choose_move;
use crate::ai::notebook::Notebook;
use crate::ai::AgentController;
use crate::board::Board;
use crate::cards::{Card, Room, Suspect, Triplet, Weapon};
use crate::core::config::AiConfig;
use crate::core::types::{MoveCommand, PlayerId};

#[derive(Debug)]
pub struct AiPlayer {
    id: PlayerId,
    notebook: Notebook,
    config: AiConfig,
    rng: StdRng,
}

impl AiPlayer {
    /// Create an AI player with default seed
    pub fn new(id: PlayerId, hand: &[Card], config: AiConfig) -> Self {
        Self::with_seed(id, hand, config, 42)
    }

    /// Create with specific RNG seed for deterministic behavior
    pub fn with_seed(id: PlayerId, hand: &[Card], config: AiConfig, seed: u64) -> Self {
        Self::with_notebook(id, Notebook::new(), hand, config, seed)
    }

    /// Start from an existing notebook; `hand` is noted on top of it
    pub fn with_notebook(
        id: PlayerId,
        mut notebook: Notebook,
        hand: &[Card],
        config: AiConfig,
        seed: u64,
    ) -> Self {
        notebook.note_own_hand(hand.iter().copied());
        Self {
            id,
            notebook,
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    pub fn notebook_mut(&mut self) -> &mut Notebook {
        &mut self.notebook
    }

    /// Suggestion restricted to the given suspect / weapon domain
    ///
    /// A notebook pick outside the domain is replaced by a uniform pick from it.
    pub fn choose_suggestion_from(
        &mut self,
        room: Room,
        suspects: &[Suspect],
        weapons: &[Weapon],
    ) -> Triplet {
        let mut suspect = self.notebook.choose_suspect_candidate(&mut self.rng);
        if !suspects.contains(&suspect) {
            if let Some(s) = suspects.choose(&mut self.rng) {
                suspect = *s;
            }
        }

        let mut weapon = self.notebook.choose_weapon_candidate(&mut self.rng);
        if !weapons.contains(&weapon) {
            if let Some(w) = weapons.choose(&mut self.rng) {
                weapon = *w;
            }
        }

        self.notebook.note_room_suggestion(room);
        Triplet::new(suspect, weapon, room)
    }
}

impl AgentController for AiPlayer {
    fn choose_move_command(
        &mut self,
        board: &Board,
        players: &[PlayerView],
        steps_remaining: u32,
    ) -> MoveCommand {
        let Some(ctx) = MoveContext::new(board, players, self.id, steps_remaining) else {
            tracing::warn!(player = ?self.id, "not found among players, stopping");
            return MoveCommand::Stop;
        };
        choose_move(&ctx, &self.notebook, &self.config, &mut self.rng)
    }

    fn choose_suggestion(&mut self, room: Room) -> Triplet {
        self.choose_suggestion_from(room, &Suspect::ALL, &Weapon::ALL)
    }

    fn decide_use_secret_passage(&mut self, current: Room, dest: Room) -> bool {
        // Never take a passage into a room we know is innocent
        if !self.notebook.is_possible_room(dest) {
            return false;
        }
        if self.notebook.last_room() == Some(dest) {
            return false;
        }

        let scoring = &self.config.scoring;
        let score_current = self.notebook.score_room(current, scoring);
        let score_dest = self.notebook.score_room(dest, scoring);
        if score_dest <= score_current {
            return false;
        }

        let best = self.notebook.best_room_score(scoring);
        if score_dest < best - self.config.policy.passage_margin {
            return false;
        }

        true
    }

    fn decide_accusation_from_suggestion(&mut self, triplet: Triplet) -> bool {
        self.notebook.process_unrefuted_suggestion(triplet);
        self.notebook.current_singleton_hypothesis() == Some(triplet)
    }

    fn check_for_winning_accusation(&self) -> Option<Triplet> {
        self.notebook.current_singleton_hypothesis()
    }

    fn note_entered_room(&mut self, room: Room) {
        self.notebook.note_room_visit(room);
    }

    fn note_seen_card(&mut self, card: Card) {
        if self.notebook.note_seen_card(card) {
            tracing::debug!(player = ?self.id, %card, "eliminated");
        }
    }

    fn notebook(&self) -> Option<&Notebook> {
        Some(&self.notebook)
    }
}
