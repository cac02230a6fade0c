//! Headless game session
//!
//! Each turn: winning accusation -> secret passage -> dice and movement ->
//! suggestion on room entry. Eliminated players are skipped.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::ai::{AiPlayer, PlayerView};
use crate::board::{secret_passage_arrival, Board};
use crate::cards::{Card, Room, Suspect, Triplet};
use crate::core::config::{AiConfig, GameConfig};
use crate::core::error::Result;
use crate::core::types::{GridPos, MoveCommand, PlayerId};
use crate::game::deal::{deal_cards, make_solution};
use crate::game::movement::{attempt_step, roll_dice, BlockReason, StepOutcome};
use crate::game::player::Player;
use crate::game::suggestion::{resolve_accusation, resolve_suggestion, AccusationOutcome};

/// Why the game stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEnd {
    Solved { winner: PlayerId },
    AllEliminated,
    TurnLimit,
}

/// Log entry for game events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEvent {
    pub turn: u32,
    pub event_type: GameEventType,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameEventType {
    GameStarted,
    DiceRolled { player: PlayerId, roll: u32 },
    Moved { player: PlayerId, to: GridPos },
    StepRejected { player: PlayerId, reason: BlockReason },
    EnteredRoom { player: PlayerId, room: Room },
    SecretPassage { player: PlayerId, from: Room, to: Room },
    Suggestion { player: PlayerId, suggestion: Triplet },
    Refuted { player: PlayerId, by: PlayerId },
    Unrefuted { player: PlayerId },
    Accusation { player: PlayerId, accusation: Triplet, correct: bool },
    GameEnded { end: GameEnd },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameEventLog {
    pub events: Vec<GameEvent>,
}

impl GameEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event_type: GameEventType, description: String, turn: u32) {
        self.events.push(GameEvent {
            turn,
            event_type,
            description,
        });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }
}

/// End-of-game report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub seed: u64,
    pub end: GameEnd,
    pub winner: Option<String>,
    pub turns: u32,
    pub solution: Triplet,
    pub eliminated: Vec<String>,
}

pub struct GameSession {
    board: Board,
    players: Vec<Player>,
    solution: Triplet,
    config: GameConfig,
    rng: ChaCha8Rng,
    turn: u32,
    current: usize,
    log: GameEventLog,
    end: Option<GameEnd>,
}

impl GameSession {
    /// Assemble a session from prepared players and a fixed envelope
    pub fn new(board: Board, players: Vec<Player>, solution: Triplet, config: GameConfig) -> Result<Self> {
        config.validate()?;
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut log = GameEventLog::new();
        log.push(
            GameEventType::GameStarted,
            format!("{} players", players.len()),
            0,
        );
        Ok(Self {
            board,
            players,
            solution,
            config,
            rng,
            turn: 0,
            current: 0,
            log,
            end: None,
        })
    }

    /// Six AI players in shuffled seat order, with a random envelope and deal
    pub fn setup(board: Board, ai_config: &AiConfig, config: GameConfig) -> Result<Self> {
        ai_config.validate()?;
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

        let mut suspects = Suspect::ALL.to_vec();
        suspects.shuffle(&mut rng);
        let mut players: Vec<Player> = suspects
            .into_iter()
            .enumerate()
            .map(|(i, s)| Player::new(PlayerId(i as u8), s))
            .collect();

        let solution = make_solution(&mut rng);
        deal_cards(&mut players, &solution, &mut rng);

        for p in players.iter_mut() {
            let ai = AiPlayer::with_seed(p.id, &p.hand, ai_config.clone(), rng.gen());
            p.controller = Some(Box::new(ai));
        }

        tracing::info!(seed = config.seed, ai = %ai_config.name, "game set up");
        let mut session = Self::new(board, players, solution, config)?;
        session.rng = rng;
        Ok(session)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    pub fn solution(&self) -> Triplet {
        self.solution
    }

    pub fn log(&self) -> &GameEventLog {
        &self.log
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn end(&self) -> Option<GameEnd> {
        self.end
    }

    pub fn is_finished(&self) -> bool {
        self.end.is_some()
    }

    /// Board text with every token drawn on top
    pub fn render(&self) -> String {
        let tokens: Vec<_> = self.players.iter().map(|p| (p.position, p.token)).collect();
        self.board.render_with_tokens(&tokens)
    }

    /// Play turns until the game ends
    pub fn run(&mut self) -> GameSummary {
        while !self.is_finished() {
            self.play_turn();
        }
        self.summary()
    }

    pub fn summary(&self) -> GameSummary {
        let end = self.end.unwrap_or(GameEnd::TurnLimit);
        let winner = match end {
            GameEnd::Solved { winner } => self.player_name(winner),
            _ => None,
        };
        GameSummary {
            seed: self.config.seed,
            end,
            winner,
            turns: self.turn,
            solution: self.solution,
            eliminated: self
                .players
                .iter()
                .filter(|p| p.eliminated)
                .map(|p| p.name.clone())
                .collect(),
        }
    }

    fn player_name(&self, id: PlayerId) -> Option<String> {
        self.players.iter().find(|p| p.id == id).map(|p| p.name.clone())
    }

    /// Play one turn for the next active player
    pub fn play_turn(&mut self) -> Option<GameEnd> {
        if self.end.is_some() {
            return self.end;
        }
        if self.turn >= self.config.max_turns {
            return self.finish(GameEnd::TurnLimit);
        }
        let Some(idx) = self.next_active_seat() else {
            return self.finish(GameEnd::AllEliminated);
        };

        self.turn += 1;
        self.current = (idx + 1) % self.players.len();
        tracing::debug!(turn = self.turn, player = %self.players[idx].name, "turn start");

        if let Some(end) = self.try_winning_accusation(idx) {
            return Some(end);
        }

        if !self.players[idx].eliminated {
            if self.try_secret_passage(idx) {
                self.suggest(idx);
            } else if let Some(room) = self.move_phase(idx) {
                tracing::debug!(player = %self.players[idx].name, %room, "movement ended in room");
                self.suggest(idx);
            }
        }

        if self.end.is_none() && self.players.iter().all(|p| p.eliminated) {
            return self.finish(GameEnd::AllEliminated);
        }
        self.end
    }

    fn next_active_seat(&self) -> Option<usize> {
        let n = self.players.len();
        (0..n)
            .map(|offset| (self.current + offset) % n)
            .find(|&i| !self.players[i].eliminated)
    }

    fn finish(&mut self, end: GameEnd) -> Option<GameEnd> {
        let description = match end {
            GameEnd::Solved { winner } => format!(
                "{} solved it: {}",
                self.player_name(winner).unwrap_or_default(),
                self.solution
            ),
            GameEnd::AllEliminated => "every player is eliminated".to_string(),
            GameEnd::TurnLimit => format!("turn limit {} reached", self.config.max_turns),
        };
        tracing::info!(turn = self.turn, "{}", description);
        self.log.push(GameEventType::GameEnded { end }, description, self.turn);
        self.end = Some(end);
        self.end
    }

    fn try_winning_accusation(&mut self, idx: usize) -> Option<GameEnd> {
        let player = &mut self.players[idx];
        let accusation = player.controller.as_ref()?.check_for_winning_accusation()?;
        let outcome = resolve_accusation(player, accusation, &self.solution);
        let id = player.id;
        self.log_accusation(id, accusation, outcome);
        match outcome {
            AccusationOutcome::Correct => self.finish(GameEnd::Solved { winner: id }),
            AccusationOutcome::Wrong => None,
        }
    }

    /// Offer the passage out of the current room; true if taken
    fn try_secret_passage(&mut self, idx: usize) -> bool {
        let player = &mut self.players[idx];
        let Some(current) = player.in_room else {
            return false;
        };
        let Some(dest) = current.secret_passage() else {
            return false;
        };
        let Some(arrival) = secret_passage_arrival(dest) else {
            return false;
        };
        let Some(controller) = player.controller.as_mut() else {
            return false;
        };
        if !controller.decide_use_secret_passage(current, dest) {
            return false;
        }

        player.move_to(arrival);
        player.enter_room(dest);
        let id = player.id;
        let description = format!("{} takes the passage from {} to {}", player.name, current, dest);
        self.log.push(
            GameEventType::SecretPassage {
                player: id,
                from: current,
                to: dest,
            },
            description,
            self.turn,
        );
        true
    }

    /// Roll and move; returns the room entered, if any
    fn move_phase(&mut self, idx: usize) -> Option<Room> {
        let roll = roll_dice(&mut self.rng, self.config.dice_sides);
        let id = self.players[idx].id;
        self.log.push(
            GameEventType::DiceRolled { player: id, roll },
            format!("{} rolled {}", self.players[idx].name, roll),
            self.turn,
        );

        let mut steps_remaining = roll;
        let mut rejected = 0;
        while steps_remaining > 0 {
            let views: Vec<PlayerView> = self.players.iter().map(Player::view).collect();
            let board = &self.board;
            let command = match self.players[idx].controller.as_mut() {
                Some(controller) => controller.choose_move_command(board, &views, steps_remaining),
                None => MoveCommand::Stop,
            };
            let MoveCommand::Step(dir) = command else {
                break;
            };

            match attempt_step(&self.board, &mut self.players, idx, dir) {
                StepOutcome::Blocked(reason) => {
                    rejected += 1;
                    self.log.push(
                        GameEventType::StepRejected { player: id, reason },
                        format!("{:?} blocked: {:?}", dir, reason),
                        self.turn,
                    );
                    if rejected >= self.config.max_rejected_steps {
                        tracing::debug!(player = ?id, "too many rejected steps, ending movement");
                        break;
                    }
                }
                StepOutcome::Moved => {
                    rejected = 0;
                    steps_remaining -= 1;
                    let to = self.players[idx].position;
                    self.log.push(
                        GameEventType::Moved { player: id, to },
                        format!("moved {:?} to {}", dir, to),
                        self.turn,
                    );
                }
                StepOutcome::EnteredRoom(room) => {
                    self.log.push(
                        GameEventType::EnteredRoom { player: id, room },
                        format!("{} entered the {}", self.players[idx].name, room),
                        self.turn,
                    );
                    return Some(room);
                }
            }
        }
        None
    }

    fn suggest(&mut self, idx: usize) {
        let player = &mut self.players[idx];
        let Some(room) = player.in_room else {
            return;
        };
        let Some(controller) = player.controller.as_mut() else {
            return;
        };
        let picked = controller.choose_suggestion(room);
        // The room is always the one the suggester stands in
        let suggestion = Triplet::new(picked.suspect, picked.weapon, room);
        let id = player.id;
        let name = player.name.clone();

        self.log.push(
            GameEventType::Suggestion { player: id, suggestion },
            format!("{} suggests {}", name, suggestion),
            self.turn,
        );

        let outcome = resolve_suggestion(&mut self.players, idx, suggestion, &self.solution);
        match outcome.refuted_by {
            Some((by, card)) => self.log_refutation(id, by, card),
            None => self.log.push(
                GameEventType::Unrefuted { player: id },
                format!("nobody refutes {}", name),
                self.turn,
            ),
        }

        if let Some(result) = outcome.accusation {
            self.log_accusation(id, suggestion, result);
            if result == AccusationOutcome::Correct {
                self.finish(GameEnd::Solved { winner: id });
            }
        }
    }

    fn log_refutation(&mut self, player: PlayerId, by: PlayerId, card: Card) {
        let description = format!(
            "{} shows {} to {}",
            self.player_name(by).unwrap_or_default(),
            card,
            self.player_name(player).unwrap_or_default()
        );
        self.log
            .push(GameEventType::Refuted { player, by }, description, self.turn);
    }

    fn log_accusation(&mut self, player: PlayerId, accusation: Triplet, outcome: AccusationOutcome) {
        let correct = outcome == AccusationOutcome::Correct;
        let description = format!(
            "{} accuses {}: {}",
            self.player_name(player).unwrap_or_default(),
            accusation,
            if correct { "correct" } else { "wrong, eliminated" }
        );
        self.log.push(
            GameEventType::Accusation {
                player,
                accusation,
                correct,
            },
            description,
            self.turn,
        );
    }
}
