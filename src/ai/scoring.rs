//! Room desirability scoring
//!
//! Two strategies:
//! - Flat: any candidate room is worth the same, so the agent keeps going back
//!   to rooms nobody has refuted yet.
//! - Graded: candidate rooms gain value as the candidate set shrinks and lose
//!   value with every visit, every suggestion made there, and for being the
//!   room we just left.
//!
//! Eliminated rooms always get `eliminated_score` so the agent only goes there
//! when blocked elsewhere.

use crate::ai::notebook::Notebook;
use crate::cards::Room;
use crate::core::config::{ScoringConfig, ScoringStrategy};

pub fn score_room(notebook: &Notebook, room: Room, config: &ScoringConfig) -> f32 {
    if !notebook.is_possible_room(room) {
        return config.eliminated_score;
    }

    match config.strategy {
        ScoringStrategy::Flat => config.candidate_score,
        ScoringStrategy::Graded => graded_score(notebook, room, config),
    }
}

fn graded_score(notebook: &Notebook, room: Room, config: &ScoringConfig) -> f32 {
    // Non-empty: `room` itself is a candidate
    let candidates = notebook.possible_rooms().len() as f32;
    let certainty = config.certainty_weight / candidates;

    let visits = notebook.visit_count(room) as f32 * config.visit_penalty;
    let suggestions = notebook.suggestion_count(room) as f32 * config.suggestion_penalty;
    let recency = if notebook.last_room() == Some(room) {
        config.last_room_penalty
    } else {
        0.0
    };

    // Never drop a candidate below an eliminated room
    (config.candidate_score + certainty - visits - suggestions - recency)
        .max(config.eliminated_score + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn flat() -> ScoringConfig {
        ScoringConfig {
            strategy: ScoringStrategy::Flat,
            ..ScoringConfig::default()
        }
    }

    #[test]
    fn test_eliminated_room_scores_low() {
        let mut nb = Notebook::new();
        nb.note_seen_card(Card::Room(Room::Kitchen));
        assert_eq!(score_room(&nb, Room::Kitchen, &flat()), -100.0);
        assert_eq!(score_room(&nb, Room::Kitchen, &ScoringConfig::default()), -100.0);
    }

    #[test]
    fn test_flat_ignores_history() {
        let mut nb = Notebook::new();
        nb.note_room_visit(Room::Hall);
        nb.note_room_visit(Room::Hall);
        nb.note_room_suggestion(Room::Hall);
        assert_eq!(score_room(&nb, Room::Hall, &flat()), 50.0);
        assert_eq!(score_room(&nb, Room::Study, &flat()), 50.0);
    }

    #[test]
    fn test_graded_penalizes_visits_and_suggestions() {
        let config = ScoringConfig::default();
        let mut nb = Notebook::new();
        let fresh = score_room(&nb, Room::Lounge, &config);

        nb.note_room_visit(Room::Lounge);
        nb.note_room_visit(Room::Study);
        let visited = score_room(&nb, Room::Lounge, &config);
        assert!(visited < fresh);

        nb.note_room_suggestion(Room::Lounge);
        let suggested = score_room(&nb, Room::Lounge, &config);
        assert!(suggested < visited);
    }

    #[test]
    fn test_graded_penalizes_last_room() {
        let config = ScoringConfig::default();
        let mut nb = Notebook::new();
        nb.note_room_visit(Room::Ballroom);
        nb.note_room_visit(Room::Library);
        // Same visit counts; only recency differs
        let last = score_room(&nb, Room::Library, &config);
        let earlier = score_room(&nb, Room::Ballroom, &config);
        assert!((earlier - last - config.last_room_penalty).abs() < 1e-4);
    }

    #[test]
    fn test_graded_rewards_shrinking_candidates() {
        let config = ScoringConfig::default();
        let mut nb = Notebook::new();
        let wide = score_room(&nb, Room::Hall, &config);
        for room in [Room::Kitchen, Room::Ballroom, Room::Study, Room::Lounge] {
            nb.note_seen_card(Card::Room(room));
        }
        let narrow = score_room(&nb, Room::Hall, &config);
        assert!(narrow > wide);
    }

    #[test]
    fn test_graded_candidate_never_below_eliminated() {
        let config = ScoringConfig::default();
        let mut nb = Notebook::new();
        for _ in 0..100 {
            nb.note_room_visit(Room::Hall);
            nb.note_room_suggestion(Room::Hall);
        }
        assert!(score_room(&nb, Room::Hall, &config) > config.eliminated_score);
    }
}
