//! Suggestion, refutation and accusation resolution

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Triplet};
use crate::core::types::PlayerId;
use crate::game::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccusationOutcome {
    Correct,
    Wrong,
}

/// Everything that happened while resolving one suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionOutcome {
    pub suggestion: Triplet,
    pub summoned: Option<PlayerId>,
    /// Refuter and the card they showed to the suggester
    pub refuted_by: Option<(PlayerId, Card)>,
    /// Set when the suggestion went unrefuted and the suggester accused
    pub accusation: Option<AccusationOutcome>,
}

impl SuggestionOutcome {
    pub fn is_win(&self) -> bool {
        self.accusation == Some(AccusationOutcome::Correct)
    }
}

/// Seats after `start`, wrapping around, excluding `start` itself
fn turn_order(start: usize, n: usize) -> impl Iterator<Item = usize> {
    (1..n).map(move |offset| (start + offset) % n)
}

/// Resolve `suggestion` made by `players[suggester]`
///
/// The suggested suspect's token is pulled into the suggester's tile, the
/// other players are asked to refute in turn order, and the first refuter's
/// card is revealed to the suggester's controller. An unrefuted suggestion
/// may be turned into an accusation.
pub fn resolve_suggestion(
    players: &mut [Player],
    suggester: usize,
    suggestion: Triplet,
    solution: &Triplet,
) -> SuggestionOutcome {
    let mut outcome = SuggestionOutcome {
        suggestion,
        summoned: None,
        refuted_by: None,
        accusation: None,
    };
    let Some(origin) = players.get(suggester).map(|p| p.position) else {
        return outcome;
    };
    let room = suggestion.room;

    tracing::info!(player = %players[suggester].name, %suggestion, "suggestion");

    // Summon the suggested suspect
    for (i, p) in players.iter_mut().enumerate() {
        if i != suggester && p.suspect == suggestion.suspect && p.in_room != Some(room) {
            p.move_to(origin);
            p.enter_room(room);
            outcome.summoned = Some(p.id);
            tracing::debug!(player = %p.name, %room, "summoned");
        }
    }

    for j in turn_order(suggester, players.len()) {
        let refuter = &mut players[j];
        let matches = refuter.matching_cards(&suggestion);
        let Some(&first) = matches.first() else {
            continue;
        };

        let shown = refuter
            .controller
            .as_mut()
            .and_then(|c| c.choose_card_to_show(&matches))
            .filter(|c| matches.contains(c))
            .unwrap_or(first);
        let refuter_id = refuter.id;
        tracing::debug!(refuter = %refuter.name, "refuted");

        if let Some(controller) = players[suggester].controller.as_mut() {
            controller.note_seen_card(shown);
        }
        outcome.refuted_by = Some((refuter_id, shown));
        return outcome;
    }

    tracing::info!(player = %players[suggester].name, "nobody could refute");

    let player = &mut players[suggester];
    let accuse = player
        .controller
        .as_mut()
        .is_some_and(|c| c.decide_accusation_from_suggestion(suggestion));
    if accuse {
        outcome.accusation = Some(resolve_accusation(player, suggestion, solution));
    }
    outcome
}

/// Check an accusation against the envelope
///
/// A wrong accusation eliminates the player: they keep refuting but take no
/// further turns.
pub fn resolve_accusation(player: &mut Player, accusation: Triplet, solution: &Triplet) -> AccusationOutcome {
    if accusation == *solution {
        tracing::info!(player = %player.name, %accusation, "correct accusation");
        AccusationOutcome::Correct
    } else {
        tracing::info!(player = %player.name, %accusation, "wrong accusation, eliminated");
        player.eliminated = true;
        AccusationOutcome::Wrong
    }
}
