//! Hand scoring: per-seat tallies turned into score deltas by the ruleset.

use crate::domain::contracts::Contract;
use crate::domain::rules::{RankPoints, Ruleset, ScoringRule, PLAYERS};
use crate::domain::state::{require_contract, HandSummary, MatchState, Phase, Seat};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Everything a seat earned during one hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerTally {
    pub captured: Vec<Card>,
    pub tricks_won: u8,
    pub won_second_to_last: bool,
    pub won_last: bool,
    /// 1-based dominoes finishing position.
    pub finish_position: Option<usize>,
}

/// Whether `seat` won the second-to-last and the last trick of the hand.
pub fn last_two_flags(trick_winners: &[Seat], seat: Seat) -> (bool, bool) {
    match trick_winners {
        [] => (false, false),
        [last] => (false, *last == seat),
        [.., second, last] => (*second == seat, *last == seat),
    }
}

fn card_points(
    card: &Card,
    trump: Option<Suit>,
    trump_table: &[RankPoints],
    plain: &[RankPoints],
) -> i32 {
    let table = if trump == Some(card.suit) { trump_table } else { plain };
    table
        .iter()
        .find(|rp| rp.rank == card.rank)
        .map_or(0, |rp| rp.points)
}

fn score_rule(
    rule: &ScoringRule,
    tally: &PlayerTally,
    trump: Option<Suit>,
) -> Result<i32, DomainError> {
    let delta = match rule {
        ScoringRule::PerTrick { points } => points * tally.tricks_won as i32,
        ScoringRule::CapturedCards { penalties } => penalties
            .iter()
            .map(|p| {
                let hits = tally.captured.iter().filter(|c| p.filter.matches(c)).count();
                p.points * hits as i32
            })
            .sum::<i32>(),
        ScoringRule::LastTricks {
            second_to_last,
            last,
        } => {
            let mut total = 0;
            if tally.won_second_to_last {
                total += second_to_last;
            }
            if tally.won_last {
                total += last;
            }
            total
        }
        ScoringRule::FinishOrder { points } => {
            let position = tally.finish_position.ok_or_else(|| {
                DomainError::invariant("finish-order scoring without a finish position")
            })?;
            *points.get(position.wrapping_sub(1)).ok_or_else(|| {
                DomainError::invariant(format!("finish position {position} out of range"))
            })?
        }
        ScoringRule::CardPoints {
            trump: trump_table,
            plain,
        } => {
            if trump.is_none() {
                return Err(DomainError::validation(
                    ValidationKind::TrumpRequired,
                    "card-point scoring needs a trump suit",
                ));
            }
            tally
                .captured
                .iter()
                .map(|c| card_points(c, trump, trump_table, plain))
                .sum::<i32>()
        }
        ScoringRule::Combined { rules } => {
            let mut total = 0;
            for r in rules {
                total += score_rule(r, tally, trump)?;
            }
            total
        }
    };
    Ok(delta)
}

/// Score delta one seat earns for `contract` under `ruleset`.
pub fn score_contract(
    ruleset: &Ruleset,
    contract: Contract,
    tally: &PlayerTally,
    trump: Option<Suit>,
) -> Result<i32, DomainError> {
    let rule = ruleset.rule_for(contract)?;
    score_rule(rule, tally, trump)
}

/// Deltas per seat for a dominoes finish order (first out first).
pub fn dominoes_scores(
    order: &[Seat],
    points: &[i32; PLAYERS],
) -> Result<[i32; PLAYERS], DomainError> {
    if order.len() != PLAYERS {
        return Err(DomainError::invariant(format!(
            "finish order has {} seats",
            order.len()
        )));
    }
    let mut deltas = [0; PLAYERS];
    let mut seen = [false; PLAYERS];
    for (position, &seat) in order.iter().enumerate() {
        let idx = seat as usize;
        if idx >= PLAYERS || seen[idx] {
            return Err(DomainError::invariant(format!(
                "finish order {order:?} is not a permutation of the seats"
            )));
        }
        seen[idx] = true;
        deltas[idx] = points[position];
    }
    Ok(deltas)
}

/// Build the tally for `seat` from the hand just played.
pub fn tally_for(state: &MatchState, seat: Seat) -> PlayerTally {
    let idx = seat as usize;
    let (won_second_to_last, won_last) = last_two_flags(&state.hand.trick_winners, seat);
    PlayerTally {
        captured: state.hand.captured[idx].clone(),
        tricks_won: state.hand.tricks_won[idx],
        won_second_to_last,
        won_last,
        finish_position: state
            .hand
            .finish_order
            .iter()
            .position(|&s| s == seat)
            .map(|p| p + 1),
    }
}

/// Score the finished hand, add the deltas to the cumulative totals and
/// move to `HandScored`. All deltas are computed before any total changes.
pub fn apply_hand_scoring(state: &mut MatchState) -> Result<HandSummary, DomainError> {
    if state.phase != Phase::Playing || !state.hand_is_over() {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Hand is not finished",
        ));
    }
    let contract = require_contract(state, "apply_hand_scoring")?;

    let deltas = match state.config.ruleset.rule_for(contract)? {
        ScoringRule::FinishOrder { points } => dominoes_scores(&state.hand.finish_order, points)?,
        _ => {
            let mut deltas = [0; PLAYERS];
            for (seat, delta) in deltas.iter_mut().enumerate() {
                let tally = tally_for(state, seat as Seat);
                *delta = score_contract(&state.config.ruleset, contract, &tally, state.trump)?;
            }
            deltas
        }
    };

    for (player, delta) in state.players.iter_mut().zip(deltas) {
        player.score += delta;
    }
    let summary = HandSummary {
        round_no: state.round_no,
        declarer: state.declarer,
        contract,
        trump: state.trump,
        deltas,
        tricks_won: state.hand.tricks_won,
        finish_order: state.hand.finish_order.clone(),
    };
    state.history.push(summary.clone());
    state.phase = Phase::HandScored;
    state.turn = None;
    Ok(summary)
}
