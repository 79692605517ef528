use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;
use crate::domain::contracts::Contract;
use crate::domain::dealing::build_deck;
use crate::domain::dominoes::DominoLayout;
use crate::domain::rules::PLAYERS;
use crate::domain::{Card, PlayedCard, Suit};
use crate::errors::domain::DomainError;

pub type Seat = u8; // 0..=3

/// Match progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Match created; waiting for the set of contracts to play.
    AwaitingContractPool,
    /// Hand dealt; declarer picks a contract from their remaining pool.
    AwaitingContract,
    /// Declarer names the trump suit (trump contracts only).
    AwaitingTrump,
    /// Cards are being played (tricks, or the dominoes layout).
    Playing,
    /// Hand finished and scored; waiting to move on.
    HandScored,
    /// Every contract has been played by every declarer.
    MatchComplete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: Seat,
    pub name: String,
    pub hand: Vec<Card>,
    /// Cumulative score across hands.
    pub score: i32,
    pub is_dealer: bool,
    pub is_declarer: bool,
    pub is_bot: bool,
}

/// Per-hand state, reset at every deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandState {
    /// Ordered plays for the current trick.
    pub trick: Vec<PlayedCard>,
    /// Current trick number (1-based).
    pub trick_no: u8,
    /// Seat that led the current trick.
    pub leader: Option<Seat>,
    /// Cards won in completed tricks, per seat.
    pub captured: [Vec<Card>; PLAYERS],
    pub tricks_won: [u8; PLAYERS],
    /// Winner of each completed trick, in order.
    pub trick_winners: Vec<Seat>,
    /// Last completed trick for display purposes.
    pub last_trick: Option<Vec<PlayedCard>>,
    pub last_trick_winner: Option<Seat>,
    /// Dominoes only.
    pub layout: Option<DominoLayout>,
    /// Dominoes only: seats in the order they emptied their hands.
    pub finish_order: Vec<Seat>,
}

impl HandState {
    pub fn empty() -> Self {
        Self {
            trick: Vec::with_capacity(PLAYERS),
            trick_no: 1,
            leader: None,
            captured: Default::default(),
            tricks_won: [0; PLAYERS],
            trick_winners: Vec::new(),
            last_trick: None,
            last_trick_winner: None,
            layout: None,
            finish_order: Vec::new(),
        }
    }
}

/// Result of one scored hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandSummary {
    pub round_no: u8,
    pub declarer: Seat,
    pub contract: Contract,
    pub trump: Option<Suit>,
    pub deltas: [i32; PLAYERS],
    pub tricks_won: [u8; PLAYERS],
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub finish_order: Vec<Seat>,
}

/// Entire match container, sufficient for every domain operation and
/// serializable as a save game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub config: MatchConfig,
    pub players: [Player; PLAYERS],
    pub phase: Phase,
    /// Hand number, 1-based; 0 before the contract pool is chosen.
    pub round_no: u8,
    /// `4 × |contract pool|`, fixed when the pool is selected.
    pub total_hands: u8,
    pub declarer: Seat,
    pub dealer: Seat,
    /// Seat expected to act during play; `None` when nobody may play.
    pub turn: Option<Seat>,
    pub contract: Option<Contract>,
    pub trump: Option<Suit>,
    /// Contracts selected for this match.
    pub contract_pool: Vec<Contract>,
    /// Contracts each seat has yet to declare.
    pub remaining: [Vec<Contract>; PLAYERS],
    pub hand: HandState,
    pub history: Vec<HandSummary>,
}

impl MatchState {
    /// Fresh match waiting for its contract pool.
    pub fn new(config: MatchConfig) -> Self {
        let declarer = config.first_declarer % PLAYERS as Seat;
        let dealer = prev_player(declarer);
        let players = std::array::from_fn(|i| {
            let seat = i as Seat;
            Player {
                id: seat,
                name: config.player_names[i].clone(),
                hand: Vec::new(),
                score: 0,
                is_dealer: seat == dealer,
                is_declarer: seat == declarer,
                is_bot: config.bots[i],
            }
        });
        Self {
            config,
            players,
            phase: Phase::AwaitingContractPool,
            round_no: 0,
            total_hands: 0,
            declarer,
            dealer,
            turn: None,
            contract: None,
            trump: None,
            contract_pool: Vec::new(),
            remaining: Default::default(),
            hand: HandState::empty(),
            history: Vec::new(),
        }
    }

    pub fn scores(&self) -> [i32; PLAYERS] {
        std::array::from_fn(|i| self.players[i].score)
    }

    pub fn hand_of(&self, seat: Seat) -> &[Card] {
        &self.players[seat as usize].hand
    }

    /// Seat whose decision the match is waiting on, if any.
    pub fn actor(&self) -> Option<Seat> {
        match self.phase {
            Phase::AwaitingContract | Phase::AwaitingTrump => Some(self.declarer),
            Phase::Playing => self.turn,
            Phase::AwaitingContractPool | Phase::HandScored | Phase::MatchComplete => None,
        }
    }

    /// True once every card of the hand has been played (or, for dominoes,
    /// every finishing position is decided).
    pub fn hand_is_over(&self) -> bool {
        match self.contract {
            Some(c) if c.is_layout() => self.hand.finish_order.len() == PLAYERS,
            Some(_) => {
                self.hand.trick.is_empty() && self.players.iter().all(|p| p.hand.is_empty())
            }
            None => false,
        }
    }

    /// Structural checks used when restoring a saved match.
    pub fn check_integrity(&self) -> Result<(), DomainError> {
        for (i, player) in self.players.iter().enumerate() {
            if player.id as usize != i {
                return Err(DomainError::invariant(format!(
                    "player at index {i} has id {}",
                    player.id
                )));
            }
        }
        let seats = [Some(self.declarer), Some(self.dealer), self.turn, self.hand.leader];
        let recorded = self
            .hand
            .trick
            .iter()
            .map(|p| p.seat)
            .chain(self.hand.trick_winners.iter().copied())
            .chain(self.hand.finish_order.iter().copied())
            .chain(self.hand.last_trick_winner);
        if seats
            .into_iter()
            .flatten()
            .chain(recorded)
            .any(|s| s as usize >= PLAYERS)
        {
            return Err(DomainError::invariant("seat index out of range"));
        }
        let mut finished = [false; PLAYERS];
        for &seat in &self.hand.finish_order {
            if std::mem::replace(&mut finished[seat as usize], true) {
                return Err(DomainError::invariant(format!(
                    "seat {seat} finished twice"
                )));
            }
        }
        self.check_trick_order()?;
        if self.hand.trick.len() >= PLAYERS {
            return Err(DomainError::invariant("current trick holds a full set of plays"));
        }
        if self.round_no > self.total_hands {
            return Err(DomainError::invariant(format!(
                "round {} exceeds total hands {}",
                self.round_no, self.total_hands
            )));
        }

        let mut seen: HashSet<Card> = HashSet::new();
        let in_hands = self.players.iter().flat_map(|p| p.hand.iter());
        let in_trick = self.hand.trick.iter().map(|p| &p.card);
        let captured = self.hand.captured.iter().flatten();
        for card in in_hands.chain(in_trick).chain(captured) {
            if !seen.insert(*card) {
                return Err(DomainError::invariant(format!("card {card} appears twice")));
            }
        }
        if self.deals_whole_deck() {
            let deck = build_deck(self.config.deck.ranks());
            if seen.len() != deck.len() || deck.iter().any(|c| !seen.contains(c)) {
                return Err(DomainError::invariant(format!(
                    "{} cards in play do not match the {:?} deck",
                    seen.len(),
                    self.config.deck
                )));
            }
        }
        Ok(())
    }

    /// Plays in the current trick come from consecutive seats, starting at the
    /// leader and ending just before the seat to act.
    fn check_trick_order(&self) -> Result<(), DomainError> {
        let trick = &self.hand.trick;
        let (Some(first), Some(last)) = (trick.first(), trick.last()) else {
            return Ok(());
        };
        if self.phase != Phase::Playing {
            return Err(DomainError::invariant(format!(
                "trick in progress during {:?}",
                self.phase
            )));
        }
        if self.hand.leader != Some(first.seat) {
            return Err(DomainError::invariant(format!(
                "trick led by seat {} but leader is {:?}",
                first.seat, self.hand.leader
            )));
        }
        if trick.windows(2).any(|w| w[1].seat != next_player(w[0].seat)) {
            return Err(DomainError::invariant("trick plays are out of seat order"));
        }
        if self.turn != Some(next_player(last.seat)) {
            return Err(DomainError::invariant(format!(
                "seat {:?} to act after seat {} played",
                self.turn, last.seat
            )));
        }
        Ok(())
    }

    /// Phases where every card of the deck sits in a hand, the current trick,
    /// or a captured pile.
    fn deals_whole_deck(&self) -> bool {
        match self.phase {
            Phase::AwaitingContract | Phase::AwaitingTrump => true,
            Phase::Playing => self.contract.is_some_and(|c| !c.is_layout()),
            Phase::AwaitingContractPool | Phase::HandScored | Phase::MatchComplete => false,
        }
    }
}

/// Seat / turn math helpers (4 fixed seats: 0..=3).
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as Seat
}

/// Returns the next player clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_player(p: Seat) -> Seat {
    seat_offset(p, 1)
}

/// Returns the previous player counter-clockwise (0 ← 1 ← 2 ← 3 ← 0).
#[inline]
pub fn prev_player(p: Seat) -> Seat {
    seat_offset(p, -1)
}

/// Declarer for a 1-based hand number; rotates clockwise every hand.
#[inline]
pub fn declarer_for_round(first_declarer: Seat, round_no: u8) -> Seat {
    debug_assert!(round_no >= 1, "round_no is 1-based and must be >= 1");
    let steps = round_no.saturating_sub(1) % PLAYERS as u8;
    seat_offset(first_declarer, steps as i8)
}

pub fn require_turn(state: &MatchState, ctx: &'static str) -> Result<Seat, DomainError> {
    state
        .turn
        .ok_or_else(|| DomainError::invariant(format!("turn must be set ({ctx})")))
}

pub fn require_contract(state: &MatchState, ctx: &'static str) -> Result<Contract, DomainError> {
    state
        .contract
        .ok_or_else(|| DomainError::invariant(format!("contract must be set ({ctx})")))
}
