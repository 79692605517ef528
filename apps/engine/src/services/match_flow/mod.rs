//! Match orchestration: an event queue driving the domain state machine.
//!
//! Every host action is an [`Event`]. Events run one at a time against a
//! working copy of the state, which replaces the real state only if the
//! event succeeds. Each accepted event returns a [`FollowUp`] telling the
//! host what should happen next (wait for a person, let a bot move, or
//! move on to the next hand); the host may act on it immediately.

mod ai_coordinator;
mod player_actions;
mod round_lifecycle;

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::ai::{AiPlayer, FirstLegalPlayer};
use crate::config::MatchConfig;
use crate::domain::snapshot::{snapshot, MatchSnapshot};
use crate::domain::state::{HandSummary, MatchState, Phase, Seat};
use crate::domain::tricks::playable_cards;
use crate::domain::{Card, Contract, Suit};
use crate::errors::domain::DomainError;
use crate::persistence::{PersistenceError, SaveStore};

/// Host or bot action applied to a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    SelectContractPool { contracts: Vec<Contract> },
    ChooseContract { seat: Seat, contract: Contract },
    ChooseTrump { seat: Seat, suit: Suit },
    PlayCard { seat: Seat, card: Card },
    /// Dominoes only: no card fits the layout.
    Pass { seat: Seat },
    /// Let the configured bot act for `seat`.
    BotMove { seat: Seat },
    AdvanceHand,
}

/// What the host should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FollowUp {
    /// Wait for a person; `None` while the contract pool is still open.
    AwaitInput { seat: Option<Seat> },
    BotMove { seat: Seat },
    AdvanceHand,
    Finished,
}

/// Result of one accepted event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub follow_up: FollowUp,
    pub trick_winner: Option<Seat>,
    pub hand_scored: Option<HandSummary>,
}

impl Transition {
    fn to(follow_up: FollowUp) -> Self {
        Self {
            follow_up,
            trick_winner: None,
            hand_scored: None,
        }
    }
}

/// Next step implied by `state`.
pub fn follow_up_for(state: &MatchState) -> FollowUp {
    match state.phase {
        Phase::AwaitingContractPool => FollowUp::AwaitInput { seat: None },
        Phase::HandScored => FollowUp::AdvanceHand,
        Phase::MatchComplete => FollowUp::Finished,
        Phase::AwaitingContract | Phase::AwaitingTrump | Phase::Playing => match state.actor() {
            Some(seat) if state.players[seat as usize].is_bot => FollowUp::BotMove { seat },
            seat => FollowUp::AwaitInput { seat },
        },
    }
}

pub struct MatchFlow {
    state: MatchState,
    bot: Box<dyn AiPlayer>,
    queue: VecDeque<Event>,
}

impl MatchFlow {
    pub fn new(config: MatchConfig) -> Self {
        Self::with_bot(config, Box::new(FirstLegalPlayer))
    }

    pub fn with_bot(config: MatchConfig, bot: Box<dyn AiPlayer>) -> Self {
        Self::from_state(MatchState::new(config), bot)
    }

    pub fn from_state(state: MatchState, bot: Box<dyn AiPlayer>) -> Self {
        Self {
            state,
            bot,
            queue: VecDeque::new(),
        }
    }

    /// Resume the saved match, or start a fresh one from `config` if there is
    /// no usable save. Load failures are logged, never returned.
    pub fn restore_or_new(
        store: &SaveStore,
        config: MatchConfig,
        bot: Box<dyn AiPlayer>,
    ) -> Self {
        let path = store.path().display();
        match store.load() {
            Ok(Some(state)) => match state.check_integrity() {
                Ok(()) => {
                    debug!(%path, round_no = state.round_no, "Resuming saved match");
                    return Self::from_state(state, bot);
                }
                Err(e) => warn!(%path, error = %e, "Saved match is inconsistent; starting fresh"),
            },
            Ok(None) => debug!(%path, "No saved match"),
            Err(e) => warn!(%path, error = %e, "Could not load saved match; starting fresh"),
        }
        Self::with_bot(config, bot)
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn into_state(self) -> MatchState {
        self.state
    }

    pub fn follow_up(&self) -> FollowUp {
        follow_up_for(&self.state)
    }

    pub fn playable_cards(&self, seat: Seat) -> Vec<Card> {
        playable_cards(&self.state, seat)
    }

    pub fn last_trick_winner(&self) -> Option<Seat> {
        self.state.hand.last_trick_winner
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        snapshot(&self.state)
    }

    pub fn save(&self, store: &SaveStore) -> Result<(), PersistenceError> {
        store.save(&self.state)
    }

    /// Apply one event. On error the match state is exactly as before.
    pub fn apply(&mut self, event: Event) -> Result<Transition, DomainError> {
        let event = match event {
            Event::BotMove { seat } => {
                ai_coordinator::decide(self.bot.as_ref(), &self.state, seat)?
            }
            other => other,
        };

        let mut next = self.state.clone();
        let mut transition = Transition::to(FollowUp::Finished);
        match &event {
            Event::SelectContractPool { contracts } => {
                round_lifecycle::select_contract_pool(&mut next, contracts)?
            }
            Event::ChooseContract { seat, contract } => {
                player_actions::choose_contract(&mut next, *seat, *contract)?
            }
            Event::ChooseTrump { seat, suit } => {
                player_actions::choose_trump(&mut next, *seat, *suit)?
            }
            Event::PlayCard { seat, card } => {
                let outcome = player_actions::play(&mut next, *seat, *card)?;
                transition.trick_winner = outcome.trick_winner;
                transition.hand_scored = outcome.hand_scored;
            }
            Event::Pass { seat } => player_actions::pass(&mut next, *seat)?,
            Event::AdvanceHand => round_lifecycle::advance_hand(&mut next)?,
            Event::BotMove { .. } => {
                return Err(DomainError::invariant("bot decided on another bot move"))
            }
        }

        self.state = next;
        transition.follow_up = self.follow_up();
        debug!(event = ?event, follow_up = ?transition.follow_up, "Event applied");
        Ok(transition)
    }

    pub fn enqueue(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Apply queued events in order. The first rejected event is returned as
    /// the error and the events queued behind it are dropped.
    pub fn process_pending(&mut self) -> Result<Vec<Transition>, DomainError> {
        let mut applied = Vec::with_capacity(self.queue.len());
        while let Some(event) = self.queue.pop_front() {
            match self.apply(event) {
                Ok(t) => applied.push(t),
                Err(e) => {
                    if !self.queue.is_empty() {
                        warn!(
                            dropped = self.queue.len(),
                            error = %e,
                            "Event rejected; clearing queue"
                        );
                    }
                    self.queue.clear();
                    return Err(e);
                }
            }
        }
        Ok(applied)
    }

    /// Run bot turns and hand advances until a person must act or the match ends.
    pub fn autoplay(&mut self) -> Result<FollowUp, DomainError> {
        loop {
            match self.follow_up() {
                FollowUp::BotMove { seat } => self.enqueue(Event::BotMove { seat }),
                FollowUp::AdvanceHand => self.enqueue(Event::AdvanceHand),
                done @ (FollowUp::AwaitInput { .. } | FollowUp::Finished) => return Ok(done),
            }
            self.process_pending()?;
        }
    }
}
