//! Runs one all-bot match to completion.

use std::time::Instant;

use taffaran_engine::domain::snapshot::winners;
use taffaran_engine::{
    AiPlayer, Contract, DomainError, Event, FollowUp, MatchConfig, MatchFlow, SaveStore,
};
use tracing::{debug, warn};

use crate::types::MatchRecord;

pub struct Simulator<'a> {
    pub config: MatchConfig,
    pub contracts: &'a [Contract],
    /// Save after every hand, so an interrupted run can be inspected.
    pub save_store: Option<&'a SaveStore>,
}

impl Simulator<'_> {
    pub fn run(
        &self,
        match_no: u32,
        bot: Box<dyn AiPlayer>,
    ) -> Result<MatchRecord, DomainError> {
        let start = Instant::now();
        let mut flow = MatchFlow::with_bot(self.config.clone().all_bots(), bot);
        flow.apply(Event::SelectContractPool {
            contracts: self.contracts.to_vec(),
        })?;

        loop {
            let event = match flow.follow_up() {
                FollowUp::BotMove { seat } => Event::BotMove { seat },
                FollowUp::AdvanceHand => {
                    self.checkpoint(&flow);
                    Event::AdvanceHand
                }
                FollowUp::Finished => break,
                FollowUp::AwaitInput { seat } => {
                    return Err(DomainError::invariant(format!(
                        "simulation waiting on input from {seat:?}"
                    )))
                }
            };
            flow.apply(event)?;
        }
        self.checkpoint(&flow);

        let state = flow.into_state();
        debug!(match_no, scores = ?state.scores(), "Match finished");
        let record = MatchRecord {
            match_no,
            seed: state.config.seed,
            deck: state.config.deck,
            ruleset: state.config.ruleset.name.clone(),
            contracts: self.contracts.iter().map(|c| c.to_string()).collect(),
            hands_played: state.history.len(),
            final_scores: state.scores(),
            winners: winners(&state),
            duration_ms: start.elapsed().as_secs_f64() * 1000.0,
        };
        Ok(record)
    }

    fn checkpoint(&self, flow: &MatchFlow) {
        if let Some(store) = self.save_store {
            if let Err(e) = flow.save(store) {
                warn!(path = %store.path().display(), error = %e, "Failed to save match state");
            }
        }
    }
}
