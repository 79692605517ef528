#![allow(dead_code)]

//! Helpers for driving matches in integration tests.

use taffaran_engine::{
    Card, Contract, DomainError, Event, FollowUp, MatchConfig, MatchFlow, Phase, Seat,
};

pub fn card(token: &str) -> Card {
    token.parse().expect("valid card token")
}

pub fn bot_match(seed: u64) -> MatchFlow {
    MatchFlow::new(MatchConfig::default().with_seed(seed).all_bots())
}

/// Fresh all-bot match with `contracts` selected and the first hand dealt.
pub fn started(seed: u64, contracts: &[Contract]) -> MatchFlow {
    let mut flow = bot_match(seed);
    flow.apply(Event::SelectContractPool {
        contracts: contracts.to_vec(),
    })
    .expect("pool accepted");
    flow
}

/// Apply the follow-up of the current state once (bot move or hand advance).
pub fn step(flow: &mut MatchFlow) -> Result<FollowUp, DomainError> {
    let event = match flow.follow_up() {
        FollowUp::BotMove { seat } => Event::BotMove { seat },
        FollowUp::AdvanceHand => Event::AdvanceHand,
        done => return Ok(done),
    };
    Ok(flow.apply(event)?.follow_up)
}

/// Step until `pred` holds or the match ends.
pub fn run_until(flow: &mut MatchFlow, pred: impl Fn(&MatchFlow) -> bool) {
    while !pred(flow) {
        match step(flow).expect("bot step accepted") {
            FollowUp::Finished | FollowUp::AwaitInput { .. } => return,
            _ => {}
        }
    }
}

/// Step until trick `trick_no` of hand `round_no` holds `plays` cards.
pub fn run_to_trick(flow: &mut MatchFlow, round_no: u8, trick_no: u8, plays: usize) {
    run_until(flow, |f| {
        let s = f.state();
        s.round_no == round_no
            && s.phase == Phase::Playing
            && s.hand.trick_no == trick_no
            && s.hand.trick.len() == plays
    });
}

pub fn seat_to_act(flow: &MatchFlow) -> Seat {
    flow.state().actor().expect("a seat to act")
}
