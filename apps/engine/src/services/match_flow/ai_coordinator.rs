use tracing::debug;

use super::Event;
use crate::ai::{AiPlayer, BotView, PlayChoice};
use crate::domain::state::{MatchState, Phase, Seat};
use crate::errors::domain::{DomainError, ValidationKind};

/// Ask `bot` what `seat` does next and express it as an ordinary event.
pub(super) fn decide(
    bot: &dyn AiPlayer,
    state: &MatchState,
    seat: Seat,
) -> Result<Event, DomainError> {
    if state.actor() != Some(seat) {
        return Err(DomainError::illegal_play(
            ValidationKind::OutOfTurn,
            format!("seat {seat} has nothing to decide"),
        ));
    }
    let view = BotView::for_seat(state, seat);

    let event = match state.phase {
        Phase::AwaitingContract => Event::ChooseContract {
            seat,
            contract: bot.choose_contract(&view)?,
        },
        Phase::AwaitingTrump => Event::ChooseTrump {
            seat,
            suit: bot.choose_trump(&view)?,
        },
        Phase::Playing => match bot.choose_play(&view)? {
            PlayChoice::Play(card) => Event::PlayCard { seat, card },
            PlayChoice::Pass => Event::Pass { seat },
        },
        other => {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                format!("no bot decision in phase {other:?}"),
            ))
        }
    };
    debug!(seat, event = ?event, "Bot decided");
    Ok(event)
}
