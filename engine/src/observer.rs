//! Hooks into a running draw.
//!
//! The draw itself never logs. Callers that want a trace pass an observer:
//! [`TracingObserver`] forwards to `tracing`, `()` discards everything.

use yarrow_types::Bit;

use crate::draw::{Draw, RoundTrace};

pub trait DrawObserver {
    fn intent_drawn(&mut self, _intent: Bit) {}

    fn round_finished(&mut self, _round: &RoundTrace) {}

    fn draw_finished(&mut self, _draw: &Draw) {}
}

impl DrawObserver for () {}

/// Emits one `debug!` per step and an `info!` when the draw completes.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl DrawObserver for TracingObserver {
    fn intent_drawn(&mut self, intent: Bit) {
        tracing::debug!(intent = %intent, "Intent drawn");
    }

    fn round_finished(&mut self, round: &RoundTrace) {
        tracing::debug!(
            round = round.round(),
            pile = round.pile_len(),
            split = round.split(),
            left_remainder = round.left_remainder(),
            right_remainder = round.right_remainder(),
            popped = %round.popped(),
            room = %round.room().summary(),
            "Round harvested"
        );
    }

    fn draw_finished(&mut self, draw: &Draw) {
        tracing::info!(
            start = %draw.start(),
            intent = %draw.intent(),
            remaining = draw.remaining().len(),
            "Draw complete"
        );
    }
}
