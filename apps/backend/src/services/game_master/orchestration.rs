use std::time::Instant;

use tracing::{debug, info, warn};

use super::{GameMaster, TickEvent, TurnPhase};

impl GameMaster {
    /// Hand the turn to the next player still in the game and restart the timer.
    pub(super) fn end_turn(&mut self, now: Instant) {
        self.turns_played += 1;
        if let Some(next) = self.next_active_seat() {
            self.active = next;
        }
        self.timer.reset(now);
        debug!(
            room_id = self.room_id,
            active = self.players.get(self.active).map(|p| p.name()),
            turns_played = self.turns_played,
            "Turn advanced"
        );
    }

    /// Next seat after the active one, round-robin, skipping players who quit.
    fn next_active_seat(&self) -> Option<usize> {
        let n = self.players.len();
        (1..=n)
            .map(|step| (self.active + step) % n)
            .find(|&seat| !self.players[seat].has_quit())
    }

    /// Refill the placing player's rack by the number of letters they used.
    /// When the stash is already empty the game is settled instead.
    ///
    /// Returns the number of letters drawn.
    pub(super) fn replenish_or_settle(&mut self, seat: usize, consumed: usize) -> usize {
        if self.stash.is_empty() {
            self.settle_end_game(seat);
            return 0;
        }
        let count = consumed.min(self.stash.amount_left());
        match self.stash.pick_letters(count, &mut *self.rng) {
            Ok(letters) => {
                self.players[seat].add_letters(letters);
                count
            }
            Err(err) => {
                warn!(room_id = self.room_id, error = %err, "Rack refill failed");
                0
            }
        }
    }

    /// Every other player loses the value of their rack; the finishing player
    /// gains the total. The game is over afterwards.
    fn settle_end_game(&mut self, finisher: usize) {
        let mut collected = 0;
        for (seat, player) in self.players.iter_mut().enumerate() {
            if seat == finisher {
                continue;
            }
            let penalty = player.rack_points();
            player.subtract_points(penalty as i32);
            collected += penalty;
        }
        self.players[finisher].add_points(collected as i32);
        self.phase = TurnPhase::GameOver;

        info!(
            room_id = self.room_id,
            finisher = self.players[finisher].name(),
            collected,
            "Game over: stash exhausted"
        );
    }

    /// Clock step. Takes back a blocked placement once the penalty has
    /// elapsed, and forfeits the active turn when its time is up.
    pub fn tick(&mut self, now: Instant) -> Option<TickEvent> {
        match &self.phase {
            TurnPhase::Validating(pending) => {
                let penalty_served = pending
                    .blocked_at
                    .is_some_and(|at| now.saturating_duration_since(at) >= self.policy.block_penalty);
                if !penalty_served && !self.timer.is_turn_over(now) {
                    return None;
                }
                let player = self.players[pending.seat].name().to_string();
                let snapshot = self.revert_pending(now).ok()?;
                Some(TickEvent::PlacementReverted { player, snapshot })
            }
            TurnPhase::AwaitingCommand if self.timer.is_turn_over(now) => {
                let player = self.players[self.active].name().to_string();
                info!(room_id = self.room_id, player = %player, "Turn time expired");
                self.end_turn(now);
                Some(TickEvent::TurnForfeited { player })
            }
            _ => None,
        }
    }
}
