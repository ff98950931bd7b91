use std::time::Instant;

use tracing::{debug, info, warn};

use super::{
    GameMaster, PendingPlacement, PlacementHandle, PlacementSummary, TurnPhase, FULL_RACK_BONUS,
};
use crate::domain::{Command, CommandChangeLetter, CommandOutcome, CommandPlaceWord};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

impl GameMaster {
    /// Dispatch a command from `actor`. Placements are confirmed at once when
    /// every word is valid; otherwise the actor is blocked and the placement
    /// stays on the board until the turn clock takes it back.
    pub fn handle_command(&mut self, actor: &str, command: &Command, now: Instant) -> CommandOutcome {
        if matches!(command, Command::Help) {
            return CommandOutcome::Success;
        }
        let seat = match self.acting_seat(actor) {
            Ok(seat) => seat,
            Err(outcome) => {
                debug!(room_id = self.room_id, actor, outcome = %outcome, "Command refused");
                return outcome;
            }
        };

        let outcome = match command {
            Command::PlaceWord(cmd) => match self.try_place(actor, cmd, now) {
                Ok(handle) if handle.words_valid() => match self.confirm(handle, now) {
                    Ok(_) => CommandOutcome::Success,
                    Err(outcome) => outcome,
                },
                Ok(_) => CommandOutcome::InvalidWords,
                Err(outcome) => outcome,
            },
            Command::ChangeLetter(cmd) => self.change_letters(seat, cmd, now),
            Command::Pass => {
                debug!(room_id = self.room_id, actor, "Turn passed");
                self.end_turn(now);
                CommandOutcome::Success
            }
            Command::Help => CommandOutcome::Success,
        };
        debug!(room_id = self.room_id, actor, command = ?command.command_type(), outcome = %outcome, "Command handled");
        outcome
    }

    /// Seat of `actor` if they may act right now.
    fn acting_seat(&self, actor: &str) -> Result<usize, CommandOutcome> {
        match &self.phase {
            TurnPhase::Lobby => return Err(CommandOutcome::Wait),
            TurnPhase::GameOver => return Err(CommandOutcome::GameOver),
            _ => {}
        }
        let seat = self
            .seat_of(actor)
            .filter(|&s| !self.players[s].has_quit())
            .ok_or(CommandOutcome::NotInGame)?;

        if let TurnPhase::Validating(pending) = &self.phase {
            return Err(if pending.seat != seat {
                CommandOutcome::Wait
            } else if self.players[seat].is_blocked() {
                CommandOutcome::Block
            } else {
                CommandOutcome::PlacementPending
            });
        }
        if seat != self.active {
            return Err(CommandOutcome::Wait);
        }
        if self.players[seat].is_blocked() {
            return Err(CommandOutcome::Block);
        }
        Ok(seat)
    }

    /// First phase of a placement: check the rules, take the letters from the
    /// rack, write the word and check the dictionary.
    ///
    /// On success the game waits in [`TurnPhase::Validating`] for `confirm` or
    /// `revert`. Invalid words do not fail this call; they block the player and
    /// are reported through [`PlacementHandle::words_valid`].
    pub fn try_place(
        &mut self,
        actor: &str,
        cmd: &CommandPlaceWord,
        now: Instant,
    ) -> Result<PlacementHandle, CommandOutcome> {
        let seat = self.acting_seat(actor)?;
        self.rules.can_place_word(cmd, self.is_first_turn)?;

        let wanted = self.rules.board().find_letters_to_remove(cmd);
        let player = &mut self.players[seat];
        let taken = player
            .remove_letters(&wanted)
            .map_err(|_| CommandOutcome::InsufficientRackLetters)?;

        if let Err(err) = self.rules.board_mut().place_word(cmd) {
            player.add_letters(taken);
            warn!(room_id = self.room_id, actor, error = %err, "Placement failed after checks");
            return Err(match err.validation_kind() {
                Some(ValidationKind::OutOfBounds) => CommandOutcome::OutOfBounds,
                _ => CommandOutcome::IncorrectOverlapping,
            });
        }

        let words_valid = self.rules.are_all_words_valid();
        let points = self.rules.board().count_all_new_words_points();
        let blocked_at = if words_valid {
            None
        } else {
            player.set_blocked(true);
            warn!(
                room_id = self.room_id,
                actor,
                word = %cmd,
                invalid = ?self.rules.invalid_words(),
                "Invalid words placed, player blocked"
            );
            Some(now)
        };

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.phase = TurnPhase::Validating(PendingPlacement {
            ticket,
            seat,
            command: cmd.clone(),
            consumed: taken.len(),
            words_valid,
            points,
            blocked_at,
        });

        Ok(PlacementHandle {
            ticket,
            words_valid,
            points,
        })
    }

    /// Second phase: score the pending placement, refill the rack and pass the
    /// turn. Settles the game instead of refilling when the stash is empty.
    ///
    /// Invalid words are refused with `INVALID_WORDS` and stay pending.
    pub fn confirm(
        &mut self,
        handle: PlacementHandle,
        now: Instant,
    ) -> Result<PlacementSummary, CommandOutcome> {
        match &self.phase {
            TurnPhase::Validating(p) if p.ticket == handle.ticket => {
                if !p.words_valid {
                    return Err(CommandOutcome::InvalidWords);
                }
            }
            _ => return Err(CommandOutcome::NoPendingPlacement),
        }
        let TurnPhase::Validating(pending) =
            std::mem::replace(&mut self.phase, TurnPhase::AwaitingCommand)
        else {
            return Err(CommandOutcome::NoPendingPlacement);
        };

        let points = self.rules.score_and_consume();
        self.rules.board_mut().confirm_placement();
        self.is_first_turn = false;

        let seat = pending.seat;
        let full_rack_bonus = self.players[seat].is_rack_empty();
        let earned = points + if full_rack_bonus { FULL_RACK_BONUS } else { 0 };
        self.players[seat].add_points(earned as i32);

        info!(
            room_id = self.room_id,
            player = self.players[seat].name(),
            word = %pending.command,
            points,
            full_rack_bonus,
            "Placement confirmed"
        );

        let letters_drawn = self.replenish_or_settle(seat, pending.consumed);
        let game_over = self.is_game_over();
        if !game_over {
            self.end_turn(now);
        }

        Ok(PlacementSummary {
            player: self.players[seat].name().to_string(),
            points: earned,
            full_rack_bonus,
            letters_drawn,
            game_over,
        })
    }

    /// Take back the placement behind `handle`. See [`GameMaster::revert_pending`].
    pub fn revert(&mut self, handle: PlacementHandle, now: Instant) -> Result<String, CommandOutcome> {
        match &self.phase {
            TurnPhase::Validating(p) if p.ticket == handle.ticket => self.revert_pending(now),
            _ => Err(CommandOutcome::NoPendingPlacement),
        }
    }

    /// Take back whatever placement is pending: its letters return to the
    /// rack, the player is unblocked and the turn passes.
    ///
    /// Returns the placed word with every cleared square shown as `-`.
    pub fn revert_pending(&mut self, now: Instant) -> Result<String, CommandOutcome> {
        if !matches!(self.phase, TurnPhase::Validating(_)) {
            return Err(CommandOutcome::NoPendingPlacement);
        }
        let TurnPhase::Validating(pending) =
            std::mem::replace(&mut self.phase, TurnPhase::AwaitingCommand)
        else {
            return Err(CommandOutcome::NoPendingPlacement);
        };

        let player = &mut self.players[pending.seat];
        let snapshot = self.rules.board_mut().remove_word(&pending.command, player);
        player.set_blocked(false);
        info!(
            room_id = self.room_id,
            player = player.name(),
            snapshot = %snapshot,
            "Placement reverted"
        );

        self.end_turn(now);
        Ok(snapshot)
    }

    /// Swap rack letters for fresh draws and pass the turn.
    pub(super) fn change_letters(
        &mut self,
        seat: usize,
        cmd: &CommandChangeLetter,
        now: Instant,
    ) -> CommandOutcome {
        if self.stash.is_empty() {
            return CommandOutcome::StashEmpty;
        }
        if self.stash.amount_left() < cmd.letters().len() {
            return CommandOutcome::StashInsufficientLetters;
        }
        let player = &mut self.players[seat];
        let Ok(given) = player.remove_letters(cmd.letters()) else {
            return CommandOutcome::InsufficientRackLetters;
        };

        match self.stash.exchange_letters(given.clone(), &mut *self.rng) {
            Ok(drawn) => player.add_letters(drawn),
            Err(err) => {
                player.add_letters(given);
                warn!(room_id = self.room_id, error = %err, "Exchange failed");
                return CommandOutcome::StashInsufficientLetters;
            }
        }
        debug!(
            room_id = self.room_id,
            player = player.name(),
            count = cmd.letters().len(),
            "Letters exchanged"
        );

        self.end_turn(now);
        CommandOutcome::Success
    }

    /// Remove `name` from play.
    ///
    /// In the lobby the player is unseated. During a game a pending placement
    /// of theirs is reverted, or their turn passed if they are active; their
    /// rack goes back to the stash and the game ends when fewer than two
    /// players remain. A placement still pending when the game ends is taken
    /// back first. After the game only the quit flag is recorded.
    pub fn quit(&mut self, name: &str, now: Instant) -> Result<(), DomainError> {
        let seat = self.seat_of(name).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Player, format!("{name} is not in room {}", self.room_id))
        })?;

        match self.phase {
            TurnPhase::Lobby => {
                self.players.remove(seat);
                info!(room_id = self.room_id, player = name, "Player left lobby");
                return Ok(());
            }
            TurnPhase::GameOver => {
                self.players[seat].mark_quit();
                info!(room_id = self.room_id, player = name, "Player left after game end");
                return Ok(());
            }
            _ if self.players[seat].has_quit() => return Ok(()),
            _ => {}
        }

        let pending_seat = match &self.phase {
            TurnPhase::Validating(pending) => Some(pending.seat),
            _ => None,
        };
        if pending_seat == Some(seat) {
            // Reverting also passes the turn.
            self.take_back_pending(now);
        } else if pending_seat.is_none() && seat == self.active {
            self.end_turn(now);
        }

        let rack = self.players[seat].take_rack();
        self.stash.return_letters(rack);
        self.players[seat].mark_quit();
        info!(
            room_id = self.room_id,
            player = name,
            remaining = self.remaining_players(),
            "Player quit"
        );

        if self.remaining_players() < 2 {
            if pending_seat.is_some_and(|s| s != seat) {
                self.take_back_pending(now);
            }
            self.phase = TurnPhase::GameOver;
            info!(room_id = self.room_id, "Game over: not enough players");
        }
        Ok(())
    }

    fn take_back_pending(&mut self, now: Instant) {
        if let Err(outcome) = self.revert_pending(now) {
            warn!(room_id = self.room_id, outcome = %outcome, "No pending placement to take back");
        }
    }
}
