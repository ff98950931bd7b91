//! The bag of undrawn letters.
//!
//! The stash owns no randomness of its own: every draw takes the room's
//! injected RNG so games can be replayed from a seed.

use rand::Rng;

use crate::domain::letters::{full_bag, Letter};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, PartialEq)]
pub struct LetterStash {
    letters: Vec<Letter>,
}

impl Default for LetterStash {
    fn default() -> Self {
        Self::new()
    }
}

impl LetterStash {
    /// Stash holding the full initial distribution.
    pub fn new() -> Self {
        Self {
            letters: full_bag(),
        }
    }

    /// Stash holding exactly `letters`.
    pub fn with_letters(letters: Vec<Letter>) -> Self {
        Self {
            letters: letters.into_iter().map(Letter::unbound).collect(),
        }
    }

    pub fn amount_left(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Draw `n` letters uniformly at random, without replacement.
    pub fn pick_letters<R: Rng + ?Sized>(
        &mut self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<Letter>, DomainError> {
        if n > self.letters.len() {
            return Err(DomainError::validation(
                ValidationKind::InsufficientLetters,
                format!("Cannot draw {n} letters, {} left", self.letters.len()),
            ));
        }
        let mut drawn = Vec::with_capacity(n);
        for _ in 0..n {
            let idx = rng.random_range(0..self.letters.len());
            drawn.push(self.letters.swap_remove(idx));
        }
        Ok(drawn)
    }

    /// Draw as many fresh letters as are handed in, then put the handed-in
    /// letters back. The count left is unchanged and a player never redraws
    /// the tiles they just gave up.
    pub fn exchange_letters<R: Rng + ?Sized>(
        &mut self,
        letters: Vec<Letter>,
        rng: &mut R,
    ) -> Result<Vec<Letter>, DomainError> {
        let drawn = self.pick_letters(letters.len(), rng)?;
        self.return_letters(letters);
        Ok(drawn)
    }

    /// Put letters back without drawing.
    pub fn return_letters(&mut self, letters: impl IntoIterator<Item = Letter>) {
        self.letters
            .extend(letters.into_iter().map(Letter::unbound));
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }
}
