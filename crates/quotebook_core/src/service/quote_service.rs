//! Quote use-case service.
//!
//! # Responsibility
//! - Provide the store entry points used by the server: list, add and
//!   random pick.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Random selection is uniform over `[0, len)` of a fresh load.
//! - An empty collection yields `RepoError::EmptyCollection`, never a panic.

use crate::model::quote::Quote;
use crate::repo::quote_repo::{QuoteRepository, RepoError, RepoResult};
use rand::Rng;

/// Use-case service wrapper for the quote store.
pub struct QuoteService<R: QuoteRepository> {
    repo: R,
}

impl<R: QuoteRepository> QuoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns every stored quote in document order.
    pub fn load_all(&self) -> RepoResult<Vec<Quote>> {
        self.repo.load_all()
    }

    /// Appends one quote at the end of the collection.
    ///
    /// Blank text or author is rejected with `RepoError::Validation` and
    /// nothing is written.
    pub fn add_quote(&self, quote: &Quote) -> RepoResult<()> {
        self.repo.append(quote)
    }

    /// Picks one quote uniformly at random using the thread RNG.
    pub fn pick_random(&self) -> RepoResult<Quote> {
        self.pick_random_with(&mut rand::thread_rng())
    }

    /// Picks one quote uniformly at random using `rng`.
    pub fn pick_random_with<G: Rng + ?Sized>(&self, rng: &mut G) -> RepoResult<Quote> {
        let mut quotes = self.repo.load_all()?;
        let index = pick_index(quotes.len(), rng)?;
        Ok(quotes.swap_remove(index))
    }
}

/// Uniform index in `[0, len)`, or `EmptyCollection` when `len == 0`.
pub fn pick_index<G: Rng + ?Sized>(len: usize, rng: &mut G) -> RepoResult<usize> {
    if len == 0 {
        return Err(RepoError::EmptyCollection);
    }
    Ok(rng.gen_range(0..len))
}
