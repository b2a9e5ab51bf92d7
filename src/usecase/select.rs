use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{AssignError, PoolShortfall};

/// Pick `count` distinct logins from `pool`, never the `author`.
///
/// The pool is checked twice: once as given and once with every entry equal
/// to `author` removed, so the caller can tell a pool that is too small from
/// one that only becomes too small once the author is excluded. Sampling is
/// a partial Fisher-Yates shuffle, uniform without replacement.
pub fn select_assignees<R: Rng + ?Sized>(
    pool: &[String],
    author: &str,
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>, AssignError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if pool.len() < count {
        return Err(AssignError::InsufficientPool(
            PoolShortfall::BeforeAuthorRemoval,
        ));
    }

    let without_author: Vec<&str> = pool
        .iter()
        .map(String::as_str)
        .filter(|login| *login != author)
        .collect();
    if without_author.len() < count {
        return Err(AssignError::InsufficientPool(
            PoolShortfall::AfterAuthorRemoval,
        ));
    }

    let mut seen = HashSet::with_capacity(without_author.len());
    let mut candidates: Vec<&str> = without_author
        .into_iter()
        .filter(|login| seen.insert(*login))
        .collect();
    // Only reachable when the pool repeats a login.
    if candidates.len() < count {
        return Err(AssignError::InsufficientPool(
            PoolShortfall::AfterAuthorRemoval,
        ));
    }

    let (picked, _) = candidates.partial_shuffle(rng, count);
    Ok(picked.iter().map(|login| (*login).to_owned()).collect())
}
