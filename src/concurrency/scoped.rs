//! Scoped branch threads for the thread-budget strategy.
//!
//! A thin wrapper over `std::thread::scope`: branches borrow the graph and the
//! shared flag from the enclosing stack frame, and a branch that panics comes
//! back as a [`SearchError`] instead of tearing down the caller.

use std::any::Any;
use std::thread::{Scope, ScopedJoinHandle};

use crate::error::SearchError;

/// A scoped environment that spawns one OS thread per search branch.
pub struct BranchScope<'scope, 'env: 'scope> {
    scope: &'scope Scope<'scope, 'env>,
}

impl<'scope, 'env> BranchScope<'scope, 'env> {
    /// Spawns a thread exploring the branch rooted at `vertex`.
    #[inline]
    pub fn spawn<T, F>(&self, vertex: usize, f: F) -> BranchHandle<'scope, T>
    where
        T: Send + 'scope,
        F: FnOnce() -> T + Send + 'scope,
    {
        BranchHandle {
            vertex,
            handle: self.scope.spawn(f),
        }
    }
}

/// A running branch; join it to get its outcome.
pub struct BranchHandle<'scope, T> {
    vertex: usize,
    handle: ScopedJoinHandle<'scope, T>,
}

impl<T> BranchHandle<'_, T> {
    /// The vertex this branch started from.
    pub fn vertex(&self) -> usize {
        self.vertex
    }

    /// Waits for the branch to finish.
    ///
    /// # Errors
    /// Returns [`SearchError::BranchPanicked`] if the branch thread panicked.
    pub fn join(self) -> Result<T, SearchError> {
        let vertex = self.vertex;
        self.handle
            .join()
            .map_err(|payload| SearchError::BranchPanicked {
                vertex,
                message: panic_message(&*payload),
            })
    }
}

/// Runs `f` in a scope whose branch threads are all joined before returning.
#[inline]
pub fn with_branch_scope<'env, R, F>(f: F) -> R
where
    F: for<'scope> FnOnce(BranchScope<'scope, 'env>) -> R,
{
    std::thread::scope(|scope| f(BranchScope { scope }))
}

/// Best-effort text of a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_returns_branch_value() {
        let data = vec![1, 2, 3];
        let values = with_branch_scope(|scope| {
            let handles: Vec<_> = data
                .iter()
                .map(|&x| scope.spawn(x, move || x * 10))
                .collect();
            handles
                .into_iter()
                .map(BranchHandle::join)
                .collect::<Result<Vec<_>, _>>()
        });
        assert_eq!(values, Ok(vec![10, 20, 30]));
    }

    #[test]
    fn panicking_branch_becomes_error() {
        let outcome = with_branch_scope(|scope| {
            let handle = scope.spawn(4, || -> usize { panic!("dead branch") });
            assert_eq!(handle.vertex(), 4);
            handle.join()
        });
        assert_eq!(
            outcome,
            Err(SearchError::BranchPanicked {
                vertex: 4,
                message: "dead branch".into()
            })
        );
    }
}
