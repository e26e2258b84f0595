// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chainable checks over one shared execution result.

use std::fmt;
use std::future::{Future, IntoFuture};
use std::sync::Arc;

use futures_util::future::{self, BoxFuture, FutureExt, Shared};

use crate::expect::{AssertionError, Expectation};
use crate::Error;

use super::result::ExecutionResult;

type Settled = Result<Arc<ExecutionResult>, Error>;

/// What a [`ResultChain`] can be built from.
pub enum ChainSource {
    /// A pending execution that resolves to a result.
    Action(BoxFuture<'static, Result<ExecutionResult, Error>>),
    /// An existing chain, re-wrapped for further chaining.
    Pending(ResultChain),
}

impl fmt::Debug for ChainSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainSource::Action(_) => f.write_str("Action(..)"),
            ChainSource::Pending(chain) => f.debug_tuple("Pending").field(chain).finish(),
        }
    }
}

/// An eventual [`ExecutionResult`] that checks can be attached to.
///
/// Every `for_*` call returns a new chain carrying the same result forward
/// and leaves `self` usable, so several checks can run against one execution.
/// Await a chain to run its checks and obtain the result:
///
/// ```no_run
/// # async fn demo() -> Result<(), shellshot::Error> {
/// let chain = shellshot::command("true").spawn();
/// let result = chain
///     .for_stdout(|out| out.to_be(""))
///     .for_exit_code(|code| code.to_be(0))
///     .await?;
/// assert!(result.success());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
#[must_use = "checks on a result chain only run when it is awaited"]
pub struct ResultChain {
    inner: Shared<BoxFuture<'static, Settled>>,
}

impl ResultChain {
    /// Build a chain from an action or an existing chain.
    ///
    /// Fails with [`Error::InvalidChain`] when there is nothing to build from.
    pub fn new(source: Option<ChainSource>) -> Result<Self, Error> {
        match source {
            Some(ChainSource::Action(action)) => Ok(Self::from_action(action)),
            Some(ChainSource::Pending(chain)) => Ok(Self::from_pending(chain)),
            None => Err(Error::InvalidChain),
        }
    }

    /// Build a chain from a pending execution.
    pub fn from_action<F>(action: F) -> Self
    where
        F: Future<Output = Result<ExecutionResult, Error>> + Send + 'static,
    {
        Self::settle(async move { action.await.map(Arc::new) })
    }

    /// Re-wrap an existing chain. The new chain settles with the same result.
    pub fn from_pending(chain: ResultChain) -> Self {
        Self::settle(chain.inner)
    }

    pub(crate) fn failed(error: Error) -> Self {
        Self::settle(future::ready(Err(error)))
    }

    fn settle<F>(settled: F) -> Self
    where
        F: Future<Output = Settled> + Send + 'static,
    {
        Self {
            inner: settled.boxed().shared(),
        }
    }

    /// Check the captured stdout.
    pub fn for_stdout<F>(&self, check: F) -> ResultChain
    where
        F: FnOnce(Expectation<String>) -> Result<(), AssertionError> + Send + 'static,
    {
        self.attach(|result| result.stdout().to_string(), check)
    }

    /// Check the captured stderr.
    pub fn for_stderr<F>(&self, check: F) -> ResultChain
    where
        F: FnOnce(Expectation<String>) -> Result<(), AssertionError> + Send + 'static,
    {
        self.attach(|result| result.stderr().to_string(), check)
    }

    /// Check the exit code.
    pub fn for_exit_code<F>(&self, check: F) -> ResultChain
    where
        F: FnOnce(Expectation<i32>) -> Result<(), AssertionError> + Send + 'static,
    {
        self.attach(ExecutionResult::exit_code, check)
    }

    // A failed parent is forwarded untouched and `check` never runs.
    fn attach<T, F>(&self, project: fn(&ExecutionResult) -> T, check: F) -> ResultChain
    where
        T: 'static,
        F: FnOnce(Expectation<T>) -> Result<(), AssertionError> + Send + 'static,
    {
        let parent = self.inner.clone();
        Self::settle(async move {
            let result = parent.await?;
            check(Expectation::new(project(&result)))?;
            Ok::<_, Error>(result)
        })
    }

    /// Await the result without attaching a check.
    pub async fn result(&self) -> Result<ExecutionResult, Error> {
        self.inner.clone().await.map(Arc::unwrap_or_clone)
    }

    /// Returns true once the result (or failure) is available.
    pub fn is_settled(&self) -> bool {
        self.inner.peek().is_some()
    }
}

impl IntoFuture for ResultChain {
    type Output = Result<ExecutionResult, Error>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        self.inner.map(|settled| settled.map(Arc::unwrap_or_clone)).boxed()
    }
}

impl From<ResultChain> for ChainSource {
    fn from(chain: ResultChain) -> Self {
        ChainSource::Pending(chain)
    }
}

impl fmt::Debug for ResultChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultChain")
            .field("settled", &self.is_settled())
            .finish()
    }
}

#[cfg(test)]
#[path = "chain_tests.rs"]
mod tests;
