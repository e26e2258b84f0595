// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Comparison vocabulary handed to chain checks.

use std::fmt::Debug;

/// A failed comparison, reporting what was expected and what was received.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expect(received).{matcher}(expected)\n\nExpected: {expected}\nReceived: {actual}")]
pub struct AssertionError {
    /// Matcher name, prefixed with `not.` when negated.
    pub matcher: String,
    pub expected: String,
    pub actual: String,
}

/// An actual value waiting to be compared.
#[derive(Debug, Clone)]
#[must_use = "an expectation does nothing until a matcher is called"]
pub struct Expectation<T> {
    actual: T,
    negated: bool,
}

/// Wrap `actual` for comparison.
pub fn expect<T>(actual: T) -> Expectation<T> {
    Expectation::new(actual)
}

impl<T> Expectation<T> {
    pub fn new(actual: T) -> Self {
        Self {
            actual,
            negated: false,
        }
    }

    pub fn actual(&self) -> &T {
        &self.actual
    }

    pub fn into_inner(self) -> T {
        self.actual
    }

    /// Invert the next matcher.
    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }
}

impl<T: Debug> Expectation<T> {
    /// Pass when the actual value equals `expected`.
    pub fn to_be<U>(self, expected: U) -> Result<(), AssertionError>
    where
        T: PartialEq<U>,
        U: Debug,
    {
        let pass = self.actual == expected;
        self.verdict("to_be", pass, format!("{expected:?}"))
    }

    /// Pass when `predicate` holds. `description` names the expectation in
    /// the failure message.
    pub fn to_satisfy(
        self,
        description: &str,
        predicate: impl FnOnce(&T) -> bool,
    ) -> Result<(), AssertionError> {
        let pass = predicate(&self.actual);
        self.verdict("to_satisfy", pass, description.to_string())
    }

    fn verdict(self, matcher: &str, pass: bool, expected: String) -> Result<(), AssertionError> {
        if pass != self.negated {
            return Ok(());
        }
        let matcher = if self.negated {
            format!("not.{matcher}")
        } else {
            matcher.to_string()
        };
        Err(AssertionError {
            matcher,
            expected,
            actual: format!("{:?}", self.actual),
        })
    }
}

impl Expectation<String> {
    /// Pass when the actual text contains `needle`.
    pub fn to_contain(self, needle: &str) -> Result<(), AssertionError> {
        let pass = self.actual.contains(needle);
        self.verdict("to_contain", pass, format!("{needle:?}"))
    }

    /// Pass when the actual text is empty.
    pub fn to_be_empty(self) -> Result<(), AssertionError> {
        let pass = self.actual.is_empty();
        self.verdict("to_be_empty", pass, "\"\"".to_string())
    }
}

#[cfg(test)]
#[path = "expect_tests.rs"]
mod tests;
