// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! [`Outcome`]: a success value or an ordered, non-empty list of domain errors.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, ErrorList};

/// The result of a domain operation: either a value, or one or more domain errors.
///
/// Unlike [`std::result::Result`], the failure side always aggregates every error that
/// occurred, in order; a single error is never silently dropped. The operation set
/// mirrors the [`Either`](crate::Either) family.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Outcome<T> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed with one or more errors.
    Failure(ErrorList),
}

impl<T> Outcome<T> {
    /// Creates a failed outcome from a single error or an existing list.
    pub fn failure(errors: impl Into<ErrorList>) -> Self {
        Outcome::Failure(errors.into())
    }

    /// Returns `true` if the operation produced a value.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if the operation failed.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Eliminates the outcome by running the handler for the live side.
    pub fn match_with<Out>(
        self,
        on_success: impl FnOnce(T) -> Out,
        on_failure: impl FnOnce(ErrorList) -> Out,
    ) -> Out {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(errors) => on_failure(errors),
        }
    }

    /// Eliminates the outcome asynchronously; only the live side's future is created
    /// and awaited.
    pub async fn match_future<Out, FutSuccess, FutFailure>(
        self,
        on_success: impl FnOnce(T) -> FutSuccess,
        on_failure: impl FnOnce(ErrorList) -> FutFailure,
    ) -> Out
    where
        FutSuccess: Future<Output = Out>,
        FutFailure: Future<Output = Out>,
    {
        match self {
            Outcome::Success(value) => on_success(value).await,
            Outcome::Failure(errors) => on_failure(errors).await,
        }
    }

    /// Chains a fallible computation onto the success side.
    ///
    /// Failures pass through untouched, keeping every error in order; `chain` is never
    /// invoked for them.
    pub fn bind<Out>(self, chain: impl FnOnce(T) -> Outcome<Out>) -> Outcome<Out> {
        match self {
            Outcome::Success(value) => chain(value),
            Outcome::Failure(errors) => Outcome::Failure(errors),
        }
    }

    /// Chains an asynchronous fallible computation onto the success side.
    ///
    /// For failures no future is created or awaited.
    pub async fn bind_async<Out, Fut>(self, chain: impl FnOnce(T) -> Fut) -> Outcome<Out>
    where
        Fut: Future<Output = Outcome<Out>>,
    {
        match self {
            Outcome::Success(value) => chain(value).await,
            Outcome::Failure(errors) => Outcome::Failure(errors),
        }
    }

    /// Transforms the success value, keeping failures untouched.
    pub fn map<Out>(self, transform: impl FnOnce(T) -> Out) -> Outcome<Out> {
        match self {
            Outcome::Success(value) => Outcome::Success(transform(value)),
            Outcome::Failure(errors) => Outcome::Failure(errors),
        }
    }

    /// Transforms the success value asynchronously; the future is only created and
    /// awaited for successes.
    pub async fn map_async<Out, Fut>(self, transform: impl FnOnce(T) -> Fut) -> Outcome<Out>
    where
        Fut: Future<Output = Out>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(transform(value).await),
            Outcome::Failure(errors) => Outcome::Failure(errors),
        }
    }

    /// Runs `inspect` on a borrow of the success value, then returns the outcome
    /// unchanged.
    pub fn on_success(self, inspect: impl FnOnce(&T)) -> Self {
        if let Outcome::Success(value) = &self {
            inspect(value);
        }
        self
    }

    /// Awaits an asynchronous observer of the success value, then returns the outcome
    /// unchanged.
    pub async fn on_success_async<Fut>(self, inspect: impl FnOnce(&T) -> Fut) -> Self
    where
        Fut: Future<Output = ()>,
    {
        if let Outcome::Success(value) = &self {
            inspect(value).await;
        }
        self
    }

    /// Runs `inspect` on a borrow of the error list, then returns the outcome
    /// unchanged.
    pub fn on_failure(self, inspect: impl FnOnce(&ErrorList)) -> Self {
        if let Outcome::Failure(errors) = &self {
            inspect(errors);
        }
        self
    }

    /// Awaits an asynchronous observer of the error list, then returns the outcome
    /// unchanged.
    pub async fn on_failure_async<Fut>(self, inspect: impl FnOnce(&ErrorList) -> Fut) -> Self
    where
        Fut: Future<Output = ()>,
    {
        if let Outcome::Failure(errors) = &self {
            inspect(errors).await;
        }
        self
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<Error>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::failure(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::future;

    use super::Outcome;
    use crate::errors::{Error, ErrorDetail, Failure, Validation};

    fn missing() -> Failure {
        Failure::new("Not found", "No such customer", "customer.missing")
    }

    #[test]
    fn failure_match_yields_the_collected_errors() {
        let error = Error::from(missing());
        let outcome = Outcome::<bool>::failure(error.clone());

        let errors = outcome.match_with(
            |_| unreachable!("the success handler must not run"),
            |errors| errors,
        );

        let collected: Vec<_> = errors.into_iter().collect();
        assert_eq!(collected, [error]);
    }

    #[test]
    fn bind_keeps_every_error_in_order() {
        let calls = Cell::new(0_u32);
        let mut errors = crate::ErrorList::new(missing());
        errors.push(Validation::new(
            "Invalid age",
            "Age must be non-negative",
            "age.negative",
            "age",
            "customer.age",
            "-3",
        ));

        let outcome = Outcome::<u32>::Failure(errors.clone()).bind(|value| {
            calls.set(calls.get() + 1);
            Outcome::Success(value + 1)
        });

        assert_eq!(outcome, Outcome::Failure(errors));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn bind_chains_on_success() {
        let outcome = Outcome::Success(20).bind(|value| {
            if value > 10 {
                Outcome::Success(value * 2)
            } else {
                Outcome::failure(missing())
            }
        });

        assert_eq!(outcome, Outcome::Success(40));
    }

    #[test]
    fn map_transforms_only_the_success_value() {
        assert_eq!(
            Outcome::Success(3).map(|value| value * 7),
            Outcome::Success(21)
        );
        assert_eq!(
            Outcome::<u32>::failure(missing()).map(|value| value * 7),
            Outcome::failure(missing())
        );
    }

    #[test]
    fn observers_return_the_outcome_unchanged() {
        let seen = Cell::new(None);
        let outcome = Outcome::Success(7)
            .on_success(|value| seen.set(Some(*value)))
            .on_failure(|_| unreachable!("there is no failure to observe"));

        assert_eq!(outcome, Outcome::Success(7));
        assert_eq!(seen.get(), Some(7));
    }

    #[tokio::test]
    async fn async_operations_agree_with_their_synchronous_forms() {
        let outcome = Outcome::Success(5);

        let sum = outcome
            .clone()
            .bind_async(|value| future::ready(Outcome::Success(value + 1)))
            .await
            .map_async(|value| future::ready(value * 2))
            .await
            .match_future(|value| future::ready(value), |_| future::ready(0))
            .await;

        let expected = outcome
            .bind(|value| Outcome::Success(value + 1))
            .map(|value| value * 2)
            .match_with(|value| value, |_| 0);

        assert_eq!(sum, expected);
        assert_eq!(sum, 12);
    }

    #[tokio::test]
    async fn async_failure_side_never_builds_a_future() {
        let calls = Cell::new(0_u32);

        let outcome = Outcome::<u32>::failure(missing())
            .bind_async(|value| {
                calls.set(calls.get() + 1);
                future::ready(Outcome::Success(value))
            })
            .await;

        assert_eq!(calls.get(), 0);
        assert!(outcome.is_failure());
    }

    #[test]
    fn std_results_convert_losslessly() {
        let success: Outcome<u32> = Ok::<_, Failure>(9).into();
        assert_eq!(success, Outcome::Success(9));

        let failure: Outcome<u32> = Err(missing()).into();
        let errors = failure.match_with(|_| unreachable!(), |errors| errors);
        assert_eq!(errors.first().code(), "customer.missing");
    }
}
