// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Match and inspection combinators for [`Option`], mirroring the `Either` family.
//!
//! [`Option`] already is the degenerate one-alternative union, and `map`/`and_then`
//! cover its functor and monadic operations, so only the missing elimination and
//! observation operations are added here.

use std::future::Future;

/// The `Either` family's operation set for [`Option`].
#[allow(async_fn_in_trait)]
pub trait OptionExt<T> {
    /// Eliminates the option by running `on_some` with the contained value, or
    /// `on_none` otherwise. Exactly one of the two runs, exactly once.
    fn match_with<Out>(
        self,
        on_some: impl FnOnce(T) -> Out,
        on_none: impl FnOnce() -> Out,
    ) -> Out;

    /// Eliminates the option asynchronously; only the selected closure's future is
    /// created and awaited.
    async fn match_future<Out, FutSome, FutNone>(
        self,
        on_some: impl FnOnce(T) -> FutSome,
        on_none: impl FnOnce() -> FutNone,
    ) -> Out
    where
        FutSome: Future<Output = Out>,
        FutNone: Future<Output = Out>;

    /// Runs `inspect` on a borrow of the contained value, then returns the option
    /// unchanged.
    fn on_some(self, inspect: impl FnOnce(&T)) -> Self;

    /// Awaits an asynchronous observer of the contained value, then returns the
    /// option unchanged.
    async fn on_some_async<Fut>(self, inspect: impl FnOnce(&T) -> Fut) -> Self
    where
        Fut: Future<Output = ()>;

    /// Runs `observe` if the option is empty, then returns the option unchanged.
    fn on_none(self, observe: impl FnOnce()) -> Self;

    /// Awaits an asynchronous observer of the empty case, then returns the option
    /// unchanged.
    async fn on_none_async<Fut>(self, observe: impl FnOnce() -> Fut) -> Self
    where
        Fut: Future<Output = ()>;
}

impl<T> OptionExt<T> for Option<T> {
    fn match_with<Out>(
        self,
        on_some: impl FnOnce(T) -> Out,
        on_none: impl FnOnce() -> Out,
    ) -> Out {
        match self {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }

    async fn match_future<Out, FutSome, FutNone>(
        self,
        on_some: impl FnOnce(T) -> FutSome,
        on_none: impl FnOnce() -> FutNone,
    ) -> Out
    where
        FutSome: Future<Output = Out>,
        FutNone: Future<Output = Out>,
    {
        match self {
            Some(value) => on_some(value).await,
            None => on_none().await,
        }
    }

    fn on_some(self, inspect: impl FnOnce(&T)) -> Self {
        if let Some(value) = &self {
            inspect(value);
        }
        self
    }

    async fn on_some_async<Fut>(self, inspect: impl FnOnce(&T) -> Fut) -> Self
    where
        Fut: Future<Output = ()>,
    {
        if let Some(value) = &self {
            inspect(value).await;
        }
        self
    }

    fn on_none(self, observe: impl FnOnce()) -> Self {
        if self.is_none() {
            observe();
        }
        self
    }

    async fn on_none_async<Fut>(self, observe: impl FnOnce() -> Fut) -> Self
    where
        Fut: Future<Output = ()>,
    {
        if self.is_none() {
            observe().await;
        }
        self
    }
}
