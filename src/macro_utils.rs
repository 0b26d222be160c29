// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Helper macro that expands one declarative description into a complete union arity.

/// Declares one member of the `Either` family.
///
/// The input lists, for every arm: the name used for its `match_with` handler, the name of
/// its `match_future` future parameter, and the names of the per-arm methods, followed by
/// the type parameters that come before and after its payload and the names of its sibling
/// arms. Everything else (the enum itself, elimination, chaining, mapping and inspection,
/// in synchronous and asynchronous forms) is generated from that description, so all
/// arities share a single implementation template.
macro_rules! define_either {
    (
        $(#[$type_docs:meta])*
        pub enum $name:ident<$($param:ident),+> {
            $(
                $(#[$arm_docs:meta])*
                $variant:ident($payload:ident) {
                    handler: $handler:ident,
                    future: $future:ident,
                    is: $is:ident,
                    bind: $bind:ident, $bind_async:ident,
                    map: $map:ident, $map_async:ident,
                    on: $on:ident, $on_async:ident,
                    before: [$($before:ident),*],
                    after: [$($after:ident),*],
                    siblings: [$($sibling:ident),*],
                }
            )+
        }
    ) => {
        $(#[$type_docs])*
        #[derive(
            Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd,
            serde::Deserialize, serde::Serialize,
        )]
        pub enum $name<$($param),+> {
            $(
                $(#[$arm_docs])*
                $variant($payload),
            )+
        }

        impl<$($param),+> $name<$($param),+> {
            /// Eliminates the union by running the handler that corresponds to the live
            /// arm, moving the payload into it.
            ///
            /// Exactly one handler runs, exactly once. Panics raised inside the selected
            /// handler are never caught; they propagate unchanged.
            pub fn match_with<Out>(
                self,
                $( $handler: impl FnOnce($payload) -> Out, )+
            ) -> Out {
                match self {
                    $( Self::$variant(value) => $handler(value), )+
                }
            }

            /// Eliminates the union asynchronously.
            ///
            /// Only the live arm's handler is called, so only its future is ever created
            /// and awaited; the other handlers stay untouched. Errors or cancellation of
            /// the selected future propagate unchanged.
            pub async fn match_future<Out, $($future),+>(
                self,
                $( $handler: impl FnOnce($payload) -> $future, )+
            ) -> Out
            where
                $( $future: std::future::Future<Output = Out>, )+
            {
                match self {
                    $( Self::$variant(value) => $handler(value).await, )+
                }
            }

            $(
                #[doc = concat!(
                    "Returns `true` if the live arm is [`", stringify!($variant),
                    "`](Self::", stringify!($variant), ").",
                )]
                #[must_use]
                pub const fn $is(&self) -> bool {
                    matches!(self, Self::$variant(_))
                }

                #[doc = concat!(
                    "Chains a computation onto the [`", stringify!($variant),
                    "`](Self::", stringify!($variant), ") arm.\n\n",
                    "When that arm is live, returns `chain(payload)` directly, which may \
                    land in any arm of the resulting union. Any other arm is re-tagged \
                    into the output type with its payload untouched, and `chain` is never \
                    invoked.",
                )]
                pub fn $bind<Out>(
                    self,
                    chain: impl FnOnce($payload) -> $name<$($before,)* Out $(, $after)*>,
                ) -> $name<$($before,)* Out $(, $after)*> {
                    match self {
                        Self::$variant(value) => chain(value),
                        $( Self::$sibling(value) => $name::$sibling(value), )*
                    }
                }

                #[doc = concat!(
                    "Chains an asynchronous computation onto the [`", stringify!($variant),
                    "`](Self::", stringify!($variant), ") arm.\n\n",
                    "When any other arm is live it is re-tagged immediately; `chain` is \
                    never invoked and no future is created or awaited.",
                )]
                pub async fn $bind_async<Out, Fut>(
                    self,
                    chain: impl FnOnce($payload) -> Fut,
                ) -> $name<$($before,)* Out $(, $after)*>
                where
                    Fut: std::future::Future<Output = $name<$($before,)* Out $(, $after)*>>,
                {
                    match self {
                        Self::$variant(value) => chain(value).await,
                        $( Self::$sibling(value) => $name::$sibling(value), )*
                    }
                }

                #[doc = concat!(
                    "Transforms the payload of the [`", stringify!($variant),
                    "`](Self::", stringify!($variant), ") arm, keeping the union shape.\n\n",
                    "Any other arm passes through untouched; only its type parameter list \
                    changes.",
                )]
                pub fn $map<Out>(
                    self,
                    transform: impl FnOnce($payload) -> Out,
                ) -> $name<$($before,)* Out $(, $after)*> {
                    match self {
                        Self::$variant(value) => $name::$variant(transform(value)),
                        $( Self::$sibling(value) => $name::$sibling(value), )*
                    }
                }

                #[doc = concat!(
                    "Transforms the payload of the [`", stringify!($variant),
                    "`](Self::", stringify!($variant), ") arm asynchronously.\n\n",
                    "The transformation future is only created and awaited when that arm \
                    is live.",
                )]
                pub async fn $map_async<Out, Fut>(
                    self,
                    transform: impl FnOnce($payload) -> Fut,
                ) -> $name<$($before,)* Out $(, $after)*>
                where
                    Fut: std::future::Future<Output = Out>,
                {
                    match self {
                        Self::$variant(value) => $name::$variant(transform(value).await),
                        $( Self::$sibling(value) => $name::$sibling(value), )*
                    }
                }

                #[doc = concat!(
                    "Runs `inspect` on a borrow of the payload if the [`",
                    stringify!($variant), "`](Self::", stringify!($variant),
                    ") arm is live, then returns the union unchanged.\n\n",
                    "Allows observers to be chained fluently across arms without altering \
                    control flow.",
                )]
                pub fn $on(self, inspect: impl FnOnce(&$payload)) -> Self {
                    if let Self::$variant(value) = &self {
                        inspect(value);
                    }
                    self
                }

                #[doc = concat!(
                    "Awaits an asynchronous observer of the [`", stringify!($variant),
                    "`](Self::", stringify!($variant),
                    ") arm, then returns the union unchanged.\n\n",
                    "The observer's future is only created and awaited when that arm is \
                    live.",
                )]
                pub async fn $on_async<Fut>(
                    self,
                    inspect: impl FnOnce(&$payload) -> Fut,
                ) -> Self
                where
                    Fut: std::future::Future<Output = ()>,
                {
                    if let Self::$variant(value) = &self {
                        inspect(value).await;
                    }
                    self
                }
            )+
        }
    };
}
