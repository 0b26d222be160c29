// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The two-alternative union, with the conventional `Left`/`Right` arm names.

define_either! {
    /// A value that is exactly one of two alternatives.
    ///
    /// Constructed directly through its variants, which act as the arm factories:
    /// `Either::Left(value)` or `Either::Right(value)`. Construction never fails, and
    /// the value is immutable afterwards: every operation consumes the union and
    /// produces a new one.
    pub enum Either<L, R> {
        /// The value is in the left arm.
        Left(L) {
            handler: on_left,
            future: FutLeft,
            is: is_left,
            bind: bind_left, bind_left_async,
            map: map_left, map_left_async,
            on: on_left, on_left_async,
            before: [],
            after: [R],
            siblings: [Right],
        }
        /// The value is in the right arm.
        Right(R) {
            handler: on_right,
            future: FutRight,
            is: is_right,
            bind: bind_right, bind_right_async,
            map: map_right, map_right_async,
            on: on_right, on_right_async,
            before: [L],
            after: [],
            siblings: [Left],
        }
    }
}

impl<L, R> Either<L, R> {
    /// Swaps the arms, turning a `Left` into a `Right` and vice versa.
    pub fn flip(self) -> Either<R, L> {
        match self {
            Either::Left(left) => Either::Right(left),
            Either::Right(right) => Either::Left(right),
        }
    }
}
