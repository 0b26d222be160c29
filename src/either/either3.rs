// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! A disjoint union of three alternatives.

define_either! {
    /// A value that is exactly one of three alternatives.
    ///
    /// Constructed directly through its variants, which act as the arm factories, for
    /// example `Either3::Second(value)`. Construction never fails, and the value is
    /// immutable afterwards: every operation consumes the union and produces a new one.
    pub enum Either3<A, B, C> {
        /// The value is in the first arm.
        First(A) {
            handler: on_first,
            future: FutFirst,
            is: is_first,
            bind: bind_first, bind_first_async,
            map: map_first, map_first_async,
            on: on_first, on_first_async,
            before: [],
            after: [B, C],
            siblings: [Second, Third],
        }
        /// The value is in the second arm.
        Second(B) {
            handler: on_second,
            future: FutSecond,
            is: is_second,
            bind: bind_second, bind_second_async,
            map: map_second, map_second_async,
            on: on_second, on_second_async,
            before: [A],
            after: [C],
            siblings: [First, Third],
        }
        /// The value is in the third arm.
        Third(C) {
            handler: on_third,
            future: FutThird,
            is: is_third,
            bind: bind_third, bind_third_async,
            map: map_third, map_third_async,
            on: on_third, on_third_async,
            before: [A, B],
            after: [],
            siblings: [First, Second],
        }
    }
}
