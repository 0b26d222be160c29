// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! A disjoint union of eight alternatives.

define_either! {
    /// A value that is exactly one of eight alternatives.
    ///
    /// Constructed directly through its variants, which act as the arm factories, for
    /// example `Either8::Second(value)`. Construction never fails, and the value is
    /// immutable afterwards: every operation consumes the union and produces a new one.
    pub enum Either8<A, B, C, D, E, F, G, H> {
        /// The value is in the first arm.
        First(A) {
            handler: on_first,
            future: FutFirst,
            is: is_first,
            bind: bind_first, bind_first_async,
            map: map_first, map_first_async,
            on: on_first, on_first_async,
            before: [],
            after: [B, C, D, E, F, G, H],
            siblings: [Second, Third, Fourth, Fifth, Sixth, Seventh, Eighth],
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
            after: [C, D, E, F, G, H],
            siblings: [First, Third, Fourth, Fifth, Sixth, Seventh, Eighth],
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
            after: [D, E, F, G, H],
            siblings: [First, Second, Fourth, Fifth, Sixth, Seventh, Eighth],
        }
        /// The value is in the fourth arm.
        Fourth(D) {
            handler: on_fourth,
            future: FutFourth,
            is: is_fourth,
            bind: bind_fourth, bind_fourth_async,
            map: map_fourth, map_fourth_async,
            on: on_fourth, on_fourth_async,
            before: [A, B, C],
            after: [E, F, G, H],
            siblings: [First, Second, Third, Fifth, Sixth, Seventh, Eighth],
        }
        /// The value is in the fifth arm.
        Fifth(E) {
            handler: on_fifth,
            future: FutFifth,
            is: is_fifth,
            bind: bind_fifth, bind_fifth_async,
            map: map_fifth, map_fifth_async,
            on: on_fifth, on_fifth_async,
            before: [A, B, C, D],
            after: [F, G, H],
            siblings: [First, Second, Third, Fourth, Sixth, Seventh, Eighth],
        }
        /// The value is in the sixth arm.
        Sixth(F) {
            handler: on_sixth,
            future: FutSixth,
            is: is_sixth,
            bind: bind_sixth, bind_sixth_async,
            map: map_sixth, map_sixth_async,
            on: on_sixth, on_sixth_async,
            before: [A, B, C, D, E],
            after: [G, H],
            siblings: [First, Second, Third, Fourth, Fifth, Seventh, Eighth],
        }
        /// The value is in the seventh arm.
        Seventh(G) {
            handler: on_seventh,
            future: FutSeventh,
            is: is_seventh,
            bind: bind_seventh, bind_seventh_async,
            map: map_seventh, map_seventh_async,
            on: on_seventh, on_seventh_async,
            before: [A, B, C, D, E, F],
            after: [H],
            siblings: [First, Second, Third, Fourth, Fifth, Sixth, Eighth],
        }
        /// The value is in the eighth arm.
        Eighth(H) {
            handler: on_eighth,
            future: FutEighth,
            is: is_eighth,
            bind: bind_eighth, bind_eighth_async,
            map: map_eighth, map_eighth_async,
            on: on_eighth, on_eighth_async,
            before: [A, B, C, D, E, F, G],
            after: [],
            siblings: [First, Second, Third, Fourth, Fifth, Sixth, Seventh],
        }
    }
}
