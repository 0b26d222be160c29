// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The `Either` family: closed disjoint unions of two to eight alternatives.
//!
//! Each arity is generated from the same `define_either!` template, so every member
//! exposes the same operation set: `match_with`/`match_future` for exhaustive
//! elimination, `bind_*`/`map_*` for arm-local chaining and transformation, and
//! `on_*` for fluent observation, each in synchronous and asynchronous forms.

mod either2;
mod either3;
mod either4;
mod either5;
mod either6;
mod either7;
mod either8;


pub use self::{
    either2::Either, either3::Either3, either4::Either4, either5::Either5, either6::Either6,
    either7::Either7, either8::Either8,
};
