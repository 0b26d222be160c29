// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Eithers
//!
//! A small library of generic algebraic data types: closed disjoint unions of two to
//! eight alternatives ([`Either`] through [`Either8`]), an [`Outcome`] type that carries
//! either a success value or an ordered, non-empty list of domain errors, and the tagged
//! error family ([`Failure`], [`Fault`], [`Validation`]) those lists aggregate.
//!
//! Every union exposes the same operation set, generated from a single template:
//! exhaustive elimination (`match_with`/`match_future`), arm-local monadic chaining
//! (`bind_*`), arm-local mapping (`map_*`), and fluent side-effecting observation
//! (`on_*`), each in synchronous and asynchronous forms. Only the live arm's handler
//! ever runs, and asynchronous handlers for other arms are never even constructed.
//!
//! ```
//! use eithers::Either3;
//!
//! let status: Either3<u64, &str, bool> = Either3::Second("pending");
//!
//! let description = status
//!     .map_second(str::to_uppercase)
//!     .on_third(|done| println!("done: {done}"))
//!     .match_with(
//!         |id| format!("queued as #{id}"),
//!         |state| format!("currently {state}"),
//!         |done| format!("finished: {done}"),
//!     );
//!
//! assert_eq!(description, "currently PENDING");
//! ```

#![deny(missing_docs)]

#[macro_use]
mod macro_utils;

mod either;
mod errors;
mod option_ext;
mod outcome;

pub use self::{
    either::{Either, Either3, Either4, Either5, Either6, Either7, Either8},
    errors::{EmptyErrorList, Error, ErrorDetail, ErrorList, Failure, Fault, Severity, Validation},
    option_ext::OptionExt,
    outcome::Outcome,
};
