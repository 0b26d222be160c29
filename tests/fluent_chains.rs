// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Integration tests chaining the union types, outcomes and domain errors together.

use eithers::{
    Either, Either3, ErrorDetail, ErrorList, Failure, Outcome, Severity, Validation,
};
use futures::future;

/// A request classified into one of three shapes.
type Request = Either3<u64, String, ()>;

fn classify(raw: &str) -> Request {
    if let Ok(id) = raw.parse::<u64>() {
        Either3::First(id)
    } else if raw.is_empty() {
        Either3::Third(())
    } else {
        Either3::Second(raw.to_owned())
    }
}

fn validate_name(name: String) -> Outcome<String> {
    if name.chars().all(char::is_alphanumeric) {
        Outcome::Success(name)
    } else {
        Outcome::failure(Validation::new(
            "Invalid name",
            "Names must be alphanumeric",
            "name.charset",
            "name",
            "request.name",
            name,
        ))
    }
}

#[test]
fn a_pipeline_observes_binds_and_eliminates() {
    let mut trace = Vec::new();

    let response = classify("42")
        .on_first(|id| trace.push(format!("id {id}")))
        .on_second(|name| trace.push(format!("name {name}")))
        .bind_first(|id| {
            if id < 100 {
                Either3::First(id * 10)
            } else {
                Either3::Second("overflow".to_owned())
            }
        })
        .match_with(
            |id| format!("record #{id}"),
            |name| format!("lookup {name}"),
            |()| "pong".to_owned(),
        );

    assert_eq!(response, "record #420");
    assert_eq!(trace, ["id 42"]);
}

#[test]
fn validation_failures_surface_as_outcomes() {
    let outcome = classify("not valid!").match_with(
        |_| Outcome::Success("by id".to_owned()),
        validate_name,
        |()| Outcome::Success("pong".to_owned()),
    );

    let errors = outcome.match_with(
        |_| unreachable!("validation must reject the name"),
        |errors| errors,
    );

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.first().code(), "name.charset");
    assert_eq!(errors.first().severity(), Severity::Error);
}

#[tokio::test]
async fn asynchronous_and_synchronous_pipelines_agree() {
    let raw = "carol";

    let concurrent = classify(raw)
        .bind_second_async(|name| future::ready(Either3::Second(name.to_uppercase())))
        .await
        .match_future(
            |id| future::ready(format!("#{id}")),
            |name| future::ready(name),
            |()| future::ready("pong".to_owned()),
        )
        .await;

    let sync = classify(raw)
        .bind_second(|name| Either3::Second(name.to_uppercase()))
        .match_with(|id| format!("#{id}"), |name| name, |()| "pong".to_owned());

    assert_eq!(concurrent, sync);
    assert_eq!(concurrent, "CAROL");
}

#[test]
fn accumulated_errors_survive_a_serde_roundtrip() {
    let mut errors = ErrorList::new(Failure::new(
        "Not found",
        "No such customer",
        "customer.missing",
    ));
    errors.push(
        Validation::new(
            "Invalid age",
            "Age must be non-negative",
            "age.negative",
            "age",
            "customer.age",
            "-3",
        )
        .with_context("minimum", "0"),
    );

    let outcome = Outcome::<u32>::Failure(errors);

    let serialized = serde_json::to_string(&outcome).expect("serialization failed");
    let deserialized: Outcome<u32> =
        serde_json::from_str(&serialized).expect("deserialization failed");

    assert_eq!(deserialized, outcome);
}

#[test]
fn two_armed_unions_interoperate_with_outcomes() {
    let parsed: Either<Failure, u32> = match "17".parse() {
        Ok(number) => Either::Right(number),
        Err(_) => Either::Left(Failure::new("Bad number", "Expected digits", "parse.digits")),
    };

    let outcome: Outcome<u32> = parsed.match_with(|failure| Outcome::failure(failure), Outcome::Success);

    assert_eq!(outcome, Outcome::Success(17));
}
