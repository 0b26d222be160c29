// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Domain errors carried as data: the tagged [`Error`] family and the ordered,
//! non-empty [`ErrorList`] that [`Outcome`](crate::Outcome) aggregates them in.

use std::{collections::BTreeMap, fmt, iter, sync::Arc};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How serious a domain error is.
///
/// Levels are ordered from least to most severe.
#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize,
)]
pub enum Severity {
    /// Purely informational.
    Info,
    /// Something unexpected that did not prevent the operation.
    Warning,
    /// The operation failed.
    Error,
    /// The operation failed because of an underlying exceptional cause.
    Fault,
}

impl fmt::Display for Severity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fault => "fault",
        };
        write!(formatter, "{name}")
    }
}

/// The descriptive fields every domain error carries.
///
/// Consumed by code that aggregates errors inside an [`ErrorList`] without caring which
/// concrete variant it is looking at.
pub trait ErrorDetail {
    /// A short human-readable summary.
    fn title(&self) -> &str;

    /// A longer description of what went wrong.
    fn description(&self) -> &str;

    /// A stable machine-readable identifier.
    fn code(&self) -> &str;

    /// Where to read more about this error, if anywhere.
    fn help_link(&self) -> Option<&str> {
        None
    }

    /// How serious this error is.
    fn severity(&self) -> Severity;
}

/// A generic domain error.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub struct Failure {
    title: String,
    description: String,
    code: String,
    help_link: Option<String>,
    severity: Severity,
}

impl Failure {
    /// Creates a failure with [`Severity::Error`] and no help link.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Failure {
            title: title.into(),
            description: description.into(),
            code: code.into(),
            help_link: None,
            severity: Severity::Error,
        }
    }

    /// Attaches a link with more information about the error.
    pub fn with_help_link(mut self, help_link: impl Into<String>) -> Self {
        self.help_link = Some(help_link.into());
        self
    }

    /// Overrides the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl ErrorDetail for Failure {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn code(&self) -> &str {
        &self.code
    }

    fn help_link(&self) -> Option<&str> {
        self.help_link.as_deref()
    }

    fn severity(&self) -> Severity {
        self.severity
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} [{}]: {}",
            self.title, self.code, self.description
        )
    }
}

impl std::error::Error for Failure {}

/// A domain error that wraps a captured exceptional cause.
///
/// The severity is fixed at [`Severity::Fault`]; the cause is shared, so cloning a fault
/// never loses it.
#[derive(Clone, Debug)]
pub struct Fault {
    title: String,
    description: String,
    code: String,
    help_link: Option<String>,
    cause: Arc<dyn std::error::Error + Send + Sync>,
}

impl Fault {
    /// Creates a fault wrapping `cause`.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        code: impl Into<String>,
        cause: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Fault {
            title: title.into(),
            description: description.into(),
            code: code.into(),
            help_link: None,
            cause: Arc::new(cause),
        }
    }

    /// Attaches a link with more information about the error.
    pub fn with_help_link(mut self, help_link: impl Into<String>) -> Self {
        self.help_link = Some(help_link.into());
        self
    }

    /// The captured cause.
    pub fn cause(&self) -> &(dyn std::error::Error + 'static) {
        &*self.cause as &(dyn std::error::Error + 'static)
    }
}

impl ErrorDetail for Fault {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn code(&self) -> &str {
        &self.code
    }

    fn help_link(&self) -> Option<&str> {
        self.help_link.as_deref()
    }

    fn severity(&self) -> Severity {
        Severity::Fault
    }
}

// Two faults are equal when their descriptive fields match and they share the same
// captured cause.
impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.description == other.description
            && self.code == other.code
            && self.help_link == other.help_link
            && Arc::ptr_eq(&self.cause, &other.cause)
    }
}

impl Eq for Fault {}

impl fmt::Display for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} [{}]: {}",
            self.title, self.code, self.description
        )
    }
}

impl std::error::Error for Fault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.cause())
    }
}

#[derive(Deserialize, Serialize)]
#[serde(rename = "Fault")]
struct FaultMirror {
    title: String,
    description: String,
    code: String,
    help_link: Option<String>,
    cause: String,
}

/// A cause restored from a serialized [`Fault`]; only its message survives the trip.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{_0}")]
struct OpaqueCause(String);

impl Serialize for Fault {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FaultMirror {
            title: self.title.clone(),
            description: self.description.clone(),
            code: self.code.clone(),
            help_link: self.help_link.clone(),
            cause: self.cause.to_string(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Fault {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mirror = FaultMirror::deserialize(deserializer)?;
        Ok(Fault {
            title: mirror.title,
            description: mirror.description,
            code: mirror.code,
            help_link: mirror.help_link,
            cause: Arc::new(OpaqueCause(mirror.cause)),
        })
    }
}

/// A domain error describing a rejected field value.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub struct Validation {
    title: String,
    description: String,
    code: String,
    help_link: Option<String>,
    severity: Severity,
    property_name: String,
    property_path: String,
    attempted_value: String,
    context: BTreeMap<String, String>,
}

impl Validation {
    /// Creates a validation error for `property_name` at `property_path`, rejecting
    /// `attempted_value`, with [`Severity::Error`] and an empty context.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        code: impl Into<String>,
        property_name: impl Into<String>,
        property_path: impl Into<String>,
        attempted_value: impl Into<String>,
    ) -> Self {
        Validation {
            title: title.into(),
            description: description.into(),
            code: code.into(),
            help_link: None,
            severity: Severity::Error,
            property_name: property_name.into(),
            property_path: property_path.into(),
            attempted_value: attempted_value.into(),
            context: BTreeMap::new(),
        }
    }

    /// Attaches a link with more information about the error.
    pub fn with_help_link(mut self, help_link: impl Into<String>) -> Self {
        self.help_link = Some(help_link.into());
        self
    }

    /// Overrides the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Adds one entry to the context map.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// The name of the rejected property.
    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    /// Where the rejected property lives in the validated structure.
    pub fn property_path(&self) -> &str {
        &self.property_path
    }

    /// The value that was rejected, rendered as text.
    pub fn attempted_value(&self) -> &str {
        &self.attempted_value
    }

    /// Extra key-value details about the rejection.
    pub fn context(&self) -> &BTreeMap<String, String> {
        &self.context
    }
}

impl ErrorDetail for Validation {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn code(&self) -> &str {
        &self.code
    }

    fn help_link(&self) -> Option<&str> {
        self.help_link.as_deref()
    }

    fn severity(&self) -> Severity {
        self.severity
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} [{}]: {} (property `{}` at `{}` rejected value `{}`)",
            self.title,
            self.code,
            self.description,
            self.property_name,
            self.property_path,
            self.attempted_value
        )
    }
}

impl std::error::Error for Validation {}

/// Any member of the domain error family.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error, Deserialize, Serialize)]
pub enum Error {
    /// A generic domain error.
    #[error(transparent)]
    Failure(#[from] Failure),
    /// A domain error wrapping a captured exceptional cause.
    #[error(transparent)]
    Fault(#[from] Fault),
    /// A rejected field value.
    #[error(transparent)]
    Validation(#[from] Validation),
}

impl ErrorDetail for Error {
    fn title(&self) -> &str {
        match self {
            Error::Failure(failure) => failure.title(),
            Error::Fault(fault) => fault.title(),
            Error::Validation(validation) => validation.title(),
        }
    }

    fn description(&self) -> &str {
        match self {
            Error::Failure(failure) => failure.description(),
            Error::Fault(fault) => fault.description(),
            Error::Validation(validation) => validation.description(),
        }
    }

    fn code(&self) -> &str {
        match self {
            Error::Failure(failure) => failure.code(),
            Error::Fault(fault) => fault.code(),
            Error::Validation(validation) => validation.code(),
        }
    }

    fn help_link(&self) -> Option<&str> {
        match self {
            Error::Failure(failure) => failure.help_link(),
            Error::Fault(fault) => fault.help_link(),
            Error::Validation(validation) => validation.help_link(),
        }
    }

    fn severity(&self) -> Severity {
        match self {
            Error::Failure(failure) => failure.severity(),
            Error::Fault(fault) => fault.severity(),
            Error::Validation(validation) => validation.severity(),
        }
    }
}

/// Attempt to build an [`ErrorList`] with no entries.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("an error list must contain at least one error")]
pub struct EmptyErrorList;

/// An ordered sequence of at least one [`Error`].
///
/// Non-emptiness is structural: the first error and the rest are stored separately, so
/// an empty list cannot be represented.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ErrorList {
    head: Error,
    tail: Vec<Error>,
}

impl ErrorList {
    /// Creates a list containing a single error.
    pub fn new(first: impl Into<Error>) -> Self {
        ErrorList {
            head: first.into(),
            tail: Vec::new(),
        }
    }

    /// Appends one error, preserving the order of the existing entries.
    pub fn push(&mut self, error: impl Into<Error>) {
        self.tail.push(error.into());
    }

    /// Appends every entry of `other`, preserving the order of both lists.
    pub fn merge(&mut self, other: ErrorList) {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
    }

    /// The first error in the list.
    pub fn first(&self) -> &Error {
        &self.head
    }

    /// How many errors the list holds. Always at least one.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`: the list holds at least one error by construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the errors in order.
    pub fn iter(&self) -> impl Iterator<Item = &Error> {
        iter::once(&self.head).chain(self.tail.iter())
    }
}

impl<E> From<E> for ErrorList
where
    E: Into<Error>,
{
    fn from(error: E) -> Self {
        ErrorList::new(error)
    }
}

impl TryFrom<Vec<Error>> for ErrorList {
    type Error = EmptyErrorList;

    fn try_from(entries: Vec<Error>) -> Result<Self, EmptyErrorList> {
        let mut entries = entries.into_iter();
        let head = entries.next().ok_or(EmptyErrorList)?;
        Ok(ErrorList {
            head,
            tail: entries.collect(),
        })
    }
}

impl IntoIterator for ErrorList {
    type Item = Error;
    type IntoIter = iter::Chain<iter::Once<Error>, std::vec::IntoIter<Error>>;

    fn into_iter(self) -> Self::IntoIter {
        iter::once(self.head).chain(self.tail)
    }
}

impl Extend<Error> for ErrorList {
    fn extend<I: IntoIterator<Item = Error>>(&mut self, errors: I) {
        self.tail.extend(errors);
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, "; ")?;
            }
            write!(formatter, "{error}")?;
        }
        Ok(())
    }
}

impl Serialize for ErrorList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for ErrorList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<Error>::deserialize(deserializer)?;
        ErrorList::try_from(entries).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use assert_matches::assert_matches;

    use super::{EmptyErrorList, Error, ErrorDetail, ErrorList, Failure, Fault, Severity, Validation};

    #[test]
    fn severity_levels_are_ordered() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Fault);
    }

    #[test]
    fn failure_defaults_and_builders() {
        let failure = Failure::new("Not found", "No such customer", "customer.missing");

        assert_eq!(failure.severity(), Severity::Error);
        assert_eq!(failure.help_link(), None);

        let failure = failure
            .with_severity(Severity::Warning)
            .with_help_link("https://example.com/errors/customer.missing");

        assert_eq!(failure.severity(), Severity::Warning);
        assert_eq!(
            failure.help_link(),
            Some("https://example.com/errors/customer.missing")
        );
    }

    #[test]
    fn fault_severity_is_fixed_and_cause_is_exposed() {
        let cause = io::Error::new(io::ErrorKind::ConnectionReset, "connection reset");
        let fault = Fault::new("Storage failed", "Could not reach the store", "store.io", cause);

        assert_eq!(fault.severity(), Severity::Fault);
        assert_eq!(fault.cause().to_string(), "connection reset");

        let error = Error::from(fault);
        assert_eq!(
            std::error::Error::source(&error).map(ToString::to_string),
            Some("connection reset".to_owned())
        );
    }

    #[test]
    fn fault_equality_follows_the_shared_cause() {
        let cause = io::Error::new(io::ErrorKind::Other, "boom");
        let fault = Fault::new("Crashed", "It crashed", "crash", cause);
        let clone = fault.clone();

        assert_eq!(fault, clone);

        let other_cause = io::Error::new(io::ErrorKind::Other, "boom");
        let lookalike = Fault::new("Crashed", "It crashed", "crash", other_cause);

        assert_ne!(fault, lookalike);
    }

    #[test]
    fn validation_carries_property_details() {
        let validation = Validation::new(
            "Invalid age",
            "Age must be non-negative",
            "age.negative",
            "age",
            "customer.age",
            "-3",
        )
        .with_context("minimum", "0");

        assert_eq!(validation.property_name(), "age");
        assert_eq!(validation.property_path(), "customer.age");
        assert_eq!(validation.attempted_value(), "-3");
        assert_eq!(
            validation.context().get("minimum").map(String::as_str),
            Some("0")
        );
        assert_eq!(validation.severity(), Severity::Error);
    }

    #[test]
    fn error_list_preserves_order() {
        let mut errors = ErrorList::new(Failure::new("first", "first", "1"));
        errors.push(Failure::new("second", "second", "2"));
        errors.merge(ErrorList::new(Failure::new("third", "third", "3")));

        assert_eq!(errors.len(), 3);
        let codes: Vec<_> = errors.iter().map(ErrorDetail::code).collect();
        assert_eq!(codes, ["1", "2", "3"]);
    }

    #[test]
    fn error_list_rejects_emptiness() {
        assert_matches!(ErrorList::try_from(Vec::new()), Err(EmptyErrorList));

        let entries = vec![Error::from(Failure::new("only", "only", "only"))];
        let errors = ErrorList::try_from(entries).expect("one entry is enough");
        assert_eq!(errors.first().code(), "only");
    }

    #[test]
    fn failure_roundtrips_through_serde() {
        let failure = Failure::new("Not found", "No such customer", "customer.missing")
            .with_severity(Severity::Warning)
            .with_help_link("https://example.com/errors/customer.missing");

        let serialized = serde_json::to_string(&failure).expect("serialization failed");
        let deserialized: Failure =
            serde_json::from_str(&serialized).expect("deserialization failed");

        assert_eq!(deserialized, failure);
    }

    /// A fault's cause is a trait object, so only its message survives a serde trip; the
    /// descriptive fields come back untouched.
    #[test]
    fn fault_roundtrips_through_serde_with_an_opaque_cause() {
        let cause = io::Error::new(io::ErrorKind::NotConnected, "disk unplugged");
        let fault = Fault::new("Storage failed", "Could not reach the store", "store.io", cause)
            .with_help_link("https://example.com/errors/store.io");

        let serialized = serde_json::to_string(&fault).expect("serialization failed");
        let deserialized: Fault =
            serde_json::from_str(&serialized).expect("deserialization failed");

        assert_eq!(deserialized.title(), fault.title());
        assert_eq!(deserialized.description(), fault.description());
        assert_eq!(deserialized.code(), fault.code());
        assert_eq!(deserialized.help_link(), fault.help_link());
        assert_eq!(deserialized.severity(), Severity::Fault);
        assert_eq!(deserialized.cause().to_string(), "disk unplugged");
    }

    #[test]
    fn deserializing_an_empty_error_list_is_rejected() {
        let rejection = serde_json::from_str::<ErrorList>("[]")
            .expect_err("an empty list must be rejected")
            .to_string();

        assert!(rejection.contains("at least one error"));
    }

    #[test]
    fn display_is_stable() {
        let failure = Failure::new("Not found", "No such customer", "customer.missing");
        assert_eq!(
            failure.to_string(),
            "Not found [customer.missing]: No such customer"
        );

        let mut errors = ErrorList::new(failure);
        errors.push(Failure::new("Timeout", "The store timed out", "store.timeout"));
        assert_eq!(
            errors.to_string(),
            "Not found [customer.missing]: No such customer; \
             Timeout [store.timeout]: The store timed out"
        );
    }
}
