//! Failure kinds and sample classification.
//!
//! A probe failure carries a [`FailureKind`] tag; the wait loop matches the
//! tag against the configured ignore set to decide retry versus propagate.
//! The conversions into [`Sample`] replace value inspection (null / false)
//! with explicit tagging.

use std::fmt;

use super::probe::Sample;

/// Tag identifying a family of probe failures.
///
/// Kinds are plain interned names; membership in the ignore set is tag
/// equality. Declare them as constants next to the error type they
/// describe:
///
/// `const NOT_FOUND: FailureKind = FailureKind::new("not-found");`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FailureKind(&'static str);

impl FailureKind {
    pub const fn new(name: &'static str) -> Self {
        FailureKind(name)
    }

    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Implemented by probe error types so the wait loop can match a failure
/// against the ignore set. Each error maps to exactly one kind.
pub trait Classify {
    fn kind(&self) -> FailureKind;
}

impl<E> From<bool> for Sample<bool, E> {
    /// `true` is ready (and is the value handed back); `false` is not yet.
    fn from(flag: bool) -> Self {
        if flag {
            Sample::Ready(true)
        } else {
            Sample::NotYet
        }
    }
}

impl<T, E> From<Option<T>> for Sample<T, E> {
    /// `Some` is ready; `None` is not yet.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Sample::Ready(v),
            None => Sample::NotYet,
        }
    }
}

impl<T, E> From<Result<Option<T>, E>> for Sample<T, E> {
    /// The common probe shape: a fallible lookup that may find nothing yet.
    fn from(result: Result<Option<T>, E>) -> Self {
        match result {
            Ok(value) => value.into(),
            Err(e) => Sample::Failed(e),
        }
    }
}

impl<E> From<Result<bool, E>> for Sample<bool, E> {
    /// A fallible flag check: `Ok(true)` is ready, `Ok(false)` is not yet.
    fn from(result: Result<bool, E>) -> Self {
        match result {
            Ok(flag) => flag.into(),
            Err(e) => Sample::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Boom;

    #[test]
    fn true_is_ready_false_is_not_yet() {
        assert_eq!(Sample::<bool, Boom>::from(true), Sample::Ready(true));
        assert_eq!(Sample::<bool, Boom>::from(false), Sample::NotYet);
    }

    #[test]
    fn some_is_ready_none_is_not_yet() {
        assert_eq!(Sample::<u32, Boom>::from(Some(7)), Sample::Ready(7));
        assert_eq!(Sample::<u32, Boom>::from(None), Sample::NotYet);
    }

    #[test]
    fn fallible_lookup_maps_err_to_failed() {
        let ready: Sample<u32, Boom> = Ok(Some(1)).into();
        assert_eq!(ready, Sample::Ready(1));
        let pending: Sample<u32, Boom> = Ok(None).into();
        assert_eq!(pending, Sample::NotYet);
        let failed: Sample<u32, Boom> = Err(Boom).into();
        assert_eq!(failed, Sample::Failed(Boom));
    }

    #[test]
    fn kinds_compare_by_name() {
        const A: FailureKind = FailureKind::new("not-found");
        const B: FailureKind = FailureKind::new("not-found");
        const C: FailureKind = FailureKind::new("parse");
        assert_eq!(A, B);
        assert_ne!(A, C);
        assert_eq!(A.name(), "not-found");
        assert_eq!(C.to_string(), "parse");
    }
}
