//! The probe abstraction: a repeatedly evaluable condition.

/// Outcome of a single probe evaluation.
///
/// The probe decides the classification itself; the wait loop never
/// inspects values after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample<T, E> {
    /// Condition satisfied; the value is handed back to the caller.
    Ready(T),
    /// Condition not yet satisfied. Retried silently; never reported as a
    /// timeout's cause.
    NotYet,
    /// Probe failed. Matched against the ignore set to decide retry
    /// versus immediate propagation.
    Failed(E),
}

/// A pollable condition, evaluated once per attempt until it is ready or
/// the wait runs out of time.
///
/// Idempotence across evaluations is the implementor's concern; the wait
/// loop may call `sample` any number of times.
pub trait Probe {
    type Output;
    type Error;

    /// Evaluate the condition once.
    fn sample(&mut self) -> Sample<Self::Output, Self::Error>;

    /// Human-readable description of what is being awaited; embedded in
    /// generated timeout messages.
    fn describe(&self) -> &str;
}

/// Probe built from a closure plus an explicit description.
pub struct ProbeFn<F> {
    description: String,
    f: F,
}

/// Wraps a closure as a [`Probe`].
///
/// The description is required: timeout messages must say what was being
/// awaited, and closures have no usable name of their own.
pub fn probe<T, E, F>(description: impl Into<String>, f: F) -> ProbeFn<F>
where
    F: FnMut() -> Sample<T, E>,
{
    ProbeFn {
        description: description.into(),
        f,
    }
}

impl<T, E, F> Probe for ProbeFn<F>
where
    F: FnMut() -> Sample<T, E>,
{
    type Output = T;
    type Error = E;

    fn sample(&mut self) -> Sample<T, E> {
        (self.f)()
    }

    fn describe(&self) -> &str {
        &self.description
    }
}
