//! Poll loop: evaluate a probe until ready, fatal failure, timeout, or
//! abort.

use crate::clock::Clock;
use crate::control::AbortToken;

use super::classify::Classify;
use super::error::WaitError;
use super::policy::WaitConfig;
use super::probe::{Probe, Sample};

/// Runs `probe` until it reports ready or the configured deadline passes.
///
/// The deadline is computed once at entry from `clock` and checked
/// strictly after each evaluation, so a probe that is ready on its first
/// sample satisfies even a zero timeout. Failures whose kind is in the
/// ignore set are retried and remembered as the candidate timeout cause;
/// any other failure returns immediately, without sleeping, with the
/// probe's error unmodified.
pub fn run_until<C, P>(
    clock: &C,
    config: &WaitConfig,
    abort: Option<&AbortToken>,
    probe: &mut P,
) -> Result<P::Output, WaitError<P::Error>>
where
    C: Clock,
    P: Probe,
    P::Error: Classify,
{
    let deadline = clock.now() + config.timeout;
    let mut last_failure: Option<P::Error> = None;

    loop {
        if let Some(token) = abort {
            if token.is_aborted() {
                return Err(WaitError::Aborted);
            }
        }

        match probe.sample() {
            Sample::Ready(value) => return Ok(value),
            Sample::NotYet => {
                // A not-yet sample is not an error; it must never surface
                // as the timeout's cause, even if a failure came earlier.
                last_failure = None;
            }
            Sample::Failed(e) => {
                let kind = e.kind();
                if config.is_ignored(kind) {
                    tracing::debug!(%kind, probe = probe.describe(), "ignored probe failure, retrying");
                    last_failure = Some(e);
                } else {
                    return Err(WaitError::Fatal(e));
                }
            }
        }

        // Checked after the attempt so a zero timeout still gets one
        // evaluation in.
        if clock.now() > deadline {
            let awaited = match &config.message {
                Some(m) => m.clone(),
                None => format!("waiting for {}", probe.describe()),
            };
            let message = format!(
                "condition failed: {} (tried for {} second(s) with {} ms interval)",
                awaited,
                config.timeout.as_secs(),
                config.interval.as_millis(),
            );
            tracing::debug!(probe = probe.describe(), "wait timed out");
            return Err(WaitError::Timeout {
                message,
                cause: last_failure,
            });
        }

        clock.sleep(config.interval);
    }
}
