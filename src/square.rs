//! Delayed squaring.
//!
//! Every entry point checks the input before any timer exists: a negative
//! number is rejected on the first poll (or synchronously, for
//! `spawn_square`) and never waits out the delay.

use crate::error::SnippetError;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, warn};

pub const SQUARE_DELAY: Duration = Duration::from_secs(1);

fn check_non_negative(n: f64) -> Result<(), SnippetError> {
    if n < 0.0 {
        warn!(value = n, "rejecting negative input");
        return Err(SnippetError::negative_number(n));
    }
    Ok(())
}

/// Squares `n` after `SQUARE_DELAY`.
pub async fn square_async(n: f64) -> Result<f64, SnippetError> {
    square_after(n, SQUARE_DELAY).await
}

/// Squares `n` after `delay`.
pub async fn square_after(n: f64, delay: Duration) -> Result<f64, SnippetError> {
    check_non_negative(n)?;
    debug!(value = n, ?delay, "squaring after delay");
    sleep(delay).await;
    Ok(n * n)
}

/// Validates `n`, then spawns the delayed squaring onto the current tokio
/// runtime.
///
/// The error path never touches the runtime, so it can be called (and
/// fail) anywhere. The success path must run inside a runtime.
pub fn spawn_square(n: f64, delay: Duration) -> Result<JoinHandle<f64>, SnippetError> {
    check_non_negative(n)?;
    debug!(value = n, ?delay, "spawning square task");
    Ok(tokio::spawn(async move {
        sleep(delay).await;
        let squared = n * n;
        debug!(value = n, squared, "square task finished");
        squared
    }))
}
