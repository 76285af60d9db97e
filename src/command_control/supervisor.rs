use super::CommandDispatcher;
use crate::{error, info};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Drives a [`CommandDispatcher`] from a periodic tick and a stream of command lines.
///
/// Both triggers run to completion before the next one is polled, so a command never
/// lands in the middle of a tick.
pub struct Supervisor {
    tick: Duration,
    cancel: CancellationToken,
}

impl Supervisor {
    pub fn new(tick: Duration) -> Self { Self { tick, cancel: CancellationToken::new() } }

    /// A handle that stops [`Supervisor::run`] when cancelled.
    pub fn cancel_token(&self) -> CancellationToken { self.cancel.clone() }

    /// Runs until the input ends, fails, or the token is cancelled.
    ///
    /// # Returns
    /// The dispatcher, in the state the last command or tick left it.
    pub async fn run<R>(&self, mut dispatcher: CommandDispatcher, input: R) -> CommandDispatcher
    where R: AsyncBufRead + Unpin {
        let mut lines = input.lines();
        let mut interval = tokio::time::interval(self.tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        info!("Supervisor running with a {}ms tick.", self.tick.as_millis());
        loop {
            tokio::select! {
                biased;
                () = self.cancel.cancelled() => {
                    info!("Shutdown requested.");
                    break;
                }
                line = lines.next_line() => match line {
                    Ok(Some(line)) => dispatcher.dispatch_line(&line),
                    Ok(None) => {
                        info!("Command input closed.");
                        break;
                    }
                    Err(e) => {
                        error!("Could not read command input: {e}");
                        break;
                    }
                },
                _ = interval.tick() => dispatcher.tick(),
            }
        }
        dispatcher
    }
}
