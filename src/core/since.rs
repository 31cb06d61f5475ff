use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Duration, MissedTickBehavior};

use crate::core::{Clock, RenderSink, Timestamp};
use crate::utils::config::ConsoleConfig;
use crate::utils::constants::PLACEHOLDER;
use crate::utils::format::format_time_since;

/// Elapsed-time display. Owns a repeating refresh task that re-renders on a
/// fixed cadence, plus an immediate re-render path for input changes.
///
/// Exactly one teardown: `shutdown` consumes the handle. Dropping the handle
/// without calling it also stops the task, since the task exits as soon as
/// its channels close.
pub struct SinceTicker {
    time_tx: watch::Sender<Option<Timestamp>>,
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SinceTicker {
    pub fn spawn(
        initial: Option<Timestamp>,
        config: &ConsoleConfig,
        clock: Arc<dyn Clock>,
        sink: Arc<dyn RenderSink>,
    ) -> Self {
        let offset_ms = config.time_offset_ms;
        // tokio intervals panic on a zero period
        let period = config.refresh_interval().max(Duration::from_millis(1));

        let (time_tx, mut time_rx) = watch::channel(initial);
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // delayed under load, never skipped or duplicated
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;

                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }

                    changed = time_rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        render(&*clock, &*sink, *time_rx.borrow(), offset_ms);
                    }

                    _ = ticker.tick() => {
                        render(&*clock, &*sink, *time_rx.borrow(), offset_ms);
                    }
                }
            }

            tracing::debug!("Elapsed-time ticker stopped");
        });

        Self {
            time_tx,
            shutdown_tx,
            task,
        }
    }

    /// Re-renders immediately, outside the timer cadence.
    pub fn set_time(&self, time: Timestamp) {
        let _ = self.time_tx.send(Some(time));
    }

    /// Like [`set_time`](Self::set_time), but parses the raw input first.
    /// Unparseable input renders the placeholder instead of failing.
    pub fn set_raw(&self, raw: &str) {
        match raw.parse::<Timestamp>() {
            Ok(time) => self.set_time(time),
            Err(e) => {
                tracing::warn!("Rendering placeholder: {}", e);
                let _ = self.time_tx.send(None);
            }
        }
    }

    /// Cancels the refresh timer and waits for the task to finish. No
    /// render happens after this returns.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        let _ = self.task.await;
    }
}

fn render(clock: &dyn Clock, sink: &dyn RenderSink, time: Option<Timestamp>, offset_ms: i64) {
    let text = match time {
        Some(time) => format_time_since(clock.now_millis(), time.millis(), offset_ms),
        None => PLACEHOLDER.to_string(),
    };
    sink.render(&text);
}
