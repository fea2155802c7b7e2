//! Homework status poll loop
//!
//! One cycle fetches the newest homework status, compares it with the last
//! status seen and sends a chat message when it changed. Failures are logged
//! and the next tick is the retry; there is no backoff.

use homework_bot_core::clients::{Notifier, StatusSource};
use homework_bot_core::models::HomeworkStatus;
use log::{debug, error, info, warn};
use std::time::Duration;

use crate::formatters::{format_failure, format_status_change};

/// Pause between the end of one cycle and the start of the next
pub const RETRY_PERIOD: Duration = Duration::from_secs(600);

/// State carried from one cycle to the next. Lost on restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    /// Last status observed, `None` until the first report arrives
    pub last_status: Option<HomeworkStatus>,
    /// `from_date` sent with the next request
    pub from_date: i64,
    /// Last failure text forwarded to the chat
    pub last_error_report: Option<String>,
}

impl PollState {
    pub fn starting_at(from_date: i64) -> Self {
        Self {
            from_date,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Response carried no homeworks
    NoUpdates,
    /// Newest status equals the remembered one
    Unchanged,
    /// Status changed; `delivered` is false when the chat message failed
    Notified { delivered: bool },
    /// Fetch or decode failed; the status is untouched, the cursor moves
    /// only if the envelope itself decoded
    Failed,
}

pub struct PollLoop<S, N> {
    source: S,
    notifier: N,
    state: PollState,
    interval: Duration,
    notify_on_errors: bool,
}

impl<S, N> PollLoop<S, N>
where
    S: StatusSource,
    N: Notifier,
{
    pub fn new(source: S, notifier: N, state: PollState) -> Self {
        Self {
            source,
            notifier,
            state,
            interval: RETRY_PERIOD,
            notify_on_errors: false,
        }
    }

    /// Also forward cycle failures to the chat, skipping repeats of the
    /// previous report
    pub fn with_error_reports(mut self, enabled: bool) -> Self {
        self.notify_on_errors = enabled;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Run one fetch-compare-notify cycle. Never returns an error.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        info!("Requesting homework statuses (from_date={})", self.state.from_date);

        let response = match self.source.fetch_statuses(self.state.from_date).await {
            Ok(r) => r,
            Err(e) => {
                error!("Status check failed: {:#}", e);
                self.report_failure(&e).await;
                return CycleOutcome::Failed;
            }
        };

        // Advance before looking at entries so a broken one is not refetched forever
        self.state.from_date = response.current_date;

        let homework = match response.latest() {
            Ok(Some(hw)) => hw,
            Ok(None) => {
                info!("No homework updates since last check");
                return CycleOutcome::NoUpdates;
            }
            Err(e) => {
                let e = anyhow::Error::new(e).context("Malformed homework entry");
                error!("Status check failed: {:#}", e);
                self.report_failure(&e).await;
                return CycleOutcome::Failed;
            }
        };

        if self.state.last_status == Some(homework.status) {
            info!(
                "Status of {} unchanged: {}",
                homework.homework_name, homework.status
            );
            return CycleOutcome::Unchanged;
        }

        info!(
            "Status of {} changed: {} -> {}",
            homework.homework_name,
            self.state
                .last_status
                .map(|s| s.as_str())
                .unwrap_or("none"),
            homework.status
        );

        let message = format_status_change(&homework);
        let delivered = match self.notifier.send_message(&message).await {
            Ok(()) => {
                info!("Sent notification: {}", message);
                true
            }
            Err(e) => {
                error!("Failed to send notification: {:#}", e);
                false
            }
        };

        // Fire-and-forget: a lost message is not resent on the next cycle
        self.state.last_status = Some(homework.status);

        CycleOutcome::Notified { delivered }
    }

    async fn report_failure(&mut self, err: &anyhow::Error) {
        if !self.notify_on_errors {
            return;
        }

        let report = format_failure(err);
        if self.state.last_error_report.as_deref() == Some(report.as_str()) {
            debug!("Failure already reported, not repeating it");
            return;
        }

        match self.notifier.send_message(&report).await {
            Ok(()) => info!("Sent failure report"),
            Err(e) => warn!("Failed to send failure report: {:#}", e),
        }
        self.state.last_error_report = Some(report);
    }

    /// Poll forever, sleeping `interval` after every cycle
    pub async fn run(mut self) {
        info!("Poll loop started (interval: {:?})", self.interval);
        loop {
            let outcome = self.run_cycle().await;
            info!("Cycle finished: {:?}", outcome);
            tokio::time::sleep(self.interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_starting_at() {
        let state = PollState::starting_at(1700000000);
        assert_eq!(state.from_date, 1700000000);
        assert!(state.last_status.is_none());
        assert!(state.last_error_report.is_none());
    }

    #[test]
    fn test_retry_period_is_ten_minutes() {
        assert_eq!(RETRY_PERIOD.as_secs(), 10 * 60);
    }
}
