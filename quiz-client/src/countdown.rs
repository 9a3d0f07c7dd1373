use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Display urgency bands for the remaining time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerUrgency {
    Normal,
    Warning, // 10 seconds or less
    Danger,  // 5 seconds or less
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStep {
    Running(u32),
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Running { remaining: u32 },
    Halted { remaining: u32 },
}

/// Client-local approximation of the server's round timer.
///
/// Seeded from the duration in `roundStart`, decremented once per tick.
/// Never goes below zero and reports `Expired` exactly once; after that
/// (or after `halt`) further ticks are ignored until the next `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    state: State,
}

impl Countdown {
    pub fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Begin a new countdown, replacing whatever came before.
    pub fn start(&mut self, duration: u32) {
        self.state = State::Running {
            remaining: duration,
        };
    }

    /// Stop ticking but keep the last value on display.
    pub fn halt(&mut self) {
        if let State::Running { remaining } = self.state {
            self.state = State::Halted { remaining };
        }
    }

    /// Back to the idle "-" display.
    pub fn clear(&mut self) {
        self.state = State::Idle;
    }

    pub fn tick(&mut self) -> Option<CountdownStep> {
        match self.state {
            State::Idle | State::Halted { .. } => None,
            State::Running { remaining } => {
                if remaining <= 1 {
                    self.state = State::Halted { remaining: 0 };
                    Some(CountdownStep::Expired)
                } else {
                    let next = remaining - 1;
                    self.state = State::Running { remaining: next };
                    Some(CountdownStep::Running(next))
                }
            }
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running { .. })
    }

    /// Remaining seconds, or `None` when nothing has started yet.
    pub fn remaining(&self) -> Option<u32> {
        match self.state {
            State::Idle => None,
            State::Running { remaining } | State::Halted { remaining } => Some(remaining),
        }
    }

    pub fn urgency(&self) -> TimerUrgency {
        match self.remaining() {
            Some(r) if r <= 5 => TimerUrgency::Danger,
            Some(r) if r <= 10 => TimerUrgency::Warning,
            _ => TimerUrgency::Normal,
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the single ticking task behind a [`Countdown`].
///
/// Invariant: at most one task is armed at a time. `arm` aborts any
/// previous task before spawning a new one; a leftover interval from the
/// previous round would double-decrement the displayed time.
#[derive(Debug, Default)]
pub struct RoundTimer {
    task: Option<JoinHandle<()>>,
}

impl RoundTimer {
    pub fn new() -> Self {
        Self { task: None }
    }

    /// Start a 1 Hz tick feed, replacing any previous one.
    pub fn arm(&mut self, tick_tx: mpsc::Sender<()>) {
        self.disarm();

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            // The first interval tick completes immediately; the countdown
            // starts one full second after arming.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tick_tx.send(()).await.is_err() {
                    break;
                }
            }
        });

        self.task = Some(task);
    }

    pub fn disarm(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.task.is_some()
    }
}

impl Drop for RoundTimer {
    fn drop(&mut self) {
        self.disarm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_once_per_tick_and_never_below_zero() {
        let mut countdown = Countdown::new();
        countdown.start(3);
        assert_eq!(countdown.remaining(), Some(3));

        assert_eq!(countdown.tick(), Some(CountdownStep::Running(2)));
        assert_eq!(countdown.tick(), Some(CountdownStep::Running(1)));
        assert_eq!(countdown.tick(), Some(CountdownStep::Expired));
        assert_eq!(countdown.remaining(), Some(0));

        // Expired exactly once; stale ticks are ignored.
        assert_eq!(countdown.tick(), None);
        assert_eq!(countdown.remaining(), Some(0));
    }

    #[test]
    fn expires_on_the_final_tick() {
        let mut countdown = Countdown::new();
        countdown.start(30);
        for expected in (1..30).rev() {
            assert_eq!(countdown.tick(), Some(CountdownStep::Running(expected)));
        }
        assert_eq!(countdown.tick(), Some(CountdownStep::Expired));
    }

    #[test]
    fn zero_duration_expires_on_first_tick() {
        let mut countdown = Countdown::new();
        countdown.start(0);
        assert_eq!(countdown.tick(), Some(CountdownStep::Expired));
        assert_eq!(countdown.remaining(), Some(0));
    }

    #[test]
    fn halt_keeps_display_clear_resets_it() {
        let mut countdown = Countdown::new();
        countdown.start(10);
        countdown.tick();
        countdown.halt();

        assert_eq!(countdown.remaining(), Some(9));
        assert_eq!(countdown.tick(), None);

        countdown.clear();
        assert_eq!(countdown.remaining(), None);
    }

    #[test]
    fn restart_replaces_previous_round() {
        let mut countdown = Countdown::new();
        countdown.start(5);
        countdown.tick();
        countdown.start(20);
        assert_eq!(countdown.tick(), Some(CountdownStep::Running(19)));
    }

    #[test]
    fn urgency_bands() {
        let mut countdown = Countdown::new();
        assert_eq!(countdown.urgency(), TimerUrgency::Normal);

        countdown.start(11);
        assert_eq!(countdown.urgency(), TimerUrgency::Normal);
        countdown.tick();
        assert_eq!(countdown.urgency(), TimerUrgency::Warning);

        countdown.start(5);
        assert_eq!(countdown.urgency(), TimerUrgency::Danger);
    }

    #[tokio::test(start_paused = true)]
    async fn round_timer_ticks_once_per_second() {
        let (tick_tx, mut tick_rx) = mpsc::channel(8);
        let mut timer = RoundTimer::new();
        timer.arm(tick_tx);

        tokio::time::advance(Duration::from_secs(3)).await;

        for _ in 0..3 {
            tick_rx.recv().await.expect("tick");
        }
        assert!(tick_rx.try_recv().is_err());

        timer.disarm();
        assert!(!timer.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn rearming_aborts_the_previous_task() {
        let (first_tx, mut first_rx) = mpsc::channel(8);
        let (second_tx, mut second_rx) = mpsc::channel(8);

        let mut timer = RoundTimer::new();
        timer.arm(first_tx);
        timer.arm(second_tx);

        // The first task is gone: its sender is dropped without a tick.
        assert!(first_rx.recv().await.is_none());

        tokio::time::advance(Duration::from_secs(1)).await;
        second_rx.recv().await.expect("tick from the armed task");
    }
}
