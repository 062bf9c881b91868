//! Shared helpers for the host-side controller tests: a recording indicator
//! driver and a block-on that drives the manually-advanced mock clock.

use core::future::Future;
use core::pin::pin;
use core::task::{Context, Poll, Waker};
use std::cell::RefCell;
use std::rc::Rc;

use embassy_time::{Duration, Instant, MockDriver};
use keyglow::driver::IndicatorDriver;
use keyglow::types::color::Hsv;

// Host tests need a critical-section implementation linked in.
use critical_section as _;

// Init logger for tests
#[ctor::ctor]
fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// One recorded driver call, stamped with the mock-clock time in ms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndicatorCommand {
    Enable,
    Disable,
    SetColor(Hsv),
    SetLed(usize, bool),
}

/// Indicator driver that records every call for later assertions.
#[derive(Clone, Default)]
pub struct RecordingDriver {
    log: Rc<RefCell<Vec<(u64, IndicatorCommand)>>>,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls with their mock-clock timestamps.
    pub fn commands(&self) -> Vec<(u64, IndicatorCommand)> {
        self.log.borrow().clone()
    }

    /// Recorded calls without timestamps.
    pub fn sequence(&self) -> Vec<IndicatorCommand> {
        self.log
            .borrow()
            .iter()
            .map(|(_, command)| command.clone())
            .collect()
    }

    fn record(&self, command: IndicatorCommand) {
        self.log
            .borrow_mut()
            .push((Instant::now().as_millis(), command));
    }
}

impl IndicatorDriver for RecordingDriver {
    fn enable(&mut self) {
        self.record(IndicatorCommand::Enable);
    }

    fn disable(&mut self) {
        self.record(IndicatorCommand::Disable);
    }

    fn set_color(&mut self, color: Hsv) {
        self.record(IndicatorCommand::SetColor(color));
    }

    fn set_led(&mut self, index: usize, on: bool) {
        self.record(IndicatorCommand::SetLed(index, on));
    }
}

const POLLS_PER_STEP: usize = 8;

/// Poll `fut` to completion, advancing the mock clock 1 ms at a time once
/// the future stops making progress without it. Panics when `budget_ms` of
/// simulated time passes first.
pub fn run_with_mock_time<F: Future>(budget_ms: u64, fut: F) -> F::Output {
    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    let driver = MockDriver::get();

    for _ in 0..budget_ms {
        for _ in 0..POLLS_PER_STEP {
            if let Poll::Ready(output) = fut.as_mut().poll(&mut cx) {
                return output;
            }
        }
        driver.advance(Duration::from_millis(1));
    }
    for _ in 0..POLLS_PER_STEP {
        if let Poll::Ready(output) = fut.as_mut().poll(&mut cx) {
            return output;
        }
    }
    panic!("test did not complete within {budget_ms} simulated ms");
}
