pub mod common;

use embassy_futures::select::select;
use embassy_time::Timer;
use embedded_hal_mock::eh1::digital::{
    Mock as PinMock, State as PinState, Transaction as PinTransaction,
};
use keyglow::controller::Runnable;
use keyglow::controller::lock_led::LockLedController;
use keyglow::event::{LedIndicatorEvent, publish_event};
use keyglow::types::led_indicator::{LedIndicator, LockKey};
use rusty_fork::rusty_fork_test;

use crate::common::run_with_mock_time;

rusty_fork_test! {
    #[test]
    fn caps_lock_led_follows_host_state() {
        let expectations = [
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ];
        let mut pin = PinMock::new(&expectations);
        let mut controller = LockLedController::new(pin.clone(), false, LockKey::CapsLock);

        run_with_mock_time(100, async {
            select(controller.run(), async {
                Timer::after_millis(10).await;
                publish_event(LedIndicatorEvent {
                    indicator: LedIndicator::CAPS_LOCK,
                });
                Timer::after_millis(10).await;
                publish_event(LedIndicatorEvent {
                    indicator: LedIndicator::new(),
                });
                Timer::after_millis(10).await;
            })
            .await;
        });

        pin.done();
    }

    #[test]
    fn low_active_pin_drives_inverted_levels() {
        let expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let mut pin = PinMock::new(&expectations);
        let mut controller = LockLedController::new(pin.clone(), true, LockKey::NumLock);

        run_with_mock_time(100, async {
            select(controller.run(), async {
                Timer::after_millis(10).await;
                publish_event(LedIndicatorEvent {
                    indicator: LedIndicator::NUM_LOCK,
                });
                Timer::after_millis(10).await;
                publish_event(LedIndicatorEvent {
                    indicator: LedIndicator::new(),
                });
                Timer::after_millis(10).await;
            })
            .await;
        });

        pin.done();
    }

    #[test]
    fn unrelated_lock_reports_keep_the_led_dark() {
        let expectations = [PinTransaction::set(PinState::Low)];
        let mut pin = PinMock::new(&expectations);
        let mut controller = LockLedController::new(pin.clone(), false, LockKey::ScrollLock);

        run_with_mock_time(100, async {
            select(controller.run(), async {
                Timer::after_millis(10).await;
                publish_event(LedIndicatorEvent {
                    indicator: LedIndicator::CAPS_LOCK,
                });
                Timer::after_millis(10).await;
            })
            .await;
        });

        pin.done();
    }
}
