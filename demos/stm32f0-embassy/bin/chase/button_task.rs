use defmt::{info, warn};
use embassy_futures::select::{Either4, select4};
use embassy_stm32::exti::ExtiInput;
use embassy_time::{Instant, Timer};
use led_chase::{ButtonMap, ClickOutcome};

use crate::types::Classifier;

/// Debounce delay in milliseconds
const DEBOUNCE_MS: u64 = 50;

#[embassy_executor::task]
pub async fn button_task(
    mut classifier: Classifier,
    map: ButtonMap,
    mut buttons: [ExtiInput<'static>; 4],
) {
    info!("Button task started");

    loop {
        let [b1, b2, b3, b4] = &mut buttons;

        // Buttons are active low
        let index = match select4(
            b1.wait_for_falling_edge(),
            b2.wait_for_falling_edge(),
            b3.wait_for_falling_edge(),
            b4.wait_for_falling_edge(),
        )
        .await
        {
            Either4::First(_) => 0,
            Either4::Second(_) => 1,
            Either4::Third(_) => 2,
            Either4::Fourth(_) => 3,
        };

        let pins = map.mask(index).unwrap_or(0);
        info!("Button pressed at {} (pins {:#x})", Instant::now().as_ticks(), pins);

        match classifier.on_event(map.decode(pins)) {
            ClickOutcome::AwaitingSecondClick => info!("BUTTON1: waiting for second click"),
            ClickOutcome::SpeedToggled(speed) => info!("BUTTON1: speed now {}", speed),
            ClickOutcome::WindowExpired => {
                info!("BUTTON1: took you a while to press the second time")
            }
            ClickOutcome::WindowCancelled => warn!("BUTTON1: click window was cancelled"),
            ClickOutcome::Reversed {
                direction,
                position,
            } => info!("BUTTON2: {} from position {}", direction, position),
            ClickOutcome::Reserved(button) => info!("BUTTON{}", button),
            ClickOutcome::Unrecognized(mask) => warn!("? (pins {:#x})", mask),
        }

        // Debounce press and release
        Timer::after_millis(DEBOUNCE_MS).await;
        buttons[index].wait_for_high().await;
        Timer::after_millis(DEBOUNCE_MS).await;
    }
}
