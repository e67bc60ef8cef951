use embassy_stm32::gpio::{Level, Output};
use led_chase::{LINE_COUNT, LineId, OutputLines};

/// The four user LEDs driven as push-pull outputs.
///
/// `Output::new` cannot fail, so by the time this exists every line is
/// configured and ready.
pub struct ChaseLeds {
    leds: [Output<'static>; LINE_COUNT],
}

impl ChaseLeds {
    pub fn new(leds: [Output<'static>; LINE_COUNT]) -> Self {
        Self { leds }
    }
}

impl OutputLines for ChaseLeds {
    fn set(&mut self, line: LineId, active: bool) {
        if let Some(led) = self.leds.get_mut(usize::from(line)) {
            led.set_level(if active { Level::High } else { Level::Low });
        }
    }

    fn toggle(&mut self, line: LineId) {
        if let Some(led) = self.leds.get_mut(usize::from(line)) {
            led.toggle();
        }
    }
}
