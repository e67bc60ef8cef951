#![no_std]
#![no_main]

use core::future::pending;
use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Level, Output, Pull, Speed};
use embassy_stm32::{Config, Peripherals};
use led_chase::{
    ButtonMap, ChaseAnimator, ChaseConfig, ClickClassifier, ConfigError, DeadlineTimer,
    SharedLines,
};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

mod button_task;
mod chase_task;
mod types;

use button_task::button_task;
use chase_task::chase_task;
use types::{ChaseLeds, EmbassyDuration, Lines, STATE, TIME_SOURCE};

/// Button input pins, as EXTI line numbers: PA0, PA1, PC13, PB4
const BUTTON_PINS: [u8; 4] = [0, 1, 13, 4];

static LINES: StaticCell<Lines> = StaticCell::new();

/// Configure the four user LEDs (PC6..PC9 on the F072 Discovery board)
fn setup_leds(p: &mut Peripherals) -> ChaseLeds {
    let pc6 = unsafe { p.PC6.clone_unchecked() };
    let pc7 = unsafe { p.PC7.clone_unchecked() };
    let pc8 = unsafe { p.PC8.clone_unchecked() };
    let pc9 = unsafe { p.PC9.clone_unchecked() };

    let leds = ChaseLeds::new([
        Output::new(pc6, Level::Low, Speed::Low),
        Output::new(pc7, Level::Low, Speed::Low),
        Output::new(pc8, Level::Low, Speed::Low),
        Output::new(pc9, Level::Low, Speed::Low),
    ]);

    for (idx, pin) in ["PC6", "PC7", "PC8", "PC9"].iter().enumerate() {
        info!("Set up led{} at {}", idx, pin);
    }

    leds
}

/// Configure the four buttons with EXTI interrupts and pull-ups
fn setup_buttons(p: &mut Peripherals) -> [ExtiInput<'static>; 4] {
    let pa0 = unsafe { p.PA0.clone_unchecked() };
    let pa1 = unsafe { p.PA1.clone_unchecked() };
    let pc13 = unsafe { p.PC13.clone_unchecked() };
    let pb4 = unsafe { p.PB4.clone_unchecked() };
    let exti0 = unsafe { p.EXTI0.clone_unchecked() };
    let exti1 = unsafe { p.EXTI1.clone_unchecked() };
    let exti13 = unsafe { p.EXTI13.clone_unchecked() };
    let exti4 = unsafe { p.EXTI4.clone_unchecked() };

    let buttons = [
        ExtiInput::new(pa0, exti0, Pull::Up),
        ExtiInput::new(pa1, exti1, Pull::Up),
        ExtiInput::new(pc13, exti13, Pull::Up),
        ExtiInput::new(pb4, exti4, Pull::Up),
    ];

    for (idx, pin) in ["PA0", "PA1", "PC13", "PB4"].iter().enumerate() {
        info!("Set up button{} at {}", idx, pin);
    }

    buttons
}

/// Validate timing and pin configuration before anything runs
fn load_config() -> Result<(ChaseConfig<EmbassyDuration>, ButtonMap), ConfigError> {
    let config = ChaseConfig::builder().build()?;
    let map = ButtonMap::new(BUTTON_PINS)?;
    Ok((config, map))
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("=== LED Chase ===");

    let (config, map) = match load_config() {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            pending::<()>().await;
            return;
        }
    };

    let mut p = embassy_stm32::init(Config::default());

    let leds = setup_leds(&mut p);
    let buttons = setup_buttons(&mut p);
    info!("GPIO initialized");

    let lines: &'static Lines = LINES.init(SharedLines::new(leds));

    let classifier = ClickClassifier::new(&STATE, lines, DeadlineTimer::new(&TIME_SOURCE), &config);
    let animator = ChaseAnimator::new(&STATE, lines, &config);

    spawner.spawn(chase_task(animator)).unwrap();
    spawner.spawn(button_task(classifier, map, buttons)).unwrap();

    info!("=== System Ready ===");
    info!("Double-click button 1 to change speed, press button 2 to reverse");

    pending::<()>().await;
}
