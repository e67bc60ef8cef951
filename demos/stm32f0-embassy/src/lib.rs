#![no_std]

pub mod leds;
pub mod time_wrapper;
