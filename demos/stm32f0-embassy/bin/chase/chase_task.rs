use defmt::{debug, info};
use embassy_time::Timer;

use crate::types::Animator;

#[embassy_executor::task]
pub async fn chase_task(animator: Animator) {
    info!("Chase task started");

    loop {
        let step = animator.step();
        debug!("toggled line {} (position {})", step.line, step.position);
        Timer::after(step.delay.0).await;
    }
}
