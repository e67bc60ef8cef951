use led_chase::{AnimationState, ChaseAnimator, ClickClassifier, DeadlineTimer, SharedLines};

pub use stm32f0_embassy::leds::ChaseLeds;
pub use stm32f0_embassy::time_wrapper::{EmbassyDuration, EmbassyInstant, EmbassyTimeSource};

/// Output lines shared by the button task (clear on reverse) and the chase task
pub type Lines = SharedLines<ChaseLeds>;

pub type Classifier =
    ClickClassifier<'static, ChaseLeds, DeadlineTimer<'static, EmbassyInstant, EmbassyTimeSource>>;

pub type Animator = ChaseAnimator<'static, ChaseLeds, EmbassyDuration>;

/// Direction, speed and position shared by both tasks
pub static STATE: AnimationState = AnimationState::new();

pub static TIME_SOURCE: EmbassyTimeSource = EmbassyTimeSource;
