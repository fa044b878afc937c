// Use cases layer: classification, the tick function and the tasks that drive them.

pub mod classifier;
pub mod fanout;
pub mod game;
pub mod simulation;
pub mod stats;
pub mod types;

pub use classifier::{GestureReading, classify, classify_hand};
pub use fanout::WorldFanout;
pub use game::{TickMode, WorldTaskSettings, cooldown_timer_task, world_task};
pub use simulation::{Simulation, step};
pub use stats::{FpsCounter, FrameStats, HudState};
pub use types::{FrameInput, TickOutcome, WorldUpdate};
