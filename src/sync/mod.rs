pub mod clock;
pub mod scheduler;

pub use clock::{FixedClock, SystemClock, WallClock};
pub use scheduler::PeriodicTask;
