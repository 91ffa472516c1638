use std::time::Duration;

/// Random probes before spawning falls back to scanning for free floor.
pub const MAX_SPAWN_ATTEMPTS: usize = 1024;

pub const ANGER_SPREAD: f32 = 0.2;
pub const ANGER_BASE: f32 = 0.1;

pub const COMMAND_NOTICE: Duration = Duration::from_millis(1000);
pub const CATCH_NOTICE: Duration = Duration::from_millis(200);

/// Upper bound on how long a single input poll may wait.
pub const MAX_POLL_WAIT: Duration = Duration::from_millis(50);
