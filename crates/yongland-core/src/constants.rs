//! Simulation constants and tuning parameters.
//!
//! Values follow the stadium ruleset: five mini Frauds, then one giant.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Upper bound for the runtime time scale.
pub const MAX_TIME_SCALE: f64 = 4.0;

// --- World ---

/// World width in pixels.
pub const WORLD_WIDTH: f64 = 1280.0;

/// World height in pixels.
pub const WORLD_HEIGHT: f64 = 720.0;

/// Downward acceleration applied to every dynamic body (px/s²).
pub const GRAVITY: f64 = 300.0;

/// A player whose centre falls this far below the world floor loses a life.
pub const FALL_OUT_MARGIN: f64 = 50.0;

/// Landing speeds below this are not reflected by bounce (px/s).
pub const BOUNCE_REST_THRESHOLD: f64 = 20.0;

/// Static platforms as (centre x, centre y, width, height).
pub const PLATFORMS: [(f64, f64, f64, f64); 8] = [
    // Ground
    (WORLD_WIDTH / 2.0, WORLD_HEIGHT - 30.0, WORLD_WIDTH, 60.0),
    // Goal-post bars
    (200.0, WORLD_HEIGHT - 150.0, 180.0, 20.0),
    (WORLD_WIDTH - 200.0, WORLD_HEIGHT - 150.0, 180.0, 20.0),
    // Mid level
    (WORLD_WIDTH / 2.0, WORLD_HEIGHT - 250.0, 200.0, 20.0),
    (300.0, WORLD_HEIGHT - 350.0, 150.0, 20.0),
    (WORLD_WIDTH - 300.0, WORLD_HEIGHT - 350.0, 150.0, 20.0),
    // Upper
    (WORLD_WIDTH / 2.0 - 150.0, WORLD_HEIGHT - 450.0, 120.0, 20.0),
    (WORLD_WIDTH / 2.0 + 150.0, WORLD_HEIGHT - 450.0, 120.0, 20.0),
];

/// Goal flag centre.
pub const GOAL_POSITION: (f64, f64) = (WORLD_WIDTH / 2.0, 120.0);

/// Goal flag size (width, height).
pub const GOAL_SIZE: (f64, f64) = (40.0, 40.0);

// --- Player ---

pub const PLAYER_START_LIVES: u32 = 5;

/// Initial spawn point.
pub const PLAYER_SPAWN: (f64, f64) = (100.0, 400.0);

/// Respawn point after losing a life.
pub const PLAYER_RESPAWN: (f64, f64) = (100.0, 300.0);

/// Player body size (width, height).
pub const PLAYER_SIZE: (f64, f64) = (30.0, 50.0);

/// Drawn sprite size (width, height). Stomp checks measure feet and heads
/// against the sprite, not the body.
pub const PLAYER_DISPLAY_SIZE: (f64, f64) = (40.0, 57.0);

/// Horizontal run speed (px/s).
pub const PLAYER_SPEED: f64 = 200.0;

/// Jump impulse (negative = up).
pub const PLAYER_JUMP_VELOCITY: f64 = -350.0;

/// Length of the invulnerability window after a respawn or giant stomp (seconds).
/// Six flashes of 2 × 200 ms.
pub const INVULNERABILITY_SECS: f64 = 2.4;

// --- Mini Fraud ---

pub const MINI_COUNT: u32 = 5;

pub const MINI_SPAWNS: [(f64, f64); 5] = [
    (300.0, 300.0),
    (500.0, 200.0),
    (700.0, 350.0),
    (900.0, 250.0),
    (1100.0, 300.0),
];

pub const MINI_SIZE: (f64, f64) = (15.0, 25.0);
pub const MINI_DISPLAY_SIZE: (f64, f64) = (20.0, 28.0);
pub const MINI_BOUNCE: f64 = 0.2;
pub const MINI_HIT_POINTS: u32 = 1;
/// Slower than the player.
pub const MINI_SPEED: f64 = 80.0;
/// Jumps much higher than the player.
pub const MINI_JUMP_VELOCITY: f64 = -600.0;
/// Minis run away when the player is closer than this.
pub const MINI_AVOID_RADIUS: f64 = 150.0;
/// Per-tick jump roll: jump when `roll(0..=100)` exceeds this.
pub const MINI_JUMP_ROLL: u32 = 97;
/// Per-tick turn roll: flip patrol direction when `roll(0..=100)` exceeds this.
pub const MINI_TURN_ROLL: u32 = 98;
pub const MINI_STOMP_TOLERANCE: f64 = 15.0;
pub const MINI_STOMP_BOUNCE: f64 = -250.0;

// --- Giant Fraud ---

pub const GIANT_SPAWN: (f64, f64) = (WORLD_WIDTH / 2.0, 200.0);
pub const GIANT_SIZE: (f64, f64) = (60.0, 100.0);
pub const GIANT_DISPLAY_SIZE: (f64, f64) = (80.0, 114.0);
pub const GIANT_BOUNCE: f64 = 0.1;
/// Needs three head stomps.
pub const GIANT_HIT_POINTS: u32 = 3;
pub const GIANT_SPEED: f64 = 120.0;
pub const GIANT_JUMP_VELOCITY: f64 = -300.0;
pub const GIANT_JUMP_ROLL: u32 = 95;
pub const GIANT_STOMP_TOLERANCE: f64 = 20.0;
pub const GIANT_STOMP_BOUNCE: f64 = -300.0;

/// Upper bound of the inclusive per-tick behaviour roll.
pub const ROLL_MAX: u32 = 100;

// --- Scoring ---

pub const SCORE_MINI_DEFEATED: u32 = 100;
pub const SCORE_GIANT_STOMP: u32 = 200;
pub const SCORE_VICTORY_BONUS: u32 = 500;

// --- Delays ---

/// Delay between the last mini falling and the giant appearing.
pub const GIANT_SPAWN_DELAY_SECS: f64 = 1.0;

/// How long the "giant appears" banner stays up.
pub const BANNER_DURATION_SECS: f64 = 2.0;

/// Delay between the winning blow and the victory screen.
pub const VICTORY_DELAY_SECS: f64 = 0.5;

pub const GIANT_BANNER_TEXT: &str = "GIANT FRAUD APPEARS!";
