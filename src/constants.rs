use crate::types::SpawnZone;

// --- Canvas ---
pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 600.0;
pub const OUT_OF_BOUNDS_Y: f64 = 550.0; // Falling objects below this are recycled

// --- Collision ---
pub const COLLISION_RADIUS: f64 = 64.0; // Strict: distance must be below this

// --- Ship ---
pub const SHIP_START_X: f64 = 370.0;
pub const SHIP_START_Y: f64 = 480.0;
pub const SHIP_MOVEMENT_SPEED: f64 = 2.0;
pub const SHIP_MIN_X: f64 = 0.0;
pub const SHIP_MAX_X: f64 = 730.0;
pub const STARTING_LIVES: u32 = 3;
pub const MAX_LIVES: u32 = 4;

// --- Bullets ---
pub const BULLET_SPEED: f64 = -3.0; // Negative: bullets rise
pub const BULLET_MUZZLE_OFFSET: (f64, f64) = (16.0, 10.0);
pub const BULLET_PARKED_Y: f64 = -1000.0;
pub const POWER_BULLET_START_X: f64 = 1000.0;
pub const POWER_BULLET_OFFSETS_X: [f64; 3] = [0.0, 16.0, 32.0];
pub const POWER_BULLET_OFFSETS_Y: [f64; 3] = [10.0, 10.0, 10.0];
pub const POWER_BULLET_DRIFT: [f64; 3] = [-0.3, 0.0, 0.3];
pub const POWER_BULLET_PRUNE_Y: f64 = -10.0;

// --- Asteroids ---
pub const INITIAL_ASTEROID_SPEED: f64 = 0.5;
pub const SPAWNED_ASTEROID_SPEED: f64 = 0.35;
pub const ASTEROID_BOOST_COUNT: usize = 8; // Reconciliation boosts instead of spawning at exactly this count
pub const ASTEROID_BOOST_BASE: f64 = 0.2;
pub const ASTEROID_BOOST_SCORE_DIVISOR: f64 = 1000.0;
pub const MAX_TARGET_ASTEROIDS: usize = 9;
pub const TARGET_CAP_LEVEL: u32 = 6;

// --- Coins ---
pub const COIN_SPEED: f64 = 0.3;
pub const STEADY_COIN_COUNT: usize = 3;
pub const BONUS_COIN_COUNT: usize = 20;

// --- Pickups ---
pub const POWER_UP_START: (f64, f64) = (50.0, 50.0);
pub const POWER_UP_SPEED: f64 = 0.8;
pub const SHIELD_SPEED: f64 = 0.3;
pub const LIFE_SPEED: f64 = 0.3;

// --- Scoring ---
pub const POINTS_PER_LEVEL: u32 = 15;
pub const BONUS_ROUND_EVERY: u32 = 5;
pub const DEFAULT_HIGH_SCORE_PATH: &str = "./highscore.txt";

// --- Frame pacing ---
pub const FRAME_POLL_MS: u64 = 16;
pub const SIM_STEPS_PER_FRAME: u32 = 4;
pub const HOLD_WINDOW_FRAMES: u64 = 4; // No repeat for this long counts as a release

// --- HUD layout (canvas coordinates) ---
pub const HUD_SCORE_POS: (f64, f64) = (0.0, 0.0);
pub const HUD_LEVEL_POS: (f64, f64) = (400.0, 0.0);
pub const HUD_LIVES_POS: (f64, f64) = (700.0, 0.0);
pub const HUD_LIFE_SPACING: f64 = 20.0;
pub const BONUS_BANNER_POS: (f64, f64) = (300.0, 100.0);
pub const GAME_OVER_POS: (f64, f64) = (300.0, 250.0);

// --- Spawn zones (inclusive x/y bounds) ---
pub const ASTEROID_RESPAWN_ZONE: SpawnZone = SpawnZone::new((0, 734), (-120, -64));
// Fresh asteroids may start inside the canvas
pub const ASTEROID_SPAWN_ZONE: SpawnZone = SpawnZone::new((0, 734), (-120, 64));
pub const COIN_RESPAWN_ZONE: SpawnZone = SpawnZone::new((0, 730), (-1200, -450));
pub const COIN_SPAWN_ZONE: SpawnZone = SpawnZone::new((0, 734), (-1200, -300));
pub const POWER_UP_RESPAWN_ZONE: SpawnZone = SpawnZone::new((0, 730), (-2000, -1000));
pub const SHIELD_RESPAWN_ZONE: SpawnZone = SpawnZone::new((0, 730), (-1200, -700));
pub const LIFE_RESPAWN_ZONE: SpawnZone = SpawnZone::new((0, 730), (-5000, -750));
pub const LIFE_SPAWN_ZONE: SpawnZone = SpawnZone::new((0, 730), (-2000, -750));
