use crate::constants::*;
use crate::rendering::GameGrid;
use crate::types::{SpawnZone, Vector2D};
use log::{debug, info};
use rand::Rng;

/// Proximity test shared by every collision in the game.
pub fn within_collision_radius(a: Vector2D, b: Vector2D) -> bool {
    a.distance_to(b) < COLLISION_RADIUS
}

// --- Falling objects ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallingKind {
    Asteroid,
    Coin,
    PowerUp,
    Shield,
    Life,
}

impl FallingKind {
    pub fn respawn_zone(&self) -> SpawnZone {
        match self {
            FallingKind::Asteroid => ASTEROID_RESPAWN_ZONE,
            FallingKind::Coin => COIN_RESPAWN_ZONE,
            FallingKind::PowerUp => POWER_UP_RESPAWN_ZONE,
            FallingKind::Shield => SHIELD_RESPAWN_ZONE,
            FallingKind::Life => LIFE_RESPAWN_ZONE,
        }
    }

    pub fn display_char(&self) -> char {
        match self {
            FallingKind::Asteroid => '@',
            FallingKind::Coin => '*',
            FallingKind::PowerUp => 'P',
            FallingKind::Shield => 'S',
            FallingKind::Life => 'H',
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FallingObject {
    pub kind: FallingKind,
    pub position: Vector2D,
    pub fall_speed: f64,
}

impl FallingObject {
    pub fn new(kind: FallingKind, x: f64, y: f64, fall_speed: f64) -> Self {
        FallingObject { kind, position: Vector2D::new(x, y), fall_speed }
    }

    /// Creates an object somewhere inside `zone`.
    pub fn spawn_in(
        kind: FallingKind,
        zone: SpawnZone,
        fall_speed: f64,
        rng: &mut impl Rng,
    ) -> Self {
        let position = zone.sample(rng);
        FallingObject { kind, position, fall_speed }
    }

    pub fn advance(&mut self) {
        self.position.y += self.fall_speed;
    }

    /// Recycles the object to a fresh spot above the visible area.
    pub fn respawn(&mut self, rng: &mut impl Rng) {
        self.position = self.kind.respawn_zone().sample(rng);
    }

    pub fn increase_speed(&mut self, amount: f64) {
        self.fall_speed += amount;
    }

    pub fn is_near(&self, point: Vector2D) -> bool {
        within_collision_radius(self.position, point)
    }

    pub fn is_out_of_bounds(&self) -> bool {
        self.position.y > OUT_OF_BOUNDS_Y
    }

    pub fn draw(&self, game_grid: &mut GameGrid) {
        game_grid.plot(self.position, self.kind.display_char());
    }
}

// --- Bullet ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulletState {
    Loaded,
    Fired,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub position: Vector2D,
    pub fall_speed: f64,
    pub state: BulletState,
}

impl Bullet {
    pub fn new(x: f64, y: f64) -> Self {
        Bullet {
            position: Vector2D::new(x, y),
            fall_speed: BULLET_SPEED,
            state: BulletState::Fired,
        }
    }

    pub fn advance(&mut self) {
        self.position.y += self.fall_speed;
    }

    pub fn advance_with_drift(&mut self, drift_x: f64) {
        self.advance();
        self.position.x += drift_x;
    }

    pub fn fire(&mut self) {
        self.advance();
        self.state = BulletState::Fired;
    }

    pub fn snap_to(&mut self, position: Vector2D) {
        self.position = position;
    }

    /// Parks the bullet far above the canvas where nothing can reach it.
    pub fn park(&mut self) {
        self.position.y = BULLET_PARKED_Y;
    }

    /// On contact the bullet reloads and parks itself; the target is left alone.
    pub fn hit(&mut self, target: Vector2D) -> bool {
        if within_collision_radius(self.position, target) {
            self.state = BulletState::Loaded;
            self.park();
            true
        } else {
            false
        }
    }

    pub fn draw(&self, game_grid: &mut GameGrid) {
        game_grid.plot(self.position, '|');
    }
}

// --- Power weapon: three bullets fanning out ---
#[derive(Clone, Debug, PartialEq)]
pub struct PowerWeapon {
    pub bullets: Vec<Bullet>,
}

impl PowerWeapon {
    pub fn new(x: f64, y: f64) -> Self {
        PowerWeapon { bullets: (0..3).map(|_| Bullet::new(x, y)).collect() }
    }

    pub fn fire(&mut self, origin: Vector2D) {
        for (i, bullet) in self.bullets.iter_mut().enumerate() {
            let offset = Vector2D::new(POWER_BULLET_OFFSETS_X[i], POWER_BULLET_OFFSETS_Y[i]);
            bullet.snap_to(origin.add(offset));
        }
    }

    pub fn advance(&mut self) {
        for (i, bullet) in self.bullets.iter_mut().enumerate() {
            bullet.advance_with_drift(POWER_BULLET_DRIFT[i]);
        }
    }

    /// Only the first bullet in slot order that reaches the asteroid counts.
    pub fn check_hits(&mut self, asteroid: &mut FallingObject, rng: &mut impl Rng) -> bool {
        for bullet in self.bullets.iter_mut() {
            if bullet.hit(asteroid.position) {
                asteroid.respawn(rng);
                return true;
            }
        }
        false
    }

    pub fn prune(&mut self) {
        self.bullets.retain(|bullet| bullet.position.y >= POWER_BULLET_PRUNE_Y);
    }

    pub fn draw(&self, game_grid: &mut GameGrid) {
        for bullet in &self.bullets {
            bullet.draw(game_grid);
        }
    }
}

// --- Ship ---
#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub position: Vector2D,
    pub movement_speed: f64,
    pub lives: u32,
    pub safety: bool,
    pub power: bool,
    pub bullet: Bullet,
    pub power_weapon: PowerWeapon,
}

impl Ship {
    pub fn new(x: f64, y: f64) -> Self {
        Ship {
            position: Vector2D::new(x, y),
            movement_speed: SHIP_MOVEMENT_SPEED,
            lives: STARTING_LIVES,
            safety: false,
            power: false,
            bullet: Bullet::new(0.0, 0.0),
            power_weapon: PowerWeapon::new(POWER_BULLET_START_X, 0.0),
        }
    }

    pub fn move_left(&mut self) {
        self.position.x -= self.movement_speed;
    }

    pub fn move_right(&mut self) {
        self.position.x += self.movement_speed;
    }

    /// Puts the primary bullet at the ship's muzzle, ready to rise.
    pub fn load_bullet(&mut self) {
        let muzzle = Vector2D::new(BULLET_MUZZLE_OFFSET.0, BULLET_MUZZLE_OFFSET.1);
        self.bullet.snap_to(self.position.add(muzzle));
    }

    pub fn fire(&mut self) {
        self.bullet.fire();
    }

    /// The caller recycles the asteroid; only the bullet is reset here.
    pub fn hit(&mut self, asteroid: &FallingObject) -> bool {
        self.bullet.hit(asteroid.position)
    }

    pub fn power_hit(&mut self, asteroid: &mut FallingObject, rng: &mut impl Rng) -> bool {
        self.power_weapon.check_hits(asteroid, rng)
    }

    pub fn collides_with(&self, object: &FallingObject) -> bool {
        object.is_near(self.position)
    }

    /// Spends the shield if one is up, otherwise a life. Returns true when the shield took it.
    pub fn absorb_collision(&mut self) -> bool {
        if self.safety {
            self.safety = false;
            info!("Shield absorbed an asteroid collision.");
            true
        } else {
            self.lose_life();
            false
        }
    }

    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        debug!("Ship lost a life. Lives: {}", self.lives);
    }

    pub fn add_life(&mut self) {
        if self.lives < MAX_LIVES {
            self.lives += 1;
        }
    }

    pub fn arm_power_weapon(&mut self) {
        if self.power {
            self.power_weapon.fire(self.position);
        }
    }

    pub fn throw_power_bullets(&mut self) {
        self.power_weapon.advance();
    }

    pub fn is_destroyed(&self) -> bool {
        self.lives < 1
    }

    pub fn draw(&self, game_grid: &mut GameGrid) {
        game_grid.plot(self.position, 'A');
    }

    pub fn draw_safety_bubble(&self, game_grid: &mut GameGrid) {
        game_grid.plot(Vector2D::new(self.position.x - 16.0, self.position.y), '(');
        game_grid.plot(Vector2D::new(self.position.x + 16.0, self.position.y), ')');
    }
}
