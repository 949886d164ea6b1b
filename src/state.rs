use log::info;
use rand::Rng;

use crate::constants::*;
use crate::entities::{FallingKind, FallingObject, Ship};
use crate::pickups::Pickup;
use crate::population::{reconcile_asteroids, reconcile_coins};
use crate::scoring::{is_bonus_round, target_asteroids, Scoreboard};

/// Logical controls, already edge-detected by the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    LeftDown,
    LeftUp,
    RightDown,
    RightUp,
    Fire,
    CancelPower,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// True only on the frame the ship ran out of lives.
    pub game_over_entered: bool,
    /// High score to write back; set on every frame spent in game over.
    pub persist_high_score: Option<u32>,
}

/// Everything one round of the game owns. The frame step mutates it in place and
/// rendering only reads it.
#[derive(Clone, Debug)]
pub struct GameState {
    pub ship: Ship,
    pub asteroids: Vec<FallingObject>,
    pub coins: Vec<FallingObject>,
    pub power_up: Pickup,
    pub shield: Pickup,
    pub life: Pickup,
    pub scoreboard: Scoreboard,
    pub level: u32,
    pub running: bool,
    pub bonus_round: bool,
    pub game_over: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub bullet_available: bool,
    pub powerup_available: bool,
    pub frame_count: u64,
}

impl GameState {
    pub fn new(high_score: u32, rng: &mut impl Rng) -> Self {
        let level = 1;
        let coins = (0..STEADY_COIN_COUNT)
            .map(|_| FallingObject::spawn_in(FallingKind::Coin, COIN_SPAWN_ZONE, COIN_SPEED, rng))
            .collect();
        let asteroids = (0..target_asteroids(level))
            .map(|_| {
                FallingObject::spawn_in(
                    FallingKind::Asteroid,
                    ASTEROID_SPAWN_ZONE,
                    INITIAL_ASTEROID_SPEED,
                    rng,
                )
            })
            .collect();
        GameState {
            ship: Ship::new(SHIP_START_X, SHIP_START_Y),
            asteroids,
            coins,
            power_up: Pickup::power_up(),
            shield: Pickup::shield(rng),
            life: Pickup::life(rng),
            scoreboard: Scoreboard::new(high_score),
            level,
            running: true,
            bonus_round: false,
            game_over: false,
            move_left: false,
            move_right: false,
            bullet_available: true,
            powerup_available: false,
            frame_count: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.scoreboard.score
    }

    /// Advances the game by one frame. The order of the phases matters: later
    /// checks read what earlier ones changed within the same frame.
    pub fn step(&mut self, commands: &[Command], rng: &mut impl Rng) -> FrameReport {
        let mut report = FrameReport::default();
        self.bonus_round = is_bonus_round(self.scoreboard.score);

        for command in commands {
            self.apply_command(*command);
        }

        if self.ship.bullet.position.y < 0.0 {
            self.bullet_available = true;
        }
        self.move_ship();

        if !self.game_over {
            reconcile_coins(&mut self.coins, self.scoreboard.score, rng);
            if !self.bonus_round {
                self.update_asteroids(rng);
            }
            self.life.try_collect(&mut self.ship, rng);
            self.life.recycle_if_out_of_bounds(rng);
        }

        self.shield.try_collect(&mut self.ship, rng);

        if !self.game_over {
            self.update_coins(rng);
        }

        if self.power_up.try_collect(&mut self.ship, rng) {
            self.powerup_available = true;
        }

        if !self.game_over {
            self.power_up.recycle_if_out_of_bounds(rng);
            self.power_up.advance();
            self.life.advance();
            self.shield.advance();
        }

        if self.ship.is_destroyed() {
            if !self.game_over {
                info!("Game over at score {} (level {})", self.scoreboard.score, self.level);
                report.game_over_entered = true;
            }
            self.game_over = true;
            report.persist_high_score = Some(self.scoreboard.final_high_score());
        }

        self.ship.throw_power_bullets();
        self.ship.arm_power_weapon();
        reconcile_asteroids(&mut self.asteroids, self.level, self.scoreboard.score, rng);
        self.ship.fire();
        self.level = self.scoreboard.level();
        self.frame_count += 1;
        report
    }

    fn apply_command(&mut self, command: Command) {
        match command {
            Command::Quit => {
                info!("Quit requested at frame {}", self.frame_count);
                self.running = false;
            }
            Command::LeftDown => self.move_left = true,
            Command::LeftUp => self.move_left = false,
            Command::RightDown => self.move_right = true,
            Command::RightUp => self.move_right = false,
            Command::Fire => {
                if self.bullet_available {
                    self.ship.load_bullet();
                    self.bullet_available = false;
                }
            }
            Command::CancelPower => {
                if self.powerup_available {
                    self.ship.power = false;
                    self.powerup_available = false;
                }
            }
        }
    }

    // Past either edge the held key is dropped rather than the position clamped.
    fn move_ship(&mut self) {
        if self.ship.position.x < SHIP_MIN_X {
            self.move_left = false;
        }
        if self.ship.position.x > SHIP_MAX_X {
            self.move_right = false;
        }
        if self.move_left {
            self.ship.move_left();
        }
        if self.move_right {
            self.ship.move_right();
        }
    }

    fn update_asteroids(&mut self, rng: &mut impl Rng) {
        let GameState { ship, asteroids, scoreboard, bullet_available, .. } = self;
        for asteroid in asteroids.iter_mut() {
            asteroid.advance();

            if ship.hit(asteroid) {
                scoreboard.award();
                asteroid.respawn(rng);
                *bullet_available = true;
            }

            if ship.power_hit(asteroid, rng) {
                scoreboard.award();
            }

            if ship.collides_with(asteroid) {
                asteroid.respawn(rng);
                ship.absorb_collision();
            }

            if asteroid.is_out_of_bounds() {
                asteroid.respawn(rng);
                ship.lose_life();
            }
        }
    }

    fn update_coins(&mut self, rng: &mut impl Rng) {
        let GameState { ship, coins, scoreboard, .. } = self;
        for coin in coins.iter_mut() {
            coin.advance();

            if coin.is_out_of_bounds() {
                coin.respawn(rng);
            }

            if ship.collides_with(coin) {
                scoreboard.award();
                coin.respawn(rng);
            }
        }
    }
}
