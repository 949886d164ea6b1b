use crate::constants::*;
use crate::entities::{FallingKind, FallingObject, Ship};
use crate::rendering::GameGrid;
use log::info;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickupKind {
    PowerUp,
    Shield,
    Life,
}

impl PickupKind {
    pub fn falling_kind(&self) -> FallingKind {
        match self {
            PickupKind::PowerUp => FallingKind::PowerUp,
            PickupKind::Shield => FallingKind::Shield,
            PickupKind::Life => FallingKind::Life,
        }
    }
}

/// One of the singleton bonuses drifting down toward the ship.
#[derive(Clone, Debug, PartialEq)]
pub struct Pickup {
    pub pickup_kind: PickupKind,
    pub body: FallingObject,
}

impl Pickup {
    pub fn new(pickup_kind: PickupKind, x: f64, y: f64, fall_speed: f64) -> Self {
        let body = FallingObject::new(pickup_kind.falling_kind(), x, y, fall_speed);
        Pickup { pickup_kind, body }
    }

    pub fn power_up() -> Self {
        Pickup::new(PickupKind::PowerUp, POWER_UP_START.0, POWER_UP_START.1, POWER_UP_SPEED)
    }

    pub fn shield(rng: &mut impl Rng) -> Self {
        let position = SHIELD_RESPAWN_ZONE.sample(rng);
        Pickup::new(PickupKind::Shield, position.x, position.y, SHIELD_SPEED)
    }

    pub fn life(rng: &mut impl Rng) -> Self {
        let position = LIFE_SPAWN_ZONE.sample(rng);
        Pickup::new(PickupKind::Life, position.x, position.y, LIFE_SPEED)
    }

    /// Applies the pickup to the ship when it is close enough, then recycles it.
    pub fn try_collect(&mut self, ship: &mut Ship, rng: &mut impl Rng) -> bool {
        if !ship.collides_with(&self.body) {
            return false;
        }
        match self.pickup_kind {
            PickupKind::PowerUp => {
                ship.power = true;
                self.body.respawn(rng);
                ship.arm_power_weapon();
            }
            PickupKind::Shield => {
                ship.safety = true;
                self.body.respawn(rng);
            }
            PickupKind::Life => {
                ship.add_life();
                self.body.respawn(rng);
            }
        }
        info!(
            "Pickup collected: {:?}. Lives: {}, safety: {}, power: {}",
            self.pickup_kind, ship.lives, ship.safety, ship.power
        );
        true
    }

    pub fn recycle_if_out_of_bounds(&mut self, rng: &mut impl Rng) {
        if self.body.is_out_of_bounds() {
            self.body.respawn(rng);
        }
    }

    pub fn advance(&mut self) {
        self.body.advance();
    }

    pub fn draw(&self, game_grid: &mut GameGrid) {
        self.body.draw(game_grid);
    }
}
