use crate::constants::*;
use crate::entities::{FallingKind, FallingObject};
use crate::scoring::{is_bonus_round, target_asteroids};
use log::info;
use rand::Rng;

/// Grows the coin field to the bonus size on bonus rounds, otherwise trims it back
/// to the steady count by dropping the oldest coins first.
pub fn reconcile_coins(coins: &mut Vec<FallingObject>, score: u32, rng: &mut impl Rng) {
    if is_bonus_round(score) {
        if coins.len() >= BONUS_COIN_COUNT {
            return;
        }
        let missing = BONUS_COIN_COUNT - coins.len();
        coins.extend(
            (0..missing).map(|_| FallingObject::spawn_in(FallingKind::Coin, COIN_SPAWN_ZONE, COIN_SPEED, rng)),
        );
    } else if coins.len() > STEADY_COIN_COUNT {
        let surplus = coins.len() - STEADY_COIN_COUNT;
        coins.drain(..surplus);
    }
}

/// Brings the asteroid field to the level's target. At exactly eight asteroids the
/// field is sped up instead of grown, whatever the target.
pub fn reconcile_asteroids(asteroids: &mut Vec<FallingObject>, level: u32, score: u32, rng: &mut impl Rng) {
    let target = target_asteroids(level);
    let current = asteroids.len();
    if current == target {
        return;
    }
    if current == ASTEROID_BOOST_COUNT {
        let boost = ASTEROID_BOOST_BASE + score as f64 / ASTEROID_BOOST_SCORE_DIVISOR;
        for asteroid in asteroids.iter_mut() {
            asteroid.increase_speed(boost);
        }
        info!("Asteroid field boosted by {:.3} at score {}", boost, score);
    } else if current < target {
        asteroids.extend((current..target).map(|_| {
            FallingObject::spawn_in(
                FallingKind::Asteroid,
                ASTEROID_SPAWN_ZONE,
                SPAWNED_ASTEROID_SPEED,
                rng,
            )
        }));
        info!("Spawned {} asteroids for level {}", target - current, level);
    }
}
