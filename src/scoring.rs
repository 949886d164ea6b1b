use crate::constants::*;

pub fn level_for_score(score: u32) -> u32 {
    if score < POINTS_PER_LEVEL {
        1
    } else {
        score / POINTS_PER_LEVEL + 1
    }
}

/// How many asteroids the field should hold at `level`.
pub fn target_asteroids(level: u32) -> usize {
    if level < TARGET_CAP_LEVEL {
        level as usize + 2
    } else {
        MAX_TARGET_ASTEROIDS
    }
}

/// Every multiple of five, including zero, is a bonus round.
pub fn is_bonus_round(score: u32) -> bool {
    score % BONUS_ROUND_EVERY == 0
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: u32,
    pub high_score: u32,
}

impl Scoreboard {
    pub fn new(high_score: u32) -> Self {
        Scoreboard { score: 0, high_score }
    }

    pub fn award(&mut self) {
        self.score += 1;
    }

    pub fn final_high_score(&self) -> u32 {
        self.high_score.max(self.score)
    }

    pub fn level(&self) -> u32 {
        level_for_score(self.score)
    }
}
