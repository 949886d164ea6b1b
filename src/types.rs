use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    pub fn add(&self, other: Vector2D) -> Self {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }

    pub fn distance_to(&self, other: Vector2D) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

/// Inclusive integer bounds an object is dropped into when it spawns or is recycled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnZone {
    pub x: (i32, i32),
    pub y: (i32, i32),
}

impl SpawnZone {
    pub const fn new(x: (i32, i32), y: (i32, i32)) -> Self {
        SpawnZone { x, y }
    }

    pub fn sample(&self, rng: &mut impl Rng) -> Vector2D {
        let x = rng.gen_range(self.x.0..=self.x.1);
        let y = rng.gen_range(self.y.0..=self.y.1);
        Vector2D::new(x as f64, y as f64)
    }

    pub fn contains(&self, position: Vector2D) -> bool {
        position.x >= self.x.0 as f64
            && position.x <= self.x.1 as f64
            && position.y >= self.y.0 as f64
            && position.y <= self.y.1 as f64
    }
}
