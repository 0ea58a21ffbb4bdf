use crate::error::Result;
use crate::tuple::Tuple;

/// Constant accelerations applied to every projectile
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Environment {
    pub gravity: Tuple,
    pub wind: Tuple,
}

impl Environment {
    pub const fn new(gravity: Tuple, wind: Tuple) -> Self {
        Environment { gravity, wind }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projectile {
    pub position: Tuple,
    pub velocity: Tuple,
}

impl Projectile {
    pub const fn new(position: Tuple, velocity: Tuple) -> Self {
        Projectile { position, velocity }
    }

    /// Moves by one step of the current velocity, then accelerates.
    pub fn tick(&self, env: &Environment) -> Result<Projectile> {
        let position = self.position.checked_add(self.velocity)?;
        let velocity = self
            .velocity
            .checked_add(env.gravity)?
            .checked_add(env.wind)?;
        Ok(Projectile { position, velocity })
    }
}
