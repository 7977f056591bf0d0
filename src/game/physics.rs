use quicksilver::geom::Rectangle;
use crate::game::rules::GameRules;

/// Vertical state of the sprite. Nothing clamps `pos_y`; leaving the screen
/// is caught by the collision check instead.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhysicsState {
    pub pos_y: f32,
    pub velocity_y: f32,
}

impl PhysicsState {
    pub fn new() -> PhysicsState {
        PhysicsState::default()
    }

    /// One semi-implicit Euler step with the fixed tick length.
    pub fn integrate(&mut self, rules: &GameRules) {
        self.velocity_y += rules.tick_seconds * rules.gravity;
        self.pos_y += self.velocity_y * rules.tick_seconds;
    }

    pub fn flap(&mut self, rules: &GameRules) {
        self.velocity_y = rules.flap_velocity;
    }

    pub fn reset(&mut self) {
        self.pos_y = 0f32;
        self.velocity_y = 0f32;
    }

    pub fn hitbox(&self, rules: &GameRules) -> Rectangle {
        Rectangle::new((rules.player_x, self.pos_y), (rules.player_width, rules.player_height))
    }
}
