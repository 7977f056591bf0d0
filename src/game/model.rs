use quicksilver::geom::Rectangle;
use crate::game::rules::GameRules;

/// A skyscraper pair sharing one x. The bottom building is as tall as the top
/// one, so `top_height` alone fixes the opening between them.
#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub pos_x: f32,
    pub top_height: f32,
    pub passed: bool,
}

impl Obstacle {
    pub fn new(pos_x: f32, top_height: f32) -> Obstacle {
        Obstacle { pos_x, top_height, passed: false }
    }

    pub fn top_hitbox(&self, rules: &GameRules) -> Rectangle {
        Rectangle::new((self.pos_x, 0f32), (rules.obstacle_width, self.top_height))
    }

    pub fn bottom_hitbox(&self, rules: &GameRules) -> Rectangle {
        Rectangle::new(
            (self.pos_x, rules.screen_height - self.top_height),
            (rules.obstacle_width, self.top_height)
        )
    }

    pub fn right(&self, rules: &GameRules) -> f32 {
        self.pos_x + rules.obstacle_width
    }
}
