use quicksilver::geom::Rectangle;
use crate::game::obstacles::ObstacleManager;
use crate::game::physics::PhysicsState;
use crate::game::rules::GameRules;

pub fn collides(physics: &PhysicsState, obstacles: &ObstacleManager, rules: &GameRules) -> bool {
    let player_hitbox = physics.hitbox(rules);
    let hits_obstacle = obstacles.obstacles().any(|obstacle| {
        overlaps(&player_hitbox, &obstacle.top_hitbox(rules))
            || overlaps(&player_hitbox, &obstacle.bottom_hitbox(rules))
    });
    hits_obstacle || out_of_bounds(&player_hitbox, rules)
}

/// Strict overlap: rectangles that only share an edge do not collide.
fn overlaps(a: &Rectangle, b: &Rectangle) -> bool {
    a.pos.x + a.size.x > b.pos.x
        && a.pos.x < b.pos.x + b.size.x
        && a.pos.y + a.size.y > b.pos.y
        && a.pos.y < b.pos.y + b.size.y
}

fn out_of_bounds(hitbox: &Rectangle, rules: &GameRules) -> bool {
    hitbox.pos.y < 0f32 || hitbox.pos.y + hitbox.size.y > rules.screen_height
}
