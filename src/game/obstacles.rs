use std::collections::vec_deque::VecDeque;
use rand::Rng;
use crate::game::model::Obstacle;
use crate::game::rules::GameRules;
use crate::game::MinMax;

/// Skyscraper pairs in creation order, which is also ascending x order since
/// they all spawn at the same x and scroll at the same speed.
pub struct ObstacleManager {
    obstacles: VecDeque<Obstacle>,
}

impl ObstacleManager {
    pub fn new(rules: &GameRules) -> ObstacleManager {
        let mut obstacles = VecDeque::new();
        obstacles.push_back(Obstacle::new(rules.initial_obstacle_x, rules.initial_top_height));
        ObstacleManager { obstacles }
    }

    pub fn reset(&mut self, rules: &GameRules) {
        *self = ObstacleManager::new(rules);
    }

    /// Scrolls, prunes and spawns, then returns how many obstacles the
    /// sprite cleared during this step.
    pub fn advance(&mut self, rules: &GameRules, rng: &mut impl Rng) -> u32 {
        for obstacle in self.obstacles.iter_mut() {
            obstacle.pos_x -= rules.obstacle_speed;
        }
        self.obstacles.retain(|obstacle| obstacle.pos_x > -rules.obstacle_width);

        let should_spawn = self.last()
            .map(|last| last.pos_x < rules.spawn_threshold())
            .unwrap_or(true);
        if should_spawn {
            let obstacle = self.generate_obstacle(rules, rng);
            self.obstacles.push_back(obstacle);
        }

        let mut newly_passed = 0;
        for obstacle in self.obstacles.iter_mut().filter(|obstacle| !obstacle.passed) {
            if rules.player_right() > obstacle.right(rules) {
                obstacle.passed = true;
                newly_passed += 1;
            }
        }
        newly_passed
    }

    fn generate_obstacle(&self, rules: &GameRules, rng: &mut impl Rng) -> Obstacle {
        let previous = self.last()
            .map(|last| last.top_height)
            .unwrap_or(rules.initial_top_height);
        let offset = rng.gen_range(-rules.top_height_jitter, rules.top_height_jitter + 1);
        Obstacle::new(rules.spawn_x, next_top_height(previous, offset, rules))
    }

    pub fn obstacles(&self) -> impl Iterator<Item = &Obstacle> + '_ {
        self.obstacles.iter()
    }

    pub fn last(&self) -> Option<&Obstacle> {
        self.obstacles.back()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }
}

pub fn next_top_height(previous: f32, offset: i32, rules: &GameRules) -> f32 {
    f32::min_max(previous + offset as f32, rules.top_height_min, rules.top_height_max)
}
