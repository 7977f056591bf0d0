/// Fixed tuning of the game. Every tick is integrated with `tick_seconds`
/// regardless of how much wall-clock time actually passed.
#[derive(Clone, Debug, PartialEq)]
pub struct GameRules {
    pub screen_width: f32,
    pub screen_height: f32,
    pub tick_seconds: f32,
    pub tick_interval_ms: f64,
    pub gravity: f32,
    pub flap_velocity: f32,
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub obstacle_width: f32,
    pub obstacle_speed: f32,
    pub obstacle_spacing: f32,
    pub spawn_x: f32,
    pub initial_obstacle_x: f32,
    pub initial_top_height: f32,
    pub top_height_min: f32,
    pub top_height_max: f32,
    pub top_height_jitter: i32,
}

impl Default for GameRules {
    fn default() -> Self {
        GameRules {
            screen_width: 1600f32,
            screen_height: 900f32,
            tick_seconds: 0.33,
            tick_interval_ms: 33.0,
            gravity: 9.8,
            flap_velocity: -50f32,
            player_x: 10f32,
            player_width: 100f32,
            player_height: 100f32,
            obstacle_width: 50f32,
            obstacle_speed: 10f32,
            obstacle_spacing: 300f32,
            spawn_x: 1600f32,
            initial_obstacle_x: 800f32,
            initial_top_height: 250f32,
            top_height_min: 200f32,
            top_height_max: 300f32,
            top_height_jitter: 50,
        }
    }
}

impl GameRules {
    /// Right edge of the sprite; it never moves horizontally.
    pub fn player_right(&self) -> f32 {
        self.player_x + self.player_width
    }

    /// An obstacle that spawned earlier than this x lets the next one in.
    pub fn spawn_threshold(&self) -> f32 {
        self.spawn_x - self.obstacle_spacing
    }
}
