use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info};
use crate::game::collision::collides;
use crate::game::obstacles::ObstacleManager;
use crate::game::physics::PhysicsState;
use crate::game::rules::GameRules;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Flap,
    Restart,
}

/// Everything one round of play mutates. Input and the loop both go through
/// `&mut GameSession`, so a command always lands whole between two ticks.
pub struct GameSession<R = StdRng> {
    rules: GameRules,
    physics: PhysicsState,
    obstacles: ObstacleManager,
    score: u32,
    phase: Phase,
    rng: R,
}

impl<R: Rng> GameSession<R> {
    pub fn new(rules: GameRules, rng: R) -> GameSession<R> {
        let obstacles = ObstacleManager::new(&rules);
        GameSession {
            rules,
            physics: PhysicsState::new(),
            obstacles,
            score: 0,
            phase: Phase::Running,
            rng,
        }
    }

    /// Advances one fixed step. The tick that detects a collision still
    /// scrolls and scores; the round is frozen from the next tick until
    /// `restart`.
    pub fn tick(&mut self) {
        if self.phase != Phase::Running {
            return;
        }

        self.physics.integrate(&self.rules);
        let crashed = collides(&self.physics, &self.obstacles, &self.rules);

        let passed = self.obstacles.advance(&self.rules, &mut self.rng);
        if passed > 0 {
            self.score += passed;
            info!(score = self.score, "Score");
        }

        if crashed {
            self.phase = Phase::GameOver;
            info!(score = self.score, pos_y = self.physics.pos_y, "Game over, press space to restart");
        }
    }

    pub fn flap(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.physics.flap(&self.rules);
        debug!(velocity_y = self.physics.velocity_y, "Flap");
        true
    }

    pub fn restart(&mut self) {
        self.physics.reset();
        self.obstacles.reset(&self.rules);
        self.score = 0;
        self.phase = Phase::Running;
        info!(
            pos_y = self.physics.pos_y,
            obstacles = self.obstacles.len(),
            "Game restarted"
        );
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Flap => {
                self.flap();
            }
            Command::Restart => self.restart(),
        }
    }
}

impl<R> GameSession<R> {
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn physics(&self) -> &PhysicsState {
        &self.physics
    }

    pub fn obstacles(&self) -> &ObstacleManager {
        &self.obstacles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}
