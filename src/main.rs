mod game;
mod gui;

use quicksilver::{
    geom::Vector,
    graphics::{Color, Font, Image},
    lifecycle::{run, Asset, Event, Settings, State, Window},
    Result,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use crate::game::rules::GameRules;
use crate::game::session::GameSession;
use crate::gui::{assets, input, Artwork, Renderer, TextCache, WindowCanvas};

struct SkylineFlap {
    session: GameSession<StdRng>,
    artwork: Asset<Artwork<Image, Font>>,
    renderer: Renderer,
    texts: TextCache<Image>,
    ready: bool,
}

impl State for SkylineFlap {
    fn new() -> Result<Self> {
        let session = GameSession::new(GameRules::default(), StdRng::from_entropy());
        let artwork = Asset::new(assets::load_artwork());
        Ok(SkylineFlap { session, artwork, renderer: Renderer, texts: TextCache::new(), ready: false })
    }

    fn event(&mut self, event: &Event, _window: &mut Window) -> Result<()> {
        if !self.ready {
            return Ok(());
        }
        if let Event::Key(key, state) = event {
            if let Some(command) = input::command_for(*key, *state, self.session.phase()) {
                self.session.apply(command);
            }
        }
        Ok(())
    }

    fn update(&mut self, _window: &mut Window) -> Result<()> {
        if !self.ready {
            let ready = &mut self.ready;
            self.artwork.execute(|_| {
                *ready = true;
                Ok(())
            })?;
            if self.ready {
                info!(obstacles = self.session.obstacles().len(), "Assets ready, starting round");
            }
            return Ok(());
        }
        self.session.tick();
        Ok(())
    }

    fn draw(&mut self, window: &mut Window) -> Result<()> {
        window.clear(Color::BLACK)?;
        let session = &self.session;
        let renderer = &self.renderer;
        let texts = &mut self.texts;
        self.artwork.execute(|artwork| {
            let mut canvas = WindowCanvas::new(window, artwork.font.as_ref(), texts);
            renderer.draw(&mut canvas, artwork, session)
        })?;
        self.texts.sweep();
        Ok(())
    }
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let rules = GameRules::default();
    let settings = Settings {
        update_rate: rules.tick_interval_ms,
        draw_rate: rules.tick_interval_ms,
        ..Default::default()
    };
    run::<SkylineFlap>("Skyline Flap", Vector::new(rules.screen_width, rules.screen_height), settings);
}
