use quicksilver::{
    geom::{Rectangle, Vector},
    graphics::Color,
    Result,
};
use crate::game::model::Obstacle;
use crate::game::rules::GameRules;
use crate::game::session::{GameSession, Phase};
use crate::gui::assets::Artwork;
use crate::gui::canvas::{Canvas, Picture};

const SKY_TOP: Color = Color { r: 0.529, g: 0.808, b: 0.922, a: 1.0 };
const SKY_BOTTOM: Color = Color { r: 0.596, g: 0.984, b: 0.596, a: 1.0 };
const CLOUD: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 0.7 };
const SPRITE_BODY: Color = Color { r: 1.0, g: 0.843, b: 0.0, a: 1.0 };
const SPRITE_EYE: Color = Color { r: 1.0, g: 0.388, b: 0.278, a: 1.0 };
const BUILDING: Color = Color { r: 0.412, g: 0.412, b: 0.412, a: 1.0 };
const WATERMARK: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 0.8 };
const OVERLAY: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.7 };

const CLOUD_PUFFS: [(f32, f32, f32); 3] = [(200.0, 150.0, 40.0), (240.0, 150.0, 30.0), (280.0, 150.0, 35.0)];

/// Skyscraper art is sized against this top height and grows or shrinks
/// with the obstacle's deviation from it.
const ART_BASE_HEIGHT: f32 = 250f32;
const ART_BASE_DRAW_HEIGHT: f32 = 300f32;

pub const WATERMARK_TEXT: &str = "A clone of Flappy bird written in Rust";

pub struct Renderer;

impl Renderer {
    pub fn draw<C: Canvas, F, R>(&self, canvas: &mut C, artwork: &Artwork<C::Image, F>, session: &GameSession<R>) -> Result<()> {
        let rules = session.rules();
        self.draw_background(canvas, artwork.background.as_ref(), rules)?;
        if session.is_running() {
            self.draw_sprite(canvas, artwork.sprite.as_ref(), session.physics().pos_y, rules)?;
        }
        for obstacle in session.obstacles().obstacles() {
            self.draw_obstacle(canvas, artwork.obstacle.as_ref(), obstacle, rules)?;
        }
        self.draw_hud(canvas, session)
    }

    fn draw_background<C: Canvas>(&self, canvas: &mut C, image: Option<&C::Image>, rules: &GameRules) -> Result<()> {
        let screen = Rectangle::new((0f32, 0f32), (rules.screen_width, rules.screen_height));
        match image {
            Some(image) => canvas.draw_image(image, screen, false),
            None => {
                canvas.fill_gradient(screen, SKY_TOP, SKY_BOTTOM)?;
                for (x, y, radius) in CLOUD_PUFFS.iter() {
                    canvas.fill_circle(Vector::new(*x, *y), *radius, CLOUD)?;
                }
                Ok(())
            }
        }
    }

    fn draw_sprite<C: Canvas>(&self, canvas: &mut C, image: Option<&C::Image>, pos_y: f32, rules: &GameRules) -> Result<()> {
        let body = Rectangle::new((rules.player_x, pos_y), (rules.player_width, rules.player_height));
        match image {
            Some(image) => canvas.draw_image(image, body, false),
            None => {
                canvas.fill_rect(body, SPRITE_BODY)?;
                canvas.fill_rect(Rectangle::new((rules.player_x + 70f32, pos_y + 20f32), (20f32, 20f32)), SPRITE_EYE)
            }
        }
    }

    fn draw_obstacle<C: Canvas>(&self, canvas: &mut C, image: Option<&C::Image>, obstacle: &Obstacle, rules: &GameRules) -> Result<()> {
        match image {
            Some(image) => {
                let size = image.natural_size();
                let aspect = if size.y > 0f32 { size.x / size.y } else { 1f32 };
                let width = ART_BASE_HEIGHT * aspect;
                let height = ART_BASE_DRAW_HEIGHT + (obstacle.top_height - ART_BASE_HEIGHT);
                let left = obstacle.pos_x + (rules.obstacle_width - width) / 2f32;
                canvas.draw_image(image, Rectangle::new((left, 0f32), (width, height)), true)?;
                canvas.draw_image(image, Rectangle::new((left, rules.screen_height - height), (width, height)), false)
            }
            None => {
                canvas.fill_rect(obstacle.top_hitbox(rules), BUILDING)?;
                canvas.fill_rect(obstacle.bottom_hitbox(rules), BUILDING)
            }
        }
    }

    fn draw_hud<C: Canvas, R>(&self, canvas: &mut C, session: &GameSession<R>) -> Result<()> {
        let rules = session.rules();
        if session.phase() == Phase::Running {
            canvas.draw_text(&format!("My Score: {}", session.score()), Vector::new(50, 52), 48f32, Color::WHITE)?;
        }
        canvas.draw_text(WATERMARK_TEXT, Vector::new(1100, 852), 18f32, WATERMARK)?;

        if session.phase() == Phase::GameOver {
            let screen = Rectangle::new((0f32, 0f32), (rules.screen_width, rules.screen_height));
            canvas.fill_rect(screen, OVERLAY)?;
            canvas.draw_text("GAME OVER", Vector::new(600, 328), 72f32, Color::WHITE)?;
            canvas.draw_text(&format!("Final Score: {}", session.score()), Vector::new(600, 414), 36f32, Color::WHITE)?;
            canvas.draw_text("Press Space to Restart", Vector::new(600, 464), 36f32, Color::WHITE)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[derive(Debug, PartialEq)]
    struct FakeImage {
        name: &'static str,
        size: (f32, f32),
    }

    impl Picture for FakeImage {
        fn natural_size(&self) -> Vector {
            Vector::new(self.size.0, self.size.1)
        }
    }

    #[derive(Debug, PartialEq)]
    enum Call {
        Rect((f32, f32, f32, f32), Color),
        Circle((f32, f32), f32),
        Gradient((f32, f32, f32, f32)),
        Image(&'static str, (f32, f32, f32, f32), bool),
        Text(String),
    }

    #[derive(Default)]
    struct RecordingCanvas {
        calls: Vec<Call>,
    }

    fn bounds(rect: Rectangle) -> (f32, f32, f32, f32) {
        (rect.pos.x, rect.pos.y, rect.size.x, rect.size.y)
    }

    impl Canvas for RecordingCanvas {
        type Image = FakeImage;

        fn fill_rect(&mut self, rect: Rectangle, color: Color) -> Result<()> {
            self.calls.push(Call::Rect(bounds(rect), color));
            Ok(())
        }

        fn fill_circle(&mut self, center: Vector, radius: f32, _color: Color) -> Result<()> {
            self.calls.push(Call::Circle((center.x, center.y), radius));
            Ok(())
        }

        fn fill_gradient(&mut self, rect: Rectangle, _top: Color, _bottom: Color) -> Result<()> {
            self.calls.push(Call::Gradient(bounds(rect)));
            Ok(())
        }

        fn draw_image(&mut self, image: &FakeImage, rect: Rectangle, flip_vertical: bool) -> Result<()> {
            self.calls.push(Call::Image(image.name, bounds(rect), flip_vertical));
            Ok(())
        }

        fn draw_text(&mut self, text: &str, _pos: Vector, _size: f32, _color: Color) -> Result<()> {
            self.calls.push(Call::Text(text.to_string()));
            Ok(())
        }
    }

    fn image(name: &'static str, width: f32, height: f32) -> Option<FakeImage> {
        Some(FakeImage { name, size: (width, height) })
    }

    fn full_artwork() -> Artwork<FakeImage, ()> {
        Artwork {
            sprite: image("sprite", 64f32, 64f32),
            obstacle: image("obstacle", 125f32, 250f32),
            background: image("background", 1920f32, 1080f32),
            font: Some(()),
        }
    }

    fn session() -> GameSession<StepRng> {
        GameSession::new(GameRules::default(), StepRng::new(0, 0))
    }

    fn render(artwork: &Artwork<FakeImage, ()>, session: &GameSession<StepRng>) -> Vec<Call> {
        let mut canvas = RecordingCanvas::default();
        Renderer.draw(&mut canvas, artwork, session).ok();
        canvas.calls
    }

    fn texts(calls: &[Call]) -> Vec<&str> {
        calls.iter().filter_map(|call| match call {
            Call::Text(text) => Some(text.as_str()),
            _ => None,
        }).collect()
    }

    #[test]
    fn missing_artwork_uses_procedural_fallbacks(){
        let calls = render(&Artwork::missing(), &session());

        assert_eq!(calls[0], Call::Gradient((0f32, 0f32, 1600f32, 900f32)));
        assert_eq!(calls[1], Call::Circle((200f32, 150f32), 40f32));
        assert_eq!(calls[2], Call::Circle((240f32, 150f32), 30f32));
        assert_eq!(calls[3], Call::Circle((280f32, 150f32), 35f32));
        assert_eq!(calls[4], Call::Rect((10f32, 0f32, 100f32, 100f32), SPRITE_BODY));
        assert_eq!(calls[5], Call::Rect((80f32, 20f32, 20f32, 20f32), SPRITE_EYE));
        assert_eq!(calls[6], Call::Rect((800f32, 0f32, 50f32, 250f32), BUILDING));
        assert_eq!(calls[7], Call::Rect((800f32, 650f32, 50f32, 250f32), BUILDING));
        assert!(calls.iter().all(|call| match call {
            Call::Image(..) => false,
            _ => true,
        }));
    }

    #[test]
    fn loaded_artwork_is_scaled_into_place(){
        let calls = render(&full_artwork(), &session());

        assert_eq!(calls[0], Call::Image("background", (0f32, 0f32, 1600f32, 900f32), false));
        assert_eq!(calls[1], Call::Image("sprite", (10f32, 0f32, 100f32, 100f32), false));
        // aspect 0.5 gives a 125 wide building centred on the 50 wide hitbox
        assert_eq!(calls[2], Call::Image("obstacle", (762.5, 0f32, 125f32, 300f32), true));
        assert_eq!(calls[3], Call::Image("obstacle", (762.5, 600f32, 125f32, 300f32), false));
    }

    #[test]
    fn building_art_tracks_top_height(){
        let mut session = session();
        session.tick();

        let calls = render(&full_artwork(), &session);

        // second obstacle spawned with top height 200
        assert_eq!(calls[4], Call::Image("obstacle", (1562.5, 0f32, 125f32, 250f32), true));
        assert_eq!(calls[5], Call::Image("obstacle", (1562.5, 650f32, 125f32, 250f32), false));
    }

    #[test]
    fn running_hud_shows_score(){
        let calls = render(&full_artwork(), &session());

        assert_eq!(texts(&calls), vec!["My Score: 0", WATERMARK_TEXT]);
    }

    #[test]
    fn game_over_hides_sprite_and_shows_overlay(){
        let mut session = session();
        while session.is_running() {
            session.tick();
        }

        let calls = render(&full_artwork(), &session);

        assert!(!calls.iter().any(|call| match call {
            Call::Image(name, ..) => *name == "sprite",
            _ => false,
        }));
        assert!(calls.contains(&Call::Rect((0f32, 0f32, 1600f32, 900f32), OVERLAY)));
        assert_eq!(texts(&calls), vec![WATERMARK_TEXT, "GAME OVER", "Final Score: 0", "Press Space to Restart"]);
    }
}
