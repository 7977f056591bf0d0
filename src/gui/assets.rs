use std::fmt::Debug;
use quicksilver::{
    graphics::{Font, Image},
    Error, Future,
};
use tracing::{info, warn};

pub const SPRITE_PATH: &str = "angrybird.jpg";
pub const OBSTACLE_PATH: &str = "skyscraper.png";
pub const BACKGROUND_PATH: &str = "background.jpeg";
pub const FONT_PATH: &str = "font.ttf";

/// Whatever survived loading. A `None` slot is drawn with a procedural
/// stand-in by the renderer.
pub struct Artwork<I, F> {
    pub sprite: Option<I>,
    pub obstacle: Option<I>,
    pub background: Option<I>,
    pub font: Option<F>,
}

impl<I, F> Artwork<I, F> {
    #[cfg(test)]
    pub fn missing() -> Artwork<I, F> {
        Artwork { sprite: None, obstacle: None, background: None, font: None }
    }

    pub fn report(&self) -> AssetReport {
        AssetReport {
            sprite: self.sprite.is_some(),
            obstacle: self.obstacle.is_some(),
            background: self.background.is_some(),
            font: self.font.is_some(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssetReport {
    pub sprite: bool,
    pub obstacle: bool,
    pub background: bool,
    pub font: bool,
}

/// Turns a load into one that always resolves: `Some` on success, `None`
/// after logging the failure.
pub fn settle<F>(name: &'static str, load: F) -> impl Future<Item = Option<F::Item>, Error = Error>
    where F: Future, F::Error: Debug {
    load.then(move |result| -> Result<Option<F::Item>, Error> {
        match result {
            Ok(asset) => Ok(Some(asset)),
            Err(error) => {
                warn!(asset = name, error = ?error, "{} failed to load, using fallback", name);
                Ok(None)
            }
        }
    })
}

/// Starts every load at once; the returned future resolves after each one
/// has either loaded or failed. There are no retries.
pub fn load_artwork() -> impl Future<Item = Artwork<Image, Font>, Error = Error> {
    settle("sprite image", Image::load(SPRITE_PATH))
        .join4(
            settle("obstacle image", Image::load(OBSTACLE_PATH)),
            settle("background image", Image::load(BACKGROUND_PATH)),
            settle("font", Font::load(FONT_PATH)),
        )
        .map(|(sprite, obstacle, background, font)| {
            let artwork = Artwork { sprite, obstacle, background, font };
            info!(report = ?artwork.report(), "Assets settled");
            artwork
        })
}
