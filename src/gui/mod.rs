pub mod assets;
pub mod input;
mod canvas;
mod renderer;

pub use assets::Artwork;
pub use canvas::{TextCache, WindowCanvas};
pub use renderer::Renderer;
