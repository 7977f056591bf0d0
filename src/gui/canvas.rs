use std::collections::hash_map::{Entry, HashMap};
use quicksilver::{
    geom::{Circle, Rectangle, Transform, Vector},
    graphics::{Background::{Col, Img}, Color, Font, FontStyle, Image},
    lifecycle::Window,
    Result,
};

const GRADIENT_BAND: f32 = 6f32;

pub trait Picture {
    fn natural_size(&self) -> Vector;
}

impl Picture for Image {
    fn natural_size(&self) -> Vector {
        self.area().size
    }
}

/// The handful of 2D drawing calls the renderer needs.
pub trait Canvas {
    type Image: Picture;

    fn fill_rect(&mut self, rect: Rectangle, color: Color) -> Result<()>;

    fn fill_circle(&mut self, center: Vector, radius: f32, color: Color) -> Result<()>;

    /// Vertical gradient from `top` at the rectangle's top edge to `bottom`.
    fn fill_gradient(&mut self, rect: Rectangle, top: Color, bottom: Color) -> Result<()>;

    fn draw_image(&mut self, image: &Self::Image, rect: Rectangle, flip_vertical: bool) -> Result<()>;

    /// `pos` is the top-left corner of the text.
    fn draw_text(&mut self, text: &str, pos: Vector, size: f32, color: Color) -> Result<()>;
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextKey {
    text: String,
    size: u32,
    color: [u32; 4],
}

impl TextKey {
    pub fn new(text: &str, size: f32, color: Color) -> TextKey {
        TextKey {
            text: text.to_string(),
            size: size.to_bits(),
            color: [color.r.to_bits(), color.g.to_bits(), color.b.to_bits(), color.a.to_bits()],
        }
    }
}

struct CachedText<T> {
    rendered: T,
    used: bool,
}

/// Rasterised text kept across frames. Lines that were not drawn since the
/// previous `sweep` are dropped, so a changing score holds one entry at a time.
pub struct TextCache<T> {
    entries: HashMap<TextKey, CachedText<T>>,
}

impl<T> TextCache<T> {
    pub fn new() -> TextCache<T> {
        TextCache { entries: HashMap::new() }
    }

    pub fn get_or_render(&mut self, key: TextKey, render: impl FnOnce() -> Result<T>) -> Result<&T> {
        let entry = match self.entries.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(CachedText { rendered: render()?, used: false }),
        };
        entry.used = true;
        Ok(&entry.rendered)
    }

    pub fn sweep(&mut self) {
        self.entries.retain(|_, entry| {
            let keep = entry.used;
            entry.used = false;
            keep
        });
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

pub struct WindowCanvas<'a> {
    window: &'a mut Window,
    font: Option<&'a Font>,
    texts: &'a mut TextCache<Image>,
}

impl<'a> WindowCanvas<'a> {
    pub fn new(window: &'a mut Window, font: Option<&'a Font>, texts: &'a mut TextCache<Image>) -> WindowCanvas<'a> {
        WindowCanvas { window, font, texts }
    }
}

impl<'a> Canvas for WindowCanvas<'a> {
    type Image = Image;

    fn fill_rect(&mut self, rect: Rectangle, color: Color) -> Result<()> {
        self.window.draw(&rect, Col(color));
        Ok(())
    }

    fn fill_circle(&mut self, center: Vector, radius: f32, color: Color) -> Result<()> {
        self.window.draw(&Circle::new(center, radius), Col(color));
        Ok(())
    }

    fn fill_gradient(&mut self, rect: Rectangle, top: Color, bottom: Color) -> Result<()> {
        let mut offset = 0f32;
        while offset < rect.size.y {
            let height = f32::min(GRADIENT_BAND, rect.size.y - offset);
            let color = lerp(top, bottom, (offset + height / 2f32) / rect.size.y);
            let band = Rectangle::new((rect.pos.x, rect.pos.y + offset), (rect.size.x, height));
            self.window.draw(&band, Col(color));
            offset += GRADIENT_BAND;
        }
        Ok(())
    }

    fn draw_image(&mut self, image: &Image, rect: Rectangle, flip_vertical: bool) -> Result<()> {
        let transform = if flip_vertical {
            Transform::scale(Vector::new(1, -1))
        } else {
            Transform::IDENTITY
        };
        self.window.draw_ex(&rect, Img(image), transform, 0);
        Ok(())
    }

    fn draw_text(&mut self, text: &str, pos: Vector, size: f32, color: Color) -> Result<()> {
        if let Some(font) = self.font {
            let key = TextKey::new(text, size, color);
            let rendered = self.texts.get_or_render(key, || font.render(text, &FontStyle::new(size, color)))?;
            let area = Rectangle::new(pos, rendered.area().size);
            self.window.draw(&area, Img(rendered));
        }
        Ok(())
    }
}

pub fn lerp(from: Color, to: Color, t: f32) -> Color {
    let t = t.max(0f32).min(1f32);
    Color {
        r: from.r + (to.r - from.r) * t,
        g: from.g + (to.g - from.g) * t,
        b: from.b + (to.b - from.b) * t,
        a: from.a + (to.a - from.a) * t,
    }
}
