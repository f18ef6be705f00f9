//! [embedded_graphics] integration: frames paint onto any binary display.
//!
//! Black maps to [BinaryColor::On] and white to [BinaryColor::Off].

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::dispatch::Frame;
use crate::render::{Bounds, Color, RenderRect};

impl From<Color> for BinaryColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => BinaryColor::On,
            Color::White => BinaryColor::Off,
        }
    }
}

impl From<Size> for Bounds {
    fn from(size: Size) -> Self {
        Bounds::new(size.width, size.height)
    }
}

impl From<RenderRect> for Rectangle {
    fn from(r: RenderRect) -> Self {
        Rectangle::new(Point::new(r.x, r.y), Size::new(r.width, r.height))
    }
}

impl Drawable for RenderRect {
    type Color = BinaryColor;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        target.fill_solid(&Rectangle::from(*self), self.color.into())
    }
}

impl Drawable for Frame {
    type Color = BinaryColor;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        for rect in &self.rects {
            rect.draw(target)?;
        }
        Ok(())
    }
}
