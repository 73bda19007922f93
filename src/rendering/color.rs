//! # Colors
//!
//! Glyph colors shared by the message log and the frame composer.

use serde::{Deserialize, Serialize};

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scales every channel by `factor`, used to fade old messages and
    /// tiles outside the light range.
    ///
    /// # Examples
    ///
    /// ```
    /// use troll_temple::Rgb;
    ///
    /// assert_eq!(Rgb::new(100, 200, 50).dim(0.5), Rgb::new(50, 100, 25));
    /// ```
    pub fn dim(self, factor: f32) -> Self {
        let scale = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const GREY: Rgb = Rgb::new(159, 159, 159);
pub const LIGHT_GREY: Rgb = Rgb::new(191, 191, 191);
pub const DARK_GREY: Rgb = Rgb::new(95, 95, 95);
pub const DARKER_GREY: Rgb = Rgb::new(63, 63, 63);
pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const LIGHT_RED: Rgb = Rgb::new(255, 63, 63);
pub const LIGHTER_RED: Rgb = Rgb::new(255, 127, 127);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);
pub const LIGHT_GREEN: Rgb = Rgb::new(63, 255, 63);
pub const LIGHTER_GREEN: Rgb = Rgb::new(127, 255, 127);
pub const LIGHT_BLUE: Rgb = Rgb::new(63, 63, 255);
pub const LIGHTER_BLUE: Rgb = Rgb::new(127, 127, 255);
pub const LIGHT_YELLOW: Rgb = Rgb::new(255, 255, 63);
pub const LIGHTER_YELLOW: Rgb = Rgb::new(255, 255, 127);
pub const DARK_YELLOW: Rgb = Rgb::new(191, 191, 0);
pub const ORANGE: Rgb = Rgb::new(255, 127, 0);
pub const PINK: Rgb = Rgb::new(255, 0, 127);
pub const BROWN: Rgb = Rgb::new(191, 95, 0);
pub const CYAN: Rgb = Rgb::new(0, 255, 255);
pub const VIOLET: Rgb = Rgb::new(127, 0, 255);

/// Color of screen titles.
pub const COLOR_TITLE: Rgb = LIGHTER_YELLOW;
