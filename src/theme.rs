use serde::{Deserialize, Serialize};

use crate::data_types::Color;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PieTheme {
    pub background: Color,
    pub foreground: Color,
    pub text: Color,
    pub text_size: f32,
    pub selection_tint: Color,
    pub rubber_band_fill: Color,
    pub rubber_band_border: Color,
}

impl Default for PieTheme {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            foreground: Color::BLACK,
            text: Color::BLACK,
            text_size: 12.0,
            selection_tint: Color::rgb(0.3, 0.5, 0.9).alpha(0.3),
            rubber_band_fill: Color::rgb(0.3, 0.5, 0.9).alpha(0.15),
            rubber_band_border: Color::rgb(0.3, 0.5, 0.9),
        }
    }
}
