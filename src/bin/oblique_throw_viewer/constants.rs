use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1300;
pub const INITIAL_WINDOW_HEIGHT: i32 = 760;
pub const MSAA_SAMPLES: i32 = 4;

pub const TITLE_Y: f32 = 34.0;
pub const TITLE_FONT_SIZE: u16 = 26;
pub const GRID_TOP: f32 = 52.0;

pub const PANEL_LEFT_MARGIN: f32 = 72.0;
pub const PANEL_RIGHT_MARGIN: f32 = 24.0;
pub const PANEL_TOP_MARGIN: f32 = 34.0;
pub const PANEL_BOTTOM_MARGIN: f32 = 58.0;

pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;
pub const MARKER_SIZE: f32 = 4.0;

pub const BACKGROUND: Color = Color::new(0.98, 0.98, 0.99, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.906, 0.925, 1.0);
pub const LABEL_COLOR: Color = Color::new(0.41, 0.44, 0.486, 1.0);
pub const ROYAL_BLUE: Color = Color::new(0.255, 0.412, 0.882, 1.0);
pub const STEM_GREY: Color = Color::new(0.5, 0.5, 0.5, 1.0);
pub const AREA_FILL: Color = Color::new(0.0, 0.0, 0.0, 0.1);
