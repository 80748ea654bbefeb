use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1280;
pub const INITIAL_WINDOW_HEIGHT: i32 = 860;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const LEFT_MARGIN: f32 = 470.0;
pub const RIGHT_MARGIN: f32 = 40.0;
pub const TOP_MARGIN: f32 = 120.0;
pub const BOTTOM_MARGIN: f32 = 140.0;

pub const TITLE_Y: f32 = 46.0;
pub const PANEL_POS: (f32, f32) = (18.0, 120.0);
pub const PANEL_SIZE: (f32, f32) = (390.0, 250.0);

pub const X_GRID_DIVISIONS: usize = 8; // 2 deg steps over [-5, 11]
pub const Y_GRID_DIVISIONS: usize = 7; // 2.75 deg steps over [-11, 8.25]

pub const POINT_RADIUS_PX: f32 = 6.0;
pub const POINT_ALPHA: u8 = 153; // 0.6
pub const LEGEND_SWATCH_RADIUS_PX: f32 = 6.0;
pub const LEGEND_ROW_HEIGHT_PX: f32 = 24.0;
pub const LEGEND_WIDTH_PX: f32 = 190.0;

pub const BACKGROUND: Color = Color::new(0.98, 0.984, 0.992, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.906, 0.925, 1.0);
pub const HEADER_COLOR: Color = Color::new(0.118, 0.118, 0.137, 1.0);
pub const LABEL_COLOR: Color = Color::new(0.412, 0.443, 0.486, 1.0);
