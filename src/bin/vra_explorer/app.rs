use macroquad::prelude::*;
use statcast_vra::core::axes::PlotBounds;
use statcast_vra::core::dataset::{DEFAULT_DATA_PATH, PitchTable};
use statcast_vra::core::logging::init_logging;
use tracing::{error, warn};

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, GRID_COLOR, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH,
    LEFT_MARGIN, MSAA_SAMPLES, RIGHT_MARGIN, TOP_MARGIN, UI_FONT_PATH,
};
use crate::controls::{apply_actions, draw_control_panel, hotkey_actions};
use crate::hud::draw_hud;
use crate::render::{draw_axis_tick_labels, draw_grid, draw_legend, draw_pitches};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Pitch Data Analysis".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    init_logging();

    let table = match PitchTable::load(DEFAULT_DATA_PATH) {
        Ok(table) => table,
        Err(err) => {
            error!("{err}");
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let bounds = PlotBounds::release_angles();
    let mut state = AppRuntime::new(table);

    loop {
        let screen_w = screen_width();
        let screen_h = screen_height();

        let left = LEFT_MARGIN;
        let right = screen_w - RIGHT_MARGIN;
        let top = TOP_MARGIN;
        let bottom = screen_h - BOTTOM_MARGIN;

        let actions = hotkey_actions().merge(draw_control_panel(&state));
        apply_actions(&mut state, actions);

        clear_background(BACKGROUND);
        draw_grid(&bounds, left, right, top, bottom, GRID_COLOR);
        draw_line(left, bottom, right, bottom, 2.0, DARKGRAY);
        draw_line(left, top, left, bottom, 2.0, DARKGRAY);
        draw_axis_tick_labels(&bounds, left, right, top, bottom, ui_font.as_ref());

        let drawn = draw_pitches(&state.view, &bounds, left, right, top, bottom);
        draw_legend(&state.view.legend, right, top, ui_font.as_ref());
        draw_hud(
            &state,
            drawn,
            left,
            right,
            top,
            bottom,
            screen_h,
            ui_font.as_ref(),
        );

        next_frame().await;
    }
}
