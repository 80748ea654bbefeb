use macroquad::prelude::*;
use statcast_vra::core::pipeline::CHART_TITLE;

use crate::constants::{HEADER_COLOR, TITLE_Y};
use crate::render::draw_ui_text;
use crate::state::AppRuntime;

pub(crate) fn draw_hud(
    state: &AppRuntime,
    drawn: usize,
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    screen_h: f32,
    font: Option<&Font>,
) {
    draw_header_block(state, left, font);
    draw_status_block(state, drawn, left, screen_h, font);
    if state.view.is_empty() {
        draw_empty_hint(state, left, right, top, bottom, font);
    }
}

fn draw_header_block(state: &AppRuntime, left: f32, font: Option<&Font>) {
    draw_ui_text(CHART_TITLE, left, TITLE_Y, 26, HEADER_COLOR, font);
    draw_ui_text(
        state.selected_player().unwrap_or("No player selected"),
        left,
        TITLE_Y + 30.0,
        22,
        DARKGRAY,
        font,
    );
}

fn draw_status_block(
    state: &AppRuntime,
    drawn: usize,
    left: f32,
    screen_h: f32,
    font: Option<&Font>,
) {
    let clipped = state.view.pitches.len().saturating_sub(drawn);
    draw_ui_text(
        &format!(
            "Plotted: {} | Outside window: {} | Pitch types: {}",
            drawn,
            clipped,
            state.view.legend.len()
        ),
        left,
        screen_h - 45.0,
        20,
        HEADER_COLOR,
        font,
    );
    draw_ui_text(
        &format!("{} | P/N previous/next player | E export PNG", state.status_line),
        left,
        screen_h - 16.0,
        18,
        BLUE,
        font,
    );
}

fn draw_empty_hint(
    state: &AppRuntime,
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    font: Option<&Font>,
) {
    let label = match state.selected_player() {
        Some(player) => format!("No plottable pitches for {player}"),
        None => "No pitches loaded".to_string(),
    };
    let size = measure_text(&label, font, 22, 1.0);
    draw_ui_text(
        &label,
        left + ((right - left) - size.width) * 0.5,
        top + (bottom - top) * 0.5,
        22,
        DARKGRAY,
        font,
    );
}
