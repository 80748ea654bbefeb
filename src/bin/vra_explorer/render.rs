use macroquad::prelude::*;
use statcast_vra::core::axes::PlotBounds;
use statcast_vra::core::palette::Rgb;
use statcast_vra::core::pipeline::{LEGEND_TITLE, LegendEntry, PlayerView, X_AXIS_LABEL, Y_AXIS_LABEL};

use crate::constants::{
    LABEL_COLOR, LEGEND_ROW_HEIGHT_PX, LEGEND_SWATCH_RADIUS_PX, LEGEND_WIDTH_PX, POINT_ALPHA,
    POINT_RADIUS_PX, X_GRID_DIVISIONS, Y_GRID_DIVISIONS,
};

pub(crate) fn screen_color(color: Rgb, alpha: u8) -> Color {
    Color::from_rgba(color.0, color.1, color.2, alpha)
}

fn format_axis_value(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_grid(bounds: &PlotBounds, left: f32, right: f32, top: f32, bottom: f32, color: Color) {
    for x in bounds.x_ticks(X_GRID_DIVISIONS) {
        let (sx, _) = bounds.to_screen((x, bounds.y_min), left, right, top, bottom);
        draw_line(sx, top, sx, bottom, 1.0, color);
    }
    for y in bounds.y_ticks(Y_GRID_DIVISIONS) {
        let (_, sy) = bounds.to_screen((bounds.x_min, y), left, right, top, bottom);
        draw_line(left, sy, right, sy, 1.0, color);
    }
}

pub(crate) fn draw_axis_tick_labels(
    bounds: &PlotBounds,
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    font: Option<&Font>,
) {
    let tick_font_size: u16 = 16;

    for x in bounds.x_ticks(X_GRID_DIVISIONS) {
        let (sx, _) = bounds.to_screen((x, bounds.y_min), left, right, top, bottom);
        let label = format_axis_value(x);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            sx - (size.width * 0.5),
            bottom + 22.0,
            tick_font_size,
            LABEL_COLOR,
            font,
        );
    }

    for y in bounds.y_ticks(Y_GRID_DIVISIONS) {
        let (_, sy) = bounds.to_screen((bounds.x_min, y), left, right, top, bottom);
        let label = format_axis_value(y);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (left - 8.0) - size.width,
            sy + (size.height * 0.35),
            tick_font_size,
            LABEL_COLOR,
            font,
        );
    }

    let x_label_size = measure_text(X_AXIS_LABEL, font, 18, 1.0);
    draw_ui_text(
        X_AXIS_LABEL,
        left + ((right - left) - x_label_size.width) * 0.5,
        bottom + 50.0,
        18,
        LABEL_COLOR,
        font,
    );
    draw_ui_text(Y_AXIS_LABEL, left + 10.0, top - 10.0, 18, LABEL_COLOR, font);
}

/// Points outside the fixed window are clipped, not rescaled.
pub(crate) fn draw_pitches(
    view: &PlayerView,
    bounds: &PlotBounds,
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
) -> usize {
    let mut drawn = 0;
    for pitch in &view.pitches {
        let point = pitch.point();
        if !bounds.contains(point) {
            continue;
        }
        let (sx, sy) = bounds.to_screen(point, left, right, top, bottom);
        draw_circle(sx, sy, POINT_RADIUS_PX, screen_color(pitch.style.color, POINT_ALPHA));
        draw_circle_lines(sx, sy, POINT_RADIUS_PX, 1.5, WHITE);
        drawn += 1;
    }
    drawn
}

pub(crate) fn draw_legend(legend: &[LegendEntry], right: f32, top: f32, font: Option<&Font>) {
    if legend.is_empty() {
        return;
    }

    let x = right - LEGEND_WIDTH_PX - 12.0;
    let y = top + 12.0;
    let h = 34.0 + (legend.len() as f32 * LEGEND_ROW_HEIGHT_PX);
    draw_rectangle(x, y, LEGEND_WIDTH_PX, h, Color::from_rgba(255, 255, 255, 215));
    draw_rectangle_lines(x, y, LEGEND_WIDTH_PX, h, 1.0, Color::from_rgba(0, 0, 0, 77));
    draw_ui_text(LEGEND_TITLE, x + 12.0, y + 22.0, 18, DARKGRAY, font);

    for (row, entry) in legend.iter().enumerate() {
        let row_y = y + 34.0 + (row as f32 * LEGEND_ROW_HEIGHT_PX) + (LEGEND_ROW_HEIGHT_PX * 0.5);
        draw_circle(x + 20.0, row_y, LEGEND_SWATCH_RADIUS_PX, screen_color(entry.color, 255));
        draw_ui_text(entry.name, x + 36.0, row_y + 5.0, 16, DARKGRAY, font);
    }
}
