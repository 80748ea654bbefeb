use std::path::Path;

use chrono::NaiveDateTime;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::core::axes::PlotBounds;
use crate::core::palette::Rgb;
use crate::core::pipeline::{LEGEND_TITLE, PlayerView, X_AXIS_LABEL, Y_AXIS_LABEL};

pub const DEFAULT_IMAGE_SIZE: (u32, u32) = (1000, 600);
pub const POINT_RADIUS_PX: i32 = 7;
pub const POINT_ALPHA: f64 = 0.6;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("plotting error for {path}: {message}")]
    Draw { path: String, message: String },
}

fn plot_color(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

/// `vra_<player>_<YYYYmmdd-HHMMSS>.png`, with the player reduced to `[a-z0-9_]`.
pub fn export_file_name(player: &str, at: &NaiveDateTime) -> String {
    let mut slug = String::new();
    for ch in player.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('_') {
            slug.push('_');
        }
    }
    let slug = slug.trim_end_matches('_');
    let slug = if slug.is_empty() { "player" } else { slug };
    format!("vra_{slug}_{}.png", at.format("%Y%m%d-%H%M%S"))
}

/// Legend text in draw order: the title row (no swatch), then one row per entry.
/// Empty when the view has no known pitch types.
pub fn legend_rows(view: &PlayerView) -> Vec<(&'static str, Option<Rgb>)> {
    if view.legend.is_empty() {
        return Vec::new();
    }
    std::iter::once((LEGEND_TITLE, None))
        .chain(view.legend.iter().map(|entry| (entry.name, Some(entry.color))))
        .collect()
}

pub fn render_png<P: AsRef<Path>>(
    view: &PlayerView,
    path: P,
    size: (u32, u32),
) -> Result<(), ChartError> {
    let path = path.as_ref();
    let root = BitMapBackend::new(path, size).into_drawing_area();
    draw_scatter(root, view).map_err(|e| ChartError::Draw {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    info!(path = %path.display(), points = view.pitches.len(), "wrote chart");
    Ok(())
}

fn draw_scatter<DB>(
    root: DrawingArea<DB, Shift>,
    view: &PlayerView,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let bounds = PlotBounds::release_angles();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(view.title(), ("sans-serif", 20))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(bounds.x_min..bounds.x_max, bounds.y_min..bounds.y_max)?;

    chart
        .configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .light_line_style(RGBColor(227, 231, 236))
        .draw()?;

    chart.draw_series(view.pitches.iter().map(|pitch| {
        Circle::new(
            pitch.point(),
            POINT_RADIUS_PX,
            plot_color(pitch.style.color).mix(POINT_ALPHA).filled(),
        )
    }))?;
    chart.draw_series(
        view.pitches
            .iter()
            .map(|pitch| Circle::new(pitch.point(), POINT_RADIUS_PX, WHITE.stroke_width(1))),
    )?;

    // Legend-only series. The title row gets an invisible swatch.
    let rows = legend_rows(view);
    for &(label, color) in &rows {
        let swatch = match color {
            Some(color) => plot_color(color).filled(),
            None => WHITE.mix(0.0).filled(),
        };
        let radius = if color.is_some() { 5 } else { 0 };
        chart
            .draw_series(std::iter::empty::<Circle<(f64, f64), i32>>())?
            .label(label)
            .legend(move |(x, y)| Circle::new((x, y), radius, swatch));
    }

    if !rows.is_empty() {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.3))
            .position(SeriesLabelPosition::UpperRight)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::PitchTable;
    use chrono::NaiveDate;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 9, 29)
            .and_then(|date| date.and_hms_opt(14, 5, 9))
            .expect("valid timestamp")
    }

    #[test]
    fn export_name_slugs_player() {
        assert_eq!(
            export_file_name("Cole, Gerrit", &fixed_time()),
            "vra_cole_gerrit_20240929-140509.png"
        );
    }

    #[test]
    fn export_name_handles_blank_player() {
        assert_eq!(
            export_file_name("  ", &fixed_time()),
            "vra_player_20240929-140509.png"
        );
    }

    #[test]
    fn legend_starts_with_title_row() {
        let csv_data = "\
player_name,pitch_type,vx0,vy0,vz0,ax,ay,az,release_extension,release_pos_x,release_pos_z,plate_z
Zed,FF,2,-130,-5,-3,20,-15,5.5,-1.5,5.8,2.5
Zed,SL,2,-130,-5,-3,20,-15,5.5,-1.5,5.8,2.5
";
        let table = PitchTable::from_reader(csv_data.as_bytes()).expect("fixture should parse");
        let rows = legend_rows(&PlayerView::build(&table, "Zed"));

        let labels: Vec<&str> = rows.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, vec!["Pitch Types", "4-Seam Fastball", "Slider"]);
        assert_eq!(rows[0].1, None);
        assert_eq!(rows[1].1.map(|color| color.hex()), Some("#FF007D".to_string()));
    }

    #[test]
    fn empty_view_has_no_legend_rows() {
        assert!(legend_rows(&PlayerView::default()).is_empty());
    }

    #[test]
    fn plot_color_keeps_channels() {
        let RGBColor(r, g, b) = plot_color(Rgb(0xFF, 0x00, 0x7D));
        assert_eq!((r, g, b), (255, 0, 125));
    }
}
