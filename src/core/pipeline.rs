use std::collections::HashSet;

use tracing::debug;

use crate::core::angles::PitchAngles;
use crate::core::dataset::{PitchRecord, PitchTable};
use crate::core::palette::{KnownPitch, PitchClass, PitchStyle, Rgb};

pub const CHART_TITLE: &str = "Vertical Release Angle (VRA) vs Horizontal Release Angle (HRA)";
pub const X_AXIS_LABEL: &str = "Horizontal Release Angle (HRA) [degrees]";
pub const Y_AXIS_LABEL: &str = "Vertical Release Angle (VRA) [degrees]";
pub const LEGEND_TITLE: &str = "Pitch Types";

#[derive(Clone, Debug, PartialEq)]
pub struct AnnotatedPitch {
    pub class: PitchClass,
    pub angles: PitchAngles,
    pub style: PitchStyle,
}

impl AnnotatedPitch {
    pub fn point(&self) -> (f64, f64) {
        (self.angles.hra, self.angles.vra)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub selected: usize,
    pub missing_inputs: usize,
    pub undefined_angles: usize,
    pub plotted: usize,
}

#[derive(Clone, Debug, Default)]
pub struct Annotated {
    pub pitches: Vec<AnnotatedPitch>,
    pub stats: FilterStats,
}

/// Rows lacking `vy0` or `release_extension` are dropped before any angle is computed;
/// rows whose VRA or HRA is NaN are dropped after.
pub fn annotate<'a, I>(rows: I) -> Annotated
where
    I: IntoIterator<Item = &'a PitchRecord>,
{
    let mut stats = FilterStats::default();
    let mut pitches = Vec::new();

    for record in rows {
        stats.selected += 1;
        let Some(kinematics) = record.kinematics() else {
            stats.missing_inputs += 1;
            continue;
        };

        let angles = PitchAngles::compute(&kinematics);
        if !angles.is_plottable() {
            stats.undefined_angles += 1;
            continue;
        }

        let class = PitchClass::classify(record.pitch_code());
        let style = class.style();
        pitches.push(AnnotatedPitch {
            class,
            angles,
            style,
        });
    }

    stats.plotted = pitches.len();
    debug!(
        selected = stats.selected,
        missing_inputs = stats.missing_inputs,
        undefined_angles = stats.undefined_angles,
        plotted = stats.plotted,
        "annotated pitches"
    );
    Annotated { pitches, stats }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegendEntry {
    pub pitch: KnownPitch,
    pub name: &'static str,
    pub color: Rgb,
}

/// Known pitch types present in `pitches`, first-seen order.
pub fn legend_entries(pitches: &[AnnotatedPitch]) -> Vec<LegendEntry> {
    let mut seen = HashSet::new();
    pitches
        .iter()
        .filter_map(|pitch| pitch.class.known())
        .filter(|pitch| seen.insert(*pitch))
        .map(|pitch| LegendEntry {
            pitch,
            name: pitch.name(),
            color: pitch.color(),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct PitchTypeSummary {
    pub class: PitchClass,
    pub name: String,
    pub count: usize,
    /// Pitches of this type whose VAA is defined.
    pub vaa_count: usize,
    /// `None` when no pitch of this type has a defined VAA.
    pub mean_vaa: Option<f64>,
    pub mean_vra: f64,
    pub mean_hra: f64,
}

/// Per-type averages, first-seen order. Unrecognized codes get their own row.
pub fn summarize(pitches: &[AnnotatedPitch]) -> Vec<PitchTypeSummary> {
    let mut order: Vec<PitchClass> = Vec::new();
    for pitch in pitches {
        if !order.contains(&pitch.class) {
            order.push(pitch.class.clone());
        }
    }

    order
        .into_iter()
        .map(|class| {
            let group: Vec<&AnnotatedPitch> =
                pitches.iter().filter(|pitch| pitch.class == class).collect();
            let count = group.len();
            let mean = |pick: fn(&PitchAngles) -> f64| {
                group.iter().map(|pitch| pick(&pitch.angles)).sum::<f64>() / count as f64
            };
            let vaas: Vec<f64> = group
                .iter()
                .map(|pitch| pitch.angles.vaa)
                .filter(|vaa| vaa.is_finite())
                .collect();
            let vaa_count = vaas.len();
            let mean_vaa = (vaa_count > 0).then(|| vaas.iter().sum::<f64>() / vaa_count as f64);
            PitchTypeSummary {
                name: class.style().name.into_owned(),
                count,
                vaa_count,
                mean_vaa,
                mean_vra: mean(|angles| angles.vra),
                mean_hra: mean(|angles| angles.hra),
                class,
            }
        })
        .collect()
}

/// Everything one render pass needs for the selected pitcher.
#[derive(Clone, Debug, Default)]
pub struct PlayerView {
    pub player: String,
    pub pitches: Vec<AnnotatedPitch>,
    pub legend: Vec<LegendEntry>,
    pub stats: FilterStats,
}

impl PlayerView {
    pub fn build(table: &PitchTable, player: &str) -> Self {
        let Annotated { pitches, stats } = annotate(table.for_player(player));
        let legend = legend_entries(&pitches);
        debug!(player, legend_entries = legend.len(), "built player view");
        Self {
            player: player.to_string(),
            pitches,
            legend,
            stats,
        }
    }

    pub fn title(&self) -> String {
        format!("{CHART_TITLE}: {}", self.player)
    }

    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }

    pub fn summary(&self) -> Vec<PitchTypeSummary> {
        summarize(&self.pitches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::palette::FALLBACK_COLOR;

    const HEADER: &str = "player_name,pitch_type,vx0,vy0,vz0,ax,ay,az,release_extension,release_pos_x,release_pos_z,plate_z";

    fn table_from(rows: &[&str]) -> PitchTable {
        let mut csv_data = String::from(HEADER);
        for row in rows {
            csv_data.push('\n');
            csv_data.push_str(row);
        }
        PitchTable::from_reader(csv_data.as_bytes()).expect("fixture should parse")
    }

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn unknown_type_is_plotted_but_not_in_legend() {
        let table = table_from(&[
            "Zed,FF,2,-130,-5,-3,20,-15,5.5,-1.5,5.8,2.5",
            "Zed,ZZ,1,-128,-4,-2,21,-14,6.0,-1.2,5.9,2.0",
        ]);
        let view = PlayerView::build(&table, "Zed");

        assert_eq!(view.pitches.len(), 2);
        assert_eq!(view.legend.len(), 1);
        assert_eq!(view.legend[0].pitch, KnownPitch::FourSeam);
        assert_eq!(view.legend[0].name, "4-Seam Fastball");
        assert_eq!(view.legend[0].color.hex(), "#FF007D");
        assert_eq!(view.pitches[1].style.color, FALLBACK_COLOR);
    }

    #[test]
    fn missing_required_inputs_are_dropped_before_computation() {
        let table = table_from(&[
            "Zed,FF,2,,-5,-3,20,-15,5.5,-1.5,5.8,2.5",
            "Zed,SL,2,-130,-5,-3,20,-15,,-1.5,5.8,2.5",
            "Zed,CU,2,-130,-5,-3,20,-15,5.5,-1.5,5.8,2.5",
        ]);
        let view = PlayerView::build(&table, "Zed");

        assert_eq!(
            view.stats,
            FilterStats {
                selected: 3,
                missing_inputs: 2,
                undefined_angles: 0,
                plotted: 1,
            }
        );
        assert_eq!(view.legend[0].pitch, KnownPitch::Curveball);
    }

    #[test]
    fn undefined_release_angles_are_excluded() {
        let table = table_from(&[
            "Zed,FF,2,-60,-5,-3,500,-15,5.5,-1.5,5.8,2.5",
            "Zed,FF,2,-130,-5,-3,20,-15,5.5,-1.5,5.8,2.5",
        ]);
        let view = PlayerView::build(&table, "Zed");

        assert_eq!(view.stats.undefined_angles, 1);
        assert_eq!(view.pitches.len(), 1);
        assert!(view.pitches.iter().all(|pitch| pitch.angles.is_plottable()));
    }

    #[test]
    fn missing_plate_height_makes_row_unplottable() {
        let table = table_from(&["Zed,FF,2,-130,-5,-3,20,-15,5.5,-1.5,5.8,"]);
        let view = PlayerView::build(&table, "Zed");

        assert!(view.is_empty());
        assert_eq!(view.stats.undefined_angles, 1);
    }

    #[test]
    fn player_without_rows_gives_empty_view() {
        let table = table_from(&["Zed,FF,2,-130,-5,-3,20,-15,5.5,-1.5,5.8,2.5"]);
        let view = PlayerView::build(&table, "Nobody");

        assert!(view.is_empty());
        assert!(view.legend.is_empty());
        assert_eq!(view.stats, FilterStats::default());
        assert!(view.summary().is_empty());
        assert!(view.title().ends_with("Nobody"));
    }

    #[test]
    fn legend_keeps_first_seen_order_without_duplicates() {
        let table = table_from(&[
            "Zed,SL,2,-130,-5,-3,20,-15,5.5,-1.5,5.8,2.5",
            "Zed,FF,2,-130,-5,-3,20,-15,5.5,-1.5,5.8,2.5",
            "Zed,SL,2,-130,-5,-3,20,-15,5.5,-1.5,5.8,2.5",
            "Zed,CH,2,-130,-5,-3,20,-15,5.5,-1.5,5.8,2.5",
        ]);
        let view = PlayerView::build(&table, "Zed");
        let names: Vec<&str> = view.legend.iter().map(|entry| entry.name).collect();

        assert_eq!(names, vec!["Slider", "4-Seam Fastball", "Changeup"]);
    }

    #[test]
    fn summary_averages_per_type() {
        let table = table_from(&[
            "Zed,FF,2,-130,-5,-3,20,-15,5.5,-1.5,5.8,2.5",
            "Zed,FF,2,-130,-5,-3,20,-15,5.5,-1.5,5.8,2.5",
            "Zed,ZZ,2,-130,-5,-3,20,-15,5.5,-1.5,5.8,2.5",
        ]);
        let summary = PlayerView::build(&table, "Zed").summary();

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].name, "4-Seam Fastball");
        assert_eq!(summary[0].count, 2);
        assert_eq!(summary[0].vaa_count, 2);
        assert_close(
            summary[0].mean_vaa.expect("vaa defined"),
            -5.035_924_001_389_787,
            1e-6,
        );
        assert_close(summary[0].mean_vra, -0.497_162_666_680_183, 1e-6);
        assert_close(summary[0].mean_hra, 0.272_992_069_916_548, 1e-6);
        assert_eq!(summary[1].class, PitchClass::Unrecognized("ZZ".to_string()));
        assert_eq!(summary[1].name, "ZZ");
    }

    #[test]
    fn undefined_vaa_does_not_poison_type_mean() {
        // Release radicand 100^2 - 240*5 > 0, plate radicand 100^2 - 240*48.58 < 0.
        let table = table_from(&[
            "Zed,FF,2,-130,-5,-3,20,-15,5.5,-1.5,5.8,2.5",
            "Zed,FF,2,-100,-5,-3,120,-15,5.5,-1.5,5.8,2.5",
        ]);
        let view = PlayerView::build(&table, "Zed");
        assert_eq!(view.stats.plotted, 2);
        assert!(view.pitches[1].angles.vaa.is_nan());

        let summary = view.summary();
        assert_eq!(summary[0].count, 2);
        assert_eq!(summary[0].vaa_count, 1);
        assert_close(
            summary[0].mean_vaa.expect("one vaa defined"),
            -5.035_924_001_389_787,
            1e-6,
        );
        assert!(summary[0].mean_vra.is_finite());
    }

    #[test]
    fn type_without_defined_vaa_has_no_mean() {
        let table = table_from(&["Zed,SL,2,-100,-5,-3,120,-15,5.5,-1.5,5.8,2.5"]);
        let summary = PlayerView::build(&table, "Zed").summary();

        assert_eq!(summary[0].vaa_count, 0);
        assert_eq!(summary[0].mean_vaa, None);
    }
}
