use std::path::PathBuf;

use chrono::Local;
use statcast_vra::core::chart::{DEFAULT_IMAGE_SIZE, export_file_name, render_png};
use statcast_vra::core::dataset::PitchTable;
use statcast_vra::core::pipeline::PlayerView;
use tracing::{error, info};

/// Owns the loaded table; the view is rebuilt only when the selection changes.
pub(crate) struct AppRuntime {
    pub(crate) table: PitchTable,
    pub(crate) players: Vec<String>,
    pub(crate) selected: usize,
    pub(crate) view: PlayerView,
    pub(crate) status_line: String,
}

impl AppRuntime {
    pub(crate) fn new(table: PitchTable) -> Self {
        let players = table.player_names();
        let view = players
            .first()
            .map(|player| PlayerView::build(&table, player))
            .unwrap_or_default();
        let status_line = if players.is_empty() {
            "Data file has no pitches".to_string()
        } else {
            format!("Loaded {} pitches, {} players", table.len(), players.len())
        };
        Self {
            table,
            players,
            selected: 0,
            view,
            status_line,
        }
    }

    pub(crate) fn selected_player(&self) -> Option<&str> {
        self.players.get(self.selected).map(String::as_str)
    }

    pub(crate) fn select(&mut self, idx: usize) {
        if idx == self.selected || idx >= self.players.len() {
            return;
        }
        self.selected = idx;
        self.view = PlayerView::build(&self.table, &self.players[idx]);
        self.status_line = format!("Selected {}", self.players[idx]);
        info!(player = %self.players[idx], plotted = self.view.stats.plotted, "selection changed");
    }

    pub(crate) fn select_previous(&mut self) {
        if self.selected > 0 {
            self.select(self.selected - 1);
        }
    }

    pub(crate) fn select_next(&mut self) {
        self.select(self.selected + 1);
    }

    pub(crate) fn export_png(&mut self) {
        let Some(player) = self.selected_player() else {
            self.status_line = "Nothing to export".to_string();
            return;
        };
        let path = PathBuf::from(export_file_name(player, &Local::now().naive_local()));
        match render_png(&self.view, &path, DEFAULT_IMAGE_SIZE) {
            Ok(()) => self.status_line = format!("Exported {}", path.display()),
            Err(err) => {
                error!("{err}");
                self.status_line = format!("Export failed: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppRuntime;
    use statcast_vra::core::dataset::PitchTable;

    fn runtime() -> AppRuntime {
        let csv_data = "\
player_name,pitch_type,vx0,vy0,vz0,ax,ay,az,release_extension,release_pos_x,release_pos_z,plate_z
Zed,FF,2,-130,-5,-3,20,-15,5.5,-1.5,5.8,2.5
Abe,SL,2,-130,-5,-3,20,-15,5.5,-1.5,5.8,2.5
Abe,CU,2,,-5,-3,20,-15,5.5,-1.5,5.8,2.5
";
        AppRuntime::new(PitchTable::from_reader(csv_data.as_bytes()).expect("fixture should parse"))
    }

    #[test]
    fn starts_on_first_seen_player() {
        let state = runtime();

        assert_eq!(state.players, vec!["Zed", "Abe"]);
        assert_eq!(state.selected_player(), Some("Zed"));
        assert_eq!(state.view.player, "Zed");
        assert_eq!(state.view.stats.plotted, 1);
    }

    #[test]
    fn selection_rebuilds_view() {
        let mut state = runtime();
        state.select_next();

        assert_eq!(state.selected_player(), Some("Abe"));
        assert_eq!(state.view.stats.selected, 2);
        assert_eq!(state.view.stats.missing_inputs, 1);
        assert_eq!(state.view.legend.len(), 1);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut state = runtime();
        state.select(7);
        state.select_previous();

        assert_eq!(state.selected_player(), Some("Zed"));
    }

    #[test]
    fn empty_table_has_no_selection() {
        let table = PitchTable::from_reader("player_name,vy0\n".as_bytes()).expect("header only");
        let state = AppRuntime::new(table);

        assert_eq!(state.selected_player(), None);
        assert!(state.view.is_empty());
        assert!(state.view.legend.is_empty());
    }
}
