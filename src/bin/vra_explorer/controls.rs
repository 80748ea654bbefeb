use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{PANEL_POS, PANEL_SIZE};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) select: Option<usize>,
    pub(crate) prev_player: bool,
    pub(crate) next_player: bool,
    pub(crate) export: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            select: other.select.or(self.select),
            prev_player: self.prev_player || other.prev_player,
            next_player: self.next_player || other.next_player,
            export: self.export || other.export,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        select: None,
        prev_player: is_key_pressed(KeyCode::P),
        next_player: is_key_pressed(KeyCode::N),
        export: is_key_pressed(KeyCode::E),
    }
}

pub(crate) fn draw_control_panel(state: &AppRuntime) -> FrameActions {
    let names: Vec<&str> = state.players.iter().map(String::as_str).collect();
    let stats = state.view.stats;
    let mut selected = state.selected;
    let mut actions = FrameActions::default();

    widgets::Window::new(
        hash!(),
        vec2(PANEL_POS.0, PANEL_POS.1),
        vec2(PANEL_SIZE.0, PANEL_SIZE.1),
    )
    .label("Select Player")
    .ui(&mut *root_ui(), |ui| {
        if names.is_empty() {
            ui.label(None, "No players in data file");
        } else {
            ui.combo_box(hash!(), "Player", &names, &mut selected);
        }
        ui.separator();
        ui.label(None, &format!("Pitches selected: {}", stats.selected));
        ui.label(None, &format!("Missing vy0/extension: {}", stats.missing_inputs));
        ui.label(None, &format!("Undefined angles: {}", stats.undefined_angles));
        ui.label(None, &format!("Plotted: {}", stats.plotted));
        ui.separator();
        if ui.button(None, "Export PNG (E)") {
            actions.export = true;
        }
    });

    if selected != state.selected {
        actions.select = Some(selected);
    }
    actions
}

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if let Some(idx) = actions.select {
        state.select(idx);
    } else if actions.prev_player {
        state.select_previous();
    } else if actions.next_player {
        state.select_next();
    }

    if actions.export {
        state.export_png();
    }
}
