use crate::ViewerApp;
use crate::tools::ToolMode;

pub fn tools_panel(app: &mut ViewerApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active_mode = app.drawer().mode();
            for mode in ToolMode::ALL {
                if ui.selectable_label(active_mode == mode, mode.name()).clicked() {
                    log::info!("Tool selected from UI: {}", mode.name());
                    app.set_tool(mode);
                }
            }
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Colour");
                let mut color = app.drawer().color();
                if ui.color_edit_button_srgba(&mut color).changed() {
                    app.set_color(color);
                }
            });

            let mut measure = app.drawer().measure();
            if ui.checkbox(&mut measure, "Show measurements").changed() {
                app.set_measure(measure);
            }

            ui.label("Pixel spacing (mm)");
            let mut spacing = app.settings().pixel_spacing;
            let changed = ui
                .horizontal(|ui| {
                    let x = ui.add(egui::DragValue::new(&mut spacing.x).speed(0.01).prefix("x: "));
                    let y = ui.add(egui::DragValue::new(&mut spacing.y).speed(0.01).prefix("y: "));
                    x.changed() || y.changed()
                })
                .inner;
            if changed {
                app.set_pixel_spacing(spacing);
            }

            let measurement = app.drawer().active().and_then(|builder| builder.measurement());
            if let Some(measurement) = measurement {
                ui.label(measurement.to_string());
            }
            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let can_undo = app.executor().can_undo();
                let can_redo = app.executor().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.redo();
                }
            });
            if ui.button("Clear annotations").clicked() {
                app.clear_annotations();
            }

            ui.separator();

            let history = app.executor();
            ui.horizontal(|ui| {
                ui.label(format!("Undo stack size: {}", history.done().len()));
                ui.label(format!("Redo stack size: {}", history.undone().len()));
            });

            egui::Grid::new("command_history_grid")
                .num_columns(2)
                .spacing([40.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("Undo Stack");
                    ui.strong("Redo Stack");
                    ui.end_row();

                    let undo_stack = history.done();
                    let redo_stack = history.undone();
                    for i in 0..undo_stack.len().max(redo_stack.len()) {
                        ui.label(undo_stack.get(i).map_or("", |command| command.name()));
                        ui.label(redo_stack.get(i).map_or("", |command| command.name()));
                        ui.end_row();
                    }
                });

            if let Some(background) = app.background() {
                ui.separator();
                ui.label(format!("Image: {}", background.name));
            }
            if let Some(err) = app.load_error() {
                ui.separator();
                ui.colored_label(ui.visuals().error_fg_color, err);
            }
        });
}
