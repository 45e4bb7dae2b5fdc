use crate::ViewerApp;
use crate::input::collect_events;

pub fn central_panel(app: &mut ViewerApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            let canvas_rect = response.rect;
            app.set_canvas_size(canvas_rect.size());

            // Handle input
            let events = collect_events(ctx, canvas_rect);
            app.handle_pointer(&events);

            app.paint(&painter, canvas_rect);
        });
}
