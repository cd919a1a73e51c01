//! Screenroom application entry point.

use screenroom::App;

fn main() {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Screenroom"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Screenroom",
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_theme(egui::Theme::Dark);

            // Set dark theme with blue tones
            let mut style = (*cc.egui_ctx.style()).clone();
            style.visuals.window_fill = egui::Color32::from_rgb(15, 23, 42);
            style.visuals.panel_fill = egui::Color32::from_rgb(15, 23, 42);
            cc.egui_ctx.set_style(style);

            Ok(Box::new(App::new()))
        }),
    );

    if let Err(e) = result {
        eprintln!("Screenroom exited with an error: {}", e);
        std::process::exit(1);
    }
}
