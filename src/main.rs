use eframe::egui;
use track_race::RaceApp;
use track_race::RaceController;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([400.0, 400.0])
            .with_title("Race to the First Finisher"),
        ..Default::default()
    };

    let controller = RaceController::new(&mut rand::thread_rng());
    eframe::run_native(
        "Race to the First Finisher",
        options,
        Box::new(|_cc| Ok(Box::new(RaceApp::new(controller)))),
    )
}
