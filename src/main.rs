// Session Scheduler
// Main entry point

use session_scheduler::ui_egui::SchedulerApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    log::info!("Starting Session Scheduler");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Arbitration Session Scheduler")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Session Scheduler",
        options,
        Box::new(|cc| Ok(Box::new(SchedulerApp::new(cc)))),
    )
}
