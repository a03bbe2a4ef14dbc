use eframe::{self, egui};
use egui::ViewportBuilder;

use super::{screens::SearchScreen, state::SearchState};

#[derive(Default)]
pub struct CalorieSearchApp {
    search_state: SearchState,
}

impl eframe::App for CalorieSearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        SearchScreen::show(ctx, &mut self.search_state);
    }
}

pub fn launch_gui() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([640.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Calorie Search",
        options,
        Box::new(|_cc| Ok(Box::new(CalorieSearchApp::default()))),
    )
}
