use eframe::egui;
use log::{error, info};

use crate::{
    api,
    formatters::{format_details, format_macros, format_nutrient},
    models::{summarize_products, ProductQuery, ProductRow},
    ui::state::SearchState,
};

pub struct SearchScreen;

impl SearchScreen {
    pub fn show(ctx: &egui::Context, state: &mut SearchState) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Calorie Search");
            ui.add_space(10.0);

            // Query input row
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.query_input)
                        .desired_width(320.0)
                        .hint_text("Product name or barcode"),
                );
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                if ui.button("Search").clicked() || submitted {
                    Self::run_search(state);
                }
            });

            ui.add_space(10.0);

            if let Some(err) = &state.error {
                ui.colored_label(egui::Color32::RED, err);
                ui.add_space(5.0);
            }

            if let Some(notice) = &state.notice {
                ui.label(notice);
                ui.add_space(5.0);
            }

            if !state.rows.is_empty() {
                ui.label(format!("Found {} products", state.rows.len()));
                ui.add_space(5.0);
                Self::show_results(ui, state);
            }

            if let Some(idx) = state.selected {
                if let Some(row) = state.rows.get(idx) {
                    ui.add_space(10.0);
                    Self::show_details(ui, row);
                }
            }
        });
    }

    /// Classify the input and dispatch one blocking lookup. Barcode input
    /// hits the detail endpoint, anything else the search endpoint; the
    /// previous result set is cleared either way.
    fn run_search(state: &mut SearchState) {
        state.rows.clear();
        state.selected = None;
        state.notice = None;
        state.error = None;

        let Some(query) = ProductQuery::classify(&state.query_input) else {
            state.notice = Some("Enter a product name or barcode.".to_string());
            return;
        };

        match query {
            ProductQuery::Barcode(code) => match api::fetch_product(&code) {
                Ok(response) => match response.product {
                    Some(product) => {
                        state.rows = vec![ProductRow::from_product(product)];
                    }
                    None => {
                        info!("No product for barcode {code}");
                        state.notice = Some("Product not found.".to_string());
                    }
                },
                Err(e) => {
                    error!("Barcode lookup failed: {e}");
                    state.error = Some(e.to_string());
                }
            },
            ProductQuery::Text(text) => match api::search_products(&text, state.page_size) {
                Ok(response) if response.products.is_empty() => {
                    info!("No search results for '{text}'");
                    state.notice = Some("Nothing found.".to_string());
                }
                Ok(response) => {
                    state.rows = summarize_products(response.products);
                }
                Err(e) => {
                    error!("Product search failed: {e}");
                    state.error = Some(e.to_string());
                }
            },
        }
    }

    fn show_results(ui: &mut egui::Ui, state: &mut SearchState) {
        // Collect the clicked row to apply after the grid (avoids borrow conflicts)
        let mut select_action: Option<usize> = None;

        egui::ScrollArea::vertical()
            .max_height(280.0)
            .show(ui, |ui| {
                egui::Grid::new("search_results")
                    .num_columns(6)
                    .spacing([10.0, 4.0])
                    .striped(true)
                    .show(ui, |ui| {
                        // Header
                        ui.strong("");
                        ui.strong("Barcode");
                        ui.strong("Name");
                        ui.strong("Brand");
                        ui.strong("Kcal (100g)");
                        ui.strong("Macros (100g)");
                        ui.end_row();

                        for (idx, row) in state.rows.iter().enumerate() {
                            if ui.small_button("View").clicked() {
                                select_action = Some(idx);
                            }
                            ui.label(&row.product.code);
                            ui.label(&row.product.product_name);
                            ui.label(&row.product.brands);
                            ui.label(format_nutrient(row.nutrients.kcal_100g.as_ref()));
                            ui.label(format_macros(&row.nutrients));
                            ui.end_row();
                        }
                    });
            });

        if let Some(idx) = select_action {
            state.selected = Some(idx);
        }
    }

    fn show_details(ui: &mut egui::Ui, row: &ProductRow) {
        ui.group(|ui| {
            ui.strong("Details");
            ui.add_space(5.0);
            ui.label(format_details(row));
        });
    }
}
