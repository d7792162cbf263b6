use crate::analysis::{self, Field};
use crate::collector::ProcfsSource;
use crate::report::{self, HEADERS};
use crate::scheduler::{ScheduleSummary, SharedScheduler};
use egui::{Color32, RichText, ScrollArea, TextEdit};
use egui_plot::{Plot, Points};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    ProcessInfo,
    GraphicalAnalysis,
}

#[derive(Clone, Copy, PartialEq)]
enum RowOrder {
    Burst,
    Arrival,
}

/// Main application state for the SJF scheduler GUI
pub struct SchedulerApp {
    scheduler: SharedScheduler,
    source: ProcfsSource,
    summary: ScheduleSummary,
    tab: Tab,
    row_order: RowOrder,
    last_refresh: Option<Instant>,
    error_message: Option<String>,
    success_message: Option<String>,
    show_aging_config: bool,
    aging_increment: f64,
    export_path: String,
}

impl SchedulerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, scheduler: SharedScheduler) -> Self {
        let aging_increment = scheduler.lock().config().aging_increment;
        let mut app = Self {
            scheduler,
            source: ProcfsSource::new(),
            summary: ScheduleSummary::default(),
            tab: Tab::ProcessInfo,
            row_order: RowOrder::Burst,
            last_refresh: None,
            error_message: None,
            success_message: None,
            show_aging_config: false,
            aging_increment,
            export_path: "process_info.csv".to_string(),
        };
        app.retrieve();
        app
    }

    /// One full pass: collect from /proc, age, schedule
    fn retrieve(&mut self) {
        self.error_message = None;
        self.success_message = None;

        match self.scheduler.retrieve(&mut self.source) {
            Ok(summary) => {
                self.summary = summary;
                self.row_order = RowOrder::Burst;
                self.last_refresh = Some(Instant::now());
            }
            Err(e) => {
                tracing::warn!(error = %e, "Retrieve failed");
                self.error_message = Some(e.to_string());
            }
        }
    }

    fn reorder_by_arrival(&mut self) {
        self.summary = self.scheduler.reorder_by_arrival_time();
        self.row_order = RowOrder::Arrival;
    }

    fn apply_aging_increment(&mut self) {
        match self.scheduler.set_aging_increment(self.aging_increment) {
            Ok(()) => self.error_message = None,
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }

    fn export_csv(&mut self) {
        let path = PathBuf::from(self.export_path.trim());
        match report::save_csv(&self.summary, &path) {
            Ok(()) => {
                self.success_message = Some(format!(
                    "Exported {} record(s) to {}",
                    self.summary.records.len(),
                    path.display()
                ));
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }

    fn status_line(&self) -> String {
        let order = match self.row_order {
            RowOrder::Burst => "burst time",
            RowOrder::Arrival => "arrival time",
        };
        let age = self
            .last_refresh
            .map(|t| format!("{:.1}s ago", t.elapsed().as_secs_f32()))
            .unwrap_or_else(|| "never".to_string());
        format!(
            "Processes: {} | Ordered by {} | Aging: +{} | Last retrieve: {}",
            self.summary.records.len(),
            order,
            self.aging_increment,
            age
        )
    }

    fn render_table(&self, ui: &mut egui::Ui) {
        ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("schedule_table")
                .num_columns(HEADERS.len())
                .spacing([20.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    for header in HEADERS {
                        ui.label(RichText::new(header).strong());
                    }
                    ui.end_row();

                    for row in report::rows(&self.summary) {
                        for cell in row.cells() {
                            ui.label(cell);
                        }
                        ui.end_row();
                    }
                });

            ui.separator();
            ui.label(RichText::new(report::average_line(&self.summary)).strong());
        });
    }

    /// Pairwise scatter plots over the five numeric columns
    fn render_analysis(&self, ui: &mut egui::Ui) {
        if self.summary.records.is_empty() {
            ui.label("No data: retrieve process info first");
            return;
        }

        ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("pair_plots")
                .num_columns(2)
                .spacing([16.0, 16.0])
                .show(ui, |ui| {
                    for (i, (x, y)) in analysis::field_pairs().into_iter().enumerate() {
                        self.render_pair_plot(ui, x, y);
                        if i % 2 == 1 {
                            ui.end_row();
                        }
                    }
                });
        });
    }

    fn render_pair_plot(&self, ui: &mut egui::Ui, x: Field, y: Field) {
        let title = format!("{} vs {}", y.label(), x.label());
        ui.vertical(|ui| {
            ui.label(RichText::new(&title).strong());
            Plot::new(title.as_str())
                .width(380.0)
                .height(220.0)
                .x_axis_label(x.label())
                .y_axis_label(y.label())
                .show(ui, |plot_ui| {
                    let points = analysis::points(&self.summary, x, y);
                    plot_ui.points(Points::new(points).radius(2.5).color(Color32::LIGHT_BLUE));
                });
        });
    }
}

impl eframe::App for SchedulerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Retrieve Process Info").clicked() {
                        self.retrieve();
                        ui.close_menu();
                    }
                    if ui.button("Export CSV").clicked() {
                        self.export_csv();
                        ui.close_menu();
                    }
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_aging_config, "Configure Aging");
                    ui.separator();
                    if ui.button("Reorder by Arrival Time").clicked() {
                        self.reorder_by_arrival();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(self.status_line());
                });
            });

            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, Tab::ProcessInfo, "Process Info");
                ui.selectable_value(&mut self.tab, Tab::GraphicalAnalysis, "Graphical Analysis");
            });
        });

        // Aging configuration window
        if self.show_aging_config {
            egui::Window::new("Aging")
                .collapsible(false)
                .show(ctx, |ui| {
                    ui.label("Added to every burst time once per retrieve:");
                    ui.separator();

                    let response = ui.add(
                        egui::Slider::new(&mut self.aging_increment, 0.0..=100.0).text("Increment"),
                    );
                    if response.changed() {
                        self.apply_aging_increment();
                    }

                    if ui.button("Close").clicked() {
                        self.show_aging_config = false;
                    }
                });
        }

        // Main content area
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(error) = &self.error_message {
                ui.colored_label(Color32::RED, format!("Error: {}", error));
            }
            if let Some(success) = &self.success_message {
                ui.colored_label(Color32::GREEN, format!("Success: {}", success));
            }

            ui.horizontal(|ui| {
                if ui.button("Retrieve Process Info").clicked() {
                    self.retrieve();
                }
                if ui.button("Reorder by Arrival Time").clicked() {
                    self.reorder_by_arrival();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Export CSV").clicked() {
                        self.export_csv();
                    }
                    ui.add(
                        TextEdit::singleline(&mut self.export_path)
                            .desired_width(200.0)
                            .hint_text("process_info.csv"),
                    );
                });
            });

            ui.separator();

            match self.tab {
                Tab::ProcessInfo => self.render_table(ui),
                Tab::GraphicalAnalysis => self.render_analysis(ui),
            }
        });
    }
}
