//! Reel Rental - Movie Catalog
//! A cross-platform desktop browser for a movie rental library

// Hide console window on Windows release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

// Use mimalloc for faster memory allocation (Linux, macOS)
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use eframe::egui;

mod config;
mod models;
mod library;
mod view;
mod state;

use config::AppConfig;
use models::*;
use state::{CatalogState, PAGE_SIZE};

/// Get current time as HH:MM:SS (local clock)
fn timestamp_now() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Load application icon - a film strip on a red card
fn load_icon() -> egui::IconData {
    let size: usize = 64;
    let mut rgba = vec![0u8; size * size * 4];

    for y in 0..size {
        for x in 0..size {
            let idx = (y * size + x) * 4;

            // Normalize coordinates to 0.0-1.0
            let nx = x as f32 / size as f32;
            let ny = y as f32 / size as f32;

            // Rounded rectangle check (background)
            let corner_radius = 0.125; // ~8px on 64px
            let in_rounded_rect = {
                let dx = if nx < corner_radius { corner_radius - nx }
                         else if nx > 1.0 - corner_radius { nx - (1.0 - corner_radius) }
                         else { 0.0 };
                let dy = if ny < corner_radius { corner_radius - ny }
                         else if ny > 1.0 - corner_radius { ny - (1.0 - corner_radius) }
                         else { 0.0 };
                dx * dx + dy * dy <= corner_radius * corner_radius
            };

            if !in_rounded_rect {
                // Transparent outside rounded rect
                rgba[idx] = 0;
                rgba[idx + 1] = 0;
                rgba[idx + 2] = 0;
                rgba[idx + 3] = 0;
                continue;
            }

            // Red gradient background (#e94560 to #903749)
            let gradient_t = nx * 0.5 + ny * 0.5;
            let r = (233.0 + (144.0 - 233.0) * gradient_t) as u8; // 233 -> 144
            let g = (69.0 + (55.0 - 69.0) * gradient_t) as u8;    // 69 -> 55
            let b = (96.0 + (73.0 - 96.0) * gradient_t) as u8;    // 96 -> 73

            // Vertical film strip down the middle
            let in_strip = nx >= 0.28 && nx <= 0.72;

            // Sprocket holes along both strip edges
            let hole_band = {
                let phase = (ny * 5.0).fract();
                phase >= 0.25 && phase <= 0.70
            };
            let in_left_holes = nx >= 0.31 && nx <= 0.38 && hole_band;
            let in_right_holes = nx >= 0.62 && nx <= 0.69 && hole_band;

            // Two frames between the hole columns
            let in_frame = nx >= 0.42 && nx <= 0.58
                && ((ny >= 0.12 && ny <= 0.44) || (ny >= 0.56 && ny <= 0.88));

            if in_left_holes || in_right_holes {
                // Punch the holes through to the card
                rgba[idx] = r;
                rgba[idx + 1] = g;
                rgba[idx + 2] = b;
                rgba[idx + 3] = 255;
            } else if in_frame {
                // Lit frames (#f5f0e1)
                rgba[idx] = 245;
                rgba[idx + 1] = 240;
                rgba[idx + 2] = 225;
                rgba[idx + 3] = 255;
            } else if in_strip {
                // Dark film stock (#1a1a2e)
                rgba[idx] = 26;
                rgba[idx + 1] = 26;
                rgba[idx + 2] = 46;
                rgba[idx + 3] = 255;
            } else {
                // Background gradient
                rgba[idx] = r;
                rgba[idx + 1] = g;
                rgba[idx + 2] = b;
                rgba[idx + 3] = 255;
            }
        }
    }

    egui::IconData {
        rgba,
        width: size as u32,
        height: size as u32,
    }
}

fn main() -> Result<(), eframe::Error> {
    // Force X11 backend on Linux before any windowing code runs
    #[cfg(target_os = "linux")]
    {
        std::env::set_var("WINIT_UNIX_BACKEND", "x11");
        std::env::remove_var("WAYLAND_DISPLAY");
    }

    let icon = load_icon();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 620.0])
            .with_min_inner_size([720.0, 480.0])
            .with_icon(icon),
        vsync: true,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        ..Default::default()
    };

    eframe::run_native(
        "Reel Rental - Movie Catalog",
        options,
        Box::new(|cc| {
            let app = CatalogApp::new();
            cc.egui_ctx.set_visuals(if app.config.dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            Ok(Box::new(app))
        }),
    )
}

struct CatalogApp {
    // Catalog session
    state: CatalogState,
    current_tab: Tab,

    // Search box buffer; the active query lives in the state
    search_input: String,

    // Status
    status_message: String,
    console_log: Vec<String>,

    // Config
    config: AppConfig,
    show_reload_confirm: bool,
}

impl Default for CatalogApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogApp {
    fn new() -> Self {
        let config = AppConfig::load();
        let state = CatalogState::load();
        let movie_count = state.movies().len();
        let genre_count = state.genres().len() - 1; // minus the "All Genres" row

        let mut app = Self {
            state,
            current_tab: Tab::Catalog,
            search_input: String::new(),
            status_message: "Ready".to_string(),
            console_log: vec!["[INFO] Reel Rental started".to_string()],
            config,
            show_reload_confirm: false,
        };
        app.log(&format!(
            "[INFO] Library loaded: {} movies, {} genres",
            movie_count, genre_count
        ));
        app
    }

    fn log(&mut self, message: &str) {
        let timestamp = timestamp_now();
        self.console_log.push(format!("[{}] {}", timestamp, message));
        // Keep last 500 lines
        if self.console_log.len() > 500 {
            self.console_log.remove(0);
        }
    }

    fn handle_new_movie(&mut self) {
        self.log("[WARN] The new movie form is not implemented yet");
        self.status_message = "The new movie form is not implemented yet".to_string();
    }

    fn handle_genre_select(&mut self, genre: Genre) {
        // A genre click always leaves search mode
        self.search_input.clear();
        if genre.is_sentinel() {
            self.log("[INFO] Genre filter cleared");
        } else {
            self.log(&format!("[INFO] Genre filter: {}", genre.name));
        }
        self.state.select_genre(&genre);
    }

    fn handle_sort(&mut self, key: SortKey) {
        self.state.sort_by(key);
        let sort = self.state.sort();
        self.log(&format!(
            "[INFO] Sorted by {} {}",
            sort.key.label(),
            sort.dir.label()
        ));
    }

    fn handle_toggle_like(&mut self, id: &str, title: &str) {
        match self.state.toggle_liked(id) {
            Some(true) => {
                self.log(&format!("[INFO] Liked '{}'", title));
                self.status_message = format!("Liked '{}'", title);
            }
            Some(false) => {
                self.log(&format!("[INFO] Unliked '{}'", title));
                self.status_message = format!("Unliked '{}'", title);
            }
            None => {
                self.log(&format!("[WARN] No movie with id '{}' to like", id));
            }
        }
    }

    fn handle_delete(&mut self, id: &str, title: &str) {
        if self.state.delete(id) {
            self.log(&format!("[INFO] Deleted '{}'", title));
            self.status_message = format!("Deleted '{}'", title);
        } else {
            self.log(&format!("[WARN] No movie with id '{}' to delete", id));
        }
    }

    fn show_catalog_tab(&mut self, ui: &mut egui::Ui) {
        if self.state.is_empty() {
            ui.add_space(20.0);
            ui.label(
                egui::RichText::new("There are no movies in the database.")
                    .strong()
                    .size(16.0),
            );
            return;
        }

        // Search bar
        ui.horizontal(|ui| {
            ui.label("🔍");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.search_input)
                    .hint_text("Search...")
                    .desired_width(180.0),
            );
            if response.changed() {
                self.state.search(self.search_input.clone());
            }
        });
        ui.separator();

        let mut selected_genre: Option<Genre> = None;

        egui::SidePanel::left("genre_panel")
            .resizable(false)
            .default_width(140.0)
            .show_inside(ui, |ui| {
                ui.add_space(4.0);
                ui.label(egui::RichText::new("Genres").strong());
                ui.separator();

                for genre in self.state.genres() {
                    let is_active = match self.state.filter() {
                        ActiveFilter::All => genre.is_sentinel(),
                        ActiveFilter::Genre(active) => active.id == genre.id,
                        ActiveFilter::Search(_) => false,
                    };
                    if ui.selectable_label(is_active, &genre.name).clicked() {
                        selected_genre = Some(genre.clone());
                    }
                }
            });

        egui::CentralPanel::default().show_inside(ui, |ui| {
            self.show_movie_table(ui);
        });

        if let Some(genre) = selected_genre {
            self.handle_genre_select(genre);
        }
    }

    fn show_movie_table(&mut self, ui: &mut egui::Ui) {
        let page_view = self.state.derive_page();
        let sort = self.state.sort();

        ui.add_space(4.0);
        ui.label(format!(
            "Showing {} movies in the database.",
            page_view.total_matches
        ));
        ui.add_space(4.0);

        let mut clicked_sort: Option<SortKey> = None;
        let mut toggle_like: Option<(String, String)> = None;
        let mut to_delete: Option<(String, String)> = None;
        let mut clicked_page: Option<usize> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("movie_grid")
                    .num_columns(6)
                    .spacing([20.0, 8.0])
                    .striped(true)
                    .show(ui, |ui| {
                        // Header row - clicking a column sorts by it
                        for key in [SortKey::Title, SortKey::Genre, SortKey::Stock, SortKey::Rate] {
                            let header = if sort.key == key {
                                format!("{} {}", key.label(), sort.dir.arrow())
                            } else {
                                key.label().to_string()
                            };
                            if ui.button(egui::RichText::new(header).strong()).clicked() {
                                clicked_sort = Some(key);
                            }
                        }
                        ui.label(""); // Like column
                        ui.label(""); // Delete column
                        ui.end_row();

                        for movie in &page_view.items {
                            ui.label(&movie.title);
                            ui.label(&movie.genre.name);
                            ui.label(movie.number_in_stock.to_string());
                            ui.label(format!("{:.1}", movie.daily_rental_rate));

                            let like_text = if movie.liked {
                                egui::RichText::new("★").size(18.0).color(egui::Color32::GOLD)
                            } else {
                                egui::RichText::new("☆").size(18.0).color(egui::Color32::GRAY)
                            };
                            if ui
                                .button(like_text)
                                .on_hover_text(if movie.liked { "Unlike" } else { "Like" })
                                .clicked()
                            {
                                toggle_like = Some((movie.id.clone(), movie.title.clone()));
                            }

                            if ui
                                .button(
                                    egui::RichText::new("Delete")
                                        .color(egui::Color32::from_rgb(200, 80, 80)),
                                )
                                .clicked()
                            {
                                to_delete = Some((movie.id.clone(), movie.title.clone()));
                            }
                            ui.end_row();
                        }
                    });

                // Page buttons, hidden when one page is enough
                let pages = view::page_count(page_view.total_matches, PAGE_SIZE);
                if pages > 1 {
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        for page in 1..=pages {
                            let is_current = self.state.current_page() == page;
                            if ui
                                .selectable_label(is_current, format!(" {} ", page))
                                .clicked()
                            {
                                clicked_page = Some(page);
                            }
                        }
                    });
                }
            });

        if let Some(key) = clicked_sort {
            self.handle_sort(key);
        }
        if let Some((id, title)) = toggle_like {
            self.handle_toggle_like(&id, &title);
        }
        if let Some((id, title)) = to_delete {
            self.handle_delete(&id, &title);
        }
        if let Some(page) = clicked_page {
            self.state.change_page(page);
        }
    }

    fn show_liked_tab(&mut self, ui: &mut egui::Ui) {
        let liked: Vec<Movie> = self
            .state
            .movies()
            .iter()
            .filter(|m| m.liked)
            .cloned()
            .collect();

        if liked.is_empty() {
            ui.add_space(20.0);
            ui.label("No liked movies yet. Click the ☆ in the catalog to like one.");
            return;
        }

        let mut toggle_like: Option<(String, String)> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for movie in &liked {
                    ui.horizontal(|ui| {
                        if ui
                            .button(
                                egui::RichText::new("★")
                                    .size(18.0)
                                    .color(egui::Color32::GOLD),
                            )
                            .on_hover_text("Unlike")
                            .clicked()
                        {
                            toggle_like = Some((movie.id.clone(), movie.title.clone()));
                        }

                        ui.label(egui::RichText::new(&movie.title).strong());
                        ui.label(format!("({})", movie.genre.name));
                    });
                }
            });

        if let Some((id, title)) = toggle_like {
            self.handle_toggle_like(&id, &title);
        }
    }

    fn show_console_tab(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Console Log");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🗑 Clear").clicked() {
                    self.console_log.clear();
                    self.console_log
                        .push(format!("[{}] Console cleared", timestamp_now()));
                }
            });
        });
        ui.separator();

        // Display log entries with monospace font
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for line in &self.console_log {
                    let color = if line.contains("[ERROR]") {
                        egui::Color32::RED
                    } else if line.contains("[WARN]") {
                        egui::Color32::YELLOW
                    } else if line.contains("[INFO]") {
                        egui::Color32::LIGHT_BLUE
                    } else {
                        egui::Color32::GRAY
                    };

                    ui.label(egui::RichText::new(line).monospace().color(color));
                }
            });
    }
}

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme
        if self.config.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }
        ctx.set_zoom_factor(self.config.font_size as f32 / 14.0);

        // Top panel - Controls
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(5.0);

            ui.horizontal(|ui| {
                if ui
                    .button("➕ New Movie")
                    .on_hover_text("Add a movie to the catalog")
                    .clicked()
                {
                    self.handle_new_movie();
                }

                if ui
                    .button("🔄 Reload")
                    .on_hover_text("Restore the full library, discarding likes and deletions")
                    .clicked()
                {
                    self.show_reload_confirm = true;
                }

                ui.separator();

                if ui.checkbox(&mut self.config.dark_mode, "🌙 Dark").changed() {
                    self.config.save();
                }

                ui.separator();

                ui.label("Text size:");
                egui::ComboBox::from_id_salt("font_size")
                    .selected_text(format!("{} pt", self.config.font_size))
                    .show_ui(ui, |ui| {
                        for size in [12u32, 14, 16, 18, 20] {
                            if ui
                                .selectable_value(
                                    &mut self.config.font_size,
                                    size,
                                    format!("{} pt", size),
                                )
                                .changed()
                            {
                                self.config.save();
                            }
                        }
                    });
            });

            ui.add_space(5.0);
        });

        // Bottom panel - Status
        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} movies in library", self.state.movies().len()));
                });
            });
        });

        // Main content
        egui::CentralPanel::default().show(ctx, |ui| {
            // Tab bar
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.current_tab, Tab::Catalog, "🎬 CATALOG");
                ui.selectable_value(&mut self.current_tab, Tab::Liked, "⭐ LIKED");

                // Push Console to the right
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.selectable_value(&mut self.current_tab, Tab::Console, "🖥 CONSOLE");
                });
            });

            ui.separator();

            match self.current_tab {
                Tab::Catalog => self.show_catalog_tab(ui),
                Tab::Liked => self.show_liked_tab(ui),
                Tab::Console => self.show_console_tab(ui),
            }
        });

        // Reload Confirmation Dialog
        if self.show_reload_confirm {
            egui::Window::new("⚠ Reload Library")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.add_space(10.0);
                    ui.label(
                        egui::RichText::new("Are you sure you want to reload the library?")
                            .strong(),
                    );
                    ui.add_space(10.0);

                    ui.label("This will discard:");
                    ui.label("  • Deleted movies (they come back)");
                    ui.label("  • Likes");
                    ui.label("  • The current filter, sort and page");

                    ui.add_space(10.0);

                    ui.horizontal(|ui| {
                        if ui.button("Cancel").clicked() {
                            self.show_reload_confirm = false;
                        }

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui
                                .button(
                                    egui::RichText::new("Reload Everything")
                                        .color(egui::Color32::from_rgb(200, 80, 80)),
                                )
                                .clicked()
                            {
                                self.state.reload();
                                self.search_input.clear();
                                self.show_reload_confirm = false;
                                self.status_message = "Library reloaded".to_string();
                                self.log("[INFO] Library reloaded from source");
                            }
                        });
                    });
                });
        }
    }
}
