use eframe::egui;
use glyph_rendr::config::{BRIGHTNESS_RANGE, CONTRAST_RANGE, WIDTH_RANGE};
use glyph_rendr::{AsciiArt, ColorPreset, RenderConfig, Result, Style, convert, export, load_image};
use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Largest side of the source preview texture
const THUMBNAIL_SIZE: u32 = 320;

/// Main application state for the glyph renderer GUI
pub struct GlyphApp {
    /// Path of the loaded image, shown in the summary
    source_path: Option<PathBuf>,
    /// Decoded source image
    source_image: Option<DynamicImage>,
    /// Texture handle for the source thumbnail
    source_texture: Option<egui::TextureHandle>,

    style: Style,
    color: ColorPreset,
    width: u32,
    brightness: f32,
    contrast: f32,

    /// Last conversion result
    art: Option<AsciiArt>,
    /// Preview font size in points
    font_size: f32,

    /// Whether to automatically reprocess when parameters change
    auto_process: bool,
    /// Flag indicating parameters have changed and reprocessing is needed
    needs_reprocess: bool,

    /// Last processing time in milliseconds
    last_process_time_ms: f64,
    /// Informational message (e.g. where the art was saved)
    status_message: Option<String>,
    /// Error message to display (if any)
    error_message: Option<String>,
}

impl Default for GlyphApp {
    fn default() -> Self {
        let config = RenderConfig::default();
        Self {
            source_path: None,
            source_image: None,
            source_texture: None,
            style: Style::default(),
            color: ColorPreset::default(),
            width: config.width,
            brightness: config.brightness,
            contrast: config.contrast,
            art: None,
            font_size: 8.0,
            auto_process: true,
            needs_reprocess: false,
            last_process_time_ms: 0.0,
            status_message: None,
            error_message: None,
        }
    }
}

impl GlyphApp {
    /// Create a new glyph renderer application
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Build the render configuration from the current controls
    fn config(&self) -> Result<RenderConfig> {
        RenderConfig::new(
            self.style,
            self.color,
            self.width,
            self.brightness,
            self.contrast,
        )
    }

    /// Load an image from file path
    pub fn open_image(&mut self, path: &Path) {
        match load_image(path) {
            Ok(img) => {
                log::info!("loaded {}", path.display());
                self.source_path = Some(path.to_path_buf());
                self.source_image = Some(img);
                self.source_texture = None; // Clear old texture
                self.art = None;
                self.needs_reprocess = true;
                self.error_message = None;
                self.status_message = None;
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to load image: {}", e));
            }
        }
    }

    /// Save the current art as plain text
    ///
    /// With no path a timestamped file is written to the working directory.
    pub fn save_output(&self, path: Option<&Path>) -> std::result::Result<PathBuf, String> {
        match &self.art {
            Some(art) => export(&art.text, path).map_err(|e| format!("Failed to save: {}", e)),
            None => Err("No glyph art to save".to_string()),
        }
    }

    fn save_and_report(&mut self, path: Option<&Path>) {
        match self.save_output(path) {
            Ok(saved) => {
                self.status_message = Some(format!("Saved as: {}", saved.display()));
                self.error_message = None;
            }
            Err(e) => self.error_message = Some(e),
        }
    }

    /// Process the source image with the current settings
    fn process(&mut self) {
        let Some(ref input) = self.source_image else {
            return;
        };
        let start = Instant::now();

        match self.config().and_then(|config| convert(input, &config)) {
            Ok(art) => {
                self.last_process_time_ms = start.elapsed().as_secs_f64() * 1000.0;
                self.art = Some(art);
                self.needs_reprocess = false;
                self.error_message = None;
            }
            Err(e) => {
                self.needs_reprocess = false;
                self.error_message = Some(format!("Conversion failed: {}", e));
            }
        }
    }

    /// Render the control panel UI
    fn render_controls(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;

        ui.heading("Controls");
        ui.separator();

        ui.collapsing("Style", |ui| {
            egui::ComboBox::from_id_source("style")
                .selected_text(self.style.name())
                .show_ui(ui, |ui| {
                    for style in Style::ALL {
                        let label = format!("{} {}", style.name(), style.preview());
                        changed |= ui
                            .selectable_value(&mut self.style, style, label)
                            .changed();
                    }
                });

            ui.add_space(4.0);

            egui::ComboBox::from_id_source("color")
                .selected_text(self.color.name())
                .show_ui(ui, |ui| {
                    for color in ColorPreset::ALL {
                        changed |= ui
                            .selectable_value(&mut self.color, color, color.name())
                            .changed();
                    }
                });
        });

        ui.add_space(8.0);

        ui.collapsing("Image", |ui| {
            changed |= ui
                .add(egui::Slider::new(&mut self.width, WIDTH_RANGE).text("Width"))
                .on_hover_text("Output width in characters")
                .changed();

            changed |= ui
                .add(egui::Slider::new(&mut self.brightness, BRIGHTNESS_RANGE).text("Brightness"))
                .on_hover_text("Multiplies every channel before conversion")
                .changed();

            changed |= ui
                .add(egui::Slider::new(&mut self.contrast, CONTRAST_RANGE).text("Contrast"))
                .on_hover_text("Stretches channels around mid-gray")
                .changed();
        });

        ui.add_space(8.0);

        ui.collapsing("Preview", |ui| {
            ui.add(egui::Slider::new(&mut self.font_size, 4.0..=16.0).text("Font Size"))
                .on_hover_text("Only affects the on-screen preview");
        });

        ui.add_space(16.0);
        ui.separator();

        // Auto-process toggle
        ui.checkbox(&mut self.auto_process, "Auto-process")
            .on_hover_text("Automatically reprocess when parameters change");

        // Manual process button
        ui.add_enabled_ui(self.source_image.is_some(), |ui| {
            if ui.button("Process").clicked() {
                self.process();
            }
        });

        // Show processing time
        if self.last_process_time_ms > 0.0 {
            ui.label(format!("Last process: {:.1} ms", self.last_process_time_ms));
        }

        changed
    }

    /// Display the source thumbnail
    fn display_source(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            ui.heading("Original");

            let Some(img) = &self.source_image else {
                ui.label("No image loaded");
                return;
            };

            // Update texture if needed
            if self.source_texture.is_none() {
                let thumb = img.thumbnail(THUMBNAIL_SIZE, THUMBNAIL_SIZE).to_rgba8();
                let size = [thumb.width() as usize, thumb.height() as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, thumb.as_raw());
                self.source_texture = Some(ui.ctx().load_texture(
                    "source",
                    color_image,
                    egui::TextureOptions::default(),
                ));
            }

            if let Some(tex) = &self.source_texture {
                ui.image((tex.id(), tex.size_vec2()));
            }

            if let Some(path) = &self.source_path {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                ui.label(format!("{} ({}x{})", name, img.width(), img.height()));
            }
        });
    }

    /// Display the glyph art tinted with the selected color
    fn display_art(&self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            ui.heading("Glyph Output");

            let Some(art) = &self.art else {
                ui.label("Nothing rendered yet");
                return;
            };

            let tint = match self.color.rgb() {
                Some([r, g, b]) => egui::Color32::from_rgb(r, g, b),
                None => ui.visuals().text_color(),
            };

            ui.label(format!(
                "{}x{} characters",
                art.glyphs.width(),
                art.glyphs.height()
            ));

            egui::ScrollArea::both().show(ui, |ui| {
                ui.label(
                    egui::RichText::new(art.plain_text())
                        .font(egui::FontId::monospace(self.font_size))
                        .color(tint),
                );
            });
        });
    }
}

impl eframe::App for GlyphApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Images", &["jpg", "jpeg", "png", "bmp", "gif", "tif", "tiff"])
                            .add_filter("All files", &["*"])
                            .pick_file()
                        {
                            self.open_image(&path);
                        }
                        ui.close_menu();
                    }

                    ui.add_enabled_ui(self.art.is_some(), |ui| {
                        if ui.button("Save Text...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("Text", &["txt"])
                                .save_file()
                            {
                                self.save_and_report(Some(&path));
                            }
                            ui.close_menu();
                        }

                        if ui.button("Save").clicked() {
                            self.save_and_report(None);
                            ui.close_menu();
                        }

                        if ui.button("Copy to Clipboard").clicked() {
                            if let Some(art) = &self.art {
                                let text = art.plain_text();
                                ui.ctx().output_mut(|o| o.copied_text = text);
                            }
                            ui.close_menu();
                        }
                    });

                    ui.separator();

                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.status_message = Some(
                            "Glyph Renderer\nTurns images into text art\n\nBuilt with Rust + egui".to_string()
                        );
                        ui.close_menu();
                    }
                });
            });
        });

        // Left panel: Controls
        egui::SidePanel::left("control_panel")
            .resizable(true)
            .default_width(250.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let changed = self.render_controls(ui);

                    if changed {
                        self.needs_reprocess = true;
                    }
                });
            });

        // Central panel: source and output
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(ref msg) = self.error_message {
                ui.colored_label(egui::Color32::RED, msg);
                if ui.button("Clear Error").clicked() {
                    self.error_message = None;
                }
                ui.separator();
            }

            if let Some(ref msg) = self.status_message {
                ui.label(msg);
                ui.separator();
            }

            // Auto-process if needed
            if self.auto_process && self.needs_reprocess && self.source_image.is_some() {
                self.process();
            }

            ui.horizontal_top(|ui| {
                self.display_source(ui);
                ui.separator();
                self.display_art(ui);
            });
        });
    }
}
