//! Graphical shell
//!
//! One window: a file picker button, the chosen path, and a single action
//! button that runs the whole pipeline synchronously on the UI thread.
//! Outcomes are reported through modal dialogs.

use crate::config::Config;
use crate::ocr::tesseract::TesseractEngine;
use crate::translate::google::GoogleTranslator;
use crate::{output, pipeline};
use eframe::egui;
use rfd::{FileDialog, MessageDialog, MessageLevel};
use std::path::{Path, PathBuf};

pub fn run(config: Config) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([420.0, 200.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tabla Translate",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run window: {}", e))
}

struct App {
    config: Config,
    /// Currently selected image, if any; the window's only state
    selected: Option<PathBuf>,
}

impl App {
    fn new(config: Config) -> Self {
        Self {
            config,
            selected: None,
        }
    }

    fn select_image(&mut self) {
        let picked = FileDialog::new()
            .set_title("Select image")
            .add_filter("Images", &["png", "jpg", "jpeg"])
            .pick_file();

        if let Some(path) = picked {
            self.selected = Some(path);
        }
    }

    fn translate_selected(&mut self) {
        let Some(path) = self.selected.clone() else {
            modal(
                MessageLevel::Warning,
                "No image selected",
                "Choose an image first",
            );
            return;
        };

        match self.process(&path) {
            Ok(()) => modal(
                MessageLevel::Info,
                "Finished",
                &format!(
                    "Translations saved to {}",
                    self.config.output_path.display()
                ),
            ),
            Err(e) => modal(MessageLevel::Error, "Error", &e.to_string()),
        }
    }

    /// Full pipeline for the chosen image; blocks the event loop until done.
    fn process(&self, path: &Path) -> anyhow::Result<()> {
        let engine = TesseractEngine::new(&self.config)?;
        let translator = GoogleTranslator::new();

        let summary = pipeline::run(path, &engine, &translator, &self.config)?;

        if summary.lines_found == 0 {
            modal(
                MessageLevel::Warning,
                "No text",
                "No text found in the image",
            );
        }

        output::write_translations(&summary.translations, &self.config.output_path)?;
        Ok(())
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Tabla Translate");
            ui.add_space(8.0);

            if ui.button("Select image…").clicked() {
                self.select_image();
            }

            match &self.selected {
                Some(path) => ui.label(path.display().to_string()),
                None => ui.label("No image selected"),
            };

            ui.add_space(12.0);

            if ui.button("Translate and save").clicked() {
                self.translate_selected();
            }
        });
    }
}

fn modal(level: MessageLevel, title: &str, description: &str) {
    let _ = MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(description)
        .show();
}
