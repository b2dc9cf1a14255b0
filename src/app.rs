use std::time::Instant;

use eframe::egui;

use crate::catalog::{Category, LIBRARY};
use crate::clipboard::copy_to_clipboard;
use crate::ui::LibraryWindowState;

pub struct DeckApp {
    library: &'static [Category],
    window: LibraryWindowState,
}

impl DeckApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            library: LIBRARY,
            window: LibraryWindowState::new(),
        }
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(request) = self.window.show(ctx, self.library) {
            match copy_to_clipboard(request.code) {
                Ok(()) => {
                    self.window.mark_copied(request.snippet_id, Instant::now());
                    log::info!("Snippet {} copied to clipboard", request.snippet_id);
                }
                Err(e) => {
                    // No user-facing error; the absence of "Copied!" is the
                    // only signal.
                    log::error!("Failed to copy snippet {}: {}", request.snippet_id, e);
                }
            }
        }

        // Wake up again when the copy confirmation is due to clear.
        if let Some(expiry) = self.window.copy_feedback_expiry() {
            ctx.request_repaint_after(expiry.saturating_duration_since(Instant::now()));
        }
    }
}
