use std::time::Instant;

use egui;
use egui_extras::syntax_highlighting::{code_view_ui, CodeTheme};

use crate::catalog::{filter_library, Category, CategoryView, Snippet, SubcategoryView};
use crate::ui::state::{CopyFeedback, ExpansionState};

/// Intent emitted when the user clicks a snippet's copy button. The app loop
/// owns the clipboard side effect.
pub struct CopyRequest {
    pub snippet_id: &'static str,
    pub code: &'static str,
}

pub struct LibraryWindowState {
    search_query: String,
    expansion: ExpansionState,
    copy_feedback: CopyFeedback,
}

impl LibraryWindowState {
    pub fn new() -> Self {
        Self {
            search_query: String::new(),
            expansion: ExpansionState::new(),
            copy_feedback: CopyFeedback::new(),
        }
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        library: &'static [Category],
    ) -> Option<CopyRequest> {
        self.copy_feedback.tick(Instant::now());

        let mut copy_request = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.heading("DevCode Library");
                ui.label(
                    egui::RichText::new(
                        "A comprehensive collection of code snippets, templates, and examples \
                         for modern web development.",
                    )
                    .weak(),
                );
                ui.add_space(8.0);
            });

            ui.add(
                egui::TextEdit::singleline(&mut self.search_query)
                    .hint_text("Search snippets, frameworks, templates...")
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(8.0);
            ui.separator();

            // Refiltered every frame; the catalog is small and the scan is
            // cheap.
            let view = filter_library(library, &self.search_query);

            egui::ScrollArea::vertical()
                .auto_shrink(false)
                .show(ui, |ui| {
                    if view.is_empty() {
                        ui.add_space(48.0);
                        ui.vertical_centered(|ui| {
                            ui.heading("No snippets found");
                            ui.label(egui::RichText::new("Try adjusting your search terms").weak());
                        });
                        return;
                    }

                    for category_view in &view {
                        self.category_card(ui, category_view, &mut copy_request);
                        ui.add_space(12.0);
                    }
                });
        });

        copy_request
    }

    fn category_card(
        &mut self,
        ui: &mut egui::Ui,
        category_view: &CategoryView,
        copy_request: &mut Option<CopyRequest>,
    ) {
        let category = category_view.category;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(category.icon.glyph()).size(20.0));
                ui.heading(category.title);
            });
            ui.label(egui::RichText::new(category.description).weak());
            ui.add_space(6.0);

            for subcategory_view in &category_view.subcategories {
                self.subcategory_section(ui, subcategory_view, copy_request);
            }
        });
    }

    fn subcategory_section(
        &mut self,
        ui: &mut egui::Ui,
        subcategory_view: &SubcategoryView,
        copy_request: &mut Option<CopyRequest>,
    ) {
        let subcategory = subcategory_view.subcategory;
        let expanded = self.expansion.is_expanded(subcategory.id);
        let chevron = if expanded { "⏷" } else { "⏵" };

        let header = ui.selectable_label(
            false,
            egui::RichText::new(format!("{chevron}  {}", subcategory.title)).strong(),
        );
        if header.clicked() {
            self.expansion.toggle(subcategory.id);
        }
        ui.label(egui::RichText::new(subcategory.description).weak().small());
        tag_chips(ui, subcategory.tags);

        if self.expansion.is_expanded(subcategory.id) {
            ui.add_space(4.0);
            ui.indent(subcategory.id, |ui| {
                for &snippet in &subcategory_view.snippets {
                    self.snippet_block(ui, snippet, copy_request);
                    ui.add_space(8.0);
                }
            });
        }
        ui.add_space(4.0);
    }

    fn snippet_block(
        &mut self,
        ui: &mut egui::Ui,
        snippet: &'static Snippet,
        copy_request: &mut Option<CopyRequest>,
    ) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(snippet.title).strong());
                    ui.label(egui::RichText::new(snippet.description).weak().small());
                    tag_chips(ui, snippet.tags);
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    let copied = self.copy_feedback.copied_id() == Some(snippet.id);
                    let label = if copied { "✔ Copied!" } else { "Copy" };
                    if ui.button(label).clicked() {
                        *copy_request = Some(CopyRequest {
                            snippet_id: snippet.id,
                            code: snippet.code,
                        });
                    }
                });
            });

            ui.add_space(4.0);
            if let Some(filename) = snippet.filename {
                ui.label(egui::RichText::new(filename).monospace().weak().small());
            }

            let theme = CodeTheme::from_memory(ui.ctx(), ui.style());
            egui::ScrollArea::horizontal()
                .id_salt(snippet.id)
                .show(ui, |ui| {
                    code_view_ui(ui, &theme, snippet.code, syntax_token(snippet.language));
                });
        });
    }

    /// Records a successful clipboard write so the button shows "Copied!".
    pub fn mark_copied(&mut self, snippet_id: &'static str, now: Instant) {
        self.copy_feedback.mark_copied(snippet_id, now);
    }

    /// Deadline of the active copy confirmation, if any.
    pub fn copy_feedback_expiry(&self) -> Option<Instant> {
        self.copy_feedback.expires_at()
    }
}

impl Default for LibraryWindowState {
    fn default() -> Self {
        Self::new()
    }
}

fn tag_chips(ui: &mut egui::Ui, tags: &[&str]) {
    ui.horizontal_wrapped(|ui| {
        for tag in tags {
            ui.label(
                egui::RichText::new(format!(" {tag} "))
                    .small()
                    .background_color(ui.visuals().faint_bg_color),
            );
        }
    });
}

/// Maps a catalog language name to a syntect token; unknown tokens fall back
/// to plain text inside the highlighter.
fn syntax_token(language: &str) -> &str {
    match language {
        "typescript" => "ts",
        "javascript" => "js",
        "vue" => "html",
        "dockerfile" => "yaml",
        other => other,
    }
}
