pub mod data;
pub mod filter;

pub use data::LIBRARY;
pub use filter::{filter_library, CategoryView, SubcategoryView};

/// A single example with its source and display metadata. All fields are
/// compile-time literals; the catalog has no runtime mutation path.
#[derive(Debug)]
pub struct Snippet {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub code: &'static str,
    pub language: &'static str,
    pub filename: Option<&'static str>,
    pub tags: &'static [&'static str],
}

#[derive(Debug)]
pub struct Subcategory {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub snippets: &'static [Snippet],
}

#[derive(Debug)]
pub struct Category {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: CategoryIcon,
    pub subcategories: &'static [Subcategory],
}

/// Closed set of category icons, rendered as glyphs in the card headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryIcon {
    Globe,
    Code,
    Layers,
    Server,
    Layout,
    Smartphone,
    Palette,
    Shield,
}

impl CategoryIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            CategoryIcon::Globe => "🌐",
            CategoryIcon::Code => "💻",
            CategoryIcon::Layers => "📚",
            CategoryIcon::Server => "🖥",
            CategoryIcon::Layout => "📐",
            CategoryIcon::Smartphone => "📱",
            CategoryIcon::Palette => "🎨",
            CategoryIcon::Shield => "🛡",
        }
    }
}
