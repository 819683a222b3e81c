use std::sync::Arc;

use crate::config::Config;
use crate::folding::glyphs::GlyphTable;
use crate::folding::templates::TemplateCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The glyph table and template catalog are immutable after startup, so they
/// are safe for unsynchronized concurrent reads across request handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub glyphs: Arc<GlyphTable>,
    pub catalog: Arc<TemplateCatalog>,
}
