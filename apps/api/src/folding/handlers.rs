//! HTTP handlers for pattern generation, templates, and export.
//!
//! This layer owns raw-input validation (text length, numeric ranges) and
//! the response envelopes; everything algorithmic stays in the pure compiler
//! modules.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::folding::templates::CatalogListing;
use crate::folding::{
    compile_text, export, statistics, BookSpec, Pattern, PatternStats, Strategy,
    DEFAULT_PAGE_WIDTH_MM,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / response bodies
// ────────────────────────────────────────────────────────────────────────────

fn default_book_pages() -> u32 {
    400
}

fn default_book_height() -> f64 {
    200.0
}

fn default_book_width() -> f64 {
    DEFAULT_PAGE_WIDTH_MM
}

#[derive(Debug, Deserialize)]
pub struct PatternRequest {
    pub text: String,
    #[serde(default = "default_book_pages")]
    pub book_pages: u32,
    #[serde(default = "default_book_height")]
    pub book_height_mm: f64,
    #[serde(default = "default_book_width")]
    pub book_width_mm: f64,
    #[serde(default)]
    pub strategy: Strategy,
}

#[derive(Debug, Deserialize)]
pub struct TemplatePatternRequest {
    pub template_id: String,
    #[serde(default = "default_book_pages")]
    pub book_pages: u32,
    #[serde(default = "default_book_height")]
    pub book_height_mm: f64,
    #[serde(default = "default_book_width")]
    pub book_width_mm: f64,
}

/// Book parameters echoed back to (and accepted from) clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSpecsBody {
    pub pages: u32,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

impl From<&BookSpec> for BookSpecsBody {
    fn from(spec: &BookSpec) -> Self {
        BookSpecsBody {
            pages: spec.page_count,
            height: spec.page_height_mm,
            width: spec.page_width_mm,
        }
    }
}

impl From<&BookSpecsBody> for BookSpec {
    fn from(body: &BookSpecsBody) -> Self {
        BookSpec {
            page_count: body.pages,
            page_height_mm: body.height,
            page_width_mm: body.width,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatisticsBody {
    #[serde(flatten)]
    pub stats: PatternStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PatternResponse {
    pub pattern: Pattern,
    pub statistics: StatisticsBody,
    pub book_specs: BookSpecsBody,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub pattern: Pattern,
    pub book_specs: BookSpecsBody,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub instructions: String,
    pub filename: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/patterns
pub async fn handle_generate_pattern(
    State(state): State<AppState>,
    Json(req): Json<PatternRequest>,
) -> Result<Json<PatternResponse>, AppError> {
    let text = req.text.trim().to_uppercase();
    validate_text(&text, state.config.max_text_len)?;
    let spec = validate_book(
        req.book_pages,
        req.book_height_mm,
        Some(req.book_width_mm),
        state.config.min_book_pages,
    )?;

    let pattern = compile_text(&state.glyphs, &text, &spec, req.strategy)?;
    let stats = statistics(&pattern, req.strategy);
    tracing::info!(
        strategy = ?req.strategy,
        folds = stats.total_folds,
        "pattern generated for text of {} characters",
        text.chars().count()
    );

    Ok(Json(PatternResponse {
        statistics: StatisticsBody {
            stats,
            text: Some(text),
            template_id: None,
        },
        book_specs: BookSpecsBody::from(&spec),
        pattern,
    }))
}

/// GET /api/v1/templates
pub async fn handle_list_templates(State(state): State<AppState>) -> Json<CatalogListing> {
    Json(state.catalog.listing())
}

/// POST /api/v1/templates/pattern
pub async fn handle_template_pattern(
    State(state): State<AppState>,
    Json(req): Json<TemplatePatternRequest>,
) -> Result<Json<PatternResponse>, AppError> {
    let spec = validate_book(
        req.book_pages,
        req.book_height_mm,
        Some(req.book_width_mm),
        state.config.min_book_pages,
    )?;

    let pattern = state.catalog.compile(&req.template_id, &spec)?;
    // Templates always compile through the segment pipeline.
    let stats = statistics(&pattern, Strategy::Segment);

    Ok(Json(PatternResponse {
        statistics: StatisticsBody {
            stats,
            text: None,
            template_id: Some(req.template_id),
        },
        book_specs: BookSpecsBody::from(&spec),
        pattern,
    }))
}

/// POST /api/v1/patterns/export
pub async fn handle_export_pattern(
    Json(req): Json<ExportRequest>,
) -> Result<Json<ExportResponse>, AppError> {
    let spec = BookSpec::from(&req.book_specs);
    let title = req.title.as_deref().unwrap_or("Pattern");

    Ok(Json(ExportResponse {
        instructions: export::format_instructions(&req.pattern, &spec, title),
        filename: export::export_filename(title),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

fn validate_text(text: &str, max_len: usize) -> Result<(), AppError> {
    if text.is_empty() {
        return Err(AppError::Validation("text must not be empty".to_string()));
    }
    let len = text.chars().count();
    if len > max_len {
        return Err(AppError::Validation(format!(
            "text must not exceed {max_len} characters (got {len})"
        )));
    }
    Ok(())
}

fn validate_book(
    pages: u32,
    height_mm: f64,
    width_mm: Option<f64>,
    min_pages: u32,
) -> Result<BookSpec, AppError> {
    if pages < min_pages {
        return Err(AppError::Validation(format!(
            "book must have at least {min_pages} pages"
        )));
    }
    if !height_mm.is_finite() || height_mm <= 0.0 {
        return Err(AppError::Validation(
            "page height must be a positive number of millimeters".to_string(),
        ));
    }
    if let Some(width) = width_mm {
        if !width.is_finite() || width <= 0.0 {
            return Err(AppError::Validation(
                "page width must be a positive number of millimeters".to_string(),
            ));
        }
    }
    Ok(BookSpec {
        page_count: pages,
        page_height_mm: height_mm,
        page_width_mm: width_mm,
    })
}
