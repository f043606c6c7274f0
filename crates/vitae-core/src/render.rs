//! Typst-backed PDF rendering
//!
//! The PDF step is an external collaborator behind the [`TypstRenderer`]
//! trait: it takes a fully rendered Typst document and produces paginated
//! PDF bytes. The real implementation lives behind the `typst-render`
//! feature flag because of the heavyweight dependencies involved; without
//! the feature a stub renderer returns a minimal placeholder PDF so the
//! surrounding export flow stays exercisable.

use thiserror::Error;

/// Errors that can occur during rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Typst compilation failed with source errors.
    #[error("typst compilation failed: {0}")]
    Compilation(String),

    /// PDF generation failed after successful compilation.
    #[error("pdf generation failed: {0}")]
    Pdf(String),
}

/// Page size presets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    /// A4 (210 x 297 mm), the export default.
    #[default]
    A4,
    /// US Letter (8.5 x 11 inches).
    Letter,
}

impl PageSize {
    /// Width in points (1 point = 1/72 inch).
    pub fn width_pt(&self) -> f64 {
        match self {
            PageSize::A4 => 595.28,
            PageSize::Letter => 612.0,
        }
    }

    /// Height in points.
    pub fn height_pt(&self) -> f64 {
        match self {
            PageSize::A4 => 841.89,
            PageSize::Letter => 792.0,
        }
    }
}

/// A binary file made visible to the compilation (the profile photo).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderAsset {
    /// Virtual path the document refers to, e.g. "photo.png".
    pub path: String,
    pub bytes: Vec<u8>,
}

/// Options controlling page setup for the rendered document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub page_size: PageSize,

    /// Base font size in points.
    pub font_size: f64,

    /// Page margins in points (top, right, bottom, left).
    pub margins: (f64, f64, f64, f64),

    /// Binary assets referenced by the document.
    pub assets: Vec<RenderAsset>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            font_size: 10.0,
            margins: (36.0, 36.0, 36.0, 36.0), // half an inch on all sides
            assets: Vec::new(),
        }
    }
}

impl RenderOptions {
    /// Set custom margins (top, right, bottom, left) in points.
    pub fn with_margins(mut self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        self.margins = (top, right, bottom, left);
        self
    }

    /// Set the base font size in points.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Attach a binary asset to the compilation.
    pub fn with_asset(mut self, path: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.assets.push(RenderAsset {
            path: path.into(),
            bytes,
        });
        self
    }

    /// Generate the Typst page setup preamble for these options.
    pub fn to_typst_preamble(&self) -> String {
        format!(
            r#"#set page(
  width: {}pt,
  height: {}pt,
  margin: (top: {}pt, right: {}pt, bottom: {}pt, left: {}pt),
)
#set text(size: {}pt)
"#,
            self.page_size.width_pt(),
            self.page_size.height_pt(),
            self.margins.0,
            self.margins.1,
            self.margins.2,
            self.margins.3,
            self.font_size
        )
    }
}

/// Compiles a Typst document into paginated PDF bytes.
pub trait TypstRenderer: Send + Sync {
    /// Render a Typst source document with the given options.
    fn render_pdf(&self, source: &str, options: &RenderOptions) -> Result<Vec<u8>, RenderError>;

    /// Whether this renderer produces real output (false for the stub).
    fn is_available(&self) -> bool;
}

// ============================================================================
// Typst-enabled implementation (when typst-render feature is enabled)
// ============================================================================

#[cfg(feature = "typst-render")]
mod typst_impl {
    use super::*;

    /// Renderer backed by `typst-as-lib`, with embedded fonts so output does
    /// not depend on system font availability.
    #[derive(Default)]
    pub struct DefaultTypstRenderer;

    impl DefaultTypstRenderer {
        pub fn new() -> Self {
            Self
        }
    }

    impl TypstRenderer for DefaultTypstRenderer {
        fn render_pdf(
            &self,
            source: &str,
            options: &RenderOptions,
        ) -> Result<Vec<u8>, RenderError> {
            use typst_as_lib::{typst_kit_options::TypstKitFontOptions, TypstEngine};

            // Page setup precedes the template's own set/show rules.
            let full_source = format!("{}\n{}", options.to_typst_preamble(), source);

            let files: Vec<(String, Vec<u8>)> = options
                .assets
                .iter()
                .map(|asset| (asset.path.clone(), asset.bytes.clone()))
                .collect();

            let engine = TypstEngine::builder()
                .main_file(full_source.as_str())
                .with_static_file_resolver(files)
                .search_fonts_with(
                    TypstKitFontOptions::default()
                        .include_system_fonts(true)
                        .include_embedded_fonts(true),
                )
                .build();

            let compiled = engine.compile();
            for warning in &compiled.warnings {
                tracing::warn!(?warning, "typst compilation warning");
            }

            let document = compiled
                .output
                .map_err(|e| RenderError::Compilation(format!("{e:?}")))?;

            let pdf_options = typst_pdf::PdfOptions::default();
            typst_pdf::pdf(&document, &pdf_options)
                .map_err(|e| RenderError::Pdf(format!("{e:?}")))
        }

        fn is_available(&self) -> bool {
            true
        }
    }
}

#[cfg(feature = "typst-render")]
pub use typst_impl::DefaultTypstRenderer;

// ============================================================================
// Stub implementation (when typst-render feature is NOT enabled)
// ============================================================================

#[cfg(not(feature = "typst-render"))]
mod stub_impl {
    use super::*;

    /// Stub renderer for builds without the `typst-render` feature. It
    /// produces a minimal but valid placeholder PDF so callers can exercise
    /// the export flow end to end.
    #[derive(Default)]
    pub struct DefaultTypstRenderer;

    impl DefaultTypstRenderer {
        pub fn new() -> Self {
            Self
        }
    }

    impl TypstRenderer for DefaultTypstRenderer {
        fn render_pdf(
            &self,
            _source: &str,
            _options: &RenderOptions,
        ) -> Result<Vec<u8>, RenderError> {
            Ok(placeholder_pdf())
        }

        fn is_available(&self) -> bool {
            false
        }
    }

    /// A single-page PDF stating that real rendering is not compiled in.
    fn placeholder_pdf() -> Vec<u8> {
        let pdf = br#"%PDF-1.4
1 0 obj
<< /Type /Catalog /Pages 2 0 R >>
endobj
2 0 obj
<< /Type /Pages /Kids [3 0 R] /Count 1 >>
endobj
3 0 obj
<< /Type /Page /Parent 2 0 R /MediaBox [0 0 595 842] /Contents 4 0 R /Resources << /Font << /F1 5 0 R >> >> >>
endobj
4 0 obj
<< /Length 92 >>
stream
BT
/F1 12 Tf
72 770 Td
(PDF rendering is not enabled in this build) Tj
ET
endstream
endobj
5 0 obj
<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>
endobj
trailer
<< /Size 6 /Root 1 0 R >>
%%EOF"#;
        pdf.to_vec()
    }
}

#[cfg(not(feature = "typst-render"))]
pub use stub_impl::DefaultTypstRenderer;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_a4_with_half_inch_margins() {
        let options = RenderOptions::default();
        assert_eq!(options.page_size, PageSize::A4);
        assert_eq!(options.margins, (36.0, 36.0, 36.0, 36.0));
    }

    #[test]
    fn page_size_dimensions() {
        let a4 = PageSize::A4;
        assert!((a4.width_pt() - 595.28).abs() < 0.01);
        assert!((a4.height_pt() - 841.89).abs() < 0.01);

        let letter = PageSize::Letter;
        assert!((letter.width_pt() - 612.0).abs() < 0.01);
        assert!((letter.height_pt() - 792.0).abs() < 0.01);
    }

    #[test]
    fn preamble_sets_page_and_text() {
        let preamble = RenderOptions::default()
            .with_font_size(11.0)
            .to_typst_preamble();
        assert!(preamble.contains("#set page("));
        assert!(preamble.contains("margin: (top: 36pt, right: 36pt, bottom: 36pt, left: 36pt)"));
        assert!(preamble.contains("#set text(size: 11pt)"));
    }

    #[test]
    fn options_builder_attaches_assets() {
        let options = RenderOptions::default().with_asset("photo.png", vec![1, 2, 3]);
        assert_eq!(options.assets.len(), 1);
        assert_eq!(options.assets[0].path, "photo.png");
    }

    #[test]
    #[cfg(not(feature = "typst-render"))]
    fn stub_renderer_produces_valid_pdf_bytes() {
        let renderer = DefaultTypstRenderer::new();
        let pdf = renderer
            .render_pdf("= Hello", &RenderOptions::default())
            .unwrap();
        assert!(pdf.starts_with(b"%PDF-"));
        assert!(!renderer.is_available());
    }

    #[test]
    #[cfg(feature = "typst-render")]
    fn typst_renderer_compiles_a_simple_document() {
        let renderer = DefaultTypstRenderer::new();
        let pdf = renderer
            .render_pdf("= Hello\n\nWorld.", &RenderOptions::default())
            .unwrap();
        assert!(pdf.starts_with(b"%PDF"));
        assert!(renderer.is_available());
    }
}
