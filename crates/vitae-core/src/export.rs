//! Export gate and PDF artifact assembly
//!
//! Export is only attempted when the snapshot passes the readiness policy;
//! otherwise the caller gets the blocking findings back and the renderer is
//! never invoked. A renderer failure is logged and surfaced as a generic
//! error; the form state is unaffected either way and retry is manual.

use thiserror::Error;
use vitae_domain::{
    export_readiness, PersonalDetails, ResumeData, ValidationError, ValidationSeverity,
};

use crate::photo::{self, PhotoError};
use crate::render::{RenderError, RenderOptions, TypstRenderer};
use crate::templates::template_for;

/// Errors from the export flow.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Required fields are missing; the renderer was not invoked.
    #[error("resume is not ready to export ({} required fields missing)", errors.len())]
    NotReady { errors: Vec<ValidationError> },

    /// The stored photo reference could not be decoded.
    #[error("photo reference could not be decoded: {0}")]
    Photo(#[from] PhotoError),

    /// The rendering collaborator failed.
    #[error("pdf rendering failed: {0}")]
    Render(#[from] RenderError),
}

/// A finished export: the artifact name and the PDF bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct CvExport {
    pub file_name: String,
    pub pdf: Vec<u8>,
}

/// Artifact name for a résumé PDF: `{firstName}_{lastName}_CV.pdf`.
pub fn artifact_file_name(details: &PersonalDetails) -> String {
    format!("{}_{}_CV.pdf", details.first_name, details.last_name)
}

/// Render the snapshot with its selected template and produce the PDF
/// artifact.
///
/// The readiness gate runs first; when it fails the renderer is never
/// invoked and the blocking findings are returned for the caller to surface.
pub fn export_pdf(
    data: &ResumeData,
    renderer: &dyn TypstRenderer,
) -> Result<CvExport, ExportError> {
    let blocking: Vec<ValidationError> = export_readiness(data)
        .into_iter()
        .filter(|finding| finding.severity == ValidationSeverity::Error)
        .collect();
    if !blocking.is_empty() {
        tracing::info!(missing = blocking.len(), "export blocked by validation");
        return Err(ExportError::NotReady { errors: blocking });
    }

    let template = template_for(data.selected_template);
    let source = template.render(data);

    let mut options = RenderOptions::default();
    if let Some(reference) = &data.personal_details.photo {
        let decoded = photo::decode_data_url(reference)?;
        options = options.with_asset(photo::asset_path(reference), decoded.bytes);
    }

    match renderer.render_pdf(&source, &options) {
        Ok(pdf) => {
            let file_name = artifact_file_name(&data.personal_details);
            tracing::info!(
                template = %data.selected_template,
                bytes = pdf.len(),
                %file_name,
                "exported resume PDF"
            );
            Ok(CvExport { file_name, pdf })
        }
        Err(e) => {
            tracing::error!(error = %e, "resume PDF export failed");
            Err(e.into())
        }
    }
}
