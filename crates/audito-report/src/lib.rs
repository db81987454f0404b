//! # audito-report
//!
//! Renders an [`Audit`] into a PDF report.
//!
//! Rendering runs in two steps: [`layout::ReportLayout::build`] produces the
//! ordered text blocks (title, metadata, details, notes, footer), and
//! [`pdf::encode`] positions them on pages. Neither step touches the
//! filesystem or the network.
//!
//! ```no_run
//! # fn demo(audit: &audito_core::entities::Audit) -> Result<(), audito_report::RenderError> {
//! let bytes = audito_report::ReportRenderer::new().render(audit)?;
//! assert!(bytes.starts_with(b"%PDF-"));
//! # Ok(())
//! # }
//! ```

pub mod disposition;
pub mod error;
pub mod format;
pub mod layout;
pub mod pdf;

use audito_core::entities::Audit;
use chrono::{DateTime, Utc};

pub use disposition::{attachment_filename, content_disposition};
pub use error::RenderError;
pub use layout::ReportLayout;

/// MIME type of rendered reports.
pub const MIME_TYPE: &str = "application/pdf";

/// Turns audits into PDF bytes. Holds no state between renders.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportRenderer;

impl ReportRenderer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render with the footer stamped at the current time.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` only if the PDF encoder fails internally.
    pub fn render(&self, audit: &Audit) -> Result<Vec<u8>, RenderError> {
        self.render_at(audit, Utc::now())
    }

    /// Render with an explicit generation time.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` only if the PDF encoder fails internally.
    pub fn render_at(
        &self,
        audit: &Audit,
        generated_at: DateTime<Utc>,
    ) -> Result<Vec<u8>, RenderError> {
        let layout = ReportLayout::build(audit, generated_at);
        pdf::encode(&layout)
    }
}
