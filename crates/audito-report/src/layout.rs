//! Page-independent report layout.
//!
//! `ReportLayout::build` turns an audit into an ordered list of text blocks.
//! It is pure: the same audit and the same `generated_at` always yield the
//! same layout. The PDF encoder consumes the layout and decides positions.

use audito_core::entities::Audit;
use audito_core::time::parse_timestamp;
use chrono::{DateTime, Utc};

use crate::format;

/// Title used when the audit has no name.
pub const FALLBACK_TITLE: &str = "Auditoría";
pub const DETAILS_HEADING: &str = "Detalles:";
pub const NOTES_HEADING: &str = "Observaciones:";

/// Typographic role of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Title,
    Body,
    Heading,
    Detail,
    Footer,
}

impl TextStyle {
    /// Font size in points.
    #[must_use]
    pub const fn font_size(self) -> f32 {
        match self {
            Self::Title => 16.0,
            Self::Body | Self::Heading => 12.0,
            Self::Detail => 10.0,
            Self::Footer => 9.0,
        }
    }

    #[must_use]
    pub const fn underlined(self) -> bool {
        matches!(self, Self::Title)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// A paragraph. May wrap; embedded newlines start new lines.
    Text { text: String, style: TextStyle },
    /// Vertical space measured in lines of the preceding text.
    Gap { lines: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    /// Document title, also used as PDF metadata.
    pub title: String,
    pub blocks: Vec<Block>,
}

impl ReportLayout {
    /// Lay out `audit`. `generated_at` stamps the footer and stands in for an
    /// audit timestamp that is missing or unparseable.
    #[must_use]
    pub fn build(audit: &Audit, generated_at: DateTime<Utc>) -> Self {
        let title = if audit.name.trim().is_empty() {
            FALLBACK_TITLE.to_string()
        } else {
            audit.name.clone()
        };

        let mut layout = Self {
            title: title.clone(),
            blocks: Vec::new(),
        };

        layout.text(title, TextStyle::Title);
        layout.gap(1.0);

        layout.text(format!("Norma: {}", audit.standard), TextStyle::Body);
        let auditor = if audit.auditor.trim().is_empty() {
            "-"
        } else {
            audit.auditor.as_str()
        };
        layout.text(format!("Auditor: {auditor}"), TextStyle::Body);
        let performed_at = parse_timestamp(&audit.created_at_audit).unwrap_or(generated_at);
        layout.text(
            format!("Fecha/Hora: {}", format::timestamp(performed_at)),
            TextStyle::Body,
        );
        let score = audit.score.unwrap_or_default();
        layout.text(
            format!(
                "Resultado: {} / {}  ({}%)",
                format::number(score.total_achieved),
                format::number(score.total_possible),
                format::number(score.percent)
            ),
            TextStyle::Body,
        );
        layout.gap(1.0);

        layout.text(DETAILS_HEADING, TextStyle::Heading);
        layout.gap(0.5);
        for item in &audit.checklist {
            let status = if item.passed { "OK" } else { "NO" };
            layout.text(
                format!("- [{status}] ({}) {}", format::number(item.weight), item.text),
                TextStyle::Detail,
            );
        }

        if !audit.notes.is_empty() {
            layout.gap(1.0);
            layout.text(NOTES_HEADING, TextStyle::Heading);
            layout.text(audit.notes.clone(), TextStyle::Detail);
        }

        layout.gap(1.0);
        layout.text(
            format!("Generado: {}", format::timestamp(generated_at)),
            TextStyle::Footer,
        );

        layout
    }

    /// The visible text of every block, in order.
    #[must_use]
    pub fn text_lines(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Text { text, .. } => Some(text.as_str()),
                Block::Gap { .. } => None,
            })
            .collect()
    }

    fn text(&mut self, text: impl Into<String>, style: TextStyle) {
        self.blocks.push(Block::Text {
            text: text.into(),
            style,
        });
    }

    fn gap(&mut self, lines: f32) {
        self.blocks.push(Block::Gap { lines });
    }
}
