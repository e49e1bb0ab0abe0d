//! This module provides the structured report consumed by the
//! presentation layer.
//!
//! The inventory core never prints: its whole output contract is a
//! `Report` of three sections, each either a list of numbered record
//! blocks, an empty-state notice, or a single failure line. Rendering
//! (colors, prefixes, animation) belongs entirely to the consumer.

/// A single labeled display field inside a record block.
///
/// Optional source fields that resolved to nothing are never emitted as
/// blank fields; they are simply absent from the block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Field {
    /// Display label, e.g. `"Model"` or `"Last Connected"`
    pub label: &'static str,
    /// Resolved display value
    pub value: String,
}

impl Field {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Field {
            label,
            value: value.into(),
        }
    }
}

/// One numbered record in a section.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct RecordBlock {
    /// 1-based position within the section
    pub index: usize,
    /// Ordered labeled fields
    pub fields: Vec<Field>,
}

/// Outcome of one inventory pass.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum SectionBody {
    /// The pass succeeded and found at least one record.
    Records(Vec<RecordBlock>),
    /// The pass succeeded but found nothing; `notice` is the single
    /// user-facing indicator line shown instead of record blocks.
    Empty { notice: String },
    /// The pass failed as a whole; `reason` is the single explanatory
    /// line for the section. Sibling sections are unaffected.
    Failed { reason: String },
}

/// One logical report section (connected, history, or supplementary).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Section {
    /// Section heading
    pub title: &'static str,
    pub body: SectionBody,
}

impl Section {
    /// Builds a section from collected records, substituting the
    /// empty-state notice when there are none.
    pub fn from_records(
        title: &'static str,
        records: Vec<RecordBlock>,
        empty_notice: &str,
    ) -> Self {
        let body = if records.is_empty() {
            SectionBody::Empty {
                notice: empty_notice.to_string(),
            }
        } else {
            SectionBody::Records(records)
        };
        Section { title, body }
    }

    /// Builds a failed section carrying one explanatory line.
    pub fn failed(title: &'static str, reason: impl Into<String>) -> Self {
        Section {
            title,
            body: SectionBody::Failed {
                reason: reason.into(),
            },
        }
    }

    /// Returns the record blocks, empty when the section has none.
    pub fn records(&self) -> &[RecordBlock] {
        match &self.body {
            SectionBody::Records(records) => records,
            _ => &[],
        }
    }
}

/// The complete inventory report: one section per pass, in run order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Report {
    pub sections: Vec<Section>,
}
