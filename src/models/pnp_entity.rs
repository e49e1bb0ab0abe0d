//! This module provides the structure for a supplementary plug-and-play
//! record and the textual marker filter applied to the raw query rows.

/// Represents one plug-and-play entity from the USB-storage device class.
///
/// Produced by the supplementary enrichment pass; carries manufacturer
/// and caption data that the history store does not record. There is no
/// identity join back to history records; the two lists share only
/// vocabulary, not a key.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct PnpEntity {
    /// Display caption; present by construction, since rows without one are
    /// dropped by the marker filter
    caption: String,
    /// Longer device description, when the source reports one
    description: Option<String>,
    /// Manufacturer string, when the source reports one
    manufacturer: Option<String>,
    /// Plug-and-play device id, empty when the source reports none
    device_id: String,
}

impl PnpEntity {
    /// Creates a new `PnpEntity` from raw query fields.
    pub fn new(
        caption: String,
        description: Option<String>,
        manufacturer: Option<String>,
        device_id: String,
    ) -> Self {
        PnpEntity {
            caption,
            description,
            manufacturer,
            device_id,
        }
    }

    /// Returns the display caption.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Returns the device description, if reported.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the manufacturer, if reported.
    pub fn manufacturer(&self) -> Option<&str> {
        self.manufacturer.as_deref()
    }

    /// Returns the plug-and-play device id.
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Marker filter for raw query rows: retain only entities whose
    /// caption is present and either the caption or a present description
    /// contains the literal `"USB"`.
    pub fn matches_usb_marker(caption: Option<&str>, description: Option<&str>) -> bool {
        match caption {
            Some(c) => c.contains("USB") || description.is_some_and(|d| d.contains("USB")),
            None => false,
        }
    }
}
