//! Assembly of component outcomes into the structured report.
//!
//! Each builder takes one pass's `Result` and turns it into a complete
//! [`Section`]: numbered record blocks on success, the section's
//! empty-state notice when nothing was found, or a single failure line.
//! The builders are pure so the presentation contract is testable
//! without touching WMI or the registry; [`scan`] wires them to the
//! live Windows sources.

#[cfg(windows)]
use crate::models::Report;
use crate::models::{
    Field, HistoryDevice, PnpEntity, RecordBlock, Section, UsbDrive, UsbHistoryError,
};
use crate::size_format::format_size;

pub const CONNECTED_TITLE: &str = "CURRENTLY CONNECTED USB DEVICES";
pub const HISTORY_TITLE: &str = "USB DEVICE HISTORY (Including Disconnected)";
pub const SUPPLEMENTARY_TITLE: &str = "ADDITIONAL USB DEVICE INFORMATION";

pub const NO_CONNECTED_DEVICES: &str = "No USB storage devices currently connected.";
pub const NO_HISTORY_RECORDS: &str = "No USB device history found in registry.";
pub const STORE_UNAVAILABLE: &str = "Could not access USB registry information.";
pub const NO_SUPPLEMENTARY_INFO: &str = "No additional USB information found.";

fn drive_block(index: usize, drive: &UsbDrive) -> RecordBlock {
    RecordBlock {
        index,
        fields: vec![
            Field::new("Model", drive.model()),
            Field::new("Serial", drive.serial_number()),
            Field::new("Size", format_size(drive.size_bytes())),
        ],
    }
}

fn history_block(index: usize, device: &HistoryDevice) -> RecordBlock {
    let mut fields = vec![
        Field::new("Name", device.friendly_name()),
        Field::new("ID", device.instance_id()),
        Field::new("Type", device.device_class().replace('&', " ")),
    ];
    if let Some(last_connected) = device.last_connected() {
        fields.push(Field::new("Last Connected", last_connected));
    }
    RecordBlock { index, fields }
}

fn pnp_block(index: usize, entity: &PnpEntity) -> RecordBlock {
    let mut fields = vec![Field::new("Name", entity.caption())];
    match entity.manufacturer() {
        Some(manufacturer) if !manufacturer.is_empty() => {
            fields.push(Field::new("Manufacturer", manufacturer));
        }
        _ => {}
    }
    fields.push(Field::new("Device ID", entity.device_id()));
    RecordBlock { index, fields }
}

fn number<'a, T: 'a>(
    items: impl IntoIterator<Item = &'a T>,
    block: impl Fn(usize, &T) -> RecordBlock,
) -> Vec<RecordBlock> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| block(i + 1, item))
        .collect()
}

/// Builds the currently-connected section from the live enumeration
/// outcome.
pub fn build_connected_section(drives: Result<Vec<UsbDrive>, UsbHistoryError>) -> Section {
    match drives {
        Ok(drives) => Section::from_records(
            CONNECTED_TITLE,
            number(&drives, drive_block),
            NO_CONNECTED_DEVICES,
        ),
        Err(error) => Section::failed(
            CONNECTED_TITLE,
            format!("Error detecting connected devices: {error}"),
        ),
    }
}

/// Builds the history section from the tree-walk outcome. A missing
/// store root is a handled condition with its own user-facing line, not
/// a generic error.
pub fn build_history_section(devices: Result<Vec<HistoryDevice>, UsbHistoryError>) -> Section {
    match devices {
        Ok(devices) => Section::from_records(
            HISTORY_TITLE,
            number(&devices, history_block),
            NO_HISTORY_RECORDS,
        ),
        Err(UsbHistoryError::StoreNotFound) => Section::failed(HISTORY_TITLE, STORE_UNAVAILABLE),
        Err(error) => Section::failed(
            HISTORY_TITLE,
            format!("Error retrieving USB history: {error}"),
        ),
    }
}

/// Builds the supplementary section from the plug-and-play matcher
/// outcome.
pub fn build_supplementary_section(
    entities: Result<Vec<PnpEntity>, UsbHistoryError>,
) -> Section {
    match entities {
        Ok(entities) => Section::from_records(
            SUPPLEMENTARY_TITLE,
            number(&entities, pnp_block),
            NO_SUPPLEMENTARY_INFO,
        ),
        Err(error) => Section::failed(
            SUPPLEMENTARY_TITLE,
            format!("Error retrieving additional USB info: {error}"),
        ),
    }
}

/// Runs the three inventory passes against the live host and assembles
/// the full report. Each pass fails or succeeds on its own; the report
/// always carries all three sections in fixed order.
#[cfg(windows)]
pub fn scan() -> Report {
    Report {
        sections: vec![
            build_connected_section(crate::windows_devices::enumerate_usb_drives()),
            build_history_section(crate::windows_registry::walk_history()),
            build_supplementary_section(crate::windows_devices::match_supplementary()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SectionBody;

    fn sample_drive() -> UsbDrive {
        UsbDrive::new(
            "SanDisk Cruzer Glide USB Device".to_string(),
            "4C530001230731118015".to_string(),
            15_376_000_000,
        )
    }

    #[test]
    fn test_connected_section_with_drives() {
        let section = build_connected_section(Ok(vec![sample_drive()]));
        assert_eq!(section.title, CONNECTED_TITLE);

        let records = section.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].index, 1);
        assert_eq!(records[0].fields[0], Field::new("Model", "SanDisk Cruzer Glide USB Device"));
        assert_eq!(records[0].fields[2], Field::new("Size", "14.32 GB"));
    }

    #[test]
    fn test_connected_section_empty_emits_single_notice() {
        let section = build_connected_section(Ok(vec![]));
        assert_eq!(
            section.body,
            SectionBody::Empty {
                notice: NO_CONNECTED_DEVICES.to_string()
            }
        );
        assert!(section.records().is_empty());
    }

    #[test]
    fn test_connected_section_failure_line() {
        let section = build_connected_section(Err(UsbHistoryError::SourceUnavailable(
            "COM init failed".to_string(),
        )));
        match section.body {
            SectionBody::Failed { reason } => {
                assert_eq!(
                    reason,
                    "Error detecting connected devices: management interface unavailable: COM init failed"
                );
            }
            other => panic!("expected failed section, got {other:?}"),
        }
    }

    #[test]
    fn test_history_section_blocks_and_numbering() {
        let devices = vec![
            HistoryDevice::new(
                "4C530001230731118015&0".to_string(),
                "Disk&Ven_SanDisk&Prod_Cruzer_Glide&Rev_1.00".to_string(),
                "SanDisk Cruzer".to_string(),
                Some("2024-03-17 09:41:02".to_string()),
            ),
            HistoryDevice::new(
                "07AB1C6119230455&0".to_string(),
                "Disk&Ven_Kingston&Prod_DataTraveler".to_string(),
                "Unknown Device".to_string(),
                None,
            ),
        ];

        let section = build_history_section(Ok(devices));
        let records = section.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].index, 1);
        assert_eq!(records[1].index, 2);

        // Class key is displayed with '&' separators replaced.
        assert_eq!(
            records[0].fields[2],
            Field::new("Type", "Disk Ven_SanDisk Prod_Cruzer_Glide Rev_1.00")
        );
        // Unresolved timestamps are omitted, not blank.
        assert_eq!(records[0].fields.len(), 4);
        assert_eq!(records[1].fields.len(), 3);
        assert!(records[1].fields.iter().all(|f| f.label != "Last Connected"));
    }

    #[test]
    fn test_history_section_store_not_found_line() {
        let section = build_history_section(Err(UsbHistoryError::StoreNotFound));
        assert_eq!(
            section.body,
            SectionBody::Failed {
                reason: STORE_UNAVAILABLE.to_string()
            }
        );
    }

    #[test]
    fn test_history_empty_store_notice() {
        let section = build_history_section(Ok(vec![]));
        assert_eq!(
            section.body,
            SectionBody::Empty {
                notice: NO_HISTORY_RECORDS.to_string()
            }
        );
    }

    #[test]
    fn test_supplementary_section_omits_absent_manufacturer() {
        let entities = vec![
            PnpEntity::new(
                "USB Mass Storage Device".to_string(),
                Some("USB Mass Storage Device".to_string()),
                Some("Compatible USB storage device".to_string()),
                "USB\\VID_0781&PID_5575\\4C530001230731118015".to_string(),
            ),
            PnpEntity::new(
                "USB Attached SCSI (UAS) Mass Storage Device".to_string(),
                None,
                Some(String::new()),
                "USB\\VID_174C&PID_55AA\\MSFT30DD56419883939".to_string(),
            ),
        ];

        let section = build_supplementary_section(Ok(entities));
        let records = section.records();
        assert_eq!(records[0].fields.len(), 3);
        assert_eq!(records[1].fields.len(), 2);
        assert_eq!(records[1].fields[1].label, "Device ID");
    }

    #[test]
    fn test_supplementary_runs_independently_of_history_failure() {
        // One section failing never suppresses a sibling: the builders
        // share no state, so a failed history outcome coexists with a
        // populated supplementary outcome in the same report.
        let history = build_history_section(Err(UsbHistoryError::StoreNotFound));
        let supplementary = build_supplementary_section(Ok(vec![PnpEntity::new(
            "USB Mass Storage Device".to_string(),
            None,
            None,
            "USB\\VID_0781&PID_5575".to_string(),
        )]));

        assert!(matches!(history.body, SectionBody::Failed { .. }));
        assert_eq!(supplementary.records().len(), 1);
    }

    #[test]
    fn test_supplementary_empty_notice() {
        let section = build_supplementary_section(Ok(vec![]));
        assert_eq!(
            section.body,
            SectionBody::Empty {
                notice: NO_SUPPLEMENTARY_INFO.to_string()
            }
        );
    }
}
