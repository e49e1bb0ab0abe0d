mod drive;
mod error;
mod history_device;
mod pnp_entity;
mod report;

pub use drive::UsbDrive;
pub use error::UsbHistoryError;
pub use history_device::HistoryDevice;
pub use pnp_entity::PnpEntity;
pub use report::{Field, RecordBlock, Report, Section, SectionBody};
