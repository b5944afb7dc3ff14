//! Convenient re-exports for common cast-edit usage.

pub use crate::asciicast::{
    WriteOptions, read_recording, read_recording_file, write_recording, write_recording_file,
};
pub use crate::crop::{CropSummary, crop, crop_with_summary};
pub use crate::edit::{EditRequest, edit};
pub use crate::error::{EditError, RangeError, RecordingError, Result};
pub use crate::range::{Range, Stop};
pub use crate::recording::{Event, Header, Recording, v2_header};
pub use crate::validate::{validate, validate_for};
