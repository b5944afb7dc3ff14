//! cast-edit: crop and rearrange asciicast terminal recordings
//!
//! Select one or more time ranges from a recording and concatenate them, in
//! the order given, into a new recording whose timestamps are rebased to run
//! contiguously from zero.
//!
//! # Example
//!
//! ```
//! use cast_edit::prelude::*;
//!
//! let recording = Recording::with_events(
//!     v2_header(80, 24),
//!     vec![
//!         Event::output(1.0, "a"),
//!         Event::output(3.0, "b"),
//!         Event::output(6.0, "c"),
//!         Event::output(8.0, "d"),
//!     ],
//! );
//!
//! // Move the 6..8 section in front of the 1..3 section.
//! let ranges = [Range::closed(6.0, 8.0), Range::closed(1.0, 3.0)];
//! validate(&ranges)?;
//! let edited = crop(&recording, &ranges);
//!
//! assert_eq!(edited.timestamps(), vec![0.0, 2.0, 2.0, 4.0]);
//! # Ok::<(), RangeError>(())
//! ```

pub mod asciicast;
pub mod config;
pub mod crop;
pub mod edit;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod range;
pub mod recording;
pub mod validate;

pub use asciicast::{
    WriteOptions, read_recording, read_recording_file, write_recording, write_recording_file,
};
pub use config::{ConfigOverrides, EditConfig, LogFormat, LoggingConfig, OutputConfig};
pub use crop::{CropSummary, SectionSummary, crop, crop_with_summary};
pub use edit::{EditRequest, edit};
pub use error::{ConfigError, EditError, RangeError, RecordingError, Result};
pub use range::{Range, Stop};
pub use recording::{Event, Header, Recording};
pub use validate::{validate, validate_for};
