//! gedtone data model
//!
//! This crate holds everything about a sonification request that is not audio:
//! the fixed month tables, month extraction from genealogy files, and the
//! synthesis parameters with their validation.
//!
//! # Example
//!
//! ```
//! use gedtone_spec::{extract_months, Month, SynthesisParams};
//!
//! let months = extract_months("1 BIRT\n2 DATE 14 JAN 1900\n2 DATE 3 MAY 1920\n");
//! assert_eq!(months.as_slice(), &[Month::Jan, Month::May]);
//!
//! let counts = months.counts();
//! assert_eq!(counts.get(Month::Jan), 1);
//! assert_eq!(counts.total(), 2);
//!
//! let params = SynthesisParams::new(0.2, 0.8);
//! assert!(params.validate().is_ok());
//! ```
//!
//! # Modules
//!
//! - [`month`]: Month enum and the month to pitch table
//! - [`sequence`]: Extracted month sequences and histograms
//! - [`extract`]: Date line scanning
//! - [`params`]: Synthesis parameters and play policy
//! - [`validation`]: Parameter validation
//! - [`error`]: Error and warning types

pub mod error;
pub mod extract;
pub mod month;
pub mod params;
pub mod sequence;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{
    ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use extract::{
    extract_months, extract_months_from_bytes, extract_with_stats, ExtractStats, DATE_MARKER,
};
pub use month::{Month, MonthInfo};
pub use params::{PlayPolicy, SynthesisParams, FADE_SECONDS};
pub use sequence::{MonthCounts, MonthSequence};
pub use validation::validate_params;
