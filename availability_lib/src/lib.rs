//! Day-granularity date ranges used to manage the availability windows of
//! rentable items.
//!
//! A [`DateRange`] is an inclusive span of days.  Given the availability
//! of an item and a reservation, the library answers:
//!
//! ```text
//!        [-------- split --------]
//!             [- withdraw -]
//!
//!        [---]              [----]   subtract_range: two fragments
//! ```
//!
//!  |Operation                   |Result
//!  |----------------------------|-----------------------------------------
//!  |[`ranges_overlap`]          |whether two ranges share at least one day
//!  |[`find_overlapping_range`]  |position of the first overlapping range
//!  |[`compare_range_durations`] |ordering of the two ranges' lengths
//!  |[`subtract_range`]          |what remains of a range once another is removed
//!
//! None of these functions panic or return errors: invalid input (missing
//! or malformed dates, reversed withdrawals,...) always produces the
//! "no result" shape of each operation.

pub mod bookings;
pub mod date_ranges;
pub mod durations;
pub mod errors;
pub mod overlaps;
pub mod settings;
pub mod subtraction;

pub use crate::date_ranges::{DateRange, DAY, DAY_MS};
pub use crate::durations::compare_range_durations;
pub use crate::errors::Error;
pub use crate::overlaps::{find_overlapping_range, ranges_overlap};
pub use crate::settings::{FlushOverhangPolicy, Settings, SupersetPolicy};
pub use crate::subtraction::{subtract_range, subtract_range_with, Remainder};
