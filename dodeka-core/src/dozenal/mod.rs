//! Dozenal (base-12) numeral codec and display lookup tables

pub mod numeral;
pub mod tables;

pub use numeral::{parse_dozenal, to_dozenal, Digit, Numeral, ParseError, MAX_NUMERAL_LEN};
pub use tables::{DozenalTables, GROUP_COUNT, PAIR_COUNT, ROLLOVER_INDEX};
