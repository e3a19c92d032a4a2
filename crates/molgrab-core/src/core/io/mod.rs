//! Provides parsing for the textual atomic-coordinate format.
//!
//! Only the legacy fixed-column format is consumed; the library never writes
//! structure files. Parsing is tolerant of imperfect production files: lines
//! that do not carry the atom-record marker are skipped wholesale, and marker
//! lines with unconvertible numeric fields are rejected individually and
//! reported, never silently defaulted.

pub mod pdb;
