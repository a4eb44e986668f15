//! Embedded word list
//!
//! Answer list compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
