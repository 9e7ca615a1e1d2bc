//! Embedded word lists
//!
//! Regional word lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/twl_base.rs"));
include!(concat!(env!("OUT_DIR"), "/intl_extra.rs"));
