//! Embedded dictionary
//!
//! Word list compiled into the binary at build time from `data/words.txt`.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));
