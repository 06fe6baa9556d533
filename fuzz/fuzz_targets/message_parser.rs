//! Fuzz target for IRC line parsing
//!
//! Feeds arbitrary input to the parser and checks that it never panics and
//! that the owned and borrowed parsers agree.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    // Only fuzz valid UTF-8 strings to focus on protocol-level issues
    if let Ok(input) = str::from_utf8(data) {
        let owned = input.parse::<ircline::Message>();
        let borrowed = ircline::MessageRef::parse(input);

        match (owned, borrowed) {
            (Ok(owned), Ok(borrowed)) => assert_eq!(owned, borrowed.to_owned_message()),
            (Err(a), Err(b)) => assert_eq!(a, b),
            _ => panic!("owned and borrowed parsers disagree on {:?}", input),
        }
    }
});
