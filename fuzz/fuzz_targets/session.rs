#![no_main]

use arbitrary::Arbitrary;
use berdiff_decoder::{ParseMode, ParseSession, GATEWAY_FORCED_CHILDREN};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Run {
    gateway: bool,
    reset_first: bool,
    bytes: Vec<u8>,
}

// Fuzz target: a sequence of parses sharing one session.
//
// Checks that the gateway exception fires at most once between resets
// and that standard runs never touch it.
fuzz_target!(|runs: Vec<Run>| {
    let mut session = ParseSession::default();
    for run in runs.iter().take(16) {
        if run.reset_first {
            session.reset();
        }
        let fired_before = session.gateway_exception_fired();
        let mode = if run.gateway {
            ParseMode::Gateway
        } else {
            ParseMode::Standard
        };
        let result = session.parse(&run.bytes, mode);

        if !run.gateway {
            assert_eq!(session.gateway_exception_fired(), fired_before);
        }
        if let Ok(outcome) = result {
            if run.gateway && !fired_before {
                assert!(session.gateway_exception_fired());
                assert_eq!(outcome.root.children().len(), GATEWAY_FORCED_CHILDREN);
            }
        }
    }
});
