#![no_main]

use libfuzzer_sys::fuzz_target;
use lockstep::Scenario;

fuzz_target!(|data: &[u8]| {
    // Arbitrary text must be rejected cleanly, never panic
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(scenario) = Scenario::from_json(json) else {
        return;
    };
    let _ = scenario.next_turn();
});
