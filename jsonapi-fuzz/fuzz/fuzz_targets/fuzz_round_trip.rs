#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    jsonapi_fuzz::fuzz_round_trip(data);
});
