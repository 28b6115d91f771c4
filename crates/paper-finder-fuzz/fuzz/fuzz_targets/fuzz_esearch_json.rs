#![no_main]

use libfuzzer_sys::fuzz_target;
use paper_finder::models::SearchResponse;

fuzz_target!(|data: &[u8]| {
    if let Ok(response) = serde_json::from_slice::<SearchResponse>(data) {
        let _ = response.error_message();
        let _ = response.total();
    }
});
