#![no_main]

use libfuzzer_sys::fuzz_target;
use paper_finder::client::parse_efetch_xml;

fuzz_target!(|data: &[u8]| {
    // Arbitrary EFetch bodies must parse or fail, never panic
    if let Ok(xml) = std::str::from_utf8(data) {
        let _ = parse_efetch_xml(xml);
    }
});
