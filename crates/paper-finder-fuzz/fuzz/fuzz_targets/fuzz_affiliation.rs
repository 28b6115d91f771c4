#![no_main]

use libfuzzer_sys::fuzz_target;
use paper_finder::AffiliationClassifier;
use paper_finder::classify::extract_email;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let classifier = AffiliationClassifier::default();
    let _ = classifier.classify(&text);
    let _ = classifier.extract_organization(&text);
    let _ = extract_email(&text);
});
