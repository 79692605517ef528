use std::env;

use proptest::prelude::ProptestConfig;

/// Shared proptest config; `PROPTEST_CASES` overrides the case count.
pub fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(64);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}
