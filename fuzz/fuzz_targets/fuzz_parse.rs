#![no_main]

use libfuzzer_sys::fuzz_target;
use pd_core::PathData;
use pd_parser::{ParseConfig, parse_with_config};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    for config in [ParseConfig::strict(), ParseConfig::lenient()] {
        let Ok(path) = parse_with_config(input, &config) else {
            continue;
        };

        // Canonical output must reparse to the same commands.
        let canonical = path.to_string();
        let reparsed = parse_with_config(&canonical, &ParseConfig::strict())
            .expect("canonical output reparses");
        assert_eq!(reparsed.len(), path.len());
        assert_eq!(reparsed.to_string(), canonical);

        let json = serde_json::to_string(&path).expect("serialize path data");
        let decoded: PathData = serde_json::from_str(&json).expect("deserialize path data");
        assert_eq!(decoded.len(), path.len());
    }
});
