#![no_main]

use dotedges_core::{Converter, match_line};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let mut conv = Converter::new();
    for line in text.lines() {
        let matched = match_line(line);
        let fed = conv.feed_line(line).cloned();
        assert_eq!(matched.is_some(), fed.is_some());
        if let (Some(m), Some(edge)) = (matched, fed) {
            assert_eq!(m.label, edge.label);
        }
    }

    let max = conv
        .edges()
        .iter()
        .flat_map(|e| [e.source.get(), e.target.get()])
        .max();
    assert_eq!(max.map_or(0, |m| m + 1), conv.nodes().len());
});
