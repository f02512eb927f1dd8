#![no_main]

use dotedges_core::EdgeList;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, only return errors.
    let Ok(list) = EdgeList::read_from(data) else {
        return;
    };

    let mut buf = Vec::new();
    list.write_to(&mut buf).expect("write to vec");
    let reloaded = EdgeList::read_from(buf.as_slice()).expect("written list reloads");
    assert_eq!(reloaded, list);
});
