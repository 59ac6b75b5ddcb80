#![no_main]
use libfuzzer_sys::fuzz_target;
use namesplit::{nametrim, Engine, Mode};

fuzz_target!(|data: &str| {
    let engine = Engine::new();
    engine.namecase(data);
    engine.namecase_as(data, Mode::Family);
    engine.namecase_as(data, Mode::Given);
    engine.nameparts(data);

    let trimmed = nametrim(data);
    assert_eq!(trimmed, nametrim(&trimmed));
});
