#![no_main]
use libfuzzer_sys::fuzz_target;
use namesplit::{Engine, Normalization};

fuzz_target!(|data: [String; 3]| {
    let [exception, split, name] = data;

    let mut engine = Engine::new();
    engine.namecase_exception(&exception);
    engine.namesplit_exception(&split);
    engine.namecase(&name);
    engine.namesplit(&name);

    engine.normalize(Normalization::Nfkc);
    engine.namecase(&name);
    engine.namesplit(&name);
});
