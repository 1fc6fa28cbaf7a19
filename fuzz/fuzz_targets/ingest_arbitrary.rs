#![no_main]
use libfuzzer_sys::fuzz_target;

use argmap::{interpret_bool, tokenize, ArgStore};

fuzz_target!(|data: &[u8]| {
    // Split the input into arguments on NUL, the way argv arrives.
    let text = String::from_utf8_lossy(data);
    let args: Vec<&str> = text.split('\0').collect();

    let store = ArgStore::from_args(&args);
    assert_no_negated_keys(&store);

    // Soft sets with the same keys, negated or not, keep the invariant.
    let mut soft = store.clone();
    for (i, arg) in args.iter().enumerate() {
        let Some(token) = tokenize(arg) else { continue };
        if i % 2 == 0 {
            soft.soft_set_arg(&token.key, token.value_or_empty());
        } else {
            soft.soft_set_bool_arg(arg, interpret_bool(token.value_or_empty()));
        }
    }
    assert_no_negated_keys(&soft);

    for arg in &args {
        let Some(token) = tokenize(arg) else { continue };

        // Accessors never panic, whatever the key.
        let _ = store.get_int_arg(&token.key, 0);
        let _ = store.get_string_arg(&token.key, "");

        // The last explicit value of a positive key always wins.
        if !token.key.starts_with("-no") {
            let last = store
                .get_multi_args(&token.key)
                .last()
                .expect("positive key has history");
            let last = last.as_deref().unwrap_or("");
            assert_eq!(store.get_string_arg(&token.key, "?"), last);
            assert_eq!(
                store.get_bool_arg(&token.key, !interpret_bool(last)),
                interpret_bool(last)
            );
        }
    }
});

fn assert_no_negated_keys(store: &ArgStore) {
    for (key, _) in store.iter() {
        assert!(!key.starts_with("-no"), "negated key {key:?} was stored");
    }
}
