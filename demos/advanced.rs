use std::collections::HashMap;

use dotenv::dotenv;
use mustget::MustGetExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SomeExampleStruct {
    id: u32,
}

impl SomeExampleStruct {
    fn some_method(&self) {
        log::info!("some_method called on {:?}", self);
    }
}

fn main() {
    dotenv().ok();
    pretty_env_logger::init();

    let key1 = SomeExampleStruct { id: 1 };
    let key2 = SomeExampleStruct { id: 2 };
    let key3 = SomeExampleStruct { id: 3 };

    let mut some_map = HashMap::new();
    some_map.insert(key1, "some value 1");
    some_map.insert(key2, "some value 2");
    some_map.insert(key3, "some value 3");

    if let Some(value) = some_map.must_get(&key2) {
        key2.some_method();
        log::info!("{}", value);
    }
}
