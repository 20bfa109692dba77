use std::collections::HashMap;

use dotenv::dotenv;
use mustget::must_get;
use serde_json::Value;

fn main() {
    dotenv().ok();
    pretty_env_logger::init();

    let mut some_map: HashMap<String, Value> = HashMap::new();
    some_map.insert("key".to_string(), Value::from("some value"));

    if let Some(value) = must_get(&some_map, "key").and_then(Value::as_str) {
        log::info!("{}", value);
    }
}
