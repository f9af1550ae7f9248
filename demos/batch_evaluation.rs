use formulix_rs::Engine;
use std::collections::HashMap;

fn main() {
    pretty_env_logger::init();

    let contexts: Vec<HashMap<String, String>> = ["1", "2", "abc", "4"]
        .iter()
        .map(|r| HashMap::from([("r".to_string(), r.to_string())]))
        .collect();

    let formula = "3.14159r^2";

    let mut engine = Engine::default();
    for (i, result) in engine.evaluate_batch(formula, &contexts).iter().enumerate() {
        println!("Result {}: {:?}", i, result);
    }
}
