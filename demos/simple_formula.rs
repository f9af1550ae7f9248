use formulix_rs::{evaluate, evaluate_expression};
use std::collections::HashMap;

fn main() {
    pretty_env_logger::init();

    let bindings = HashMap::from([
        ("x".to_string(), "0.5".to_string()),
        ("y".to_string(), "16".to_string()),
    ]);

    for formula in ["sin^2(x)*2+sqrt(y)", "2x + 1", "log(y, 2)", "(x + 1", ""] {
        println!("{:>22} => {}", formula, evaluate_expression(formula, &bindings));
        if let Err(err) = evaluate(formula, &bindings) {
            println!("{:>22}    ({})", "", err);
        }
    }
}
