use formulix_rs::{free_variables, Engine};
use std::collections::HashMap;
use std::io::{self, BufRead, Write};

fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut engine = Engine::default();

    print!("formula: ");
    io::stdout().flush()?;
    let Some(formula) = lines.next().transpose()? else {
        return Ok(());
    };

    let names = match free_variables(&formula) {
        Ok(names) => names,
        Err(err) => {
            println!("{}", err);
            return Ok(());
        }
    };

    let mut bindings = HashMap::new();
    for name in names {
        print!("{}: ", name);
        io::stdout().flush()?;
        let value = lines.next().transpose()?.unwrap_or_default();
        bindings.insert(name, value);
    }

    println!("Result: {}", engine.evaluate_expression(&formula, &bindings));
    Ok(())
}
