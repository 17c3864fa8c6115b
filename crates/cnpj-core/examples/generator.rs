use cnpj_core::{AlphanumericIdEngine, NumericIdEngine};

fn main() {
    let numeric = NumericIdEngine::new();
    let main_id = numeric.generate();
    println!("numeric:      {main_id}");

    match numeric.derive_branches(&main_id, 3) {
        Ok(branches) => {
            for branch in branches {
                println!("  branch      {branch}");
            }
        }
        Err(err) => {
            eprintln!("branch derivation failed: {}", err);
            std::process::exit(1);
        }
    }

    let alphanumeric = AlphanumericIdEngine::new();
    println!("alphanumeric: {}", alphanumeric.generate());
}
