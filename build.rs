// build.rs
use std::{env, fs, path::Path};

/// Adds a link search path for an external library when its feature is on.
fn link_search(feature: &str, dir_var: &str) {
    println!("cargo:rerun-if-env-changed={}", dir_var);
    if env::var_os(format!("CARGO_FEATURE_{}", feature)).is_none() {
        return;
    }
    match env::var(dir_var) {
        Ok(dir) => println!("cargo:rustc-link-search=native={}", dir),
        Err(_) => println!(
            "cargo:warning={} is not set, relying on the default library path",
            dir_var
        ),
    }
}

/// One test per scenario file, each running the file through the harness.
fn generate_scenario_tests() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let destination = Path::new(&out_dir).join("generated_scenario_tests.rs");

    let mut test_code = String::new();
    let scenarios = glob::glob("scenarios/*.json").expect("Failed to read glob pattern");

    for entry in scenarios.filter_map(Result::ok) {
        let path = entry.to_str().unwrap().replace('\\', "/");

        // Catch broken JSON here rather than as a confusing test failure.
        let json = fs::read_to_string(&entry).unwrap();
        if let Err(e) = serde_json::from_str::<serde_json::Value>(&json) {
            panic!("{} is not valid JSON: {}", path, e);
        }

        let name = path
            .trim_start_matches("scenarios/")
            .trim_end_matches(".json")
            .replace(['-', '.', ' '], "_");

        test_code.push_str(&format!(
            "#[test] fn scenario_{}() {{ run_scenario(r#\"{}\"#); }}\n",
            name, path
        ));
        println!("cargo:rerun-if-changed={}", path);
    }

    fs::write(destination, test_code).unwrap();
}

fn main() {
    link_search("GUMAK", "GUMAK_LIB_DIR");
    link_search("HQX", "HQX_LIB_DIR");

    generate_scenario_tests();
    println!("cargo:rerun-if-changed=scenarios");
    println!("cargo:rerun-if-changed=build.rs");
}
