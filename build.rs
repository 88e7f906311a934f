use std::env;
use std::fs;
use std::path::Path;

/// Forwards `SWAPI_*` entries from a local `.env` file as compile-time
/// environment variables so `AppConfig::from_env` can pick them up with
/// `option_env!`. Variables already set in the build environment win.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if key.starts_with("SWAPI_") && env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
