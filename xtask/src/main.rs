use std::env;
use std::path::Path;
use std::process::{Command, ExitCode};

fn run(root: &Path, cmd: &str) -> Result<(), String> {
    let status = Command::new("sh")
        .arg("-lc")
        .arg(cmd)
        .current_dir(root)
        .status()
        .map_err(|e| format!("failed to run `{cmd}`: {e}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("command failed: {cmd}"))
    }
}

fn main() -> ExitCode {
    let arg = env::args().nth(1).unwrap_or_else(|| "help".to_string());
    let root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("workspace root");

    let result = match arg.as_str() {
        "fmt-check" => run(root, "cargo fmt --all -- --check"),
        "lint" => run(
            root,
            "cargo clippy --workspace --all-targets -- -D warnings",
        ),
        "test" => run(root, "cargo test --workspace"),
        "openapi" => run(
            root,
            "cargo run -p paddock-api --bin paddock-openapi -- --out artifacts/openapi.json",
        ),
        "ci" => run(root, "cargo fmt --all -- --check")
            .and_then(|()| run(root, "cargo clippy --workspace --all-targets -- -D warnings"))
            .and_then(|()| run(root, "cargo test --workspace")),
        "help" | "--help" | "-h" => {
            eprintln!("xtask commands:");
            eprintln!("  fmt-check");
            eprintln!("  lint");
            eprintln!("  test");
            eprintln!("  openapi");
            eprintln!("  ci");
            Ok(())
        }
        _ => Err(format!(
            "unknown xtask command: {arg} (try `cargo run -p xtask -- help`)"
        )),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
