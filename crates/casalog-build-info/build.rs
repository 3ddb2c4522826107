use std::process::Command;

fn main() {
    // Capture the short git SHA when building from a checkout; standalone
    // builds (cargo install from a tarball) get "unknown".
    let sha = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=CASALOG_GIT_SHA={sha}");
    println!("cargo:rerun-if-changed=build.rs");
}
