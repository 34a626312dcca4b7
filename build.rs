use std::env::var;
use std::path::Path;
use std::process::Command;

fn main() {
  println!("cargo:rerun-if-changed=build.rs");

  let commit_hash = if Path::new("./.git").exists() {
    match Command::new("git").arg("rev-parse").arg("--short").arg("HEAD").output() {
      Ok(output) if output.status.success() => {
        String::from_utf8_lossy(&output.stdout).trim().to_string()
      }
      Ok(output) => {
        println!("cargo::warning=build.rs: git rev-parse failed: {output:#?}");
        String::from("unknown")
      }
      Err(e) => {
        println!("cargo::warning=build.rs: failed to run git: {e}");
        String::from("unknown")
      }
    }
  } else {
    String::from("unknown")
  };

  println!(
    "cargo:rustc-env=VERSION={}({} Profile)-{commit_hash}",
    var("CARGO_PKG_VERSION").unwrap_or_default(),
    var("PROFILE").unwrap_or_default()
  );
}
