//! Build script for the daloy-leptos frontend crate.
//!
//! Exports `GIT_VERSION` (`git describe` output, or the package version in a
//! source tarball). The sidebar header prints it as `v{GIT_VERSION}` beside
//! the brand name and the startup log line carries it, so a deployed bundle
//! can be matched to its commit from the UI or the browser console.

use std::process::Command;

fn main() {
    // git describe, falling back to the package version outside a checkout
    let version = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_owned());

    println!("cargo:rustc-env=GIT_VERSION={version}");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/tags");
}
