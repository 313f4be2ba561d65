use chrono::Datelike;

fn main() {
    // Exposed to the crate through env! for the footer
    println!("cargo:rustc-env=BUILD_YEAR={}", chrono::Utc::now().year());

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}
