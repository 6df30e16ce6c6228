// Build script for folioctl - embeds version at compile time

fn main() {
    // Release pipelines may set FOLIO_VERSION; otherwise use Cargo.toml
    let version =
        std::env::var("FOLIO_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=FOLIO_VERSION={}", version);

    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed=FOLIO_VERSION");
}
