// Eager vs lazy strategy example for setreg
//
// Run with: cargo run --example lazy_lookup

use setreg::{ProviderPayload, RegistryBuilder};
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("📦 setreg Strategy Example\n");

    // A settings file in the same loose shape as inline declarations
    let dir = tempfile_dir()?;
    let path = dir.join("settings.yaml");
    fs::write(
        &path,
        r#"
settings:
  - name: enable_feature_x
    domain: features
    type: bool
    data: true
  - name: max_retries
    domain: features
    type: int
    data: 3
"#,
    )?;

    // Lazy (the default): declarations are indexed by domain and name
    // and denormalized only on first read.
    let lazy = RegistryBuilder::new().source(&path).build()?;
    println!("⏱  Lazy registration: {} declaration(s)", lazy.registration.len());
    if let ProviderPayload::Lazy(index) = lazy.registration.payload() {
        println!("   Indexed domains: {}", index.domain_count());
    }
    let decl = lazy.registration.get("features", "max_retries").unwrap();
    println!("   features/max_retries = {}\n", decl.data.value);

    // Eager: the full declaration list is kept verbatim for immediate
    // denormalization at build time.
    let eager = RegistryBuilder::new()
        .source(&path)
        .eager()
        .priority(5)
        .build()?;
    if let ProviderPayload::Eager(list) = eager.registration.payload() {
        println!("🚀 Eager registration, in aggregation order:");
        for decl in list {
            println!("   {}/{} = {}", decl.domain.name, decl.name, decl.data.value);
        }
    }

    fs::remove_dir_all(&dir)?;
    Ok(())
}

fn tempfile_dir() -> std::io::Result<std::path::PathBuf> {
    let dir = std::env::temp_dir().join("setreg-lazy-lookup");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

// Example output:
//
// ⏱  Lazy registration: 2 declaration(s)
//    Indexed domains: 1
//    features/max_retries = 3
//
// 🚀 Eager registration, in aggregation order:
//    features/enable_feature_x = true
//    features/max_retries = 3
