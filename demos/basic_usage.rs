// Basic usage example for setreg
//
// Run with: cargo run --example basic_usage

use serde_json::json;
use setreg::{ProviderRegistry, RegistryBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("📦 setreg Basic Usage Example\n");

    let mut registry = ProviderRegistry::new();

    // Declare settings inline, in the loose authoring shape: domains and
    // tags as bare strings, data as a plain literal.
    let resolved = RegistryBuilder::new()
        .declare(json!({
            "name": "enable_feature_x",
            "description": "Gates the new checkout flow",
            "domain": "features",
            "tags": ["experimental"],
            "type": "bool",
            "data": true,
        }))
        .declare(json!({
            "name": "support_email",
            "domain": "support",
            "type": "string",
            "data": "help@example.com",
        }))
        // Optional per-environment overrides; skipped when the file is absent
        .source("./example_config/settings.override.json")
        .log_summary(true)
        .log_target("settings")
        .build_into(&mut registry)?;

    println!("✅ Registered {} provider(s)", registry.len());
    println!("   Resolved source files: {resolved:?}\n");

    // Route lookups through the registry
    let feature = registry.resolve("features", "enable_feature_x").unwrap();
    println!("🔎 features/enable_feature_x:");
    println!("{}\n", serde_json::to_string_pretty(feature)?);

    let email = registry.resolve("support", "support_email").unwrap();
    println!("🔎 support/support_email = {}", email.data.value);

    Ok(())
}
