//! Basic optio Example
//!
//! This example walks a value through the sync and async containers and
//! maps a record that holds optional fields.

use optio_core::{AsJson, AsyncOptional, Optional};
use optio_record::{Mapper, MapperConfig, MappingSpec, MissingField};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== optio Basic Example ===\n");

    // 1. Classification
    println!("1. Classifying values...");
    let greeting = Optional::of("hello");
    let nothing: Optional<&str> = Optional::of(None::<&str>);
    println!("   of(\"hello\") present: {}", greeting.is_present());
    println!("   of(None) absent: {}", nothing.is_absent());

    // 2. Sync combinators
    println!("\n2. Sync combinators...");
    let shouted = greeting.map(|s| s.to_uppercase());
    println!("   map(to_uppercase): {:?}", shouted);
    println!("   filter(n > 5) on 5: {:?}", Optional::of(5_i32).filter(|n| *n > 5));
    println!("   or_else on absent: {}", nothing.or_else("fallback"));

    // 3. Crossing into the async container
    println!("\n3. Async bridging...");
    let length = Optional::of("optio")
        .map_async(|s| async move { s.len() })
        .map(|n| n * 2)
        .await;
    println!("   map_async(len).map(*2): {:?}", length);

    let pending = AsyncOptional::from_pending(async { None::<u32> });
    println!("   pending None resolves to: {:?}", pending.await);

    // 4. JSON contract
    println!("\n4. JSON rendering...");
    println!("   present: {}", Optional::of(5_i32).as_json()?);
    println!("   absent:  {}", Optional::<i32>::empty().as_json()?);

    // 5. Declarative mapping
    println!("\n5. Mapping a record...");
    let spec = MappingSpec::new()
        .copy("id")
        .rename("full_name", "name")
        .nested("address", "location", MappingSpec::new().copy("city"));
    let mapper = Mapper::new(MapperConfig {
        missing: MissingField::Skip,
        ..Default::default()
    });
    let record = json!({ "id": 1, "full_name": "Ada", "address": null });
    match mapper.map_value(&spec, &record) {
        Ok(mapped) => println!("   mapped: {}", mapped),
        Err(e) => println!("   mapping failed: {}", e),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
