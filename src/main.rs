use std::env;
use std::fs;
use std::sync::Arc;
use tessera::prelude::*;

/// A simple CLI to publish a theme's master stylesheet from a theme JSON
/// file. Useful for smoke-testing a theme outside the CMS.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Publish a theme's master stylesheet from a theme JSON file.");
        eprintln!();
        eprintln!(
            "Usage: {} <path/to/theme.json> <output-dir> [tenant-id]",
            args[0]
        );
        eprintln!();
        eprintln!("The theme file holds {{\"id\", \"name\", \"tokens\"}}; omit the");
        eprintln!("tenant id to publish the shared/central stylesheet.");
        std::process::exit(1);
    }

    let theme_path = &args[1];
    let output_dir = &args[2];
    let scope = match args.get(3) {
        Some(tenant) => Scope::tenant(tenant.as_str()),
        None => Scope::Central,
    };

    println!("Loading theme from {}", theme_path);
    let theme_json = fs::read_to_string(theme_path)?;
    let theme: Theme = serde_json::from_str(&theme_json)?;
    let theme_id = theme.id.clone();

    let engine = ThemeEngine::new(Arc::new(FilesystemBlobStore::new(output_dir)));
    engine.create_theme(theme)?;
    engine.activate(&theme_id, &scope)?;

    let published = engine.publish(&theme_id, &scope)?;
    println!(
        "Published {} (version {}) under {}",
        published.css_url(),
        published.version,
        output_dir
    );
    Ok(())
}
