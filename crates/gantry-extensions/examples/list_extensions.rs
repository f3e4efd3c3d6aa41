use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let extension_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "extensions".to_string());

    let discovered = gantry_extensions::discover_extensions(&extension_dir)?;
    if discovered.is_empty() {
        println!("No extensions under {extension_dir}");
        return Ok(());
    }

    println!("Discovered extensions:");
    for ext in discovered {
        println!(
            "  - {} (entry `{}`, {} artifact(s))",
            ext.manifest.id,
            ext.manifest.entry_symbol(),
            ext.artifact_paths.len()
        );
    }

    Ok(())
}
