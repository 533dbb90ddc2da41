use anyhow::Context;
use roomkit::{designer_from_config, init_logging, preview_path, write_preview, Config};
use std::path::{Path, PathBuf};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let config_path = Config::default_path().ok();
    let mut config = load_config(config_path.as_deref());

    let mut state = designer_from_config(&config);
    tracing::info!("roomkit {} ready", roomkit::VERSION);

    let Some(design) = std::env::args_os().nth(1).map(PathBuf::from) else {
        tracing::info!("No design given; usage: roomkit <design.json>");
        return Ok(());
    };

    state
        .load_from_file(&design)
        .with_context(|| format!("Could not open {}", design.display()))?;
    write_preview(&state, &config.preview, &preview_path(&design))?;

    config.add_recent_file(design);
    if let Some(path) = &config_path {
        if let Err(err) = config.save_to_file(path) {
            tracing::warn!("Could not update {}: {}", path.display(), err);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    Config::load_or_default(path).unwrap_or_else(|err| {
        tracing::warn!("Ignoring settings in {}: {}", path.display(), err);
        Config::default()
    })
}
