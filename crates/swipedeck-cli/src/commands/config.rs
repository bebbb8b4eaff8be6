use anyhow::{bail, Result};

use swipedeck_core::CarouselConfig;

pub fn run(config: &CarouselConfig, write: bool, force: bool) -> Result<()> {
    let path = CarouselConfig::config_path();

    if !write {
        println!("# {}\n", path.display());
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    if path.exists() && !force {
        bail!(
            "{} already exists.\nPass --force to overwrite it.",
            path.display()
        );
    }

    config.validate()?;
    config.save_to(&path)?;
    println!("Wrote configuration to {}", path.display());

    Ok(())
}
