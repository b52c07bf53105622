use crate::config::DEFAULT_CONFIG_FILE;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Vendormap Configuration

[thresholds]
# Vendors at or above this lock-in score are flagged (0-100)
high_lock_in = 70.0
# Vendors at or below this exit-readiness score are flagged (0-100)
low_readiness = 40.0

[output]
default_format = "terminal"
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {DEFAULT_CONFIG_FILE} configuration file");

    Ok(())
}
