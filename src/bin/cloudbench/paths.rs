use std::path::PathBuf;

pub fn resolve_config_path(config_override: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(path) = config_override {
        return Ok(path);
    }
    let home = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("missing home directory for config paths"))?;
    Ok(home.join(".config").join("cloudbench").join("config.toml"))
}
