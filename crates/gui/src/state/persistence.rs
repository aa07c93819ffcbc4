//! Autosave/load of the current box

use shared::BoxSpec;

/// Autosave file path in the platform data dir
fn autosave_path() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("com", "boxcarve", "boxcarve")
        .map(|dirs| dirs.data_dir().join("autosave_box.json"))
}

/// Save the box to the autosave file
pub fn autosave(spec: &BoxSpec) {
    if let Some(path) = autosave_path() {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(spec) {
            let _ = std::fs::write(&path, json);
        }
    }
}

/// Load the box from the autosave file, rejecting invalid geometry
pub fn load_autosave() -> Option<BoxSpec> {
    let path = autosave_path()?;
    let json = std::fs::read_to_string(&path).ok()?;
    let spec: BoxSpec = serde_json::from_str(&json).ok()?;
    if spec.is_valid() {
        Some(spec)
    } else {
        tracing::warn!("Ignoring autosaved box with sides below the minimum");
        None
    }
}
