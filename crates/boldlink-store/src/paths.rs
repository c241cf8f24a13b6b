use std::path::PathBuf;

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. BOLDLINK_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.boldlink (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> PathBuf {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return expand_tilde(path);
    }

    // Priority 2: BOLDLINK_PATH environment variable
    if let Ok(env_path) = std::env::var("BOLDLINK_PATH") {
        return expand_tilde(&env_path);
    }

    // Priority 3: XDG data directory (recommended default)
    if let Some(data_dir) = dirs::data_dir() {
        return data_dir.join("boldlink");
    }

    // Priority 4: Fallback to ~/.boldlink (last resort for systems without XDG)
    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home).join(".boldlink");
    }

    PathBuf::from(".boldlink")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let dir = resolve_data_dir(Some("/tmp/boldlink-test"));
        assert_eq!(dir, PathBuf::from("/tmp/boldlink-test"));
    }

    #[test]
    fn test_tilde_expansion() {
        if let Some(home) = std::env::var_os("HOME") {
            let dir = resolve_data_dir(Some("~/links"));
            assert_eq!(dir, PathBuf::from(home).join("links"));
        }
    }
}
