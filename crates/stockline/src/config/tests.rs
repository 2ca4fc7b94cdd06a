use super::load_config;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::test_utils::{env_lock, EnvVarGuard};

fn write_config(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create config dir");
    }
    fs::write(path, contents).expect("write config");
}

#[test]
fn load_config_uses_defaults_when_empty() {
    let _guard = env_lock();
    let home = TempDir::new().expect("temp home");
    let _home = EnvVarGuard::set("HOME", home.path().to_string_lossy().to_string());

    let cwd = TempDir::new().expect("temp cwd");
    let config = load_config(cwd.path());

    assert_eq!(config.keymap.refresh, "ctrl+r");
    assert_eq!(config.keymap.quit, "q");
    assert!(config.profile.path.is_none());
    assert_eq!(config.log.filter, "info");
}

#[test]
fn load_config_merges_user_and_local() {
    let _guard = env_lock();
    let home = TempDir::new().expect("temp home");
    let _home = EnvVarGuard::set("HOME", home.path().to_string_lossy().to_string());

    write_config(
        &home.path().join(".stockline").join("config.toml"),
        r#"
[keymap]
refresh = "f5"
quit = "ctrl+q"

[profile]
path = "/home/me/tickers.toml"

[log]
filter = "debug"
"#,
    );

    let cwd = TempDir::new().expect("temp cwd");
    write_config(
        &cwd.path().join(".stockline").join("config.toml"),
        r#"
[keymap]
quit = "x"

[log]
level = "stockline=trace"
"#,
    );

    let config = load_config(cwd.path());

    assert_eq!(config.keymap.refresh, "f5");
    assert_eq!(config.keymap.quit, "x");
    assert_eq!(
        config.profile.path.as_deref(),
        Some(Path::new("/home/me/tickers.toml"))
    );
    assert_eq!(config.log.filter, "stockline=trace");
}

#[test]
fn load_config_accepts_camel_case_keys() {
    let _guard = env_lock();
    let home = TempDir::new().expect("temp home");
    let _home = EnvVarGuard::set("HOME", home.path().to_string_lossy().to_string());

    let cwd = TempDir::new().expect("temp cwd");
    write_config(
        &cwd.path().join(".stockline").join("config.toml"),
        r#"
[keymap]
refreshQuotes = "ctrl+l"
"#,
    );

    let config = load_config(cwd.path());

    assert_eq!(config.keymap.refresh, "ctrl+l");
}

#[test]
fn load_config_ignores_invalid_files() {
    let _guard = env_lock();
    let home = TempDir::new().expect("temp home");
    let _home = EnvVarGuard::set("HOME", home.path().to_string_lossy().to_string());

    let cwd = TempDir::new().expect("temp cwd");
    write_config(
        &cwd.path().join(".stockline").join("config.toml"),
        "[keymap\nquit = ",
    );

    let config = load_config(cwd.path());

    assert_eq!(config.keymap.quit, "q");
}
