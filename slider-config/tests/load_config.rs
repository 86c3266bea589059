use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use slider_config::{ConfigSource, SliderConfig};
use tempfile::tempdir;

static ENV_LOCK: Mutex<()> = Mutex::new(());

const ENV_KEYS: [&str; 4] = [
    "SLIDER_CONFIG_PATH",
    "SLIDER_CONFIG_JSON",
    "SLIDER_PAGE_SIZE",
    "SLIDER_SETTLE_TIMEOUT_MS",
];

fn clear_env() {
    for key in ENV_KEYS {
        unsafe { std::env::remove_var(key) };
    }
}

/// Switches the working directory, restoring the previous one on drop.
struct CwdGuard {
    previous: PathBuf,
}

impl CwdGuard {
    fn enter(dir: &Path) -> Self {
        let previous = std::env::current_dir().expect("current dir");
        std::env::set_current_dir(dir).expect("enter dir");
        Self { previous }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.previous);
    }
}

#[test]
fn defaults_when_nothing_is_configured() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    let (config, source) = SliderConfig::load_from_env().expect("load");
    assert_eq!(source, ConfigSource::Default);
    assert_eq!(config, SliderConfig::default());
    assert_eq!(config.carousel.page_size, 5);
    assert_eq!(config.carousel.settle_timeout_ms, None);
}

#[test]
fn toml_file_from_env_path() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("slider.toml");
    let contents = "log_filter = \"info\"\n\n\
                    [carousel]\n\
                    page_size = 4\n\
                    settle_timeout_ms = 1500\n";
    fs::write(&path, contents).expect("write config");
    unsafe { std::env::set_var("SLIDER_CONFIG_PATH", &path) };

    let (config, source) = SliderConfig::load_from_env().expect("load");
    clear_env();

    assert_eq!(source, ConfigSource::EnvPath(path));
    assert_eq!(config.carousel.page_size, 4);
    assert_eq!(config.carousel.transition_duration_ms, 800);
    assert_eq!(config.carousel.settle_timeout_ms, Some(1500));
    assert_eq!(config.log_filter, "info");
}

#[test]
fn default_file_in_working_directory() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("slider.toml"),
        "[carousel]\npage_size = 8\n",
    )
    .expect("write config");

    let (config, source) = {
        let _cwd = CwdGuard::enter(dir.path());
        SliderConfig::load_from_env().expect("load")
    };

    assert_eq!(source, ConfigSource::File(PathBuf::from("slider.toml")));
    assert_eq!(config.carousel.page_size, 8);
    assert_eq!(config.carousel.transition_duration_ms, 800);
    assert_eq!(config.carousel.settle_timeout_ms, None);
}

#[test]
fn default_file_under_config_directory() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    let dir = tempdir().expect("tempdir");
    fs::create_dir(dir.path().join("config")).expect("mkdir");
    fs::write(
        dir.path().join("config/slider.toml"),
        "log_filter = \"debug\"\n[carousel]\nsettle_timeout_ms = 900\n",
    )
    .expect("write config");

    let (config, source) = {
        let _cwd = CwdGuard::enter(dir.path());
        SliderConfig::load_from_env().expect("load")
    };

    assert_eq!(
        source,
        ConfigSource::File(PathBuf::from("config/slider.toml"))
    );
    assert_eq!(config.log_filter, "debug");
    assert_eq!(config.carousel.page_size, 5);
    assert_eq!(config.carousel.settle_timeout_ms, Some(900));
}

#[test]
fn inline_json_with_env_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    unsafe {
        std::env::set_var(
            "SLIDER_CONFIG_JSON",
            r#"{"carousel": {"page_size": 3, "settle_timeout_ms": 5000}}"#,
        );
        std::env::set_var("SLIDER_PAGE_SIZE", "7");
        std::env::set_var("SLIDER_SETTLE_TIMEOUT_MS", "off");
    }

    let (config, source) = SliderConfig::load_from_env().expect("load");
    clear_env();

    assert_eq!(source, ConfigSource::EnvInline);
    assert_eq!(config.carousel.page_size, 7);
    assert_eq!(config.carousel.settle_timeout_ms, None);
}

#[test]
fn invalid_values_are_rejected() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    unsafe { std::env::set_var("SLIDER_PAGE_SIZE", "0") };
    let err = SliderConfig::load_from_env().unwrap_err();
    assert!(err.to_string().contains("page_size"), "{err:#}");

    unsafe { std::env::set_var("SLIDER_PAGE_SIZE", "five") };
    let err = SliderConfig::load_from_env().unwrap_err();
    assert!(err.to_string().contains("SLIDER_PAGE_SIZE"), "{err:#}");

    clear_env();
    unsafe { std::env::set_var("SLIDER_SETTLE_TIMEOUT_MS", "200") };
    let err = SliderConfig::load_from_env().unwrap_err();
    assert!(err.to_string().contains("shorter"), "{err:#}");
    clear_env();
}

#[test]
fn extensionless_file_falls_back_to_json() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("slider.conf");
    fs::write(&path, r#"{"log_filter": "debug"}"#).expect("write config");

    let config = SliderConfig::load_from_file(&path).expect("parse");
    assert_eq!(config.log_filter, "debug");
    assert_eq!(config.carousel.page_size, 5);

    fs::write(&path, "this is neither format").expect("write config");
    let err = SliderConfig::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("toml error"), "{err:#}");
}

#[test]
fn missing_file_reports_the_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");
    let err = SliderConfig::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("absent.toml"), "{err:#}");
}
