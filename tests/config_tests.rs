use config::{File, FileFormat};
use notjs::config::Config;

fn from_toml(settings: &str) -> Config {
    Config::from_source(File::from_str(settings, FileFormat::Toml))
}

#[test]
fn defaults_apply_when_nothing_is_set() {
    assert_eq!(from_toml(""), Config::default());
    assert_eq!(Config::default().max_call_depth, 256);
}

#[test]
fn source_overrides_call_depth() {
    assert_eq!(from_toml("max_call_depth = 64").max_call_depth, 64);
}

#[test]
fn invalid_values_fall_back_to_defaults() {
    assert_eq!(from_toml("max_call_depth = 'deep'"), Config::default());
}

#[test]
fn unrelated_settings_are_ignored() {
    assert_eq!(
        from_toml("max_call_depth = 10\ncolor = true").max_call_depth,
        10
    );
}
