use std::collections::HashMap;
use std::path::PathBuf;

use super::*;

fn lookup_from<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, std::env::VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(std::env::VarError::NotPresent)
    }
}

fn minimal_env() -> HashMap<&'static str, &'static str> {
    HashMap::from([("CROSSCHECK_REGION_PATH", "./13.08_Pasaman.geojson")])
}

#[test]
fn minimal_env_uses_defaults() {
    let env = minimal_env();
    let config = build_app_config(lookup_from(&env)).expect("config should build");
    assert_eq!(config.region_path, PathBuf::from("./13.08_Pasaman.geojson"));
    assert_eq!(config.region_phrase, "Kabupaten Pasaman");
    assert_eq!(config.log_level, "info");
    assert_eq!(config.max_list_candidates, 5);
    assert_eq!(config.redirect_poll_attempts, 10);
    assert_eq!(config.redirect_poll_interval_secs, 1);
}

#[test]
fn missing_region_path_is_an_error() {
    let env = HashMap::new();
    let err = build_app_config(lookup_from(&env)).unwrap_err();
    assert!(
        matches!(err, ConfigError::MissingEnvVar(var) if var == "CROSSCHECK_REGION_PATH")
    );
}

#[test]
fn overrides_are_honored() {
    let mut env = minimal_env();
    env.insert("CROSSCHECK_REGION_PHRASE", "Kota Padang");
    env.insert("CROSSCHECK_MAX_LIST_CANDIDATES", "8");
    env.insert("CROSSCHECK_REDIRECT_POLL_ATTEMPTS", "3");
    let config = build_app_config(lookup_from(&env)).expect("config should build");
    assert_eq!(config.region_phrase, "Kota Padang");
    assert_eq!(config.max_list_candidates, 8);
    assert_eq!(config.redirect_poll_attempts, 3);
}

#[test]
fn non_numeric_poll_attempts_is_an_invalid_var_error() {
    let mut env = minimal_env();
    env.insert("CROSSCHECK_REDIRECT_POLL_ATTEMPTS", "soon");
    let err = build_app_config(lookup_from(&env)).unwrap_err();
    assert!(
        matches!(err, ConfigError::InvalidEnvVar { var, .. } if var == "CROSSCHECK_REDIRECT_POLL_ATTEMPTS")
    );
}
