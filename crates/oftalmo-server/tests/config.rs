use std::collections::HashMap;

use oftalmo_server::config::{DEFAULT_PASS, DEFAULT_USER, ServerConfig};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.bind_addr.port(), 5000);
    assert_eq!(config.username, DEFAULT_USER);
    assert_eq!(config.password, DEFAULT_PASS);
    assert_eq!(config.data_dir.to_str(), Some("oftalmoprev-data"));
}

#[test]
fn variables_override_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("OFTALMO_BIND", "127.0.0.1:8080"),
        ("OFTALMO_DATA_DIR", "/var/lib/oftalmo"),
        ("OFTALMO_USER", "dra.ana"),
        ("OFTALMO_PASS", "s3nha"),
    ]))
    .unwrap();

    assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
    assert_eq!(config.data_dir.to_str(), Some("/var/lib/oftalmo"));
    assert_eq!(config.username, "dra.ana");
    assert_eq!(config.password, "s3nha");
}

#[test]
fn blank_variables_fall_back() {
    let config = ServerConfig::from_lookup(lookup(&[("OFTALMO_USER", "  ")])).unwrap();
    assert_eq!(config.username, DEFAULT_USER);
}

#[test]
fn bad_bind_address_is_an_error() {
    assert!(ServerConfig::from_lookup(lookup(&[("OFTALMO_BIND", "localhost")])).is_err());
}
