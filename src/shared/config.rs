use std::env;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
  pub server_address: String,
  pub database_url: String,
  pub database_max_connections: u32,
}

impl Default for Config {
  fn default() -> Self {
    let server_address = env::var("SERVER_ADDRESS")
      .unwrap_or_else(|_| "127.0.0.1:8010".to_string());
    let database_url =
      env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());
    // An in-memory database lives and dies with its connection, keep one.
    let database_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
      .ok()
      .and_then(|value| value.parse().ok())
      .unwrap_or(1);
    Self {
      server_address,
      database_url,
      database_max_connections,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_config_runner() {
    test_default_config();
    test_default_config_with_missing_env_vars();
    test_default_config_with_invalid_max_connections();
  }

  fn test_default_config() {
    // Temporarily set environment variables
    env::set_var("SERVER_ADDRESS", "0.0.0.0:9000");
    env::set_var("DATABASE_URL", "sqlite://rides.db");
    env::set_var("DATABASE_MAX_CONNECTIONS", "4");

    let config = Config::default();
    assert_eq!(config.server_address, "0.0.0.0:9000");
    assert_eq!(config.database_url, "sqlite://rides.db");
    assert_eq!(config.database_max_connections, 4);

    // Clean up environment variables
    env::remove_var("SERVER_ADDRESS");
    env::remove_var("DATABASE_URL");
    env::remove_var("DATABASE_MAX_CONNECTIONS");
  }

  fn test_default_config_with_missing_env_vars() {
    env::remove_var("SERVER_ADDRESS");
    env::remove_var("DATABASE_URL");
    env::remove_var("DATABASE_MAX_CONNECTIONS");

    let config = Config::default();
    assert_eq!(config.server_address, "127.0.0.1:8010");
    assert_eq!(config.database_url, "sqlite::memory:");
    assert_eq!(config.database_max_connections, 1);
  }

  fn test_default_config_with_invalid_max_connections() {
    env::set_var("DATABASE_MAX_CONNECTIONS", "many");

    let config = Config::default();
    assert_eq!(config.database_max_connections, 1);

    env::remove_var("DATABASE_MAX_CONNECTIONS");
  }

  #[test]
  fn test_deserialization() {
    let json = r#"{
      "server_address": "127.0.0.1:3001",
      "database_url": "sqlite://test.db",
      "database_max_connections": 2
    }"#;

    let config: Config =
      serde_json::from_str(json).expect("Failed to deserialize");
    assert_eq!(config.server_address, "127.0.0.1:3001");
    assert_eq!(config.database_url, "sqlite://test.db");
    assert_eq!(config.database_max_connections, 2);
  }
}
