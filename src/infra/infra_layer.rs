// The infra module talks to the outside world on behalf of core.
// Right now that is only reading configuration from the environment.

#[path = "config/env_config.rs"]
pub mod config;
