//! Server configuration.
//!
//! Capas de configuracion: defaults en codigo, un `warden.toml` opcional y
//! variables de entorno con prefijo `WARDEN__` (ej: `WARDEN__SERVER__PORT`).

use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use warden_core::admin::OperatorConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub admin: AdminSettings,
    pub monitor: MonitorSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Limites de seguridad para operaciones por patron.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminSettings {
    pub safety_ceiling: usize,
    pub sample_limit: usize,
    pub max_ttl_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitorSettings {
    pub interval_seconds: u64,
}

impl Settings {
    /// Carga la configuracion: defaults < archivo < entorno.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8888)?
            .set_default("admin.safety_ceiling", 500)?
            .set_default("admin.sample_limit", 20)?
            .set_default("admin.max_ttl_seconds", 2_592_000)?
            .set_default("monitor.interval_seconds", 60)?
            .add_source(File::with_name("warden").required(false))
            .add_source(Environment::with_prefix("WARDEN").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Traduce los limites administrativos a la configuracion del operador.
    pub fn operator_config(&self) -> OperatorConfig {
        OperatorConfig {
            safety_ceiling: self.admin.safety_ceiling,
            sample_limit: self.admin.sample_limit,
            max_ttl: Duration::from_secs(self.admin.max_ttl_seconds),
            ..OperatorConfig::default()
        }
    }

    /// Intervalo de muestreo del monitor de salud.
    pub fn monitor_interval(&self) -> Duration {
        Duration::from_secs(self.monitor.interval_seconds)
    }
}
