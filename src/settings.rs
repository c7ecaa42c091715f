use log::warn;
use squad_core::DEFAULT_NOTIFICATION_DELAY;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub is_demo: bool,
    pub notification_delay: Duration,
}

impl SessionSettings {
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("MODE").ok().as_deref(),
            env::var("NOTIFICATION_DELAY_MS").ok().as_deref(),
        )
    }

    pub fn from_vars(mode: Option<&str>, notification_delay_ms: Option<&str>) -> Self {
        let notification_delay = match notification_delay_ms {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(_) => {
                    warn!(
                        "NOTIFICATION_DELAY_MS = {} is not a number, using {} ms",
                        value,
                        DEFAULT_NOTIFICATION_DELAY.as_millis()
                    );
                    DEFAULT_NOTIFICATION_DELAY
                }
            },
            None => DEFAULT_NOTIFICATION_DELAY,
        };

        SessionSettings {
            is_demo: mode == Some("DEMO"),
            notification_delay,
        }
    }
}
