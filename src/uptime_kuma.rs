//! uptime-kuma push monitor model

/// Heartbeat reported to an uptime-kuma push monitor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonitorStatus {
    pub up: bool,
    pub message: Option<String>,
    pub ping: Option<String>,
}

impl MonitorStatus {
    pub fn new(up: bool) -> Self {
        Self {
            up,
            ..Default::default()
        }
    }

    /// Value of the `status` query parameter
    pub fn status(&self) -> &'static str {
        if self.up {
            "up"
        } else {
            "down"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_follows_up_flag() {
        assert_eq!(MonitorStatus::new(true).status(), "up");
        assert_eq!(MonitorStatus::new(false).status(), "down");

        let status = MonitorStatus {
            up: false,
            message: Some("disk full".to_string()),
            ping: Some("12".to_string()),
        };
        assert_eq!(status.status(), "down");
    }
}
