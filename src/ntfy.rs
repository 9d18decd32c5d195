//! ntfy notification model

use std::fmt;

/// Message priority understood by ntfy
///
/// ntfy also accepts numeric priorities and a few aliases, so values that are
/// not one of the named levels are kept as-is and forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Priority {
    Min,
    Low,
    Default,
    High,
    Max,
    Other(String),
}

impl Priority {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "min" => Self::Min,
            "low" => Self::Low,
            "default" => Self::Default,
            "high" => Self::High,
            "max" => Self::Max,
            _ => Self::Other(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Min => "min",
            Self::Low => "low",
            Self::Default => "default",
            Self::High => "high",
            Self::Max => "max",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_named(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single push message destined for a ntfy topic
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notification {
    pub topic: String,
    pub title: Option<String>,
    pub message: String,
    pub priority: Option<Priority>,
    pub tags: Vec<String>,
    pub click: Option<String>,
    pub actions: Option<String>,
    pub delay: Option<String>,
    pub icon: Option<String>,
    pub markdown: bool,
}

impl Notification {
    pub fn new(topic: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    /// Set tags, dropping blanks and duplicates while keeping first-seen order
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags.clear();
        for tag in tags {
            let tag = tag.as_ref().trim();
            if !tag.is_empty() && !self.tags.iter().any(|t| t == tag) {
                self.tags.push(tag.to_string());
            }
        }
        self
    }

    /// Comma-joined tags as sent in the `Tags` header
    pub fn tags_header(&self) -> Option<String> {
        if self.tags.is_empty() {
            None
        } else {
            Some(self.tags.join(","))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_parse_named() {
        assert_eq!(Priority::parse("min"), Priority::Min);
        assert_eq!(Priority::parse("HIGH"), Priority::High);
        assert_eq!(Priority::parse(" max "), Priority::Max);
        assert_eq!(Priority::High.to_string(), "high");
        assert!(Priority::Default.is_named());
    }

    #[test]
    fn test_priority_unknown_forwarded_verbatim() {
        let priority = Priority::parse("5");
        assert_eq!(priority, Priority::Other("5".to_string()));
        assert_eq!(priority.as_str(), "5");
        assert!(!priority.is_named());

        let priority = Priority::parse("Urgent");
        assert_eq!(priority.as_str(), "Urgent");
    }

    #[test]
    fn test_tags_keep_order_and_dedupe() {
        let notification = Notification::new("alerts", "hi")
            .with_tags(["backup", "warning", "backup", " ", "disk"]);

        assert_eq!(notification.tags, vec!["backup", "warning", "disk"]);
        assert_eq!(notification.tags_header().as_deref(), Some("backup,warning,disk"));
    }

    #[test]
    fn test_no_tags_no_header() {
        let notification = Notification::new("alerts", "hi");
        assert!(notification.tags_header().is_none());
    }
}
