//! Short-lived messages shown to the user beside the page.

use std::fmt;

/// Shown when a search matches more countries than can be listed.
pub const TOO_MANY_MATCHES: &str = "Too many matches found. Please enter a more specific name.";

/// Shown when no country has the searched name.
pub const NO_SUCH_COUNTRY: &str = "Oops, there is no country with that name";

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Guidance, nothing went wrong.
    Info,
    /// The search failed.
    Failure,
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// How the notice should be presented.
    pub level: NoticeLevel,
    /// The text of the notice.
    pub message: String,
}

impl Notice {
    /// The notice for a search with too many matches.
    pub fn too_many_matches() -> Self {
        Self {
            level: NoticeLevel::Info,
            message: TOO_MANY_MATCHES.to_string(),
        }
    }

    /// The notice for a search that matched no country.
    pub fn no_such_country() -> Self {
        Self {
            level: NoticeLevel::Failure,
            message: NO_SUCH_COUNTRY.to_string(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.level {
            NoticeLevel::Info => "info",
            NoticeLevel::Failure => "failure",
        };
        write!(f, "[{}] {}", level, self.message)
    }
}

/// Something that can present notices to the user.
pub trait Notifier: Send + Sync {
    /// Present `notice`.
    fn notify(&self, notice: &Notice);
}

/// A notifier that only writes notices to the log.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Info => tracing::info!(r#type = "page.notice", %notice.message, "notice"),
            NoticeLevel::Failure => {
                tracing::warn!(r#type = "page.notice", %notice.message, "notice")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Notice;

    #[test]
    fn test_notice_display() {
        assert_eq!(
            Notice::too_many_matches().to_string(),
            "[info] Too many matches found. Please enter a more specific name."
        );
        assert_eq!(
            Notice::no_such_country().to_string(),
            "[failure] Oops, there is no country with that name"
        );
    }
}
