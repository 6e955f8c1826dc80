//! Output platforms and the per-chunk assignment rule.

use std::fmt;

use serde::Serialize;

use crate::error::{Result, TextioError};

/// A messaging platform one chunk of output is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Platform {
    /// Stable identifier, e.g. `whatsapp`.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Display icon.
    pub icon: &'static str,
}

/// Built-in platforms in default assignment order.
pub const PLATFORMS: [Platform; 4] = [
    Platform {
        id: "whatsapp",
        name: "WhatsApp",
        icon: "💬",
    },
    Platform {
        id: "telegram",
        name: "Telegram",
        icon: "✈️",
    },
    Platform {
        id: "linkedin",
        name: "LinkedIn",
        icon: "💼",
    },
    Platform {
        id: "discord",
        name: "Discord",
        icon: "🎮",
    },
];

impl Platform {
    /// Look up a built-in platform by identifier (case-insensitive).
    pub fn find(id: &str) -> Option<Platform> {
        PLATFORMS
            .iter()
            .find(|p| p.id.eq_ignore_ascii_case(id.trim()))
            .copied()
    }

    /// Resolve a list of identifiers, failing on the first unknown one.
    pub fn parse_order<S: AsRef<str>>(ids: &[S]) -> Result<Vec<Platform>> {
        ids.iter()
            .map(|id| {
                let id = id.as_ref();
                Platform::find(id).ok_or_else(|| {
                    TextioError::invalid_argument(format!(
                        "Unknown platform '{id}', expected one of: {}",
                        PLATFORMS.map(|p| p.id).join(", ")
                    ))
                })
            })
            .collect()
    }

    /// Platform for chunk `chunk_index`.
    ///
    /// An explicit `order` wins while it has an entry for the chunk; after that
    /// the built-in list is cycled.
    pub fn for_chunk(chunk_index: usize, order: &[Platform]) -> Platform {
        order
            .get(chunk_index)
            .copied()
            .unwrap_or(PLATFORMS[chunk_index % PLATFORMS.len()])
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.name)
    }
}
