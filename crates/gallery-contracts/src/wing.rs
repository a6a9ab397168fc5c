//! Wing categories and their display registry
//!
//! A [`Wing`] is one of five fixed top-level categories of creative work.
//! [`WingRegistry`] maps every wing to its [`WingConfig`] display metadata.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Top-level project category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wing {
    /// Songs, albums and compositions
    Music,
    /// Software applications and tools
    Apps,
    /// Written narratives, scripts, creative writing
    Stories,
    /// Meta-projects about the creative process itself
    Process,
    /// Completed works from any category
    Finished,
}

impl Wing {
    /// Every wing, in declaration order
    pub const ALL: [Wing; 5] = [
        Wing::Music,
        Wing::Apps,
        Wing::Stories,
        Wing::Process,
        Wing::Finished,
    ];

    /// Wire identifiers, in declaration order
    pub const NAMES: &'static [&'static str] = &["music", "apps", "stories", "process", "finished"];

    /// Wire identifier of this wing
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Wing::Music => "music",
            Wing::Apps => "apps",
            Wing::Stories => "stories",
            Wing::Process => "process",
            Wing::Finished => "finished",
        }
    }
}

impl Display for Wing {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Wing {
    type Err = UnknownWing;

    /// Case-sensitive: `"Music"` is not a wing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|wing| wing.as_str() == s)
            .ok_or_else(|| UnknownWing(s.to_string()))
    }
}

/// A category identifier outside the five known wings
///
/// Raised at untyped boundaries such as route parameters. Callers translate
/// it into a not-found response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown wing: {0}")]
pub struct UnknownWing(pub String);

impl UnknownWing {
    /// The rejected value
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Display metadata for a wing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WingConfig {
    /// Wing this entry describes
    pub id: Wing,
    /// Human-readable label
    pub name: &'static str,
    /// CSS hex colour (`#rrggbb`)
    pub color: &'static str,
    /// Short explanation of what the wing holds
    pub description: &'static str,
    /// Glyph used in navigation
    pub icon: &'static str,
}

// Navigation order.
const BUILTIN_WINGS: [WingConfig; 5] = [
    WingConfig {
        id: Wing::Stories,
        name: "Stories",
        color: "#be123c",
        description: "Written works and narratives",
        icon: "📖",
    },
    WingConfig {
        id: Wing::Music,
        name: "Music",
        color: "#06b6d4",
        description: "Songs and sonic experiments",
        icon: "🎵",
    },
    WingConfig {
        id: Wing::Apps,
        name: "Apps",
        color: "#84cc16",
        description: "Tools and software",
        icon: "💻",
    },
    WingConfig {
        id: Wing::Process,
        name: "Process",
        color: "#f97316",
        description: "How the sausage gets made",
        icon: "🔧",
    },
    WingConfig {
        id: Wing::Finished,
        name: "Finished",
        color: "#fbbf24",
        description: "Shit I actually finished",
        icon: "✨",
    },
];

/// Immutable lookup table from wing to display metadata
///
/// The table is compiled in and exhaustive, so typed lookups through
/// [`WingRegistry::config`] cannot fail. Untyped identifiers go through
/// [`WingRegistry::get`], which rejects anything outside the enumeration.
#[derive(Debug, Clone, Copy)]
pub struct WingRegistry {
    entries: &'static [WingConfig; 5],
}

impl WingRegistry {
    /// Registry with the built-in wing table
    #[inline]
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            entries: &BUILTIN_WINGS,
        }
    }

    /// Typed lookup
    #[inline]
    #[must_use]
    pub fn config(&self, wing: Wing) -> &'static WingConfig {
        let slot = match wing {
            Wing::Stories => 0,
            Wing::Music => 1,
            Wing::Apps => 2,
            Wing::Process => 3,
            Wing::Finished => 4,
        };
        &self.entries[slot]
    }

    /// Lookup by raw identifier
    ///
    /// # Errors
    /// Returns [`UnknownWing`] if `id` is not one of the five wing ids.
    pub fn get(&self, id: &str) -> Result<&'static WingConfig, UnknownWing> {
        let wing: Wing = id.parse()?;
        Ok(self.config(wing))
    }

    /// All entries in navigation order
    pub fn iter(&self) -> impl Iterator<Item = &'static WingConfig> {
        self.entries.iter()
    }

    /// Number of registered wings
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; the table is exhaustive
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for WingRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
