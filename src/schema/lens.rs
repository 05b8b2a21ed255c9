use serde::{Deserialize, Serialize};

/// A narrative lens — one of the fixed alternate phrasings a node's text
/// can be rendered through. `Base` is the guaranteed fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lens {
    Base,
    Narrator,
    Observer,
}

impl Default for Lens {
    fn default() -> Self {
        Self::Base
    }
}

impl Lens {
    /// Every lens, in presentation order.
    pub const ALL: [Lens; 3] = [Lens::Base, Lens::Narrator, Lens::Observer];

    /// Lowercase name: "base", "narrator", "observer".
    pub fn name(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Narrator => "narrator",
            Self::Observer => "observer",
        }
    }

    pub fn from_name(s: &str) -> Option<Lens> {
        match s.to_lowercase().as_str() {
            "base" => Some(Self::Base),
            "narrator" => Some(Self::Narrator),
            "observer" => Some(Self::Observer),
            _ => None,
        }
    }
}

/// A node's text under each lens. Only `base` is required; the total
/// accessor `get` falls back to it when a variant is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LensText {
    pub base: String,
    #[serde(default)]
    pub narrator: Option<String>,
    #[serde(default)]
    pub observer: Option<String>,
}

impl LensText {
    /// The text seen through a lens, falling back to `base`. Total —
    /// never fails, whatever the requested lens.
    pub fn get(&self, lens: Lens) -> &str {
        self.variant(lens).unwrap_or(&self.base)
    }

    /// The exact variant for a lens, without fallback.
    pub fn variant(&self, lens: Lens) -> Option<&str> {
        match lens {
            Lens::Base => Some(&self.base),
            Lens::Narrator => self.narrator.as_deref(),
            Lens::Observer => self.observer.as_deref(),
        }
    }
}
