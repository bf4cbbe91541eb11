use serde::{Deserialize, Serialize};
use std::fmt;

/// The web frameworks whose page/route layout can be resolved.
///
/// Unlike open-ended framework identifiers there is no custom variant: every
/// resolution lands on exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameworkKind {
    #[serde(rename = "nextjs")]
    NextJs,
    #[serde(rename = "nuxtjs")]
    NuxtJs,
    #[serde(rename = "sapper")]
    Sapper,
    #[serde(rename = "svelte-kit")]
    SvelteKit,
}

impl FrameworkKind {
    /// Serialized tag, e.g. `"svelte-kit"`
    pub fn tag(&self) -> &'static str {
        match self {
            Self::NextJs => "nextjs",
            Self::NuxtJs => "nuxtjs",
            Self::Sapper => "sapper",
            Self::SvelteKit => "svelte-kit",
        }
    }

    /// Human readable name, e.g. `"SvelteKit"`
    pub fn name(&self) -> &'static str {
        match self {
            Self::NextJs => "Next.js",
            Self::NuxtJs => "Nuxt.js",
            Self::Sapper => "Sapper",
            Self::SvelteKit => "SvelteKit",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::all_variants().iter().copied().find(|k| k.tag() == tag)
    }

    pub fn all_variants() -> &'static [Self] {
        &[Self::NextJs, Self::NuxtJs, Self::Sapper, Self::SvelteKit]
    }
}

impl fmt::Display for FrameworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
