//! Vibe Presets
//!
//! Static table of the vibes offered in the generator and the gradient theme
//! each one paints the panel with.

/// Gradient stops for the generator panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub from: &'static str,
    pub to: &'static str,
}

impl Theme {
    /// CSS class string for a bottom-right gradient, e.g. `from-violet-500 to-fuchsia-500`
    pub fn gradient_class(&self) -> String {
        format!("from-{} to-{}", self.from, self.to)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VibePreset {
    pub key: &'static str,
    pub label: &'static str,
    pub theme: Theme,
}

/// Prompt shown when the page first loads
pub const DEFAULT_PROMPT: &str = "Crush my finals week";

/// Vibe selected when the page first loads
pub const DEFAULT_VIBE: &str = "study";

/// Theme used for any vibe not in [`VIBE_PRESETS`]
pub const FALLBACK_THEME: Theme = Theme { from: "blue-500", to: "purple-500" };

pub const VIBE_PRESETS: &[VibePreset] = &[
    VibePreset { key: "study", label: "Study Sesh", theme: Theme { from: "violet-500", to: "fuchsia-500" } },
    VibePreset { key: "gym", label: "Gym Grind", theme: Theme { from: "emerald-500", to: "lime-500" } },
    VibePreset { key: "reset", label: "Reset Day", theme: Theme { from: "cyan-500", to: "blue-500" } },
    VibePreset { key: "deep work", label: "Deep Work", theme: Theme { from: "amber-500", to: "orange-600" } },
    VibePreset { key: "errands", label: "Errands", theme: Theme { from: "pink-500", to: "rose-500" } },
    VibePreset { key: "content", label: "Content", theme: Theme { from: "sky-500", to: "indigo-500" } },
];

pub fn find_preset(key: &str) -> Option<&'static VibePreset> {
    VIBE_PRESETS.iter().find(|p| p.key == key)
}

/// Theme for a vibe key, [`FALLBACK_THEME`] when the key is not a preset
pub fn theme_for(vibe: &str) -> Theme {
    find_preset(vibe).map(|p| p.theme).unwrap_or(FALLBACK_THEME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_vibe_is_a_preset() {
        assert!(find_preset(DEFAULT_VIBE).is_some());
        assert_eq!(theme_for(DEFAULT_VIBE).gradient_class(), "from-violet-500 to-fuchsia-500");
    }

    #[test]
    fn test_unknown_vibe_falls_back() {
        assert_eq!(theme_for("karaoke"), FALLBACK_THEME);
        assert_eq!(theme_for(""), FALLBACK_THEME);
        // Keys are matched exactly
        assert_eq!(theme_for("Study"), FALLBACK_THEME);
    }

    #[test]
    fn test_preset_keys_are_unique() {
        let keys: HashSet<_> = VIBE_PRESETS.iter().map(|p| p.key).collect();
        assert_eq!(keys.len(), VIBE_PRESETS.len());
    }

    #[test]
    fn test_multi_word_key() {
        let preset = find_preset("deep work").unwrap();
        assert_eq!(preset.label, "Deep Work");
        assert_eq!(preset.theme.to, "orange-600");
    }
}
