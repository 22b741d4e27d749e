//! Tone — the voice the suggestions are written in.
//!
//! The UI offers four presets. Any other label a client sends is passed to the
//! model verbatim rather than rejected.

/// Requested voice for generated posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Witty,
    Hype,
    Educational,
    Serious,
    Custom(String),
}

impl Tone {
    /// Maps a client label to a tone. Matching is case-insensitive; blank or
    /// missing labels become the default.
    pub fn from_label(label: Option<&str>) -> Self {
        let label = match label.map(str::trim) {
            Some(l) if !l.is_empty() => l,
            _ => return Tone::default(),
        };

        match label.to_ascii_lowercase().as_str() {
            "witty" => Tone::Witty,
            "hype" => Tone::Hype,
            "educational" => Tone::Educational,
            "serious" => Tone::Serious,
            _ => Tone::Custom(label.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Tone::Witty => "witty",
            Tone::Hype => "hype",
            Tone::Educational => "educational",
            Tone::Serious => "serious",
            Tone::Custom(label) => label,
        }
    }

    /// One-line style hint appended to the prompt. Custom tones get none.
    pub fn guidance(&self) -> Option<&'static str> {
        match self {
            Tone::Witty => Some("Clever wordplay and light humor; punchy, never mean."),
            Tone::Hype => Some("High energy and excitement, but no price predictions or promises."),
            Tone::Educational => Some("Explain one concrete idea clearly, as if to a curious newcomer."),
            Tone::Serious => Some("Measured, factual, and professional; no slang or emoji."),
            Tone::Custom(_) => None,
        }
    }
}
