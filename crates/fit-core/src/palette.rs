//! Color palette hygiene
//!
//! The generation API is asked for hex codes but sometimes answers with
//! color names. Every palette entry is checked on ingestion and anything
//! that is not `#`-prefixed is replaced by a neutral stone grey.

/// Neutral color substituted for non-hex palette entries
pub const FALLBACK_COLOR: &str = "#57534e";

/// Hex-prefixed entries are kept verbatim, everything else becomes
/// [`FALLBACK_COLOR`]. Order and length are preserved.
pub fn normalize_palette(palette: Vec<String>) -> Vec<String> {
    palette
        .into_iter()
        .map(|color| {
            if color.starts_with('#') {
                color
            } else {
                FALLBACK_COLOR.to_string()
            }
        })
        .collect()
}
