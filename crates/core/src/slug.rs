//! URL slug derivation for content resources.

/// Generate a URL-safe slug from a display name.
///
/// Converts to lowercase, replaces runs of characters outside `[a-z0-9]`
/// with a single hyphen, and trims leading/trailing hyphens.
///
/// Total and deterministic; applying it to its own output is a no-op.
///
/// # Examples
///
/// ```
/// use ecare_core::slug::generate_slug;
///
/// assert_eq!(generate_slug("Respite Care"), "respite-care");
/// assert_eq!(generate_slug("Day  Care!"), "day-care");
/// ```
pub fn generate_slug(name: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c
            } else {
                '-'
            }
        })
        .collect();

    // Collapse consecutive hyphens.
    let mut result = String::with_capacity(slug.len());
    let mut prev_hyphen = false;
    for c in slug.chars() {
        if c == '-' {
            if !prev_hyphen {
                result.push('-');
            }
            prev_hyphen = true;
        } else {
            result.push(c);
            prev_hyphen = false;
        }
    }

    // Trim leading/trailing hyphens.
    result.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_basic_name() {
        assert_eq!(generate_slug("Respite Care"), "respite-care");
    }

    #[test]
    fn slug_special_characters() {
        assert_eq!(
            generate_slug("Supported Independent Living (SIL)"),
            "supported-independent-living-sil"
        );
    }

    #[test]
    fn slug_collapses_runs_to_single_hyphen() {
        assert_eq!(generate_slug("Day  Care!"), "day-care");
        assert_eq!(generate_slug("foo---bar"), "foo-bar");
    }

    #[test]
    fn slug_trims_leading_trailing_hyphens() {
        assert_eq!(generate_slug("  24/7 Support  "), "24-7-support");
        assert_eq!(generate_slug("--hello--"), "hello");
    }

    #[test]
    fn slug_output_alphabet() {
        let slug = generate_slug("Überprüfung & Review #2");
        assert!(slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
        assert!(!slug.starts_with('-'));
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn slug_idempotent() {
        for name in ["Respite Care", "Day  Care!", "a--b", "  x  "] {
            let once = generate_slug(name);
            assert_eq!(generate_slug(&once), once);
        }
    }

    #[test]
    fn slug_all_symbols_is_empty() {
        assert_eq!(generate_slug("!!!"), "");
    }
}
