//! The two content resource kinds and their per-kind naming.
//!
//! Services and support models share one schema, one repository, and one
//! lifecycle manager; everything kind-specific (table name, entity label
//! for error messages, asset key namespace) lives here.

/// A kind of managed content resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Service,
    SupportModel,
}

impl ResourceKind {
    /// Database table holding resources of this kind.
    pub fn table(self) -> &'static str {
        match self {
            ResourceKind::Service => "services",
            ResourceKind::SupportModel => "support_models",
        }
    }

    /// Entity label used in error messages and logs.
    pub fn entity(self) -> &'static str {
        match self {
            ResourceKind::Service => "Service",
            ResourceKind::SupportModel => "SupportModel",
        }
    }

    /// Human-readable singular name used mid-sentence in user-facing
    /// messages ("a service with this name already exists").
    pub fn display_name(self) -> &'static str {
        match self {
            ResourceKind::Service => "service",
            ResourceKind::SupportModel => "support model",
        }
    }

    /// Sentence-leading form of [`ResourceKind::display_name`].
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Service => "Service",
            ResourceKind::SupportModel => "Support model",
        }
    }

    /// Asset Store key prefix for this kind's images.
    ///
    /// Keys are namespaced `<prefix>/<slug>/<part>` so re-uploads under a
    /// changed slug never collide with the old slug's objects.
    pub fn asset_prefix(self) -> &'static str {
        match self {
            ResourceKind::Service => "services",
            ResourceKind::SupportModel => "support-models",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_table_names_differ() {
        assert_ne!(
            ResourceKind::Service.table(),
            ResourceKind::SupportModel.table()
        );
    }

    #[test]
    fn asset_prefix_matches_url_namespace() {
        assert_eq!(ResourceKind::SupportModel.asset_prefix(), "support-models");
    }
}
