//! Shareable listing URLs.

use super::ViewError;
use minijinja::{Environment, context};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

const SHARE_TEMPLATE_NAME: &str = "share_url";
const SHARE_TEMPLATE: &str = "{{ base_url }}/{{ section }}/{{ id }}";

/// Site section a listing lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareSection {
    /// Lost and found reports, `/posts/<id>`.
    Posts,
    /// Adoption listings, `/adopciones/<id>`.
    Adoptions,
}

impl ShareSection {
    /// Returns the URL path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Adoptions => "adopciones",
        }
    }
}

/// Payload for the share sheet: where to go and what to call it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLink {
    /// Absolute URL of the listing page.
    pub url: String,
    /// Listing title or pet name.
    pub title: String,
}

/// Renders share links against the site's public base URL.
#[derive(Clone)]
pub struct ShareLinks {
    base_url: String,
    environment: Environment<'static>,
}

impl fmt::Debug for ShareLinks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShareLinks")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ShareLinks {
    /// Creates a renderer for `base_url`; a trailing slash is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::ShareTemplate`] if the URL template cannot be
    /// compiled.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ViewError> {
        let mut environment = Environment::new();
        environment.add_template(SHARE_TEMPLATE_NAME, SHARE_TEMPLATE)?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            environment,
        })
    }

    /// Returns the base URL links are rendered against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Renders the share link for one listing.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::ShareTemplate`] when rendering fails.
    pub fn link(
        &self,
        section: ShareSection,
        id: Uuid,
        title: &str,
    ) -> Result<ShareLink, ViewError> {
        let template = self.environment.get_template(SHARE_TEMPLATE_NAME)?;
        let url = template.render(context! {
            base_url => self.base_url,
            section => section.as_str(),
            id => id.to_string(),
        })?;
        Ok(ShareLink {
            url,
            title: title.to_owned(),
        })
    }
}
