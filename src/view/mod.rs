//! Read-only display projections of listings.
//!
//! Cards and detail views carry exactly what a board page shows: Spanish
//! labels, relative dates, the contact link while it may be shown, and the
//! flags deciding which actions to offer. Edit tokens never appear in a view;
//! the caller passes the publisher's remembered token only so the view can
//! decide whether to offer the owner actions.

mod cards;
mod contact;
mod error;
mod relative_date;
mod share;

pub use cards::{AdoptionCard, AdoptionDetail, PostCard, PostDetail};
pub use contact::ContactLink;
pub use error::ViewError;
pub use relative_date::format_relative_date;
pub use share::{ShareLink, ShareLinks, ShareSection};

/// Ribbon shown on resolved reports.
pub const RESOLVED_RIBBON: &str = "Esta mascota encontró a su familia";

/// Notice replacing the contact of resolved reports.
pub const RESOLVED_CONTACT_NOTICE: &str =
    "El contacto fue bloqueado porque la mascota ya fue encontrada.";

/// Ribbon shown on adopted listings.
pub const ADOPTED_RIBBON: &str = "¡Este perrito fue adoptado!";

/// Notice shown while an adoption listing is under community review.
pub const REVIEW_NOTICE: &str =
    "Esta publicación está en revisión por la comunidad. El contacto se ha ocultado temporalmente.";

#[cfg(test)]
mod tests;
