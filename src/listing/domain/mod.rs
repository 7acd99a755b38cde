//! Validated value types shared by every listing kind.

mod contact;
mod edit_token;
mod error;
mod page;
mod search;
mod species;
mod text;

pub use contact::{ContactInfo, ContactType};
pub use edit_token::EditToken;
pub use error::{ListingDomainError, ParseListingValueError};
pub use page::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, Page, PageRequest};
pub use search::{SearchTerm, filter_choice};
pub use species::Species;
pub use text::{Description, ImageUrl, ListingTitle, Zone};
