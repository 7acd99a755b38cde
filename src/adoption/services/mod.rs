//! Application services for publishing, browsing, adopting and reporting
//! adoption listings.

mod board;

pub use board::{
    AdoptionBoardError, AdoptionBoardResult, AdoptionBoardService, AdoptionQuery,
    AdoptionSubmission, PublishAdoptionRequest, PublishedAdoption,
};
