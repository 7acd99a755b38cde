//! Application services for publishing, browsing and resolving reports.

mod board;

pub use board::{
    PostBoardError, PostBoardResult, PostBoardService, PostQuery, PostSubmission, PublishPostRequest,
    PublishedPost,
};
