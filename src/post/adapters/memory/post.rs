//! In-memory repository for reports.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::listing::domain::{ContactInfo, Page, PageRequest};
use crate::post::{
    domain::{PersistedPostData, Post, PostDomainError, PostId},
    ports::{PostFilter, PostRepository, PostRepositoryError, PostRepositoryResult},
};

/// Thread-safe in-memory report repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPostRepository {
    posts: Arc<RwLock<HashMap<PostId, Post>>>,
}

impl InMemoryPostRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> PostRepositoryError {
    PostRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn store(&self, post: &Post) -> PostRepositoryResult<()> {
        let mut posts = self.posts.write().map_err(lock_error)?;
        if posts.contains_key(&post.id()) {
            return Err(PostRepositoryError::DuplicatePost(post.id()));
        }
        posts.insert(post.id(), post.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: PostId) -> PostRepositoryResult<Option<Post>> {
        let posts = self.posts.read().map_err(lock_error)?;
        Ok(posts.get(&id).cloned())
    }

    async fn list(
        &self,
        filter: &PostFilter,
        page: PageRequest,
    ) -> PostRepositoryResult<Page<Post>> {
        let posts = self.posts.read().map_err(lock_error)?;
        let mut matching: Vec<&Post> = posts.values().filter(|post| filter.matches(post)).collect();
        matching.sort_by_key(|post| Reverse((post.created_at(), post.id())));

        let skip = usize::try_from(page.offset()).map_err(PostRepositoryError::persistence)?;
        let take = usize::try_from(page.probe_limit()).map_err(PostRepositoryError::persistence)?;
        let rows = matching.into_iter().skip(skip).take(take).cloned().collect();
        Ok(Page::from_probe(rows, page))
    }

    async fn mark_resolved(
        &self,
        id: PostId,
        cleared_contact: &ContactInfo,
    ) -> PostRepositoryResult<()> {
        let mut posts = self.posts.write().map_err(lock_error)?;
        let current = posts.get(&id).ok_or(PostRepositoryError::NotFound(id))?;
        if current.is_resolved() {
            return Err(PostRepositoryError::Rejected(
                PostDomainError::AlreadyResolved(id),
            ));
        }
        let updated = Post::from_persisted(PersistedPostData {
            id,
            title: current.title().clone(),
            description: current.description().clone(),
            status: current.status(),
            species: current.species(),
            zone: current.zone().clone(),
            event_date: current.event_date(),
            contact: cleared_contact.clone(),
            image_url: current.image_url().cloned(),
            created_at: current.created_at(),
            resolved: true,
            edit_token: current.edit_token().clone(),
        });
        posts.insert(id, updated);
        Ok(())
    }
}
