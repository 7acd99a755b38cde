//! `PostgreSQL` repository implementation for lost and found reports.

use super::{
    models::{NewPostRow, PostRow},
    schema::posts,
};
use crate::db::ListingPgPool;
use crate::listing::domain::{
    ContactInfo, ContactType, Description, EditToken, ImageUrl, ListingTitle, Page, PageRequest,
    Species, Zone,
};
use crate::post::{
    domain::{PersistedPostData, Post, PostDomainError, PostId, PostStatus},
    ports::{PostFilter, PostRepository, PostRepositoryError, PostRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed report repository.
#[derive(Debug, Clone)]
pub struct PostgresPostRepository {
    pool: ListingPgPool,
}

impl PostgresPostRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ListingPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> PostRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> PostRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(PostRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(PostRepositoryError::persistence)?
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn store(&self, post: &Post) -> PostRepositoryResult<()> {
        let post_id = post.id();
        let new_row = to_new_row(post);

        self.run_blocking(move |connection| {
            diesel::insert_into(posts::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        PostRepositoryError::DuplicatePost(post_id)
                    }
                    _ => PostRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: PostId) -> PostRepositoryResult<Option<Post>> {
        self.run_blocking(move |connection| {
            let row = posts::table
                .filter(posts::id.eq(id.into_inner()))
                .select(PostRow::as_select())
                .first::<PostRow>(connection)
                .optional()
                .map_err(PostRepositoryError::persistence)?;
            row.map(row_to_post).transpose()
        })
        .await
    }

    async fn list(
        &self,
        filter: &PostFilter,
        page: PageRequest,
    ) -> PostRepositoryResult<Page<Post>> {
        let criteria = filter.clone();
        let offset = i64::try_from(page.offset()).map_err(PostRepositoryError::persistence)?;
        let limit = i64::try_from(page.probe_limit()).map_err(PostRepositoryError::persistence)?;

        let rows = self
            .run_blocking(move |connection| {
                let mut query = posts::table.select(PostRow::as_select()).into_boxed();
                if let Some(status) = criteria.status {
                    query = query.filter(posts::status.eq(status.as_str()));
                }
                if let Some(species) = criteria.species {
                    query = query.filter(posts::species.eq(species.as_str()));
                }
                if !criteria.include_resolved {
                    query = query.filter(posts::resolved.eq(false));
                }
                if let Some(term) = criteria.search {
                    let pattern = term.ilike_pattern();
                    query = query.filter(
                        posts::title
                            .ilike(pattern.clone())
                            .or(posts::description.ilike(pattern)),
                    );
                }

                query
                    .order((posts::created_at.desc(), posts::id.desc()))
                    .offset(offset)
                    .limit(limit)
                    .load::<PostRow>(connection)
                    .map_err(PostRepositoryError::persistence)
            })
            .await?;

        let items = rows
            .into_iter()
            .map(row_to_post)
            .collect::<PostRepositoryResult<Vec<_>>>()?;
        Ok(Page::from_probe(items, page))
    }

    async fn mark_resolved(
        &self,
        id: PostId,
        cleared_contact: &ContactInfo,
    ) -> PostRepositoryResult<()> {
        let contact_value = cleared_contact.value().to_owned();
        self.run_blocking(move |connection| {
            let updated = diesel::update(
                posts::table
                    .filter(posts::id.eq(id.into_inner()))
                    .filter(posts::resolved.eq(false)),
            )
            .set((
                posts::resolved.eq(true),
                posts::contact_value.eq(contact_value),
            ))
            .execute(connection)
            .map_err(PostRepositoryError::persistence)?;
            if updated > 0 {
                return Ok(());
            }
            let exists = diesel::select(diesel::dsl::exists(
                posts::table.filter(posts::id.eq(id.into_inner())),
            ))
            .get_result::<bool>(connection)
            .map_err(PostRepositoryError::persistence)?;
            if exists {
                Err(PostRepositoryError::Rejected(PostDomainError::AlreadyResolved(id)))
            } else {
                Err(PostRepositoryError::NotFound(id))
            }
        })
        .await
    }
}

pub(crate) fn to_new_row(post: &Post) -> NewPostRow {
    NewPostRow {
        id: post.id().into_inner(),
        title: post.title().as_str().to_owned(),
        description: post.description().as_str().to_owned(),
        status: post.status().as_str().to_owned(),
        species: post.species().as_str().to_owned(),
        zone_text: post.zone().as_str().to_owned(),
        event_date: post.event_date(),
        contact_type: post.contact().contact_type().as_str().to_owned(),
        contact_value: post.contact().value().to_owned(),
        image_url: post.image_url().map(|url| url.as_str().to_owned()),
        created_at: post.created_at(),
        resolved: post.is_resolved(),
        edit_token: post.edit_token().expose().to_owned(),
    }
}

pub(crate) fn row_to_post(row: PostRow) -> PostRepositoryResult<Post> {
    let PostRow {
        id,
        title,
        description,
        status,
        species,
        zone_text,
        event_date,
        contact_type: persisted_contact_type,
        contact_value,
        image_url,
        created_at,
        resolved,
        edit_token,
    } = row;

    let contact_type = ContactType::try_from(persisted_contact_type.as_str()).map_err(PostRepositoryError::persistence)?;
    let data = PersistedPostData {
        id: PostId::from_uuid(id),
        title: ListingTitle::new(title).map_err(PostRepositoryError::persistence)?,
        description: Description::new(description).map_err(PostRepositoryError::persistence)?,
        status: PostStatus::try_from(status.as_str()).map_err(PostRepositoryError::persistence)?,
        species: Species::try_from(species.as_str()).map_err(PostRepositoryError::persistence)?,
        zone: Zone::new(zone_text).map_err(PostRepositoryError::persistence)?,
        event_date,
        contact: ContactInfo::from_persisted(contact_type, contact_value),
        image_url: image_url
            .map(ImageUrl::new)
            .transpose()
            .map_err(PostRepositoryError::persistence)?,
        created_at,
        resolved,
        edit_token: EditToken::parse(edit_token).map_err(PostRepositoryError::persistence)?,
    };
    Ok(Post::from_persisted(data))
}
