//! `PostgreSQL` repository implementation for adoption listings.

use super::{
    models::{AdoptionRow, NewAdoptionRow},
    schema::adoptions,
};
use crate::adoption::{
    domain::{Adoption, AdoptionDomainError, AdoptionId, AdoptionStatus, PersistedAdoptionData},
    ports::{
        AdoptionFilter, AdoptionRepository, AdoptionRepositoryError, AdoptionRepositoryResult,
    },
};
use crate::db::ListingPgPool;
use crate::listing::domain::{
    ContactInfo, ContactType, Description, EditToken, ImageUrl, ListingTitle, Page, PageRequest,
    Species, Zone,
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed adoption repository.
#[derive(Debug, Clone)]
pub struct PostgresAdoptionRepository {
    pool: ListingPgPool,
}

impl PostgresAdoptionRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ListingPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> AdoptionRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> AdoptionRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(AdoptionRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(AdoptionRepositoryError::persistence)?
    }
}

#[async_trait]
impl AdoptionRepository for PostgresAdoptionRepository {
    async fn store(&self, adoption: &Adoption) -> AdoptionRepositoryResult<()> {
        let adoption_id = adoption.id();
        let new_row = to_new_row(adoption)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(adoptions::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        AdoptionRepositoryError::DuplicateAdoption(adoption_id)
                    }
                    _ => AdoptionRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: AdoptionId) -> AdoptionRepositoryResult<Option<Adoption>> {
        self.run_blocking(move |connection| {
            find_row(connection, id)?
                .map(row_to_adoption)
                .transpose()
        })
        .await
    }

    async fn list(
        &self,
        filter: &AdoptionFilter,
        page: PageRequest,
    ) -> AdoptionRepositoryResult<Page<Adoption>> {
        let criteria = filter.clone();
        let offset = i64::try_from(page.offset()).map_err(AdoptionRepositoryError::persistence)?;
        let limit =
            i64::try_from(page.probe_limit()).map_err(AdoptionRepositoryError::persistence)?;

        let rows = self
            .run_blocking(move |connection| {
                let mut query = adoptions::table
                    .select(AdoptionRow::as_select())
                    .into_boxed();
                if let Some(status) = criteria.status {
                    query = query.filter(adoptions::status.eq(status.as_str()));
                }
                if let Some(species) = criteria.species {
                    query = query.filter(adoptions::species.eq(species.as_str()));
                }
                if let Some(term) = criteria.search {
                    let pattern = term.ilike_pattern();
                    query = query.filter(
                        adoptions::name
                            .ilike(pattern.clone())
                            .or(adoptions::description.ilike(pattern)),
                    );
                }

                query
                    .order((adoptions::created_at.desc(), adoptions::id.desc()))
                    .offset(offset)
                    .limit(limit)
                    .load::<AdoptionRow>(connection)
                    .map_err(AdoptionRepositoryError::persistence)
            })
            .await?;

        let items = rows
            .into_iter()
            .map(row_to_adoption)
            .collect::<AdoptionRepositoryResult<Vec<_>>>()?;
        Ok(Page::from_probe(items, page))
    }

    async fn mark_adopted(&self, id: AdoptionId) -> AdoptionRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let updated = diesel::update(
                adoptions::table
                    .filter(adoptions::id.eq(id.into_inner()))
                    .filter(adoptions::status.eq(AdoptionStatus::Available.as_str())),
            )
            .set(adoptions::status.eq(AdoptionStatus::Adopted.as_str()))
            .execute(connection)
            .map_err(AdoptionRepositoryError::persistence)?;
            if updated > 0 {
                return Ok(());
            }
            match find_row(connection, id)? {
                None => Err(AdoptionRepositoryError::NotFound(id)),
                Some(_) => Err(AdoptionRepositoryError::Rejected(
                    AdoptionDomainError::AlreadyAdopted(id),
                )),
            }
        })
        .await
    }

    async fn record_report(
        &self,
        id: AdoptionId,
        threshold: u32,
    ) -> AdoptionRepositoryResult<Adoption> {
        let threshold_count =
            i32::try_from(threshold).map_err(AdoptionRepositoryError::persistence)?;

        self.run_blocking(move |connection| {
            // All SET expressions see the pre-update row, so both use the old
            // count plus one.
            let updated = diesel::update(
                adoptions::table
                    .filter(adoptions::id.eq(id.into_inner()))
                    .filter(adoptions::status.eq(AdoptionStatus::Available.as_str()))
                    .filter(adoptions::contact_hidden.eq(false)),
            )
            .set((
                adoptions::reports_count.eq(adoptions::reports_count + 1),
                adoptions::contact_hidden.eq((adoptions::reports_count + 1).ge(threshold_count)),
            ))
            .returning(AdoptionRow::as_returning())
            .get_result::<AdoptionRow>(connection)
            .optional()
            .map_err(AdoptionRepositoryError::persistence)?;

            if let Some(row) = updated {
                return row_to_adoption(row);
            }
            let current = find_row(connection, id)?
                .map(row_to_adoption)
                .transpose()?
                .ok_or(AdoptionRepositoryError::NotFound(id))?;
            current
                .ensure_reportable()
                .map_err(AdoptionRepositoryError::Rejected)?;
            Err(AdoptionRepositoryError::persistence(std::io::Error::other(
                "report update matched no row for a reportable listing",
            )))
        })
        .await
    }
}

fn find_row(
    connection: &mut PgConnection,
    id: AdoptionId,
) -> AdoptionRepositoryResult<Option<AdoptionRow>> {
    adoptions::table
        .filter(adoptions::id.eq(id.into_inner()))
        .select(AdoptionRow::as_select())
        .first::<AdoptionRow>(connection)
        .optional()
        .map_err(AdoptionRepositoryError::persistence)
}

pub(crate) fn to_new_row(adoption: &Adoption) -> AdoptionRepositoryResult<NewAdoptionRow> {
    let reports_count =
        i32::try_from(adoption.reports_count()).map_err(AdoptionRepositoryError::persistence)?;

    Ok(NewAdoptionRow {
        id: adoption.id().into_inner(),
        name: adoption.name().as_str().to_owned(),
        description: adoption.description().as_str().to_owned(),
        status: adoption.status().as_str().to_owned(),
        species: adoption.species().as_str().to_owned(),
        zone_text: adoption.zone().as_str().to_owned(),
        contact_type: adoption.contact().contact_type().as_str().to_owned(),
        contact_value: adoption.contact().value().to_owned(),
        image_url: adoption.image_url().map(|url| url.as_str().to_owned()),
        contact_hidden: adoption.is_contact_hidden(),
        reports_count,
        created_at: adoption.created_at(),
        edit_token: adoption.edit_token().expose().to_owned(),
    })
}

pub(crate) fn row_to_adoption(row: AdoptionRow) -> AdoptionRepositoryResult<Adoption> {
    let AdoptionRow {
        id,
        name,
        description,
        status,
        species,
        zone_text,
        contact_type: persisted_contact_type,
        contact_value,
        image_url,
        contact_hidden,
        reports_count: persisted_reports_count,
        created_at,
        edit_token,
    } = row;

    let contact_type = ContactType::try_from(persisted_contact_type.as_str())
        .map_err(AdoptionRepositoryError::persistence)?;
    let data = PersistedAdoptionData {
        id: AdoptionId::from_uuid(id),
        name: ListingTitle::new(name).map_err(AdoptionRepositoryError::persistence)?,
        description: Description::new(description)
            .map_err(AdoptionRepositoryError::persistence)?,
        status: AdoptionStatus::try_from(status.as_str())
            .map_err(AdoptionRepositoryError::persistence)?,
        species: Species::try_from(species.as_str())
            .map_err(AdoptionRepositoryError::persistence)?,
        zone: Zone::new(zone_text).map_err(AdoptionRepositoryError::persistence)?,
        contact: ContactInfo::from_persisted(contact_type, contact_value),
        image_url: image_url
            .map(ImageUrl::new)
            .transpose()
            .map_err(AdoptionRepositoryError::persistence)?,
        contact_hidden,
        reports_count: u32::try_from(persisted_reports_count)
            .map_err(AdoptionRepositoryError::persistence)?,
        created_at,
        edit_token: EditToken::parse(edit_token).map_err(AdoptionRepositoryError::persistence)?,
    };
    Ok(Adoption::from_persisted(data))
}
