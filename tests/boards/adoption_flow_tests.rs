//! Adoption listing moderation and adoption through the public API.

use super::helpers::{AdoptionBoard, adoption_board, listing, vault};
use amigo_fiel::{
    adoption::{
        domain::{AdoptionDomainError, AdoptionStatus},
        services::{AdoptionBoardError, AdoptionQuery, PublishAdoptionRequest},
    },
    vault::{adapters::memory::InMemoryTokenVault, domain::TokenKey, ports::TokenVault},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn community_reports_put_a_listing_under_review(
    adoption_board: AdoptionBoard,
) -> Result<(), eyre::Report> {
    let published = adoption_board
        .publish(PublishAdoptionRequest::new(listing("Pelusa", "cat")))
        .await?;
    let id = published.adoption.id();

    let once = adoption_board.report(id).await?;
    eyre::ensure!(once.contact_visible(), "one report keeps the contact visible");

    let twice = adoption_board.report(id).await?;
    eyre::ensure!(twice.is_contact_hidden(), "threshold hides the contact");
    eyre::ensure!(twice.reports_count() == 2, "both reports counted");

    let third = adoption_board.report(id).await;
    eyre::ensure!(
        matches!(
            third,
            Err(AdoptionBoardError::Domain(AdoptionDomainError::UnderReview(_)))
        ),
        "listing under review refuses reports, got {third:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn publisher_marks_the_animal_adopted(
    adoption_board: AdoptionBoard,
    vault: InMemoryTokenVault,
) -> Result<(), eyre::Report> {
    let published = adoption_board
        .publish(PublishAdoptionRequest::new(listing("Rocco", "dog")))
        .await?;
    let key = TokenKey::from(published.adoption.id());
    vault.remember(key, &published.edit_token).await?;
    let token = vault
        .recall(key)
        .await?
        .ok_or_else(|| eyre::eyre!("token was not remembered"))?;

    let adopted = adoption_board
        .mark_adopted(published.adoption.id(), token.expose())
        .await?;
    eyre::ensure!(adopted.status() == AdoptionStatus::Adopted, "status updated");

    let reported = adoption_board.report(published.adoption.id()).await;
    eyre::ensure!(
        matches!(
            reported,
            Err(AdoptionBoardError::Domain(AdoptionDomainError::ReportNotAllowed(_)))
        ),
        "adopted listings refuse reports, got {reported:?}"
    );

    let board = adoption_board
        .list(&AdoptionQuery {
            status: Some("available".to_owned()),
            ..AdoptionQuery::default()
        })
        .await?;
    eyre::ensure!(board.items.is_empty(), "adopted listing left the available board");

    vault.forget(key).await?;
    eyre::ensure!(vault.recall(key).await?.is_none(), "token forgotten");
    Ok(())
}
