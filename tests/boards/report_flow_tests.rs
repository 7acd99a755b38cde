//! Report publishing, browsing and resolution through the public API.

use super::helpers::{ReportBoard, report, report_board, vault};
use amigo_fiel::{
    post::{
        domain::PostStatus,
        services::{PostBoardError, PostQuery, PublishPostRequest},
    },
    vault::{adapters::memory::InMemoryTokenVault, domain::TokenKey, ports::TokenVault},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn publisher_resolves_with_the_remembered_token(
    report_board: ReportBoard,
    vault: InMemoryTokenVault,
) -> Result<(), eyre::Report> {
    let published = report_board
        .publish(PublishPostRequest::new(report("Perro perdido", "lost", "dog")))
        .await?;
    let key = TokenKey::from(published.post.id());
    vault.remember(key, &published.edit_token).await?;

    let remembered = vault
        .recall(key)
        .await?
        .ok_or_else(|| eyre::eyre!("token was not remembered"))?;
    eyre::ensure!(
        published.post.can_resolve(Some(&remembered)),
        "publisher should be offered the resolve action"
    );

    let resolved = report_board
        .resolve(published.post.id(), remembered.expose())
        .await?;
    eyre::ensure!(resolved.is_resolved(), "report should be resolved");
    eyre::ensure!(
        resolved.contact().is_cleared(),
        "contact should be cleared once resolved"
    );
    eyre::ensure!(
        !resolved.can_resolve(Some(&remembered)),
        "resolve action should disappear after resolution"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn visitors_cannot_resolve_without_the_token(
    report_board: ReportBoard,
) -> Result<(), eyre::Report> {
    let published = report_board
        .publish(PublishPostRequest::new(report("Gato encontrado", "found", "cat")))
        .await?;

    let result = report_board
        .resolve(published.post.id(), "not-the-token")
        .await;

    eyre::ensure!(
        matches!(result, Err(PostBoardError::InvalidEditToken(_))),
        "expected InvalidEditToken, got {result:?}"
    );
    let stored = report_board
        .get(published.post.id())
        .await?
        .ok_or_else(|| eyre::eyre!("report vanished"))?;
    eyre::ensure!(!stored.is_resolved(), "report must stay open");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_is_case_insensitive_and_combines_with_filters(
    report_board: ReportBoard,
) -> Result<(), eyre::Report> {
    for (title, status, species) in [
        ("Perdimos a TOBY", "lost", "dog"),
        ("Toby apareció en la plaza", "found", "dog"),
        ("Michi perdido", "lost", "cat"),
    ] {
        report_board
            .publish(PublishPostRequest::new(report(title, status, species)))
            .await?;
    }

    let query = PostQuery {
        status: Some("lost".to_owned()),
        q: Some("toby".to_owned()),
        ..PostQuery::default()
    };
    let page = report_board.list(&query).await?;

    eyre::ensure!(page.items.len() == 1, "expected one match, got {}", page.items.len());
    let post = page
        .items
        .first()
        .ok_or_else(|| eyre::eyre!("missing match"))?;
    eyre::ensure!(post.status() == PostStatus::Lost, "status filter ignored");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn resolved_reports_can_be_hidden_from_the_board(
    report_board: ReportBoard,
) -> Result<(), eyre::Report> {
    let open = report_board
        .publish(PublishPostRequest::new(report("Loro perdido", "lost", "other")))
        .await?;
    let closed = report_board
        .publish(PublishPostRequest::new(report("Conejo perdido", "lost", "other")))
        .await?;
    report_board
        .resolve(closed.post.id(), closed.edit_token.expose())
        .await?;

    let everything = report_board.list(&PostQuery::default()).await?;
    let only_open = report_board
        .list(&PostQuery {
            include_resolved: Some(false),
            ..PostQuery::default()
        })
        .await?;

    eyre::ensure!(everything.items.len() == 2, "resolved reports stay listed by default");
    eyre::ensure!(
        only_open.items.iter().map(|post| post.id()).eq([open.post.id()]),
        "only the open report should remain"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn pages_split_the_board_without_overlap(
    report_board: ReportBoard,
) -> Result<(), eyre::Report> {
    for index in 0..4 {
        report_board
            .publish(PublishPostRequest::new(report(
                &format!("Aviso {index}"),
                "found",
                "dog",
            )))
            .await?;
    }

    let first = report_board.list(&PostQuery::default()).await?;
    let second = report_board
        .list(&PostQuery {
            page: Some(1),
            ..PostQuery::default()
        })
        .await?;

    eyre::ensure!(first.items.len() == 3 && first.has_more, "first page is full");
    eyre::ensure!(second.items.len() == 1 && !second.has_more, "second page holds the rest");
    eyre::ensure!(
        second
            .items
            .iter()
            .all(|post| first.items.iter().all(|seen| seen.id() != post.id())),
        "pages must not overlap"
    );
    Ok(())
}
