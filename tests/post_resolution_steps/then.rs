//! Then steps for report resolution BDD scenarios.

use super::world::{ResolutionWorld, run_async};
use amigo_fiel::post::{domain::PostDomainError, services::PostBoardError};
use rstest_bdd_macros::then;

fn stored_resolution(world: &ResolutionWorld) -> Result<(bool, bool), eyre::Report> {
    let id = world.published()?.id();
    let post = run_async(world.board.get(id))?
        .ok_or_else(|| eyre::eyre!("report {id} disappeared"))?;
    Ok((post.is_resolved(), post.contact().is_cleared()))
}

#[then("the report is resolved")]
fn report_is_resolved(world: &ResolutionWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(post)) if post.is_resolved() => {}
        other => return Err(eyre::eyre!("expected a resolved report, got {other:?}")),
    }
    let (resolved, _) = stored_resolution(world)?;
    eyre::ensure!(resolved, "stored report is not resolved");
    Ok(())
}

#[then("the report contact is cleared")]
fn report_contact_cleared(world: &ResolutionWorld) -> Result<(), eyre::Report> {
    let (_, cleared) = stored_resolution(world)?;
    eyre::ensure!(cleared, "stored report still exposes its contact");
    Ok(())
}

#[then("the resolution is refused for a mismatched token")]
fn refused_for_token(world: &ResolutionWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing resolution result"))?;
    if !matches!(result, Err(PostBoardError::InvalidEditToken(_))) {
        return Err(eyre::eyre!("expected InvalidEditToken, got {result:?}"));
    }
    Ok(())
}

#[then("the report is still open")]
fn report_still_open(world: &ResolutionWorld) -> Result<(), eyre::Report> {
    let (resolved, cleared) = stored_resolution(world)?;
    eyre::ensure!(!resolved && !cleared, "report should stay open with its contact");
    Ok(())
}

#[then("the resolution is refused because the report is already resolved")]
fn refused_as_resolved(world: &ResolutionWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing resolution result"))?;
    if !matches!(
        result,
        Err(PostBoardError::Domain(PostDomainError::AlreadyResolved(_)))
    ) {
        return Err(eyre::eyre!("expected AlreadyResolved, got {result:?}"));
    }
    Ok(())
}
