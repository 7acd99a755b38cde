//! When steps for report resolution BDD scenarios.

use super::world::{ResolutionWorld, run_async};
use amigo_fiel::vault::{domain::TokenKey, ports::TokenVault};
use eyre::WrapErr;
use rstest_bdd_macros::when;

/// Resolves the published report with the token held in the vault.
///
/// # Errors
///
/// Returns an error if no report was published or no token remembered.
pub fn resolve_as_publisher(world: &mut ResolutionWorld) -> Result<(), eyre::Report> {
    let id = world.published()?.id();
    let token = run_async(world.vault.recall(TokenKey::from(id)))
        .wrap_err("recall edit token")?
        .ok_or_else(|| eyre::eyre!("publisher has no remembered token"))?;
    world.last_result = Some(run_async(world.board.resolve(id, token.expose())));
    Ok(())
}

#[when("the publisher resolves the report")]
fn publisher_resolves(world: &mut ResolutionWorld) -> Result<(), eyre::Report> {
    resolve_as_publisher(world)
}

#[when(r#"a visitor resolves the report with token "{token}""#)]
fn visitor_resolves(world: &mut ResolutionWorld, token: String) -> Result<(), eyre::Report> {
    let id = world.published()?.id();
    world.last_result = Some(run_async(world.board.resolve(id, &token)));
    Ok(())
}
