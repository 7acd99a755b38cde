//! Given steps for report resolution BDD scenarios.

use super::when::resolve_as_publisher;
use super::world::{ResolutionWorld, run_async};
use amigo_fiel::{
    post::services::{PostSubmission, PublishPostRequest},
    vault::{domain::TokenKey, ports::TokenVault},
};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a "{status}" report titled "{title}""#)]
fn report_published(
    world: &mut ResolutionWorld,
    status: String,
    title: String,
) -> Result<(), eyre::Report> {
    let submission = PostSubmission {
        title,
        description: "Responde a su nombre".to_owned(),
        status,
        species: "dog".to_owned(),
        zone_text: "Palermo".to_owned(),
        event_date: "2024-08-01".to_owned(),
        contact_type: "whatsapp".to_owned(),
        contact_value: "11 2222 3333".to_owned(),
        image_url: None,
    };
    let published = run_async(world.board.publish(PublishPostRequest::new(submission)))
        .wrap_err("publish report for resolution scenario")?;
    world.pending_token = Some(published.edit_token);
    world.published = Some(published.post);
    Ok(())
}

#[given("the publisher remembered the edit token")]
fn publisher_remembered_token(world: &mut ResolutionWorld) -> Result<(), eyre::Report> {
    let id = world.published()?.id();
    let token = world
        .pending_token
        .take()
        .ok_or_else(|| eyre::eyre!("missing edit token in scenario world"))?;
    run_async(world.vault.remember(TokenKey::from(id), &token))
        .wrap_err("remember edit token")?;
    Ok(())
}

#[given("the publisher resolves the report")]
fn publisher_already_resolved(world: &mut ResolutionWorld) -> Result<(), eyre::Report> {
    resolve_as_publisher(world)
}
