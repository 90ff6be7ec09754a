use axum::{
    extract::State,
    response::Redirect,
    Json,
};

use crate::{
    error::{AppResult, OptionExt},
    middleware::{EntityId, ValidatedForm},
    state::AppState,
    types::{Member, MemberForm},
};

pub async fn list_members(State(state): State<AppState>) -> AppResult<Json<Vec<Member>>> {
    let members = state.repo.members.list().await?;
    Ok(Json(members))
}

pub async fn create_member(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<MemberForm>,
) -> AppResult<Redirect> {
    let id = state.repo.members.create(&form).await?;
    state.metrics.inc_members_created();
    tracing::info!(member_id = id, "Member created");
    Ok(Redirect::to("/members"))
}

pub async fn edit_member(State(state): State<AppState>, EntityId(id): EntityId) -> AppResult<Json<Member>> {
    let member = state.repo.members.get(id).await?.ok_or_not_found("member")?;
    Ok(Json(member))
}

pub async fn update_member(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedForm(form): ValidatedForm<MemberForm>,
) -> AppResult<Redirect> {
    let updated = state.repo.members.update(id, &form).await?;
    if updated == 0 {
        tracing::debug!(member_id = id, "Update matched no member");
    } else {
        tracing::info!(member_id = id, "Member updated");
    }
    Ok(Redirect::to("/members"))
}

pub async fn delete_member(State(state): State<AppState>, EntityId(id): EntityId) -> AppResult<Redirect> {
    let deleted = state.repo.members.delete(id).await?;
    state.metrics.add_deleted(deleted);
    if deleted > 0 {
        tracing::info!(member_id = id, "Member deleted");
    }
    Ok(Redirect::to("/members"))
}
