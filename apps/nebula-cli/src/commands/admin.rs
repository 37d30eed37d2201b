//! Admin commands: session handling and post management.

use std::fs;

use nebula_core::DomainError;
use nebula_core::domain::listing::filter_admin_posts;
use nebula_core::domain::{PostDraft, now_millis};
use nebula_core::services::{AssistAction, assist, publish, require_admin};

use super::Terminal;
use crate::cli::{AdminCommand, ContentSource, EditArgs};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub fn login(state: &AppState, term: &mut Terminal<'_>, password: Option<String>) -> AppResult<()> {
    if state.auth.is_authenticated() {
        return term.println("Already logged in.");
    }

    let password = match password {
        Some(password) => password,
        None => term.prompt("Password: ")?,
    };

    if !state.auth.login(&password) {
        return Err(AppError::BadRequest("Incorrect password".to_string()));
    }
    term.println("Logged in.")
}

pub fn logout(state: &AppState, term: &mut Terminal<'_>) -> AppResult<()> {
    state.auth.logout();
    term.println("Logged out.")
}

pub async fn run(
    command: AdminCommand,
    state: &AppState,
    term: &mut Terminal<'_>,
) -> AppResult<()> {
    require_admin(state.auth.as_ref())?;

    match command {
        AdminCommand::Posts { search } => posts(state, term, &search),
        AdminCommand::New(args) => create(state, term, args).await,
        AdminCommand::Edit { id, args } => edit(state, term, &id, args).await,
        AdminCommand::Delete { id, yes } => delete(state, term, &id, yes),
        AdminCommand::Assist { action, source } => {
            let content = read_content(&source)?.ok_or_else(|| {
                AppError::BadRequest("--content or --content-file is required".to_string())
            })?;
            assist_text(state, term, action.into(), content).await
        }
    }
}

fn posts(state: &AppState, term: &mut Terminal<'_>, search: &str) -> AppResult<()> {
    let all = state.store.list_posts();
    let shown = filter_admin_posts(&all, search);

    if term.json {
        term.print_json(&shown)
    } else {
        term.print(&crate::render::admin_table(&shown))
    }
}

async fn create(state: &AppState, term: &mut Terminal<'_>, args: EditArgs) -> AppResult<()> {
    let mut draft = PostDraft::default();
    apply_args(&mut draft, &args)?;
    run_assists(state, &mut draft, &args).await;

    let post = publish(&state.store, draft, None, now_millis())?;
    tracing::info!(id = %post.id, "Post created");

    if term.json {
        term.print_json(&post)
    } else {
        term.println(&format!("Published {}", post.id))
    }
}

async fn edit(
    state: &AppState,
    term: &mut Terminal<'_>,
    id: &str,
    args: EditArgs,
) -> AppResult<()> {
    let existing = state.store.get_post(id).ok_or_else(|| DomainError::NotFound {
        entity_type: "Post",
        id: id.to_string(),
    })?;

    let mut draft = PostDraft::from_post(&existing);
    apply_args(&mut draft, &args)?;
    run_assists(state, &mut draft, &args).await;

    let post = publish(&state.store, draft, Some(id), now_millis())?;
    tracing::info!(id = %post.id, "Post updated");

    if term.json {
        term.print_json(&post)
    } else {
        term.println(&format!("Updated {}", post.id))
    }
}

fn delete(state: &AppState, term: &mut Terminal<'_>, id: &str, yes: bool) -> AppResult<()> {
    let post = state.store.get_post(id).ok_or_else(|| DomainError::NotFound {
        entity_type: "Post",
        id: id.to_string(),
    })?;

    if !yes {
        let answer = term.prompt(&format!("Delete \"{}\"? [y/N] ", post.title))?;
        if !answer.eq_ignore_ascii_case("y") && !answer.eq_ignore_ascii_case("yes") {
            return term.println("Cancelled.");
        }
    }

    state.store.delete_post(id)?;
    tracing::info!(id = %id, "Post deleted");
    term.println(&format!("Deleted {id}"))
}

async fn assist_text(
    state: &AppState,
    term: &mut Terminal<'_>,
    action: AssistAction,
    content: String,
) -> AppResult<()> {
    let mut draft = PostDraft {
        content,
        ..PostDraft::default()
    };
    assist(&mut draft, state.assistant.as_ref(), action).await;

    let result = match action {
        AssistAction::Summary => draft.summary,
        AssistAction::Title => draft.title,
        AssistAction::Improve => draft.content,
    };
    term.println(&result)
}

/// Overwrite draft fields with whatever the flags provide.
fn apply_args(draft: &mut PostDraft, args: &EditArgs) -> AppResult<()> {
    if let Some(title) = &args.title {
        draft.title = title.clone();
    }
    if let Some(content) = read_content(&args.source)? {
        draft.content = content;
    }
    if let Some(summary) = &args.summary {
        draft.summary = summary.clone();
    }
    if let Some(tags) = &args.tags {
        draft.tags = tags.clone();
    }
    if let Some(cover) = &args.cover {
        draft.cover_image = Some(cover.clone());
    }
    Ok(())
}

async fn run_assists(state: &AppState, draft: &mut PostDraft, args: &EditArgs) {
    for action in args.assist_actions() {
        assist(draft, state.assistant.as_ref(), action).await;
    }
}

fn read_content(source: &ContentSource) -> AppResult<Option<String>> {
    if let Some(content) = &source.content {
        return Ok(Some(content.clone()));
    }
    match &source.content_file {
        Some(path) => fs::read_to_string(path)
            .map(Some)
            .map_err(|e| AppError::BadRequest(format!("cannot read {}: {}", path.display(), e))),
        None => Ok(None),
    }
}
