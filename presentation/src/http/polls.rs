//! Public poll pages: index, detail, results and vote.

use super::actor::CurrentActor;
use super::error::WebError;
use super::state::AppState;
use axum::{
    extract::{Form, Path, State, rejection::FormRejection},
    response::{Html, IntoResponse, Redirect, Response},
};
use polls_application::{NO_CHOICE_SELECTED, VoteOutcome};
use polls_domain::{ChoiceId, QuestionId};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct VoteForm {
    pub choice: Option<String>,
}

/// Non-numeric ids are treated like unknown ones
fn parse_question_id(raw: &str) -> Result<QuestionId, WebError> {
    raw.parse::<i64>()
        .map(QuestionId::new)
        .map_err(|_| WebError::NotFound)
}

pub async fn root() -> Redirect {
    Redirect::to("/polls/")
}

pub async fn index(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
) -> Result<Html<String>, WebError> {
    let listing = state.list_questions.execute(actor).await?;
    Ok(state.templates.index(&listing.latest_question_list)?)
}

pub async fn detail(
    State(state): State<AppState>,
    _: CurrentActor,
    Path(id): Path<String>,
) -> Result<Html<String>, WebError> {
    let detail = state.show_question.execute(parse_question_id(&id)?).await?;
    Ok(state.templates.detail(&detail, None)?)
}

pub async fn results(
    State(state): State<AppState>,
    _: CurrentActor,
    Path(id): Path<String>,
) -> Result<Html<String>, WebError> {
    let detail = state.show_question.execute(parse_question_id(&id)?).await?;
    Ok(state.templates.results(&detail)?)
}

pub async fn vote(
    State(state): State<AppState>,
    _: CurrentActor,
    Path(id): Path<String>,
    form: Result<Form<VoteForm>, FormRejection>,
) -> Result<Response, WebError> {
    let question = parse_question_id(&id)?;
    let selected = match form {
        Ok(Form(form)) => form
            .choice
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .map(ChoiceId::new),
        Err(rejection) => {
            debug!("Unreadable vote form: {}", rejection);
            None
        }
    };

    match state.cast_vote.execute(question, selected).await? {
        VoteOutcome::Recorded { question, .. } => {
            Ok(Redirect::to(&format!("/polls/{}/results/", question)).into_response())
        }
        VoteOutcome::NoChoiceSelected(detail) => Ok(state
            .templates
            .detail(&detail, Some(NO_CHOICE_SELECTED))?
            .into_response()),
    }
}
