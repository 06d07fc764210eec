//! Administrative JSON API
//!
//! Every handler passes the resolved actor into [`ManagePollsUseCase`], which
//! rejects anyone who is not an administrator.
//!
//! [`ManagePollsUseCase`]: polls_application::ManagePollsUseCase

use super::actor::CurrentActor;
use super::error::WebError;
use super::state::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use polls_application::QuestionPatch;
use polls_domain::{Choice, ChoiceId, Question, QuestionDetail, QuestionId};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question_text: String,
    pub pub_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub choices: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuestionRequest {
    pub question_text: Option<String>,
    pub pub_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct AddChoiceRequest {
    pub choice_text: String,
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, WebError> {
    payload
        .map(|Json(inner)| inner)
        .map_err(|rejection| WebError::BadRequest(rejection.body_text()))
}

pub async fn get_question(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(id): Path<i64>,
) -> Result<Json<QuestionDetail>, WebError> {
    let detail = state
        .manage_polls
        .get_question(actor, QuestionId::new(id))
        .await?;
    Ok(Json(detail))
}

pub async fn create_question(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<QuestionDetail>), WebError> {
    let request = body(payload)?;
    let detail = state
        .manage_polls
        .create_question(actor, request.question_text, request.pub_date, request.choices)
        .await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

pub async fn update_question(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateQuestionRequest>, JsonRejection>,
) -> Result<Json<Question>, WebError> {
    let request = body(payload)?;
    let patch = QuestionPatch {
        question_text: request.question_text,
        pub_date: request.pub_date,
    };
    let question = state
        .manage_polls
        .update_question(actor, QuestionId::new(id), patch)
        .await?;
    Ok(Json(question))
}

pub async fn delete_question(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(id): Path<i64>,
) -> Result<StatusCode, WebError> {
    state
        .manage_polls
        .delete_question(actor, QuestionId::new(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_choice(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(id): Path<i64>,
    payload: Result<Json<AddChoiceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Choice>), WebError> {
    let request = body(payload)?;
    let choice = state
        .manage_polls
        .add_choice(actor, QuestionId::new(id), request.choice_text)
        .await?;
    Ok((StatusCode::CREATED, Json(choice)))
}

pub async fn delete_choice(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(id): Path<i64>,
) -> Result<StatusCode, WebError> {
    state
        .manage_polls
        .delete_choice(actor, ChoiceId::new(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
