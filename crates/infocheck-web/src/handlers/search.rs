//! Question & Answering page.

use axum::{extract::State, response::Html, Form};
use minijinja::{context, Value};
use tracing::warn;

use infocheck_client::AnswerOutcome;
use infocheck_common::AnswerResult;

use crate::handlers::SubmitForm;
use crate::state::SharedState;
use crate::view::{highlight_first, ErrorKind, Phase, ViewState};

pub async fn search_page(State(state): State<SharedState>) -> Html<String> {
    render(&state, &ViewState::new())
}

pub async fn search_submit(
    State(state): State<SharedState>,
    Form(form): Form<SubmitForm>,
) -> Html<String> {
    let mut view: ViewState<AnswerResult> = ViewState::new();
    view.edit(&form.data);

    if let Some(token) = view.submit() {
        let outcome = match state.backend.answer(&form.data).await {
            Ok(AnswerOutcome::Answered(result)) => Ok(result),
            Ok(AnswerOutcome::Empty) => Err(ErrorKind::EmptyResult),
            Err(err) => {
                warn!(%err, "answering backend call failed");
                Err(ErrorKind::Transport)
            }
        };
        view.complete(token, outcome);
    }

    render(&state, &view)
}

fn render(state: &SharedState, view: &ViewState<AnswerResult>) -> Html<String> {
    let (error, result) = match view.phase() {
        Phase::Success(result) => (None, Some(result)),
        Phase::Error(kind) => (Some(kind.message()), None),
        Phase::Idle | Phase::Submitting => (None, None),
    };

    // The answer is bolded inside the source document; only its first
    // occurrence, and through the escaping template path.
    let result = result.map(|r| {
        context! {
            query => &r.query,
            answer => &r.answer,
            segments => Value::from_serialize(highlight_first(&r.document.content, &r.answer)),
        }
    });

    state.templates.render_page(
        "search.html",
        context! {
            input => view.input(),
            error => error,
            result => result,
        },
    )
}
