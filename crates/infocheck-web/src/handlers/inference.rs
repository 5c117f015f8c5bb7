//! Inference page — claim verification with per-verdict summary.

use axum::{extract::State, response::Html, Form};
use minijinja::{context, Value};
use tracing::warn;

use infocheck_client::InferenceOutcome;
use infocheck_common::InferenceResult;

use crate::handlers::SubmitForm;
use crate::state::SharedState;
use crate::view::{
    count_labels, format_score, highlight_first, sort_by_verdict, ErrorKind, LabelCounts, Phase,
    ViewState,
};

pub async fn inference_page(State(state): State<SharedState>) -> Html<String> {
    render(&state, &ViewState::new(), "")
}

pub async fn inference_submit(
    State(state): State<SharedState>,
    Form(form): Form<SubmitForm>,
) -> Html<String> {
    let mut view: ViewState<Vec<InferenceResult>> = ViewState::new();
    view.edit(&form.data);

    if let Some(token) = view.submit() {
        let outcome = match state.backend.infer(&form.data).await {
            Ok(InferenceOutcome::Results(results)) => Ok(results),
            Ok(InferenceOutcome::Empty) => Err(ErrorKind::EmptyResult),
            Err(err) => {
                warn!(%err, "inference backend call failed");
                Err(ErrorKind::Transport)
            }
        };
        view.complete(token, outcome);
    }

    render(&state, &view, &form.data)
}

fn render(
    state: &SharedState,
    view: &ViewState<Vec<InferenceResult>>,
    submitted: &str,
) -> Html<String> {
    let mut error: Option<&'static str> = None;
    let mut counts: Option<LabelCounts> = None;
    let mut cards: Vec<Value> = Vec::new();

    match view.phase() {
        Phase::Success(results) => {
            counts = Some(count_labels(results));
            let mut ordered = results.clone();
            sort_by_verdict(&mut ordered);
            cards = ordered
                .iter()
                .map(|item| {
                    context! {
                        label => item.label.as_str(),
                        label_vi => item.label.display_vi(),
                        score => format_score(item.inference_score),
                        evidence => &item.evidence,
                        segments => Value::from_serialize(highlight_first(
                            &item.context.content,
                            &item.evidence,
                        )),
                    }
                })
                .collect();
        }
        Phase::Error(kind) => error = Some(kind.message()),
        Phase::Idle | Phase::Submitting => {}
    }

    state.templates.render_page(
        "inference.html",
        context! {
            input => view.input(),
            submitted => submitted,
            error => error,
            counts => counts,
            results => cards,
        },
    )
}
