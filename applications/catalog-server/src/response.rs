/// Handler outcomes
use crate::views::View;
use axum::response::{Html, IntoResponse, Redirect, Response};

/// What a genre handler asks the HTTP layer to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Render a view as an HTML page
    Render(View),
    /// Send the client elsewhere (303 See Other)
    Redirect(String),
}

impl Outcome {
    pub fn redirect(to: impl Into<String>) -> Self {
        Outcome::Redirect(to.into())
    }
}

impl From<View> for Outcome {
    fn from(view: View) -> Self {
        Outcome::Render(view)
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self {
            Outcome::Render(view) => Html(view.render()).into_response(),
            Outcome::Redirect(to) => Redirect::to(&to).into_response(),
        }
    }
}
