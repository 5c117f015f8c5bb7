//! Embedded minijinja templates. Autoescaping is on for every page, so
//! backend-provided text (answers, evidence, document content) is always
//! escaped; emphasis markup comes only from the templates themselves.

use axum::response::Html;
use minijinja::{context, Environment, Value};
use tracing::error;

use crate::nav::{
    HEADER_COLLAPSED_PX, HEADER_EXPANDED_PX, NAV_LINKS, SCROLL_THRESHOLD_PX,
};

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("layout.html", include_str!("../templates/layout.html"))?;
        env.add_template("home.html", include_str!("../templates/home.html"))?;
        env.add_template("search.html", include_str!("../templates/search.html"))?;
        env.add_template("inference.html", include_str!("../templates/inference.html"))?;

        env.add_global("nav_links", Value::from_serialize(NAV_LINKS));
        env.add_global(
            "header",
            context! {
                expanded => HEADER_EXPANDED_PX,
                collapsed => HEADER_COLLAPSED_PX,
                threshold => SCROLL_THRESHOLD_PX,
            },
        );

        Ok(Self { env })
    }

    /// Render a page template into an HTML response. A template failure is a
    /// bug, not user error; it is logged and answered with a bare error page.
    pub fn render_page(&self, name: &str, ctx: Value) -> Html<String> {
        match self.env.get_template(name).and_then(|t| t.render(ctx)) {
            Ok(body) => Html(body),
            Err(err) => {
                error!(template = name, %err, "template rendering failed");
                Html("<h1>InfoCheck</h1><p>Internal rendering error.</p>".to_string())
            }
        }
    }
}
