//! Flask web application template.

use crate::catalog::ProjectTemplate;

/// Template for a single-module Flask application with static assets and
/// an HTML template directory.
pub struct FlaskTemplate;

impl ProjectTemplate for FlaskTemplate {
    fn id(&self) -> &'static str {
        "flask"
    }

    fn display_name(&self) -> &'static str {
        "Flask web app"
    }

    fn dirs(&self) -> &'static [&'static str] {
        &["static", "static/css", "static/js", "templates"]
    }

    fn files(&self) -> &'static [&'static str] {
        &[
            "app_py.template",
            "static/css/style.css",
            "static/js/app.js",
            "templates/index.html",
        ]
    }
}
