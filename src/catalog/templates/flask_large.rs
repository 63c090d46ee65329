//! Multi-module Flask application template.

use crate::catalog::ProjectTemplate;

/// Template for a larger Flask application laid out as a package, with
/// separate model and view modules and a test suite.
pub struct FlaskLargeTemplate;

impl ProjectTemplate for FlaskLargeTemplate {
    fn id(&self) -> &'static str {
        "flask-large"
    }

    fn display_name(&self) -> &'static str {
        "Flask web app (large)"
    }

    fn dirs(&self) -> &'static [&'static str] {
        &[
            "src",
            "src/static",
            "src/static/css",
            "src/static/js",
            "src/templates",
            "tests",
        ]
    }

    fn files(&self) -> &'static [&'static str] {
        &[
            "setup_py.template",
            "src/__init___py.template",
            "src/models_py.template",
            "src/static/css/style.css",
            "src/static/js/app.js",
            "src/templates/index.html",
            "src/views_py.template",
            "tests/unittest_py.template",
        ]
    }

    fn replacements(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("src", "{modname}"),
            ("unittest_py.template", "test_{modname}.py"),
        ]
    }
}
