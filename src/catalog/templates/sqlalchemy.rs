//! SQLAlchemy project template.

use crate::catalog::ProjectTemplate;

/// Template for a Python package built around SQLAlchemy models.
pub struct SqlalchemyTemplate;

impl ProjectTemplate for SqlalchemyTemplate {
    fn id(&self) -> &'static str {
        "sqlalchemy"
    }

    fn display_name(&self) -> &'static str {
        "SQLAlchemy project"
    }

    fn dirs(&self) -> &'static [&'static str] {
        &["src", "tests"]
    }

    fn files(&self) -> &'static [&'static str] {
        &[
            "setup_py.template",
            "src/__init___py.template",
            "src/models_py.template",
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
