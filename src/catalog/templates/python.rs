//! Plain Python package template.

use crate::catalog::ProjectTemplate;

/// Template for a plain Python package: a source directory named after
/// the project, a test suite and a setup script.
pub struct PythonTemplate;

impl ProjectTemplate for PythonTemplate {
    fn id(&self) -> &'static str {
        "python"
    }

    fn display_name(&self) -> &'static str {
        "Python package"
    }

    fn dirs(&self) -> &'static [&'static str] {
        &["docs", "src", "tests"]
    }

    fn files(&self) -> &'static [&'static str] {
        &[
            "setup_py.template",
            "src/__init___py.template",
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
