//! Built-in project templates.

mod flask;
mod flask_large;
mod python;
mod sqlalchemy;

pub use flask::FlaskTemplate;
pub use flask_large::FlaskLargeTemplate;
pub use python::PythonTemplate;
pub use sqlalchemy::SqlalchemyTemplate;

use crate::catalog::ProjectTemplate;

/// Returns all built-in templates.
pub fn all_templates() -> Vec<Box<dyn ProjectTemplate>> {
    vec![
        Box::new(PythonTemplate),
        Box::new(FlaskTemplate),
        Box::new(FlaskLargeTemplate),
        Box::new(SqlalchemyTemplate),
    ]
}
