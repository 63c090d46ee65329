//! Types command implementation

use crate::catalog::TemplateRegistry;
use crate::error::Result;

/// Run the types command
pub fn run() -> Result<()> {
    let registry = TemplateRegistry::new();

    for template in registry.templates() {
        println!("{:<14} {}", template.id(), template.display_name());
    }

    Ok(())
}
