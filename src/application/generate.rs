//! Generate use case: stamp a template with the current time

use crate::domain::{NamingTemplate, Timestamp};

/// Render the template for the current local time
pub fn generate(template: &NamingTemplate) -> String {
    generate_at(template, &Timestamp::now())
}

/// Render the template for a given time
pub fn generate_at(template: &NamingTemplate, now: &Timestamp) -> String {
    let name = template.render(now);
    tracing::debug!(template = template.as_str(), name = %name, "generated name");
    name
}
