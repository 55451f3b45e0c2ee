//! Display-name capability for loggable entities.

/// An entity with a human-readable display name for log lines.
///
/// Services log through this trait rather than formatting raw ids, so log
/// output stays consistent across entity types.
pub trait Named {
    fn display_name(&self) -> String;
}

impl Named for entity::business::Model {
    fn display_name(&self) -> String {
        self.name.clone()
    }
}

impl Named for entity::service::Model {
    fn display_name(&self) -> String {
        self.name.clone()
    }
}

impl Named for entity::user::Model {
    fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }
}

impl Named for entity::appointment::Model {
    fn display_name(&self) -> String {
        format!(
            "appointment {} at {}",
            self.id,
            self.start.format("%Y-%m-%d %H:%M UTC")
        )
    }
}
