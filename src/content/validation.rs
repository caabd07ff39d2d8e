//! Validation for loaded content values.

use super::registry::ContentRegistry;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' has invalid field '{}': {}",
            self.source_type, self.source_id, self.field, self.message
        )
    }
}

/// Helper macro for checking a value is positive and finite
macro_rules! check_positive {
    ($errors:expr, $source_type:expr, $source_id:expr, $field:expr, $value:expr) => {
        if !($value.is_finite() && $value > 0.0) {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field,
                message: format!("expected a positive number, got {}", $value),
            });
        }
    };
}

/// Validate the registry. Returns a list of errors, empty if all content is usable.
pub fn validate_content(registry: &ContentRegistry) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let player = &registry.player;
    if let Err(e) = player.controller.validate() {
        errors.push(ValidationError {
            source_type: "Player",
            source_id: "player".to_string(),
            field: "controller",
            message: e.to_string(),
        });
    }
    check_positive!(errors, "Player", "player", "body.mass", player.body.mass);
    check_positive!(errors, "Player", "player", "body.size.0", player.body.size.0);
    check_positive!(errors, "Player", "player", "body.size.1", player.body.size.1);
    check_positive!(
        errors,
        "Player",
        "player",
        "body.foot_size.0",
        player.body.foot_size.0
    );
    check_positive!(
        errors,
        "Player",
        "player",
        "body.foot_size.1",
        player.body.foot_size.1
    );

    if registry.current_level().is_none() {
        errors.push(ValidationError {
            source_type: "Level",
            source_id: registry.start_level.clone().unwrap_or_default(),
            field: "items",
            message: "no level to start in".to_string(),
        });
    }

    for (id, level) in &registry.levels {
        for edge in &level.edges {
            // A boundary needs at least one segment.
            if edge.points.len() < 2 {
                errors.push(ValidationError {
                    source_type: "Level",
                    source_id: id.clone(),
                    field: "edges.points",
                    message: format!("edge needs at least 2 points, got {}", edge.points.len()),
                });
            }
            if edge
                .points
                .iter()
                .any(|(x, y)| !x.is_finite() || !y.is_finite())
            {
                errors.push(ValidationError {
                    source_type: "Level",
                    source_id: id.clone(),
                    field: "edges.points",
                    message: "edge points must be finite".to_string(),
                });
            }
        }
    }

    errors
}
