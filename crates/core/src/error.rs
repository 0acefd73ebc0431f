use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for CoreError {
    /// Flatten field errors (including nested list entries) into a single
    /// `path: message` list, sorted so the output is stable across runs.
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut parts = Vec::new();
        collect_messages(&errors, "", &mut parts);
        parts.sort();
        CoreError::Validation(parts.join("; "))
    }
}

fn collect_messages(errors: &validator::ValidationErrors, prefix: &str, out: &mut Vec<String>) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(errs) => {
                let messages: Vec<String> = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                out.push(format!("{path}: {}", messages.join(", ")));
            }
            ValidationErrorsKind::Struct(inner) => collect_messages(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_messages(inner, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 2, message = "too short"))]
        name: String,
        #[validate(range(min = 0.0, max = 10.0))]
        score: f64,
    }

    #[derive(Validate)]
    struct Batch {
        #[validate(nested)]
        items: Vec<Sample>,
    }

    #[test]
    fn validation_errors_flatten_into_sorted_message() {
        let sample = Sample {
            name: "x".into(),
            score: 11.0,
        };
        let err = CoreError::from(sample.validate().unwrap_err());
        assert_matches!(err, CoreError::Validation(msg) => {
            assert_eq!(msg, "name: too short; score: range");
        });
    }

    #[test]
    fn nested_list_errors_carry_their_index() {
        let batch = Batch {
            items: vec![
                Sample {
                    name: "ok".into(),
                    score: 5.0,
                },
                Sample {
                    name: "ok".into(),
                    score: -1.0,
                },
            ],
        };
        let err = CoreError::from(batch.validate().unwrap_err());
        assert_matches!(err, CoreError::Validation(msg) => {
            assert_eq!(msg, "items[1].score: range");
        });
    }
}
