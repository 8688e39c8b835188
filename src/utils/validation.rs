use crate::utils::error::{AppError, FieldError};

/// Outcome of a single declarative rule applied to one field
pub struct RuleCheck {
    pub field: &'static str,
    pub outcome: Result<(), String>,
}

pub fn rule(field: &'static str, outcome: Result<(), String>) -> RuleCheck {
    RuleCheck { field, outcome }
}

pub fn non_empty(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err("must not be empty".to_string())
    } else {
        Ok(())
    }
}

pub fn email(value: &str) -> Result<(), String> {
    match value.split_once('@') {
        Some((local, domain))
            if !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.') =>
        {
            Ok(())
        }
        _ => Err("must be a valid email address".to_string()),
    }
}

pub fn min_f64(value: f64, min: f64) -> Result<(), String> {
    if value >= min {
        Ok(())
    } else {
        Err(format!("must be >= {}", min))
    }
}

pub fn gt_f64(value: f64, min: f64) -> Result<(), String> {
    if value > min {
        Ok(())
    } else {
        Err(format!("must be > {}", min))
    }
}

/// Declarative per-record constraints, checked before persistence.
/// Implementors list their rules; `validate` collects every failing field
/// so a malformed payload reports all problems at once.
pub trait Validate {
    fn rules(&self) -> Vec<RuleCheck>;

    fn validate(&self) -> Result<(), AppError> {
        let failures: Vec<FieldError> = self
            .rules()
            .into_iter()
            .filter_map(|check| {
                check.outcome.err().map(|message| FieldError {
                    field: check.field,
                    message,
                })
            })
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(failures))
        }
    }
}
