use fairval_core::{Capability, FairvalError};

/// Collapse a set of provider errors into a uniform `FairvalError` outcome.
///
/// Rules:
/// - If `attempted_any` is false → `Unsupported(capability)`.
/// - If all errors are `ProviderTimeout` → `AllProvidersTimedOut(capability)`.
/// - If `not_found_what` is `Some` and all errors are `NotFound` → `NotFound(what)`.
/// - Else → `AllProvidersFailed(errors)`.
pub fn collapse_errors(
    capability: Capability,
    attempted_any: bool,
    errors: Vec<FairvalError>,
    not_found_what: Option<String>,
) -> FairvalError {
    if !attempted_any {
        return FairvalError::unsupported(capability.to_string());
    }
    if !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, FairvalError::ProviderTimeout { .. }))
    {
        return FairvalError::AllProvidersTimedOut {
            capability: capability.to_string(),
        };
    }
    if let Some(what) = not_found_what
        && !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, FairvalError::NotFound { .. }))
    {
        return FairvalError::not_found(what);
    }
    FairvalError::AllProvidersFailed(errors)
}
