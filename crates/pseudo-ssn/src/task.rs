//! Generation task orchestration.
//!
//! Runs cancellation check, validation, and generation in sequence, then
//! decides whether a failure is raised or returned inside the result. This is
//! the only place that inspects `throw_on_failure` or applies message
//! overrides.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::{debug, warn};

use crate::cancellation::CancellationFlag;
use crate::error::{ExecuteError, Field, SsnError};
use crate::generator::generate;
use crate::options::GenerationOptions;
use crate::person::PersonInput;
use crate::result::{FailureDetails, GenerationResult};
use crate::validation::validate;

/// Generation task bound to a clock.
///
/// The clock supplies "today" for strict validation; everything else is
/// independent of time.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use pseudo_ssn::{CancellationFlag, GenerationOptions, Gender, PersonInput, SsnTask};
///
/// let task = SsnTask::new(Arc::new(DefaultClock));
/// let person = PersonInput::new("Max", "Mustermann", "1990-01-15", Gender::Male);
/// let result = task
///     .execute(&person, &GenerationOptions::default(), &CancellationFlag::new())
///     .expect("generation succeeds");
///
/// assert!(result.success);
/// assert_eq!(result.identifier.len(), 12);
/// ```
#[derive(Clone)]
pub struct SsnTask {
    clock: Arc<dyn Clock>,
}

impl SsnTask {
    /// Creates a task reading the current date from `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Validates the input and generates its identifier.
    ///
    /// # Errors
    ///
    /// With `throw_on_failure` set, any failure is returned as
    /// [`ExecuteError`]: [`ExecuteError::Overridden`] when an override
    /// message is configured, [`ExecuteError::Failed`] otherwise. Without it,
    /// failures are reported through [`GenerationResult::error`] and this
    /// function always returns `Ok`.
    pub fn execute(
        &self,
        input: &PersonInput,
        options: &GenerationOptions,
        cancellation: &CancellationFlag,
    ) -> Result<GenerationResult, ExecuteError> {
        self.run(input, options, cancellation)
            .or_else(|error| map_failure(error, options))
    }

    fn run(
        &self,
        input: &PersonInput,
        options: &GenerationOptions,
        cancellation: &CancellationFlag,
    ) -> Result<GenerationResult, SsnError> {
        if cancellation.is_cancelled() {
            warn!("pseudo-ssn generation cancelled before start");
            return Err(SsnError::Cancelled);
        }

        let today = self.clock.local().date_naive();
        validate(input, options.validation_mode, today)?;
        let generated = generate(input)?;

        debug!(
            format = ?options.format,
            validation_mode = ?options.validation_mode,
            "pseudo-ssn generated"
        );
        Ok(GenerationResult::success(generated, options.format))
    }
}

impl Default for SsnTask {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock))
    }
}

/// Validates the input and generates its identifier using the system clock.
///
/// # Errors
///
/// See [`SsnTask::execute`].
///
/// # Example
///
/// ```
/// use pseudo_ssn::{CancellationFlag, GenerationOptions, Gender, PersonInput, execute};
///
/// let options = GenerationOptions {
///     throw_on_failure: false,
///     ..GenerationOptions::default()
/// };
/// let person = PersonInput::new("", "Test", "1990-01-01", Gender::Male);
/// let result = execute(&person, &options, &CancellationFlag::new()).expect("returned");
///
/// assert!(!result.success);
/// assert_eq!(
///     result.error.map(|error| error.message).as_deref(),
///     Some("FirstName cannot be empty.")
/// );
/// ```
pub fn execute(
    input: &PersonInput,
    options: &GenerationOptions,
    cancellation: &CancellationFlag,
) -> Result<GenerationResult, ExecuteError> {
    SsnTask::default().execute(input, options, cancellation)
}

/// Raises or returns a failure according to the options.
fn map_failure(
    error: SsnError,
    options: &GenerationOptions,
) -> Result<GenerationResult, ExecuteError> {
    debug!(
        kind = error.kind(),
        field = error.field().map(Field::as_str),
        %error,
        throw_on_failure = options.throw_on_failure,
        "pseudo-ssn generation failed"
    );

    let message_override = options.message_override();
    if options.throw_on_failure {
        return Err(message_override.map_or_else(
            || ExecuteError::Failed(error.clone()),
            |message| ExecuteError::Overridden {
                message: message.to_owned(),
                source: error.clone(),
            },
        ));
    }

    let message = message_override.map_or_else(
        || error.to_string(),
        |prefix| format!("{prefix}: {error}"),
    );
    Ok(GenerationResult::failure(FailureDetails {
        message,
        cause: error,
    }))
}
