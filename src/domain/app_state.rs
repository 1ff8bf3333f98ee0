use std::{fmt, path::PathBuf};

use super::engine::{ValuationEngine, ValuationReport};
use super::entities::ValuationInput;
use super::form::{FormDraft, FormErrors};

/// Where the active reference tables were read from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TablesSource {
    #[default]
    BuiltIn,
    File(PathBuf),
}

impl fmt::Display for TablesSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TablesSource::BuiltIn => f.write_str("built-in defaults"),
            TablesSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub engine: ValuationEngine,
    pub tables_source: TablesSource,
    pub draft: FormDraft,
    pub errors: FormErrors,
    /// Latest evaluation, replaced on every submit.
    pub report: Option<ValuationReport>,
}

impl AppState {
    pub fn new(engine: ValuationEngine, tables_source: TablesSource) -> Self {
        Self {
            engine,
            tables_source,
            ..Self::default()
        }
    }

    pub fn with_prefill(mut self, input: Option<&ValuationInput>) -> Self {
        if let Some(input) = input {
            self.draft = FormDraft::from_input(input);
        }
        self
    }

    /// Parses the draft and evaluates it. Field errors are kept on the state
    /// and the previous report is left untouched.
    pub fn submit(&mut self) -> Result<&ValuationReport, &FormErrors> {
        match self.draft.parse() {
            Ok(input) => {
                self.errors.clear();
                Ok(self.report.insert(self.engine.evaluate(&input)))
            }
            Err(errors) => {
                self.errors = errors;
                Err(&self.errors)
            }
        }
    }

    /// Blank form, no report. Engine and tables stay.
    pub fn reset(&mut self) {
        self.draft = FormDraft::default();
        self.errors.clear();
        self.report = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::{FormError, FormField};

    #[test]
    fn submit_stores_report() {
        let mut state = AppState::default();
        state.draft.set(FormField::Mrr, "10000".into());
        state.draft.set(FormField::Mrp, "3000".into());

        let report = state.submit().unwrap();
        assert_eq!(report.result.point_estimate, 720_000.0);
        assert!(state.report.is_some());
    }

    #[test]
    fn failed_submit_keeps_previous_report() {
        let mut state = AppState::default();
        state.draft.set(FormField::Mrr, "100".into());
        state.submit().unwrap();

        state.draft.set(FormField::AppCategory, String::new());
        let errors = state.submit().unwrap_err();
        assert_eq!(errors.get(&FormField::AppCategory), Some(&FormError::MissingCategory));
        assert_eq!(
            state.report.as_ref().map(|r| r.result.point_estimate),
            Some(7_200.0)
        );
    }

    #[test]
    fn reset_clears_form_and_report() {
        let mut state = AppState::default().with_prefill(Some(&ValuationInput {
            mrr: 50.0,
            ..ValuationInput::default()
        }));
        assert_eq!(state.draft.mrr, "50");
        state.reset();
        assert_eq!(state.draft, FormDraft::default());
        assert!(state.report.is_none());
        assert_eq!(state.tables_source, TablesSource::BuiltIn);
    }
}
