//! Valuation rules, reference data and the calculator's form state.

pub mod app_state;
pub mod confidence;
pub mod engine;
pub mod entities;
pub mod evaluation;
pub mod form;
pub mod insights;
pub mod reference;

pub use app_state::{AppState, TablesSource};
pub use confidence::ConfidenceLevel;
pub use engine::{ValuationEngine, ValuationReport};
pub use entities::{AppCategory, SocialPlatform, ValuationInput};
pub use form::FormField;
pub use reference::{ReferenceTables, TablesError};
