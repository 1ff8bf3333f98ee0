use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use super::confidence::{score_confidence, ConfidenceResult};
use super::entities::{Diagnostic, NormalizedInput, ValuationInput};
use super::evaluation::{
    combine, project_arr, value_from_revenue, value_from_social, value_from_traction,
    ValuationResult,
};
use super::insights::generate_insights;
use super::reference::ReferenceTables;

/// Everything the engine derives from one input snapshot.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValuationReport {
    pub input: NormalizedInput,
    #[serde(flatten)]
    pub result: ValuationResult,
    pub confidence: ConfidenceResult,
    pub insights: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Runs the valuation rules against a fixed set of reference tables.
///
/// Cheap to clone; the tables are shared.
#[derive(Clone, Debug, PartialEq)]
pub struct ValuationEngine {
    tables: Arc<ReferenceTables>,
}

impl Default for ValuationEngine {
    fn default() -> Self {
        Self::new(ReferenceTables::default())
    }
}

impl ValuationEngine {
    pub fn new(tables: ReferenceTables) -> Self {
        Self {
            tables: Arc::new(tables),
        }
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn evaluate(&self, input: &ValuationInput) -> ValuationReport {
        let (input, diagnostics) = input.normalize();
        for diagnostic in &diagnostics {
            if diagnostic.is_warning() {
                warn!(%diagnostic, "valuation input corrected");
            } else {
                debug!(%diagnostic, "valuation caveat");
            }
        }

        let result = self.value(&input);
        let confidence = score_confidence(&input);
        let insights = generate_insights(&input, &result, &confidence);

        debug!(
            category = %input.category,
            low = result.low,
            high = result.high,
            score = confidence.score,
            level = %confidence.level,
            "valuation computed"
        );

        ValuationReport {
            input,
            result,
            confidence,
            insights,
            diagnostics,
        }
    }

    /// Sub-valuations and combined range for an already normalised input.
    pub fn value(&self, input: &NormalizedInput) -> ValuationResult {
        let tables = self.tables();
        let revenue = value_from_revenue(input.mrr, tables);
        let traction = value_from_traction(
            input.registrations,
            input.category,
            input.avg_service_price,
            input.conversion_override_pct,
            tables,
        );
        let projected_arr = project_arr(traction.value, tables);
        let social = value_from_social(&input.social, tables);

        combine(revenue, traction, projected_arr, social, input.mrr > 0.0)
    }
}
