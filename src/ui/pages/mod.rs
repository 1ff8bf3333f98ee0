pub mod calculator;
pub mod methodology;
pub mod results;

pub use calculator::CalculatorPage;
pub use methodology::MethodologyPage;
pub use results::ResultsPage;
