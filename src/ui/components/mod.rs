pub mod confidence_badge;
pub mod insight_list;
pub mod kpi_card;
pub mod method_card;
pub mod share_panel;
pub mod toast;

pub use confidence_badge::{ConfidenceBadge, ScoreBar};
pub use insight_list::InsightList;
pub use kpi_card::KpiCard;
pub use method_card::MethodCard;
pub use share_panel::SharePanel;
pub use toast::{push_toast, Toast, ToastKind, ToastMessage};
