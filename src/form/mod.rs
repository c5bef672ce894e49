//! Schema-driven form logic, independent of any UI toolkit.

pub mod field_view;
pub mod form_state;
pub mod prediction;
pub mod result_presenter;
pub mod schema_filter;

pub use field_view::{ChoiceOption, FieldControl, LabelDictionary, render_field};
pub use form_state::{FormError, FormState};
pub use prediction::{
    FailureKind, PredictTicket, PredictionController, PredictionOutcome, RequestLifecycle,
};
pub use result_presenter::{ResultIcon, ResultView, Severity, present};
pub use schema_filter::{AllowList, MUSHROOM_FIELDS, filter_fields};
