//! Client side of the mushroom classification service.

pub mod api;
pub mod schema;

pub use api::{ClassifierClient, HttpClassifierClient, PredictError, SchemaLoadError};
pub use schema::{
    DescribedOption, FieldDescriptor, FieldOptions, PredictPayload, Prediction, Schema,
};
