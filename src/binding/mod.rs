pub mod binding_model;
pub mod builder;
pub mod classifier;
pub mod error;
pub mod field_name;
pub mod identifier;
pub mod validator;
