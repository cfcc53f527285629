pub mod tag_model;
