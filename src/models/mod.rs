//! Descriptor models for OCCI categories.

mod action;
mod attribute;
mod category;

pub use action::Action;
pub use attribute::AttributeDefinition;
pub use category::{Category, CategoryClass};
