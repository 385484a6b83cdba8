//! Dashboard variable interpolation

pub mod interpolator;
pub mod template_variables;
