use std::sync::Arc;

use crate::interpreter::value::{core::Variant, dynamic::DynamicVariant};

/// What a variable name resolves to.
///
/// Constants are captured into the program at compile time. Dynamic bindings
/// are read each time the variable node is forced, so they observe the value
/// set by the latest [`DynamicVariant::update`].
#[derive(Debug, Clone)]
pub enum Binding {
    /// A fixed value.
    Constant(Variant),
    /// A value refreshed once per cycle by the host.
    Dynamic(Arc<DynamicVariant>),
}

impl Binding {
    /// The current value of the binding.
    #[must_use]
    pub fn value(&self) -> Variant {
        match self {
            Self::Constant(value) => value.clone(),
            Self::Dynamic(variant) => variant.value(),
        }
    }
}
