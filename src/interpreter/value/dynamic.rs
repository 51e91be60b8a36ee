use std::{fmt, sync::Arc};

use parking_lot::RwLock;

use crate::{expression::ExpressionBuilder, interpreter::value::core::Variant};

type RefreshFn = dyn Fn() -> Variant + Send + Sync;

/// A named value recomputed once per evaluation cycle.
///
/// The engine never refreshes a dynamic variable on its own. The cycle driver
/// calls [`DynamicVariant::update`] (usually through a
/// [`DynamicVariantList`]) before evaluating any expression that reads it;
/// between updates every read sees the same value.
pub struct DynamicVariant {
    name:    String,
    value:   RwLock<Variant>,
    refresh: Box<RefreshFn>,
}

impl fmt::Debug for DynamicVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicVariant")
         .field("name", &self.name)
         .field("value", &*self.value.read())
         .finish_non_exhaustive()
    }
}

impl DynamicVariant {
    /// Creates a dynamic variable holding `initial` until its first update.
    ///
    /// # Example
    /// ```
    /// use std::sync::{
    ///     Arc,
    ///     atomic::{AtomicU32, Ordering},
    /// };
    ///
    /// use condex::{DynamicVariant, Variant};
    ///
    /// let tick = Arc::new(AtomicU32::new(0));
    /// let source = Arc::clone(&tick);
    /// let var = DynamicVariant::new("tick", 0.0, move || {
    ///     Variant::from(f64::from(source.load(Ordering::Relaxed)))
    /// });
    ///
    /// tick.store(7, Ordering::Relaxed);
    /// assert_eq!(var.value(), Variant::Number(0.0));
    /// var.update();
    /// assert_eq!(var.value(), Variant::Number(7.0));
    /// ```
    pub fn new<F>(name: impl Into<String>, initial: impl Into<Variant>, refresh: F) -> Self
        where F: Fn() -> Variant + Send + Sync + 'static
    {
        Self { name:    name.into(),
               value:   RwLock::new(initial.into()),
               refresh: Box::new(refresh), }
    }

    /// The variable name used in expressions.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value computed by the most recent update.
    #[must_use]
    pub fn value(&self) -> Variant {
        self.value.read().clone()
    }

    /// Recomputes the value from the host.
    pub fn update(&self) {
        let next = (self.refresh)();
        tracing::trace!(name = %self.name, value = %next, "refreshed dynamic variable");
        *self.value.write() = next;
    }
}

/// An ordered group of dynamic variables refreshed together.
///
/// A list can be attached to any number of expression builders. The cycle
/// driver updates the list once per cycle, so each member is refreshed once
/// regardless of how many expressions read it.
#[derive(Debug, Default)]
pub struct DynamicVariantList {
    members: Vec<Arc<DynamicVariant>>,
}

impl DynamicVariantList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dynamic variable, appends it and returns a shared handle.
    pub fn register<F>(&mut self,
                       name: impl Into<String>,
                       initial: impl Into<Variant>,
                       refresh: F)
                       -> Arc<DynamicVariant>
        where F: Fn() -> Variant + Send + Sync + 'static
    {
        let variant = Arc::new(DynamicVariant::new(name, initial, refresh));
        self.members.push(Arc::clone(&variant));
        variant
    }

    /// Appends an existing dynamic variable.
    pub fn push(&mut self, variant: Arc<DynamicVariant>) {
        self.members.push(variant);
    }

    /// Refreshes every member in registration order.
    ///
    /// Only the cycle driver should call this, and it must finish before any
    /// expression reading these variables is evaluated in the same cycle.
    pub fn update(&self) {
        for member in &self.members {
            member.update();
        }
    }

    /// Registers every member in the builder's variable table.
    ///
    /// Members shadow any variable of the same name already in the builder.
    pub fn attach(&self, builder: &mut ExpressionBuilder) {
        for member in &self.members {
            builder.add_dynamic(Arc::clone(member));
        }
    }

    /// Iterates over the members in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<DynamicVariant>> {
        self.members.iter()
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the list has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
