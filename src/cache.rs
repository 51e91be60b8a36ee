use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use parking_lot::{Mutex, RwLock};

use crate::{
    error::Error,
    expression::{Expression, ExpressionBuilder},
    interpreter::{
        symbols::Registry,
        value::{core::Variant, dynamic::DynamicVariantList},
    },
};

static GLOBAL: Lazy<ExpressionCache> = Lazy::new(|| ExpressionCache::new(Arc::new(Registry::global().clone())));

/// A memoizing map from expression text to compiled [`Expression`].
///
/// Keys are the trimmed text. Each key is compiled at most once, even when
/// several threads miss on it together. Text that fails to compile is stored
/// as a placeholder that evaluates to the error message and is recorded on
/// the naughty list. Entries are never evicted.
///
/// # Example
/// ```
/// use std::sync::Arc;
///
/// use condex::{ExpressionCache, Registry};
///
/// let cache = ExpressionCache::new(Arc::new(Registry::builtin()));
///
/// assert!(cache.check("   "));
/// assert!(cache.check("2 > 1"));
/// assert!(!cache.check("((("));
/// assert_eq!(cache.naughty_list(), vec!["(((".to_string()]);
/// ```
#[derive(Debug)]
pub struct ExpressionCache {
    registry: Arc<Registry>,
    lists:    RwLock<Vec<Arc<DynamicVariantList>>>,
    entries:  DashMap<Arc<str>, Arc<Expression>>,
    naughty:  Mutex<Vec<String>>,
}

impl ExpressionCache {
    /// Creates an empty cache compiling against `registry`.
    #[must_use]
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry,
               lists: RwLock::new(Vec::new()),
               entries: DashMap::new(),
               naughty: Mutex::new(Vec::new()) }
    }

    /// The process-wide cache, compiling against [`Registry::global`].
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Registers a dynamic variable list attached to every expression
    /// compiled from now on.
    ///
    /// Registering the same list twice has no effect.
    pub fn register_list(&self, list: Arc<DynamicVariantList>) {
        let mut lists = self.lists.write();
        if !lists.iter().any(|known| Arc::ptr_eq(known, &list)) {
            lists.push(list);
        }
    }

    /// Returns the cached expression for `text`, compiling it on a miss.
    ///
    /// Never fails: text that does not compile yields a quarantined
    /// placeholder.
    pub fn compile(&self, text: &str) -> Arc<Expression> {
        let key = text.trim();

        if let Some(hit) = self.entries.get(key) {
            return Arc::clone(hit.value());
        }

        let entry = self.entries
                        .entry(Arc::from(key))
                        .or_insert_with(|| Arc::new(self.populate(key)));
        Arc::clone(entry.value())
    }

    /// Compiles one key. Runs under the map's entry lock.
    fn populate(&self, key: &str) -> Expression {
        tracing::debug!(source = key, "expression cache miss");

        let mut builder = ExpressionBuilder::new(key, &self.registry);
        for list in self.lists.read().iter() {
            builder.attach(list);
        }

        match builder.compile() {
            Ok(expression) => expression,
            Err(e) => {
                tracing::warn!(source = key, error = %e, "quarantining expression that failed to compile");
                self.naughty.lock().push(key.to_owned());
                Expression::placeholder(key, e.to_string())
            },
        }
    }

    /// Compiles (or fetches) `text` and evaluates it.
    pub fn eval(&self, text: &str) -> Result<Variant, Error> {
        self.compile(text).eval()
    }

    /// Evaluates `text` as a condition.
    ///
    /// Blank text is trivially true and never compiled. Quarantined text and
    /// evaluation failures are false; failures are logged.
    pub fn check(&self, text: &str) -> bool {
        if text.trim().is_empty() {
            return true;
        }

        let expression = self.compile(text);
        if expression.is_quarantined() {
            return false;
        }

        match expression.eval() {
            Ok(value) => value.as_boolean(),
            Err(e) => {
                tracing::warn!(source = expression.source(), error = %e, "condition failed to evaluate");
                false
            },
        }
    }

    /// Refreshes every registered dynamic variable list once.
    pub fn update_dynamics(&self) {
        for list in self.lists.read().iter() {
            list.update();
        }
    }

    /// Texts that failed to compile, in the order they were first seen.
    #[must_use]
    pub fn naughty_list(&self) -> Vec<String> {
        self.naughty.lock().clone()
    }

    /// Number of cached expressions, quarantined ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
