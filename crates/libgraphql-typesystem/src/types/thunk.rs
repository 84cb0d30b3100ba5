use crate::schema::SchemaBuildError;
use indexmap::IndexMap;
use std::sync::Mutex;
use std::sync::OnceLock;
use std::sync::PoisonError;

/// A definition supplied either directly or as a zero-argument producer that
/// is invoked the first time the definition is needed.
///
/// Producers make mutually-recursive types expressible: a field map may
/// refer to a type that has not been constructed yet at the time the
/// enclosing type is built.
pub enum Thunk<T> {
    Direct(T),
    Producer(Box<dyn FnOnce() -> T + Send>),
}
impl<T> Thunk<T> {
    pub fn producer(producer: impl FnOnce() -> T + Send + 'static) -> Self {
        Self::Producer(Box::new(producer))
    }

    pub fn is_producer(&self) -> bool {
        matches!(self, Self::Producer(_))
    }

    fn evaluate(self) -> T {
        match self {
            Self::Direct(value) => value,
            Self::Producer(producer) => producer(),
        }
    }
}
impl<T: std::fmt::Debug> std::fmt::Debug for Thunk<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct(value) => f.debug_tuple("Direct").field(value).finish(),
            Self::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

/// A [`Thunk`] paired with the memoized outcome of validating it.
///
/// The thunk is evaluated and validated at most once per instance. Whatever
/// the first evaluation yields (success or failure) is what every later
/// access observes.
pub(crate) struct LazyDefinition<T, R> {
    defined: OnceLock<Result<R, SchemaBuildError>>,
    source: Mutex<Option<Thunk<T>>>,
}
impl<T, R> LazyDefinition<T, R> {
    pub fn new(source: Thunk<T>) -> Self {
        Self {
            defined: OnceLock::new(),
            source: Mutex::new(Some(source)),
        }
    }

    pub fn get_or_define(
        &self,
        define: impl FnOnce(T) -> Result<R, SchemaBuildError>,
    ) -> Result<&R, SchemaBuildError> {
        self.defined
            .get_or_init(|| {
                let source = self.source
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .take()
                    .expect("an earlier evaluation of this lazy definition panicked");
                define(source.evaluate())
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn is_defined(&self) -> bool {
        self.defined.get().is_some()
    }
}
impl<T, R> std::fmt::Debug for LazyDefinition<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyDefinition")
            .field("is_defined", &self.is_defined())
            .finish()
    }
}

/// Add one entry to a directly-supplied map, replacing any producer that was
/// set before.
pub(super) fn insert_direct_entry<V>(
    source: &mut Option<Thunk<IndexMap<String, V>>>,
    key: String,
    value: V,
) {
    match source {
        Some(Thunk::Direct(entries)) => {
            entries.insert(key, value);
        },
        _ => *source = Some(Thunk::Direct(IndexMap::from([(key, value)]))),
    }
}
