use std::{fmt, sync::Arc};

/// Shared handle to a UI callback. Two callbacks are equal only when they
/// are the same handle, or both are no-ops.
pub struct Callback<T> {
    inner: Option<Arc<dyn Fn(T) + Send + Sync>>,
}

impl<T> Callback<T> {
    pub fn new(f: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            inner: Some(Arc::new(f)),
        }
    }

    pub fn noop() -> Self {
        Self { inner: None }
    }

    pub fn is_noop(&self) -> bool {
        self.inner.is_none()
    }

    pub fn call(&self, value: T) {
        if let Some(f) = &self.inner {
            f(value);
        }
    }
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Default for Callback<T> {
    fn default() -> Self {
        Self::noop()
    }
}

impl<T> PartialEq for Callback<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.inner, &other.inner) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_noop() {
            f.write_str("Callback(noop)")
        } else {
            f.write_str("Callback(..)")
        }
    }
}
