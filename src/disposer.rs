use std::cell::RefCell;

/// Handle that releases whatever an `attach_*` call wired up.
///
/// `dispose` runs the teardown at most once, so calling it repeatedly is
/// harmless. Dropping the handle disposes it as well; effects that should
/// live for the whole page are kept in the page registry in `lib.rs`.
pub struct Disposer {
    teardown: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl Disposer {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: RefCell::new(Some(Box::new(teardown))),
        }
    }

    /// Disposer for an effect that never attached.
    pub fn noop() -> Self {
        Self {
            teardown: RefCell::new(None),
        }
    }

    /// One handle for several effects, torn down in the given order.
    pub fn merge(parts: Vec<Disposer>) -> Self {
        if parts.is_empty() {
            return Self::noop();
        }
        Self::new(move || {
            for part in &parts {
                part.dispose();
            }
        })
    }

    pub fn dispose(&self) {
        // Release the borrow before running: teardown may drop closures that
        // still reference this handle.
        let teardown = self.teardown.borrow_mut().take();
        if let Some(f) = teardown {
            f();
        }
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.teardown.borrow().is_none()
    }
}

impl Drop for Disposer {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for Disposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Disposer")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
