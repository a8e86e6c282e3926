/// A RAII guard that defers a closure until the end of the enclosing scope.
///
/// `ScopeGuard` repurposes destructor semantics to emulate the `defer`
/// statement found in other languages: the stored action runs exactly once
/// when the guard is dropped, whether the owning scope ends by falling
/// through, returning early, or unwinding from a panic. The action is never
/// run at construction time.
///
/// A guard is the sole owner of its pending action. The type implements
/// neither `Clone` nor `Copy`, so two guards can never believe they own the
/// same action; moving the guard relocates the obligation without
/// duplicating or losing it, and the moved-from binding can no longer fire.
/// Several guards declared in one scope run in reverse declaration order,
/// mirroring stack unwind order.
///
/// If the action panics when the guard fires, the panic propagates to the
/// caller's unwinding context unchanged. The action slot is emptied before
/// the call begins, so no second invocation can be attempted.
///
/// # Type Parameters
///
/// * `F` - The type of the deferred action, must implement `FnOnce()`
///
/// # Examples
///
/// ## Basic cleanup
///
/// ```
/// use defer::ScopeGuard;
/// use std::cell::Cell;
///
/// let released = Cell::new(false);
/// {
///     let _guard = ScopeGuard::new(|| released.set(true));
///     assert!(!released.get());
/// }
/// // the scope ended, so the action has run
/// assert!(released.get());
/// ```
///
/// ## Transferring the obligation
///
/// ```
/// use defer::ScopeGuard;
/// use std::cell::Cell;
///
/// let fired = Cell::new(0);
/// {
///     let guard = ScopeGuard::new(|| fired.set(fired.get() + 1));
///     {
///         // moving the guard relocates the pending action
///         let _inner = guard;
///     }
///     // the inner scope fired it; the moved-from binding cannot
///     assert_eq!(fired.get(), 1);
/// }
/// assert_eq!(fired.get(), 1);
/// ```
#[must_use = "hold the guard in a local variable to delay the action until scope exit"]
pub struct ScopeGuard<F: FnOnce()> {
    action: Option<F>,
}

impl<F: FnOnce()> ScopeGuard<F> {
    /// Creates a new `ScopeGuard` owning `action`.
    ///
    /// The action is stored, not invoked; it runs when the returned guard is
    /// dropped. Any state the closure captures must remain valid until then.
    ///
    /// # Parameters
    ///
    /// * `action` - The closure to invoke when the guard is dropped
    ///
    /// # Examples
    ///
    /// ```
    /// use defer::ScopeGuard;
    ///
    /// let _guard = ScopeGuard::new(|| println!("cleanup executed"));
    /// // "cleanup executed" is printed when _guard goes out of scope
    /// ```
    #[inline]
    pub fn new(action: F) -> Self {
        ScopeGuard {
            action: Some(action),
        }
    }

    /// Consumes the guard and drops the action without running it.
    ///
    /// The action value, along with everything it captured, is released at
    /// the point of cancellation. The guard's subsequent drop sees an empty
    /// slot and does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use defer::ScopeGuard;
    /// use std::cell::Cell;
    ///
    /// let fired = Cell::new(false);
    ///
    /// let guard = ScopeGuard::new(|| fired.set(true));
    /// guard.cancel();
    ///
    /// // fired remains false because the action was cancelled
    /// assert!(!fired.get());
    /// ```
    #[inline]
    pub fn cancel(mut self) {
        self.action = None;
    }
}

impl<F: FnOnce()> Drop for ScopeGuard<F> {
    fn drop(&mut self) {
        // Take before invoking; the slot must read as consumed even if the
        // action panics.
        if let Some(action) = self.action.take() {
            action();
        }
    }
}
