/// Defers an expression or statement block until the end of the enclosing
/// scope.
///
/// `defer!` declares an anonymous [`ScopeGuard`](crate::ScopeGuard) bound to
/// the current block, wrapping its body in a closure. The closure borrows the
/// enclosing scope's variables the way any Rust closure does, so the deferred
/// code may read and mutate local state. Macro hygiene keeps each expansion's
/// binding distinct; repeated use in one scope is fine, and the bodies run in
/// reverse declaration order when the scope ends.
///
/// # Examples
///
/// ```
/// use defer::defer;
/// use std::cell::RefCell;
///
/// let log = RefCell::new(Vec::new());
/// {
///     defer!(log.borrow_mut().push("deferred"));
///     log.borrow_mut().push("body");
/// }
/// assert_eq!(*log.borrow(), ["body", "deferred"]);
/// ```
///
/// A statement block works as well:
///
/// ```
/// use defer::defer;
/// use std::cell::Cell;
///
/// let open_handles = Cell::new(1);
/// {
///     defer! {
///         let remaining = open_handles.get() - 1;
///         open_handles.set(remaining);
///     }
/// }
/// assert_eq!(open_handles.get(), 0);
/// ```
#[macro_export]
macro_rules! defer {
    ($($action:tt)*) => {
        let _guard = $crate::ScopeGuard::new(|| {
            $($action)*
        });
    };
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_defer_runs_at_scope_exit() {
        let log = RefCell::new(Vec::new());

        {
            defer!(log.borrow_mut().push("deferred"));

            log.borrow_mut().push("body");
        }

        assert_eq!(*log.borrow(), ["body", "deferred"]);
    }

    #[test]
    fn test_defer_mutates_captured_local() {
        let mut value = 0;

        {
            defer!(value = 42);
        }

        assert_eq!(value, 42);
    }

    #[test]
    fn test_defer_statement_block() {
        let calls = Cell::new(0);

        {
            defer! {
                let next = calls.get() + 1;
                calls.set(next);
            }
        }

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_defer_reverse_order() {
        let log = RefCell::new(Vec::new());

        {
            defer!(log.borrow_mut().push(1));
            defer!(log.borrow_mut().push(2));
            defer!(log.borrow_mut().push(3));
        }

        assert_eq!(*log.borrow(), [3, 2, 1]);
    }

    #[test]
    fn test_defer_fires_on_early_return() {
        fn run(counter: &Cell<u32>, early: bool) -> &'static str {
            defer!(counter.set(counter.get() + 1));

            if early {
                return "early";
            }

            "late"
        }

        let counter = Cell::new(0);

        assert_eq!(run(&counter, true), "early");
        assert_eq!(counter.get(), 1);

        assert_eq!(run(&counter, false), "late");
        assert_eq!(counter.get(), 2);
    }
}
