//! Display capability
//!
//! [`DisplayInfoProvider`] is the only thing a scaler needs from the host:
//! a way to read the current DPI. Hosts whose toolkit hands out a graphics
//! context that must be released again implement [`ContextSource`] and wrap
//! it in a [`ScopedDisplay`]; the [`GraphicsContext`] guard then releases the
//! context on every exit path, including errors and unwinding.

use crate::{DisplayError, DisplayResult, Dpi};
use tracing::debug;

/// Supplies the DPI of the active display
pub trait DisplayInfoProvider {
    /// Read the current horizontal and vertical DPI.
    fn dpi(&self) -> DisplayResult<Dpi>;
}

impl<P: DisplayInfoProvider + ?Sized> DisplayInfoProvider for &P {
    fn dpi(&self) -> DisplayResult<Dpi> {
        (**self).dpi()
    }
}

impl<P: DisplayInfoProvider + ?Sized> DisplayInfoProvider for Box<P> {
    fn dpi(&self) -> DisplayResult<Dpi> {
        (**self).dpi()
    }
}

/// A display that always reports the same DPI
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedDisplay {
    dpi: Dpi,
}

impl FixedDisplay {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { dpi: Dpi::new(x, y) }
    }

    pub const fn uniform(dpi: f32) -> Self {
        Self {
            dpi: Dpi::uniform(dpi),
        }
    }

    /// A 96 DPI display.
    pub const fn baseline() -> Self {
        Self { dpi: Dpi::BASELINE }
    }
}

impl DisplayInfoProvider for FixedDisplay {
    fn dpi(&self) -> DisplayResult<Dpi> {
        Ok(self.dpi)
    }
}

/// No display attached; every query fails with [`DisplayError::Unavailable`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl DisplayInfoProvider for Headless {
    fn dpi(&self) -> DisplayResult<Dpi> {
        Err(DisplayError::Unavailable("no display attached".to_string()))
    }
}

/// Uses a fixed override when one is configured, the inner provider otherwise
#[derive(Debug, Clone)]
pub struct ConfiguredDisplay<P> {
    dpi_override: Option<Dpi>,
    inner: P,
}

impl<P: DisplayInfoProvider> ConfiguredDisplay<P> {
    pub fn new(dpi_override: Option<Dpi>, inner: P) -> Self {
        Self {
            dpi_override,
            inner,
        }
    }
}

impl<P: DisplayInfoProvider> DisplayInfoProvider for ConfiguredDisplay<P> {
    fn dpi(&self) -> DisplayResult<Dpi> {
        match self.dpi_override {
            Some(dpi) => Ok(dpi),
            None => self.inner.dpi(),
        }
    }
}

/// A toolkit facility that hands out graphics contexts able to report DPI
pub trait ContextSource {
    /// Toolkit handle for an acquired context
    type Handle;

    /// Acquire a context for the active display.
    fn acquire(&self) -> DisplayResult<Self::Handle>;

    /// Read the DPI of an acquired context.
    fn query_dpi(&self, handle: &Self::Handle) -> DisplayResult<Dpi>;

    /// Give the context back to the toolkit.
    fn release(&self, handle: Self::Handle);
}

/// An acquired graphics context, released when dropped
pub struct GraphicsContext<'a, S: ContextSource> {
    source: &'a S,
    handle: Option<S::Handle>,
}

impl<'a, S: ContextSource> GraphicsContext<'a, S> {
    /// Acquire a context from `source`.
    pub fn acquire(source: &'a S) -> DisplayResult<Self> {
        let handle = source.acquire()?;
        Ok(Self {
            source,
            handle: Some(handle),
        })
    }

    /// DPI reported by this context.
    pub fn dpi(&self) -> DisplayResult<Dpi> {
        match &self.handle {
            Some(handle) => self.source.query_dpi(handle),
            None => Err(DisplayError::Unavailable(
                "graphics context already released".to_string(),
            )),
        }
    }
}

impl<S: ContextSource> Drop for GraphicsContext<'_, S> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.source.release(handle);
            debug!("released graphics context");
        }
    }
}

/// Adapts a [`ContextSource`] into a [`DisplayInfoProvider`]
///
/// Each [`dpi`](DisplayInfoProvider::dpi) call acquires a context, reads it
/// and releases it before returning.
#[derive(Debug, Clone, Default)]
pub struct ScopedDisplay<S> {
    source: S,
}

impl<S: ContextSource> ScopedDisplay<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: ContextSource> DisplayInfoProvider for ScopedDisplay<S> {
    fn dpi(&self) -> DisplayResult<Dpi> {
        let context = GraphicsContext::acquire(&self.source)?;
        context.dpi()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Records acquire/release calls; can fail either step.
    #[derive(Default)]
    struct CountingSource {
        dpi: Option<Dpi>,
        fail_acquire: bool,
        acquired: Cell<u32>,
        released: RefCell<Vec<u32>>,
    }

    impl ContextSource for CountingSource {
        type Handle = u32;

        fn acquire(&self) -> DisplayResult<u32> {
            if self.fail_acquire {
                return Err(DisplayError::Unavailable("toolkit not initialized".into()));
            }
            self.acquired.set(self.acquired.get() + 1);
            Ok(self.acquired.get())
        }

        fn query_dpi(&self, _handle: &u32) -> DisplayResult<Dpi> {
            self.dpi
                .ok_or_else(|| DisplayError::Unavailable("query failed".into()))
        }

        fn release(&self, handle: u32) {
            self.released.borrow_mut().push(handle);
        }
    }

    #[test]
    fn test_fixed_display() {
        assert_eq!(FixedDisplay::new(144.0, 120.0).dpi().unwrap(), Dpi::new(144.0, 120.0));
        assert_eq!(FixedDisplay::baseline().dpi().unwrap(), Dpi::uniform(96.0));
        assert_eq!(FixedDisplay::default().dpi().unwrap(), Dpi::BASELINE);
    }

    #[test]
    fn test_headless_unavailable() {
        assert!(matches!(Headless.dpi(), Err(DisplayError::Unavailable(_))));
    }

    #[test]
    fn test_configured_display_override() {
        let with = ConfiguredDisplay::new(Some(Dpi::uniform(192.0)), Headless);
        assert_eq!(with.dpi().unwrap(), Dpi::uniform(192.0));

        let without = ConfiguredDisplay::new(None, FixedDisplay::uniform(120.0));
        assert_eq!(without.dpi().unwrap(), Dpi::uniform(120.0));
    }

    #[test]
    fn test_provider_through_reference_and_box() {
        let fixed = FixedDisplay::uniform(144.0);
        let boxed: Box<dyn DisplayInfoProvider> = Box::new(fixed);
        assert_eq!((&fixed).dpi().unwrap(), boxed.dpi().unwrap());
    }

    #[test]
    fn test_scoped_display_releases_after_query() {
        let display = ScopedDisplay::new(CountingSource {
            dpi: Some(Dpi::uniform(144.0)),
            ..Default::default()
        });
        assert_eq!(display.dpi().unwrap(), Dpi::uniform(144.0));
        assert_eq!(display.dpi().unwrap(), Dpi::uniform(144.0));
        assert_eq!(display.source().acquired.get(), 2);
        assert_eq!(*display.source().released.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_scoped_display_releases_on_query_error() {
        let display = ScopedDisplay::new(CountingSource::default());
        assert!(matches!(display.dpi(), Err(DisplayError::Unavailable(_))));
        assert_eq!(*display.source().released.borrow(), vec![1]);
    }

    #[test]
    fn test_failed_acquire_releases_nothing() {
        let display = ScopedDisplay::new(CountingSource {
            fail_acquire: true,
            ..Default::default()
        });
        assert!(display.dpi().is_err());
        assert!(display.source().released.borrow().is_empty());
    }

    #[test]
    fn test_release_on_unwind() {
        let source = CountingSource {
            dpi: Some(Dpi::BASELINE),
            ..Default::default()
        };
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _context = GraphicsContext::acquire(&source).unwrap();
            panic!("host code failed while holding the context");
        }));
        assert!(result.is_err());
        assert_eq!(*source.released.borrow(), vec![1]);
    }
}
