// Copyright 2026 the Restyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The style attachment registry.
//!
//! Containers do not carry a style field; instead a [`StyleRegistry`] keeps
//! a side table from container identity to the container's current
//! [`StringStyle`]. Identity is a [`ContainerId`] handle, allocated once per
//! container from a process-wide counter, so two containers never share an
//! association and a dropped container's entry can be released explicitly.
//!
//! All registry operations are total: absence is "no association", never an
//! error. The registry is meant to live on the thread that owns the
//! containers (conventionally the UI thread); it performs no locking.

use hashbrown::HashMap;

use crate::adapt::RenderEnvironment;
use crate::style::StringStyle;

/// The identity of a styleable container.
///
/// Allocated from a process-wide monotonic counter; ids are never reused
/// within a process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(core::num::NonZeroU64);

impl ContainerId {
    /// Allocates a fresh id.
    ///
    /// The counter itself is atomic so allocation is safe from any thread,
    /// even though the registry is single-threaded.
    pub fn next() -> Self {
        use core::sync::atomic::{AtomicU64, Ordering};
        static NEXT: AtomicU64 = AtomicU64::new(1);
        let raw = NEXT.fetch_add(1, Ordering::Relaxed);
        Self(core::num::NonZeroU64::new(raw).expect("counter starts at 1 and only increments"))
    }
}

/// The capability of displaying styleable text.
///
/// Only [`id`](Self::id) is required. A container that is on screen and
/// knows its display environment overrides [`environment`](Self::environment),
/// and a container that can re-render itself overrides
/// [`update_text`](Self::update_text); [`StyleRegistry::set_style`] uses both
/// to keep visual state consistent the moment a style is (re)assigned.
pub trait TextContainer {
    /// This container's identity in the side table.
    fn id(&self) -> ContainerId;

    /// The container's current display environment, when it has one.
    ///
    /// The default reports none, which suppresses the re-render side effect
    /// of [`StyleRegistry::set_style`].
    fn environment(&self) -> Option<RenderEnvironment> {
        None
    }

    /// Re-renders the container's current text for `environment`.
    ///
    /// Implementations typically re-render their current plain text through
    /// [`refresh_styled_text`](crate::container::refresh_styled_text) so the
    /// container's registered style and the new environment both apply. The
    /// default does nothing.
    fn update_text(&mut self, registry: &StyleRegistry, environment: &RenderEnvironment) {
        let _ = (registry, environment);
    }
}

/// A side table mapping container identity to the container's current style.
///
/// See the [module docs](self) for the ownership and threading model.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    styles: HashMap<ContainerId, StringStyle>,
}

impl StyleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the style associated with `id`, or `None` if none was ever
    /// set (or it was cleared).
    pub fn style(&self, id: ContainerId) -> Option<&StringStyle> {
        self.styles.get(&id)
    }

    /// Replaces (`Some`) or clears (`None`) the association for `container`.
    ///
    /// If the container exposes a current environment, its
    /// [`update_text`](TextContainer::update_text) is invoked immediately —
    /// on every call, even when the stored value did not change. Re-render
    /// refreshes are at-least-once and synchronous, not deduplicated.
    pub fn set_style<C: TextContainer + ?Sized>(
        &mut self,
        container: &mut C,
        style: Option<StringStyle>,
    ) {
        match style {
            Some(style) => {
                self.styles.insert(container.id(), style);
            }
            None => {
                self.styles.remove(&container.id());
            }
        }
        if let Some(environment) = container.environment() {
            container.update_text(self, &environment);
        }
    }

    /// Releases any association for `id`.
    ///
    /// The association rides on the container's lifetime: container
    /// adapters call this when the container is destroyed. Releasing an id
    /// with no association is a no-op.
    pub fn release(&mut self, id: ContainerId) -> Option<StringStyle> {
        self.styles.remove(&id)
    }

    /// Returns the number of live associations.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Returns `true` if no container currently has an associated style.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{ContainerId, StyleRegistry, TextContainer};
    use crate::adapt::RenderEnvironment;
    use crate::style::StringStyle;

    struct Bare {
        id: ContainerId,
    }

    impl Bare {
        fn new() -> Self {
            Self {
                id: ContainerId::next(),
            }
        }
    }

    impl TextContainer for Bare {
        fn id(&self) -> ContainerId {
            self.id
        }
    }

    struct Adaptive {
        id: ContainerId,
        environment: Option<RenderEnvironment>,
        refreshes: usize,
    }

    impl Adaptive {
        fn new(environment: Option<RenderEnvironment>) -> Self {
            Self {
                id: ContainerId::next(),
                environment,
                refreshes: 0,
            }
        }
    }

    impl TextContainer for Adaptive {
        fn id(&self) -> ContainerId {
            self.id
        }

        fn environment(&self) -> Option<RenderEnvironment> {
            self.environment
        }

        fn update_text(&mut self, _registry: &StyleRegistry, _environment: &RenderEnvironment) {
            self.refreshes += 1;
        }
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(ContainerId::next(), ContainerId::next());
    }

    #[test]
    fn absent_until_set_then_replaced_then_cleared() {
        let mut registry = StyleRegistry::new();
        let mut container = Bare::new();
        assert!(registry.style(container.id()).is_none());

        let bold = StringStyle::new().font_size(20.0);
        registry.set_style(&mut container, Some(bold.clone()));
        assert_eq!(registry.style(container.id()), Some(&bold));

        let small = StringStyle::new().font_size(9.0);
        registry.set_style(&mut container, Some(small.clone()));
        assert_eq!(registry.style(container.id()), Some(&small));

        registry.set_style(&mut container, None);
        assert!(registry.style(container.id()).is_none());
    }

    #[test]
    fn distinct_containers_do_not_share_state() {
        let mut registry = StyleRegistry::new();
        let mut first = Bare::new();
        let second = Bare::new();

        registry.set_style(&mut first, Some(StringStyle::new().underline(true)));
        assert!(registry.style(first.id()).is_some());
        assert!(registry.style(second.id()).is_none());
    }

    #[test]
    fn set_style_refreshes_every_call() {
        let mut registry = StyleRegistry::new();
        let mut container = Adaptive::new(Some(RenderEnvironment::default()));
        let style = StringStyle::new().font_size(14.0);

        registry.set_style(&mut container, Some(style.clone()));
        registry.set_style(&mut container, Some(style.clone()));
        registry.set_style(&mut container, Some(style));
        // Identical stored value each time, but the refresh is not
        // deduplicated.
        assert_eq!(container.refreshes, 3);

        registry.set_style(&mut container, None);
        assert_eq!(container.refreshes, 4);
    }

    #[test]
    fn no_environment_means_no_refresh() {
        let mut registry = StyleRegistry::new();
        let mut container = Adaptive::new(None);
        registry.set_style(&mut container, Some(StringStyle::new()));
        assert_eq!(container.refreshes, 0);
    }

    #[test]
    fn release_drops_the_entry() {
        let mut registry = StyleRegistry::new();
        let mut container = Bare::new();
        registry.set_style(&mut container, Some(StringStyle::new()));
        assert_eq!(registry.len(), 1);

        assert!(registry.release(container.id()).is_some());
        assert!(registry.is_empty());
        assert!(registry.release(container.id()).is_none());
    }
}
