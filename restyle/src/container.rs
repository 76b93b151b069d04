// Copyright 2026 the Restyle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container wiring: connecting the render operation to container text
//! properties.
//!
//! Host toolkits provide the concrete container types (labels, fields,
//! multi-line editors, buttons, bar items); this module provides the
//! capability traits they implement by composition. The wiring carries no
//! logic beyond "read the container's text or set it from the rendered
//! result" — everything interesting happens in [`render`](crate::render)
//! and [`registry`](crate::registry).

use alloc::string::String;

use attributed_string::AttributedString;

use crate::adapt::RenderEnvironment;
use crate::registry::{StyleRegistry, TextContainer};
use crate::render::styled;
use crate::style::TextAttributes;

/// A container with a single styleable text property (labels, text fields,
/// multi-line editors).
///
/// Implementors supply plain accessors for the current attributed text; the
/// provided methods do the rendering.
pub trait StyledTextContainer: TextContainer {
    /// The container's current attributed text, if any.
    fn attributed_text(&self) -> Option<&AttributedString<TextAttributes>>;

    /// Replaces the container's attributed text.
    fn set_attributed_text(&mut self, text: Option<AttributedString<TextAttributes>>);

    /// The plain text currently displayed, extracted from the attributed
    /// text.
    fn styled_text(&self) -> Option<&str> {
        self.attributed_text().map(|text| text.as_str())
    }

    /// Renders `text` with this container's registered style and current
    /// environment, and stores the result.
    ///
    /// `None` clears the displayed text.
    fn set_styled_text(&mut self, registry: &StyleRegistry, text: Option<&str>) {
        let rendered = styled(text, registry.style(self.id()), self.environment().as_ref());
        self.set_attributed_text(rendered);
    }
}

/// Re-renders a container's current text in place.
///
/// This is the usual body of a container's
/// [`update_text`](TextContainer::update_text): the current plain text is
/// rendered again with the registered style and the given environment, so a
/// style (re)assignment or an environment change takes visual effect
/// immediately. A container with no current text is left untouched.
pub fn refresh_styled_text<C: StyledTextContainer + ?Sized>(
    container: &mut C,
    registry: &StyleRegistry,
    environment: &RenderEnvironment,
) {
    let Some(text) = container.styled_text() else {
        return;
    };
    // Take an owned copy so the container can be mutated below.
    let text = String::from(text);
    let rendered = styled(
        Some(&text),
        registry.style(container.id()),
        Some(environment),
    );
    container.set_attributed_text(rendered);
}

/// The display state of a stateful control, for containers that keep one
/// text per state (buttons, segmented controls).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ControlState {
    /// The resting state.
    #[default]
    Normal,
    /// Pressed or hovered.
    Highlighted,
    /// Interaction disabled.
    Disabled,
    /// Selected (toggles, segments).
    Selected,
}

/// A container with one styleable text property per [`ControlState`].
pub trait StateStyledContainer: TextContainer {
    /// The attributed text for `state`, if any.
    fn attributed_text_for(
        &self,
        state: ControlState,
    ) -> Option<&AttributedString<TextAttributes>>;

    /// Replaces the attributed text for `state`.
    fn set_attributed_text_for(
        &mut self,
        state: ControlState,
        text: Option<AttributedString<TextAttributes>>,
    );

    /// The plain text for `state`, extracted from its attributed text.
    fn styled_text_for(&self, state: ControlState) -> Option<&str> {
        self.attributed_text_for(state).map(|text| text.as_str())
    }

    /// Renders `text` with this container's registered style and current
    /// environment, and stores the result for `state`.
    fn set_styled_text_for(
        &mut self,
        registry: &StyleRegistry,
        state: ControlState,
        text: Option<&str>,
    ) {
        let rendered = styled(text, registry.style(self.id()), self.environment().as_ref());
        self.set_attributed_text_for(state, rendered);
    }
}
