//! Element layout of the countdown widget.
//!
//! The widget is built programmatically against any [`Surface`]:
//!
//! ```text
//! container
//! ├── heading        "Timer"
//! ├── paragraph      "Set the time in minutes"
//! ├── row
//! │   ├── button     "-"
//! │   ├── text       counter / remaining time
//! │   └── button     "+"
//! └── button         "Start"
//! ```

use super::options::Config;
use super::types::Control;
use crate::dom::{Display, ElementId, Event, StyleProp, Surface, Tag};

/// Handles to every element the widget created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elements {
    /// The mount container, if one was found.
    pub container: Option<ElementId>,
    /// Heading.
    pub heading: ElementId,
    /// Instruction line.
    pub prompt: ElementId,
    /// Row holding the adjust buttons and the display.
    pub row: ElementId,
    /// `-` button.
    pub decrement: ElementId,
    /// Counter / remaining time text.
    pub display: ElementId,
    /// `+` button.
    pub increment: ElementId,
    /// `Start` button.
    pub start: ElementId,
}

impl Elements {
    /// Element backing `control`.
    pub fn control(&self, control: Control) -> ElementId {
        match control {
            Control::Decrement => self.decrement,
            Control::Increment => self.increment,
            Control::Start => self.start,
        }
    }

    /// The elements hidden while a countdown runs.
    pub fn controls(&self) -> [ElementId; 3] {
        [self.decrement, self.increment, self.start]
    }
}

fn style_all<S: Surface>(surface: &mut S, el: ElementId, props: &[StyleProp]) {
    for prop in props {
        surface.set_style(el, prop.clone());
    }
}

// Appends to the container when there is one; detached otherwise.
fn attach<S: Surface>(surface: &mut S, parent: Option<ElementId>, child: ElementId) {
    if let Some(parent) = parent {
        surface.append_child(parent, child);
    }
}

/// Creates the widget's elements under `container` and wires the controls.
///
/// A missing container is not an error: every element is still created and
/// wired, just never attached.
pub fn build<S>(surface: &mut S, container: Option<ElementId>, config: &Config) -> Elements
where
    S: Surface<Action = Control>,
{
    if let Some(container) = container {
        style_all(surface, container, &config.styles.container);
    }

    let heading = surface.create(Tag::Heading);
    surface.set_text(heading, &config.title);
    attach(surface, container, heading);

    let prompt = surface.create(Tag::Paragraph);
    surface.set_text(prompt, &config.prompt);
    attach(surface, container, prompt);

    let row = surface.create(Tag::Row);
    style_all(surface, row, &config.styles.row);
    attach(surface, container, row);

    let decrement = surface.create(Tag::Button);
    style_all(surface, decrement, &config.styles.adjust);
    surface.set_text(decrement, "-");
    surface.add_listener(decrement, Event::Click, Control::Decrement);
    surface.append_child(row, decrement);

    let display = surface.create(Tag::Text);
    style_all(surface, display, &config.styles.display);
    surface.append_child(row, display);

    let increment = surface.create(Tag::Button);
    style_all(surface, increment, &config.styles.adjust);
    surface.set_text(increment, "+");
    surface.add_listener(increment, Event::Click, Control::Increment);
    surface.append_child(row, increment);

    let start = surface.create(Tag::Button);
    style_all(surface, start, &config.styles.start);
    surface.set_text(start, &config.start_label);
    surface.add_listener(start, Event::Click, Control::Start);
    attach(surface, container, start);

    Elements {
        container,
        heading,
        prompt,
        row,
        decrement,
        display,
        increment,
        start,
    }
}

/// Shows or hides the three controls together.
pub fn set_controls_visible<S: Surface>(surface: &mut S, elements: &Elements, visible: bool) {
    let display = if visible {
        Display::Inline
    } else {
        Display::None
    };
    for el in elements.controls() {
        surface.set_style(el, StyleProp::Display(display));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countdown::options::config_from;
    use crate::dom::Document;

    #[test]
    fn test_structure_order() {
        let mut doc: Document<Control> = Document::new();
        let root = doc.create_with_id(Tag::Container, "timer");
        let elements = build(&mut doc, Some(root), &config_from(&[]));

        assert_eq!(
            doc.children(root),
            &[
                elements.heading,
                elements.prompt,
                elements.row,
                elements.start
            ]
        );
        assert_eq!(
            doc.children(elements.row),
            &[elements.decrement, elements.display, elements.increment]
        );
        assert_eq!(doc.text(elements.heading), Some("Timer"));
        assert_eq!(doc.text(elements.decrement), Some("-"));
        assert_eq!(doc.text(elements.increment), Some("+"));
        assert_eq!(doc.text(elements.start), Some("Start"));
    }

    #[test]
    fn test_controls_are_wired() {
        let mut doc: Document<Control> = Document::new();
        let elements = build(&mut doc, None, &config_from(&[]));

        for control in [Control::Decrement, Control::Increment, Control::Start] {
            assert_eq!(
                doc.dispatch(elements.control(control), Event::Click),
                Some(control)
            );
        }
        assert_eq!(doc.dispatch(elements.display, Event::Click), None);
    }

    #[test]
    fn test_missing_container_leaves_elements_detached() {
        let mut doc: Document<Control> = Document::new();
        let elements = build(&mut doc, None, &config_from(&[]));

        assert_eq!(elements.container, None);
        assert_eq!(doc.parent(elements.heading), None);
        assert_eq!(doc.parent(elements.start), None);
        // The row still owns its children.
        assert_eq!(doc.parent(elements.display), Some(elements.row));
    }

    #[test]
    fn test_adjust_buttons_share_a_profile() {
        let mut doc: Document<Control> = Document::new();
        let elements = build(&mut doc, None, &config_from(&[]));

        assert_eq!(doc.style(elements.decrement), doc.style(elements.increment));
        assert_ne!(doc.style(elements.decrement), doc.style(elements.start));
    }

    #[test]
    fn test_set_controls_visible() {
        let mut doc: Document<Control> = Document::new();
        let elements = build(&mut doc, None, &config_from(&[]));

        set_controls_visible(&mut doc, &elements, false);
        assert!(elements.controls().iter().all(|el| !doc.is_visible(*el)));
        assert!(doc.is_visible(elements.display));

        set_controls_visible(&mut doc, &elements, true);
        assert!(elements.controls().iter().all(|el| doc.is_visible(*el)));
    }
}
