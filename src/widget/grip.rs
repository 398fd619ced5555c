//! Drag handle wrapper
//!
//! Publishes the pointer position when the left button goes down inside the
//! wrapped content. The press still reaches the content so a wrapped button
//! shows its pressed state for the duration of the drag.

use cosmic::Element;
use cosmic::iced::Size;
use cosmic::iced_core::{Layout, Length, Rectangle, layout, mouse, widget::Tree};

use crate::domain::Point;

pub struct Grip<'a, Msg> {
    content: Element<'a, Msg>,
    on_grab: Box<dyn Fn(Point) -> Msg + 'a>,
    dragging: bool,
}

impl<'a, Msg: Clone + 'static> Grip<'a, Msg> {
    pub fn new(content: impl Into<Element<'a, Msg>>, on_grab: impl Fn(Point) -> Msg + 'a) -> Self {
        Self {
            content: content.into(),
            on_grab: Box::new(on_grab),
            dragging: false,
        }
    }

    /// Show the grabbing cursor while a drag is in progress
    pub fn dragging(mut self, dragging: bool) -> Self {
        self.dragging = dragging;
        self
    }
}

impl<'a, Msg: Clone + 'static> cosmic::widget::Widget<Msg, cosmic::Theme, cosmic::Renderer>
    for Grip<'a, Msg>
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.content)]
    }

    fn diff(&mut self, tree: &mut Tree) {
        tree.diff_children(std::slice::from_mut(&mut self.content));
    }

    fn layout(
        &self,
        tree: &mut Tree,
        renderer: &cosmic::Renderer,
        limits: &cosmic::iced::Limits,
    ) -> layout::Node {
        self.content
            .as_widget()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut cosmic::Renderer,
        theme: &cosmic::Theme,
        style: &cosmic::iced_core::renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: cosmic::iced_core::Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &cosmic::Renderer,
        clipboard: &mut dyn cosmic::iced_core::Clipboard,
        shell: &mut cosmic::iced_core::Shell<'_, Msg>,
        viewport: &Rectangle,
    ) -> cosmic::iced_core::event::Status {
        let mut grabbed = false;
        if let cosmic::iced_core::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) =
            &event
            && let Some(pos) = cursor.position()
            && layout.bounds().contains(pos)
        {
            shell.publish((self.on_grab)(pos.into()));
            grabbed = true;
        }

        let status = self.content.as_widget_mut().on_event(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );

        if grabbed {
            cosmic::iced_core::event::Status::Captured
        } else {
            status
        }
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &cosmic::Renderer,
    ) -> mouse::Interaction {
        if self.dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::None
        }
    }

    fn operate(
        &self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &cosmic::Renderer,
        operation: &mut dyn cosmic::iced_core::widget::Operation<()>,
    ) {
        self.content
            .as_widget()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }
}

impl<'a, Msg: Clone + 'static> From<Grip<'a, Msg>> for Element<'a, Msg> {
    fn from(grip: Grip<'a, Msg>) -> Self {
        Element::new(grip)
    }
}
