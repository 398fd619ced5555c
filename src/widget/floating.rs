//! Full-size layer that places its content at an absolute position
//!
//! The layer fills the space it is given and lays its child out unbounded at
//! `position`. After every layout it compares the child's size and its own
//! size with the last reported pair and publishes `on_measure` when they
//! change, which is how the toolbar learns its measured size.

use cosmic::Element;
use cosmic::iced::{Length, Size};
use cosmic::iced_core::{
    Layout, Rectangle, layout, mouse,
    widget::{Tree, tree},
};

use crate::domain;

/// Sizes seen by the last layout and the last pair reported to the owner
#[derive(Debug, Clone, Copy, Default)]
struct MeasureState {
    measured: Option<(Size, Size)>,
    reported: Option<(Size, Size)>,
}

impl MeasureState {
    /// The (content, layer) pair to publish, if it changed since the last report.
    /// An empty content size is never reported.
    fn report(&mut self) -> Option<(Size, Size)> {
        let (content, layer) = self.measured?;
        if self.reported == self.measured || content.width <= 0.0 || content.height <= 0.0 {
            return None;
        }
        self.reported = self.measured;
        Some((content, layer))
    }
}

pub struct Floating<'a, Msg> {
    content: Element<'a, Msg>,
    position: domain::Point,
    on_measure: Option<Box<dyn Fn(domain::Size, domain::Size) -> Msg + 'a>>,
}

impl<'a, Msg: Clone + 'static> Floating<'a, Msg> {
    pub fn new(content: impl Into<Element<'a, Msg>>, position: domain::Point) -> Self {
        Self {
            content: content.into(),
            position,
            on_measure: None,
        }
    }

    /// Called with (content size, layer size) whenever either changes
    pub fn on_measure(
        mut self,
        callback: impl Fn(domain::Size, domain::Size) -> Msg + 'a,
    ) -> Self {
        self.on_measure = Some(Box::new(callback));
        self
    }
}

impl From<Size> for domain::Size {
    fn from(size: Size) -> Self {
        domain::Size::new(size.width, size.height)
    }
}

impl From<domain::Point> for cosmic::iced::Point {
    fn from(point: domain::Point) -> Self {
        cosmic::iced::Point::new(point.x, point.y)
    }
}

impl From<cosmic::iced::Point> for domain::Point {
    fn from(point: cosmic::iced::Point) -> Self {
        domain::Point::new(point.x, point.y)
    }
}

impl<'a, Msg: Clone + 'static> cosmic::widget::Widget<Msg, cosmic::Theme, cosmic::Renderer>
    for Floating<'a, Msg>
{
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<MeasureState>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(MeasureState::default())
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
        let size = limits.resolve(Length::Fill, Length::Fill, Size::ZERO);

        let content_limits = cosmic::iced::Limits::new(Size::ZERO, Size::INFINITY);
        let content = self
            .content
            .as_widget()
            .layout(&mut tree.children[0], renderer, &content_limits)
            .move_to(cosmic::iced::Point::from(self.position));

        let state = tree.state.downcast_mut::<MeasureState>();
        state.measured = Some((content.size(), size));

        layout::Node::with_children(size, vec![content])
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
        if let Some(content_layout) = layout.children().next() {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                content_layout,
                cursor,
                viewport,
            );
        }
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
        if let Some(on_measure) = &self.on_measure
            && let Some((content, layer)) = tree.state.downcast_mut::<MeasureState>().report()
        {
            shell.publish(on_measure(content.into(), layer.into()));
        }

        let Some(content_layout) = layout.children().next() else {
            return cosmic::iced_core::event::Status::Ignored;
        };

        self.content.as_widget_mut().on_event(
            &mut tree.children[0],
            event,
            content_layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        )
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &cosmic::Renderer,
    ) -> mouse::Interaction {
        layout
            .children()
            .next()
            .map_or(mouse::Interaction::None, |content_layout| {
                self.content.as_widget().mouse_interaction(
                    &tree.children[0],
                    content_layout,
                    cursor,
                    viewport,
                    renderer,
                )
            })
    }

    fn operate(
        &self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &cosmic::Renderer,
        operation: &mut dyn cosmic::iced_core::widget::Operation<()>,
    ) {
        if let Some(content_layout) = layout.children().next() {
            self.content.as_widget().operate(
                &mut tree.children[0],
                content_layout,
                renderer,
                operation,
            );
        }
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'_>,
        renderer: &cosmic::Renderer,
        translation: cosmic::iced::Vector,
    ) -> Option<cosmic::iced_core::overlay::Element<'b, Msg, cosmic::Theme, cosmic::Renderer>> {
        let content_layout = layout.children().next()?;
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            content_layout,
            renderer,
            translation,
        )
    }
}

impl<'a, Msg: Clone + 'static> From<Floating<'a, Msg>> for Element<'a, Msg> {
    fn from(floating: Floating<'a, Msg>) -> Self {
        Element::new(floating)
    }
}
