//! Showcase window hosting the toolbar over a story backdrop

use cosmic::app;
use cosmic::iced::{Alignment, Length, Size};
use cosmic::iced_futures::Subscription;
use cosmic::iced_widget::{Row, Stack, column};
use cosmic::widget::{button, container, text};

use devbar::config::{DevBarSettings, ShowcaseConfig, Story};
use devbar::fl;
use devbar::{DevBar, session::messages};

use super::stories;

pub(crate) fn run(settings_override: Option<DevBarSettings>) -> cosmic::iced::Result {
    let settings = cosmic::app::Settings::default().size(Size::new(1024.0, 768.0));
    cosmic::app::run::<App>(settings, Flags { settings_override })
}

pub struct Flags {
    /// Settings loaded from the command line replace every story's settings
    pub settings_override: Option<DevBarSettings>,
}

pub struct App {
    core: app::Core,
    config: ShowcaseConfig,
    settings_override: Option<DevBarSettings>,
    devbar: DevBar,
    /// Chord shown in the hint line
    hotkey_label: String,
    last_event: Option<messages::Event>,
}

#[derive(Debug, Clone)]
pub enum Msg {
    DevBar(messages::Msg),
    SelectStory(Story),
}

impl App {
    fn story_settings(&self, story: Story) -> DevBarSettings {
        self.settings_override
            .clone()
            .unwrap_or_else(|| stories::settings(story))
    }

    fn load_story(&mut self, story: Story) {
        self.devbar.unmount();

        let settings = self.story_settings(story);
        self.hotkey_label = settings.hotkey.chord().to_string();
        self.devbar = DevBar::new(stories::demo_tools(), settings);
        self.devbar.mount();
        self.last_event = None;
    }
}

impl cosmic::Application for App {
    type Executor = cosmic::executor::Default;

    type Flags = Flags;

    type Message = Msg;

    const APP_ID: &'static str = "io.github.devbar.showcase";

    fn core(&self) -> &app::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut app::Core {
        &mut self.core
    }

    fn init(
        core: app::Core,
        flags: Self::Flags,
    ) -> (Self, cosmic::iced::Task<cosmic::Action<Self::Message>>) {
        let config = ShowcaseConfig::load();
        let settings = flags
            .settings_override
            .clone()
            .unwrap_or_else(|| stories::settings(config.story));
        let hotkey_label = settings.hotkey.chord().to_string();

        let mut devbar = DevBar::new(stories::demo_tools(), settings);
        devbar.mount();

        (
            Self {
                core,
                config,
                settings_override: flags.settings_override,
                devbar,
                hotkey_label,
                last_event: None,
            },
            cosmic::iced::Task::none(),
        )
    }

    fn view(&self) -> cosmic::Element<'_, Self::Message> {
        let story_buttons = Row::with_children(stories::STORIES.iter().map(|&story| {
            let label = stories::title(story);
            let story_button = if story == self.config.story {
                button::suggested(label)
            } else {
                button::standard(label)
            };
            story_button.on_press(Msg::SelectStory(story)).into()
        }))
        .spacing(8);

        let last_event = self
            .last_event
            .as_ref()
            .map(|event| fl!("last-event", event = format!("{:?}", event)))
            .unwrap_or_default();

        let backdrop = container(
            column![
                text::title3(fl!("showcase-title")),
                story_buttons,
                text::body(fl!("showcase-hint", hotkey = self.hotkey_label.clone())),
                text::caption(last_event),
            ]
            .spacing(12)
            .align_x(Alignment::Start),
        )
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill);

        Stack::with_children(vec![
            backdrop.into(),
            self.devbar.view().map(Msg::DevBar),
        ])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
    ) -> cosmic::iced::Task<cosmic::Action<Self::Message>> {
        match message {
            Msg::DevBar(msg) => {
                if let Some(event) = self.devbar.update(msg) {
                    log::info!("DevBar event: {:?}", event);
                    self.last_event = Some(event);
                }
            }
            Msg::SelectStory(story) => {
                if story != self.config.story {
                    self.config.story = story;
                    self.config.save();
                    self.load_story(story);
                }
            }
        }
        cosmic::iced::Task::none()
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        self.devbar.subscription().map(Msg::DevBar)
    }
}
