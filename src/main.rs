mod core;

use devbar::config::DevBarSettings;

fn main() -> cosmic::iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    devbar::localize::localize();

    let settings_override = std::env::args().nth(1).and_then(|path| {
        DevBarSettings::load_json(&path)
            .inspect_err(|err| log::warn!("Ignoring settings file: {:#}", err))
            .ok()
    });

    core::app::run(settings_override)
}
