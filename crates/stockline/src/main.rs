mod app;
mod config;
mod editor;
mod events;
mod keymap;
mod logging;
mod profile;
mod quotes;
#[cfg(test)]
mod test_utils;

fn main() -> std::io::Result<()> {
    app::run()
}
