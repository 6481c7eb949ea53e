pub mod morph;
pub mod palette;
pub mod population;
pub mod render_settings;
pub mod vision;
