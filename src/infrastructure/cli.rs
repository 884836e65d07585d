use clap::{Parser, ValueEnum};
use strum::Display;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(short, long, value_enum, help = "Page shown at startup", default_value_t = Page::Users)]
    pub page: Page,

    #[arg(long, help = "Print a single frame to stdout instead of starting the console")]
    pub dump: bool,

    #[arg(long, value_name = "COLUMNS", help = "Width of a dumped frame", default_value_t = 100)]
    pub width: u16,

    #[arg(long, value_name = "ROWS", help = "Height of a dumped frame", default_value_t = 30)]
    pub height: u16,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, ValueEnum)]
pub enum Page {
    Dashboard,
    #[default]
    Users,
}

impl Page {
    /// Menu path of the page, matched against menu links to highlight them.
    pub fn path(self) -> &'static str {
        match self {
            Page::Dashboard => "/dashboard",
            Page::Users => "/security/users",
        }
    }
}
