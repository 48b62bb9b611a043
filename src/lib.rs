//! Dish Decider library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// How the app opens: on the Welcome screen, or straight into solo filters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StartMode {
    #[default]
    Group,
    Solo,
}
