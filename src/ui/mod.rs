pub(crate) mod app;
pub(crate) mod calendar;
pub(crate) mod commands;
pub(crate) mod form;
pub(crate) mod listing;
pub(crate) mod render;
pub(crate) mod route;
pub(crate) mod screens;
pub(crate) mod theme;
pub(crate) mod util;

#[cfg(test)]
#[path = "util_tests.rs"]
mod util_tests;


#[cfg(test)]
#[path = "listing_tests.rs"]
mod listing_tests;


#[cfg(test)]
#[path = "route_tests.rs"]
mod route_tests;


#[cfg(test)]
#[path = "commands_tests.rs"]
mod commands_tests;
