// the handler is the product; `api` only puts an HTTP face on it for local use
pub mod handler;

pub mod catalog;

pub mod api;

pub mod entity;

pub mod config;

pub mod options;

pub(crate) mod util;

#[cfg(test)]
pub(crate) mod tests_utils;
