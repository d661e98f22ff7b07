//! End-to-end tests driving the real HTTP gateway against a fake backend.

pub mod backend;

#[cfg(test)]
mod catalog;
#[cfg(test)]
mod ordering;
#[cfg(test)]
mod scan;
