//! Request guards applied before handlers run.

pub mod auth;

#[cfg(test)]
mod test;
