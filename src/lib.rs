//! Terminal maze chase: a player dodging enemies across a randomly walled grid.
//!
//! `core` holds the simulation and knows nothing about terminals;
//! [`game_loop`] decides when it evolves and redraws; [`console_interface`]
//! is the only module that talks to the terminal.

pub mod config;
pub mod console_interface;
pub mod core;
pub mod game_loop;
pub mod models;
pub mod persistence;

#[cfg(test)]
mod test;
