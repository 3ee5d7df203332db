#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! topocli — query a remote topology service for entities, relations, and kinds.

pub mod cli;
pub mod commands;
pub mod rpc;
pub mod topo;
