//! Cloud export state for map applications.
//!
//! A pure reducer tracks the export lifecycle (requested, uploading,
//! saved or failed) and returns the side effects it needs as [`task::Task`]
//! descriptors. A [`store::Store`] queues those tasks and a
//! [`runner::TaskRunner`] executes them against a [`provider::CloudProvider`],
//! feeding each result back in as a new intent.

pub mod config;
pub mod logging;
pub mod mvi;
pub mod provider;
pub mod runner;
pub mod state;
pub mod store;
pub mod task;
