//! Taskboard: kanban board core for a project-management application.
//!
//! This crate projects a workspace's tasks into five status columns and
//! turns drag-and-drop moves into minimal position updates for the hosted
//! document store that owns the task records.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Board projection and move reconciliation with no I/O
//! - **Ports**: Abstract trait interfaces for task persistence
//! - **Adapters**: Concrete implementations of ports
//! - **Services**: Orchestration of loads, creates and moves over the ports
//!
//! # Modules
//!
//! - [`task`]: Task records, the kanban board and its persistence seam

pub mod task;
