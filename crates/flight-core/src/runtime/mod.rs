//! Tool detection and management
//!
//! This module provides:
//! - Detection of the tools the install step relies on (node, bower)
//! - Generic tool management, including the package-install step

pub mod check;
pub mod tool;

pub use check::{check_bower, check_install_tools, check_node, RuntimeInfo};
pub use tool::{bower_tool, run_package_install, ToolManager};
