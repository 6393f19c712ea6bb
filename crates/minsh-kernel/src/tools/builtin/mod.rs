//! Built-in tools for minsh.
//!
//! These tools are always available and make up the whole handler table.

mod cd;
mod find;
mod help;
mod ls;
mod pwd;

pub use cd::Cd;
pub use find::Find;
pub use help::Help;
pub use ls::Ls;
pub use pwd::Pwd;

use super::ToolRegistry;

/// Register all built-in tools with the registry.
pub fn register_builtins(registry: &mut ToolRegistry) {
    registry.register(Cd);
    registry.register(Find);
    registry.register(Help);
    registry.register(Ls);
    registry.register(Pwd);
}
