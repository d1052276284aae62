//! Declaration-time enforcement.
//!
//! A [`DeclarationHook`] sees every type before it exists. The
//! [`StrictDeclarationHook`] runs the specialization validator there, and a
//! [`DeclarationScope`] wires hooks to an interface registry.

mod hook;
mod scope;

#[cfg(test)]
pub use hook::MockDeclarationHook;
pub use hook::{DeclarationHook, NoOpDeclarationHook, StrictDeclarationHook};
pub use scope::{DeclarationScope, DeclaredType};
