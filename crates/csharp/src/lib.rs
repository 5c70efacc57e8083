//! csharp - C# declaration header extraction
//!
//! Pattern-based: finds class/interface/struct/record headers with their
//! modifiers, base lists and attributes. Bodies and members are not modeled.

mod parser;
pub mod patterns;
mod types;

pub use parser::parse_declarations;
pub use types::{Modifier, TypeDeclaration, TypeKind};
