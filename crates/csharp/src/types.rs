use serde::{Deserialize, Serialize};

/// Declaration kind: the keyword that introduces the type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Interface,
    Struct,
    Record,
}

impl TypeKind {
    /// Maps a kind keyword; `record class` / `record struct` are both records
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let mut words = keyword.split_whitespace();
        match words.next()? {
            "class" => Some(Self::Class),
            "interface" => Some(Self::Interface),
            "struct" => Some(Self::Struct),
            "record" => Some(Self::Record),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Struct => "struct",
            Self::Record => "record",
        }
    }
}

/// Non-access modifier keywords recognized in front of a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Abstract,
    Sealed,
    Partial,
    Static,
    Unsafe,
    Readonly,
    Ref,
    File,
}

impl Modifier {
    pub const ALL: [Modifier; 8] = [
        Self::Abstract,
        Self::Sealed,
        Self::Partial,
        Self::Static,
        Self::Unsafe,
        Self::Readonly,
        Self::Ref,
        Self::File,
    ];

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == keyword)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abstract => "abstract",
            Self::Sealed => "sealed",
            Self::Partial => "partial",
            Self::Static => "static",
            Self::Unsafe => "unsafe",
            Self::Readonly => "readonly",
            Self::Ref => "ref",
            Self::File => "file",
        }
    }
}

/// A recognized type declaration header (body excluded)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub kind: TypeKind,
    /// Identifier as written, generic parameter list included: "Repository<T>"
    pub name: String,
    /// Modifier keywords in source order
    pub modifiers: Vec<Modifier>,
    /// Base list entries as written, generics included
    pub bases: Vec<String>,
    /// Attribute annotations as written, brackets included: "[Serializable]"
    pub attributes: Vec<String>,
}

impl TypeDeclaration {
    pub fn is_abstract(&self) -> bool {
        self.modifiers.contains(&Modifier::Abstract)
    }

    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }
}
