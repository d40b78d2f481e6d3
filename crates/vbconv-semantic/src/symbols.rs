//! Symbol and type descriptors returned by the semantic model.

use serde::{Deserialize, Serialize};

/// Well-known runtime types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialType {
    Void,
    Object,
    Boolean,
    Char,
    SByte,
    Byte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Decimal,
    Single,
    Double,
    String,
    DateTime,
}

impl SpecialType {
    /// Destination-language spelling of the type.
    pub fn display_name(self) -> &'static str {
        match self {
            SpecialType::Void => "void",
            SpecialType::Object => "object",
            SpecialType::Boolean => "bool",
            SpecialType::Char => "char",
            SpecialType::SByte => "sbyte",
            SpecialType::Byte => "byte",
            SpecialType::Int16 => "short",
            SpecialType::UInt16 => "ushort",
            SpecialType::Int32 => "int",
            SpecialType::UInt32 => "uint",
            SpecialType::Int64 => "long",
            SpecialType::UInt64 => "ulong",
            SpecialType::Decimal => "decimal",
            SpecialType::Single => "float",
            SpecialType::Double => "double",
            SpecialType::String => "string",
            SpecialType::DateTime => "DateTime",
        }
    }

    pub fn is_reference_type(self) -> bool {
        matches!(self, SpecialType::Object | SpecialType::String)
    }

    pub fn is_integral(self) -> bool {
        matches!(
            self,
            SpecialType::SByte
                | SpecialType::Byte
                | SpecialType::Int16
                | SpecialType::UInt16
                | SpecialType::Int32
                | SpecialType::UInt32
                | SpecialType::Int64
                | SpecialType::UInt64
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    Class,
    Struct,
    Enum,
    Interface,
    Delegate,
    Array,
    Module,
    TypeParameter,
    /// The front-end could not bind the type.
    Error,
}

/// A type as seen by the semantic model.
///
/// Two descriptors denote the same type exactly when they compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeSymbol {
    /// Minimal destination-language display string (`int`, `List<string>`).
    pub display_name: String,
    pub kind: TypeKind,
    #[serde(default)]
    pub special: Option<SpecialType>,
    #[serde(default)]
    pub is_reference_type: bool,
    /// Element type of arrays.
    #[serde(default)]
    pub element_type: Option<Box<TypeSymbol>>,
    /// Return type of delegate types; `None` for `Sub` delegates.
    #[serde(default)]
    pub delegate_return_type: Option<Box<TypeSymbol>>,
    /// Anonymous and other unnameable types cannot be written in source.
    #[serde(default = "default_true")]
    pub can_be_referenced_by_name: bool,
}

fn default_true() -> bool {
    true
}

impl TypeSymbol {
    pub fn special(special: SpecialType) -> Self {
        let kind = if special.is_reference_type() {
            TypeKind::Class
        } else {
            TypeKind::Struct
        };
        TypeSymbol {
            display_name: special.display_name().to_string(),
            kind,
            special: Some(special),
            is_reference_type: special.is_reference_type(),
            element_type: None,
            delegate_return_type: None,
            can_be_referenced_by_name: true,
        }
    }

    pub fn named(display_name: impl Into<String>, kind: TypeKind) -> Self {
        let is_reference_type = matches!(
            kind,
            TypeKind::Class | TypeKind::Interface | TypeKind::Delegate | TypeKind::Array
        );
        TypeSymbol {
            display_name: display_name.into(),
            kind,
            special: None,
            is_reference_type,
            element_type: None,
            delegate_return_type: None,
            can_be_referenced_by_name: true,
        }
    }

    pub fn array(element: TypeSymbol) -> Self {
        TypeSymbol {
            display_name: format!("{}[]", element.display_name),
            kind: TypeKind::Array,
            special: None,
            is_reference_type: true,
            element_type: Some(Box::new(element)),
            delegate_return_type: None,
            can_be_referenced_by_name: true,
        }
    }

    pub fn delegate(display_name: impl Into<String>, returns: Option<TypeSymbol>) -> Self {
        let mut ty = TypeSymbol::named(display_name, TypeKind::Delegate);
        ty.delegate_return_type = returns.map(Box::new);
        ty
    }

    pub fn is_array(&self) -> bool {
        self.kind == TypeKind::Array
    }

    pub fn is_void(&self) -> bool {
        self.special == Some(SpecialType::Void)
    }

    pub fn is_error(&self) -> bool {
        self.kind == TypeKind::Error
    }

    /// Value types need `default(T)` where reference types accept `null`.
    ///
    /// Unconstrained type parameters are neither.
    pub fn is_value_type(&self) -> bool {
        !self.is_reference_type && matches!(self.kind, TypeKind::Struct | TypeKind::Enum)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolKind {
    Method,
    Property,
    Field,
    Local,
    Parameter,
    Event,
    NamedType,
    Namespace,
    Label,
}

/// How an argument is passed to a formal parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RefKind {
    #[default]
    None,
    Ref,
    Out,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterSymbol {
    pub name: String,
    #[serde(default)]
    pub ref_kind: RefKind,
    /// Trailing `ParamArray` parameter.
    #[serde(default)]
    pub is_params: bool,
    #[serde(default)]
    pub ty: Option<TypeSymbol>,
}

impl ParameterSymbol {
    pub fn new(name: impl Into<String>, ref_kind: RefKind) -> Self {
        ParameterSymbol {
            name: name.into(),
            ref_kind,
            is_params: false,
            ty: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    /// Properties with parameters (default properties).
    #[serde(default)]
    pub is_indexer: bool,
    /// Type of fields, locals, parameters, properties, and events; return
    /// type of methods (`None` or `void` for `Sub`s).
    #[serde(default)]
    pub ty: Option<TypeSymbol>,
    #[serde(default)]
    pub parameters: Vec<ParameterSymbol>,
    /// Display name of the containing type, when there is one.
    #[serde(default)]
    pub containing_type: Option<String>,
}

impl Symbol {
    pub fn new(name: impl Into<String>, kind: SymbolKind) -> Self {
        Symbol {
            name: name.into(),
            kind,
            is_indexer: false,
            ty: None,
            parameters: Vec::new(),
            containing_type: None,
        }
    }

    pub fn with_type(mut self, ty: TypeSymbol) -> Self {
        self.ty = Some(ty);
        self
    }

    pub fn with_parameters(mut self, parameters: Vec<ParameterSymbol>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn is_method(&self) -> bool {
        self.kind == SymbolKind::Method
    }

    /// Return type of a method; `None` for `Sub`s and non-methods.
    pub fn return_type(&self) -> Option<&TypeSymbol> {
        if !self.is_method() {
            return None;
        }
        self.ty.as_ref().filter(|ty| !ty.is_void())
    }
}

/// Compile-time constant value of an expression.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ConstantValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Char(char),
}

impl ConstantValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ConstantValue::Integer(value) => Some(*value),
            _ => None,
        }
    }
}
