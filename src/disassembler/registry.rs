//! Declared types of a module, keyed by result id.
//!
//! Context-dependent literals (the value of `OpConstant`, `OpSpecConstant`, ...) do not carry
//! their width or signedness; both come from the type the instruction's `result_type_id`
//! refers to. The [`TypeRegistry`] accumulates every `OpType*` declaration in decode order so
//! later instructions can resolve them.

use std::collections::BTreeMap;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{Error, Result};

/// The kind of a declared type, derived from the `OpType*` mnemonic.
///
/// Only [`TypeKind::Int`] and [`TypeKind::Float`] affect how literals are read and rendered;
/// the remaining kinds are kept for tooling.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum TypeKind {
    /// `OpTypeVoid`
    Void,
    /// `OpTypeBool`
    Bool,
    /// `OpTypeInt`
    Int,
    /// `OpTypeFloat`
    Float,
    /// `OpTypeVector`
    Vector,
    /// `OpTypeMatrix`
    Matrix,
    /// `OpTypeImage`
    Image,
    /// `OpTypeSampler`
    Sampler,
    /// `OpTypeSampledImage`
    SampledImage,
    /// `OpTypeArray`
    Array,
    /// `OpTypeRuntimeArray`
    RuntimeArray,
    /// `OpTypeStruct`
    Struct,
    /// `OpTypeOpaque`
    Opaque,
    /// `OpTypePointer`
    Pointer,
    /// `OpTypeFunction`
    Function,
    /// Any type declaration without a dedicated kind
    Other,
}

impl TypeKind {
    /// Maps the suffix of an `OpType*` mnemonic (e.g. `Int` for `OpTypeInt`) to a kind.
    ///
    /// ```rust
    /// use spirvscope::disassembler::TypeKind;
    ///
    /// assert_eq!(TypeKind::from_type_name("Float"), TypeKind::Float);
    /// assert_eq!(TypeKind::from_type_name("RayQueryKHR"), TypeKind::Other);
    /// ```
    #[must_use]
    pub fn from_type_name(name: &str) -> Self {
        name.parse().unwrap_or(TypeKind::Other)
    }
}

/// Metadata of one declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisteredType {
    /// What kind of type was declared
    pub kind: TypeKind,
    /// Bit width from the `width` operand, or 0 if the declaration has none
    pub width: u32,
    /// Signedness from the `signedness` operand, or `false` if the declaration has none
    pub signed: bool,
}

impl RegisteredType {
    /// Creates a new type record.
    #[must_use]
    pub fn new(kind: TypeKind, width: u32, signed: bool) -> Self {
        RegisteredType {
            kind,
            width,
            signed,
        }
    }

    /// Number of words a context-dependent literal of this type occupies.
    #[must_use]
    pub fn literal_words(&self) -> u32 {
        if self.width > 32 {
            2
        } else {
            1
        }
    }

    /// Formats the raw bits of a context-dependent literal of this type.
    ///
    /// Integers render as signed or unsigned decimal, floats in their shortest round-trip
    /// form. Any other kind renders the raw bits as an unsigned decimal.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedNumericWidth`] for integer or float types whose width is
    /// neither 32 nor 64.
    pub fn format_literal(&self, bits: u64) -> Result<String> {
        let unsupported = || Error::UnsupportedNumericWidth {
            kind: self.kind,
            width: self.width,
        };

        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let text = match self.kind {
            TypeKind::Int => match (self.width, self.signed) {
                (32, true) => (bits as u32 as i32).to_string(),
                (32, false) => (bits as u32).to_string(),
                (64, true) => (bits as i64).to_string(),
                (64, false) => bits.to_string(),
                _ => return Err(unsupported()),
            },
            TypeKind::Float => match self.width {
                32 => f32::from_bits(bits as u32).to_string(),
                64 => f64::from_bits(bits).to_string(),
                _ => return Err(unsupported()),
            },
            _ => bits.to_string(),
        };

        Ok(text)
    }
}

/// Accumulating table of declared types.
///
/// Entries are added while a module is decoded and only read afterwards. Iteration yields
/// types in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeRegistry {
    types: BTreeMap<u32, RegisteredType>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `ty` under `id`, overwriting any earlier entry.
    ///
    /// Returns the overwritten entry, if any.
    pub fn register(&mut self, id: u32, ty: RegisteredType) -> Option<RegisteredType> {
        self.types.insert(id, ty)
    }

    /// Registers `ty` under `id`, rejecting conflicting re-declarations.
    ///
    /// Declaring the same id again with an identical type is accepted.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateType`] if `id` is already registered with a different type.
    pub fn register_unique(&mut self, id: u32, ty: RegisteredType) -> Result<()> {
        match self.types.get(&id) {
            Some(existing) if *existing != ty => Err(Error::DuplicateType(id)),
            Some(_) => Ok(()),
            None => {
                self.types.insert(id, ty);
                Ok(())
            }
        }
    }

    /// Looks up the type registered under `id`.
    #[must_use]
    pub fn lookup(&self, id: u32) -> Option<RegisteredType> {
        self.types.get(&id).copied()
    }

    /// Like [`TypeRegistry::lookup`], failing with [`Error::UnknownResultType`] if absent.
    ///
    /// # Errors
    /// Returns [`Error::UnknownResultType`] if nothing is registered under `id`.
    pub fn resolve(&self, id: u32) -> Result<RegisteredType> {
        self.lookup(id).ok_or(Error::UnknownResultType(id))
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no type has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates over `(id, type)` pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, RegisteredType)> + '_ {
        self.types.iter().map(|(id, ty)| (*id, *ty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    const INT32: RegisteredType = RegisteredType {
        kind: TypeKind::Int,
        width: 32,
        signed: true,
    };

    #[test]
    fn every_named_kind_parses_from_its_name() {
        for kind in TypeKind::iter() {
            let name: &'static str = kind.into();
            assert_eq!(TypeKind::from_type_name(name), kind);
        }
        assert_eq!(
            TypeKind::from_type_name("NodePayloadArrayAMDX"),
            TypeKind::Other
        );
    }

    #[test]
    fn register_overwrites() {
        let mut registry = TypeRegistry::new();
        assert!(registry.register(1, INT32).is_none());

        let float = RegisteredType::new(TypeKind::Float, 32, false);
        assert_eq!(registry.register(1, float), Some(INT32));
        assert_eq!(registry.lookup(1), Some(float));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn register_unique_conflicts() {
        let mut registry = TypeRegistry::new();
        registry.register_unique(4, INT32).unwrap();
        registry.register_unique(4, INT32).unwrap();

        let unsigned = RegisteredType::new(TypeKind::Int, 32, false);
        assert!(matches!(
            registry.register_unique(4, unsigned),
            Err(Error::DuplicateType(4))
        ));
        assert_eq!(registry.lookup(4), Some(INT32));
    }

    #[test]
    fn resolve_missing() {
        let registry = TypeRegistry::new();
        assert!(registry.is_empty());
        assert!(matches!(
            registry.resolve(9),
            Err(Error::UnknownResultType(9))
        ));
    }

    #[test]
    fn iteration_in_id_order() {
        let mut registry = TypeRegistry::new();
        registry.register(7, INT32);
        registry.register(2, RegisteredType::new(TypeKind::Void, 0, false));
        registry.register(5, RegisteredType::new(TypeKind::Bool, 0, false));

        let ids: Vec<u32> = registry.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![2, 5, 7]);
    }

    #[test]
    fn literal_words_by_width() {
        assert_eq!(INT32.literal_words(), 1);
        assert_eq!(
            RegisteredType::new(TypeKind::Int, 16, false).literal_words(),
            1
        );
        assert_eq!(
            RegisteredType::new(TypeKind::Float, 64, false).literal_words(),
            2
        );
    }

    #[test]
    fn format_integers() {
        assert_eq!(INT32.format_literal(0xFFFF_FFFF).unwrap(), "-1");

        let uint32 = RegisteredType::new(TypeKind::Int, 32, false);
        assert_eq!(uint32.format_literal(0xFFFF_FFFF).unwrap(), "4294967295");

        let int64 = RegisteredType::new(TypeKind::Int, 64, true);
        assert_eq!(int64.format_literal(u64::MAX).unwrap(), "-1");

        let uint64 = RegisteredType::new(TypeKind::Int, 64, false);
        assert_eq!(
            uint64.format_literal(0x1_0000_0000).unwrap(),
            "4294967296"
        );
    }

    #[test]
    fn format_floats() {
        let float32 = RegisteredType::new(TypeKind::Float, 32, false);
        assert_eq!(
            float32.format_literal(u64::from(1.5_f32.to_bits())).unwrap(),
            "1.5"
        );
        assert_eq!(
            float32.format_literal(u64::from(1.0_f32.to_bits())).unwrap(),
            "1"
        );

        let float64 = RegisteredType::new(TypeKind::Float, 64, false);
        assert_eq!(float64.format_literal(0.1_f64.to_bits()).unwrap(), "0.1");
    }

    #[test]
    fn format_unsupported_width() {
        let int16 = RegisteredType::new(TypeKind::Int, 16, true);
        assert!(matches!(
            int16.format_literal(1),
            Err(Error::UnsupportedNumericWidth {
                kind: TypeKind::Int,
                width: 16
            })
        ));

        let half = RegisteredType::new(TypeKind::Float, 16, false);
        assert!(half.format_literal(0x3C00).is_err());
    }

    #[test]
    fn format_other_kinds_as_raw_bits() {
        let boolean = RegisteredType::new(TypeKind::Bool, 0, false);
        assert_eq!(boolean.format_literal(42).unwrap(), "42");
    }
}
