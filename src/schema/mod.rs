//! Static instruction grammar consumed by the decoder.
//!
//! The grammar describes, for every opcode, the ordered operands an instruction carries, and for
//! every operand kind that is not a plain word, the enumeration or composite record it refers
//! to. It is plain immutable data: the tables in this module are `static` slices embedded at
//! build time, and [`Schema`] indexes them for constant-time lookups.
//!
//! # Key Components
//!
//! - [`InstructionSchema`] - Opcode, mnemonic and operand layout of one instruction
//! - [`OperandSchema`] - Name, [`OperandKind`] and [`Quantifier`] of one operand
//! - [`EnumerationSchema`] - Value or bit enumeration with its [`Enumerant`]s
//! - [`CompositeSchema`] - Fixed sequence of fields consumed together
//! - [`Schema`] - Indexed view over the three tables
//!
//! # Examples
//!
//! ```rust
//! use spirvscope::schema::{OperandKind, Schema};
//!
//! let schema = Schema::core();
//! let type_int = schema.instruction(21).unwrap();
//! assert_eq!(type_int.mnemonic, "OpTypeInt");
//! assert_eq!(type_int.operands[0].kind, OperandKind::IdResult);
//!
//! let storage = schema.enumeration("StorageClass").unwrap();
//! assert_eq!(storage.value_name(7), Some("Function"));
//! ```
//!
//! # Aliases
//!
//! Several grammar entries can share one opcode (vendor aliases such as
//! `OpDecorateStringGOOGLE`), and several enumerants can share one value. In both cases the
//! first-declared entry wins: the index is keyed by numeric value, not by name.

mod composites;
mod enumerations;
mod instructions;

use std::{
    collections::{HashMap, HashSet},
    sync::OnceLock,
};

use strum::{Display, EnumIter};

/// The kind of an instruction operand.
///
/// Plain word kinds are decoded directly; [`OperandKind::Enumeration`] and
/// [`OperandKind::Composite`] name an entry of the schema's enumeration or composite table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    /// Reference to a previously (or later) defined id
    IdRef,
    /// The id defined by this instruction
    IdResult,
    /// The id of the type of the result of this instruction
    IdResultType,
    /// A literal 32-bit integer
    LiteralInteger,
    /// A nul-terminated UTF-8 string packed four bytes per word
    LiteralString,
    /// A number whose width and signedness come from the result type of the instruction
    LiteralContextDependentNumber,
    /// A value of the named enumeration
    Enumeration(&'static str),
    /// A record of the named composite kind
    Composite(&'static str),
}

/// How many values an operand descriptor contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Quantifier {
    /// Exactly one value
    Single,
    /// Zero or one value, present if the instruction has words left
    Optional,
    /// Zero or more values, consuming every remaining word of the instruction
    Multiple,
}

/// Description of a single operand of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandSchema {
    /// snake_case name of the operand, e.g. `result_type_id` or `width`
    pub name: &'static str,
    /// What the operand words encode
    pub kind: OperandKind,
    /// How many values the operand contributes
    pub quantifier: Quantifier,
}

impl OperandSchema {
    /// Name of the operand carrying the id an instruction defines.
    pub const RESULT_ID: &'static str = "result_id";
    /// Name of the operand carrying the type of an instruction's result.
    pub const RESULT_TYPE_ID: &'static str = "result_type_id";

    /// Creates a new operand descriptor.
    #[must_use]
    pub const fn new(name: &'static str, kind: OperandKind, quantifier: Quantifier) -> Self {
        OperandSchema {
            name,
            kind,
            quantifier,
        }
    }
}

/// Layout of one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionSchema {
    /// Numeric opcode, the low 16 bits of the instruction header word
    pub opcode: u16,
    /// Mnemonic including the `Op` prefix, e.g. `OpTypeInt`
    pub mnemonic: &'static str,
    /// Operands in encoding order
    pub operands: &'static [OperandSchema],
}

impl InstructionSchema {
    /// Returns `true` if this instruction declares a new type (`OpType*`).
    #[must_use]
    pub fn is_type_declaration(&self) -> bool {
        self.mnemonic.starts_with("OpType")
    }

    /// The type name a type declaration introduces, e.g. `Int` for `OpTypeInt`.
    ///
    /// Returns `None` for instructions that do not declare a type.
    #[must_use]
    pub fn declared_type_name(&self) -> Option<&'static str> {
        self.mnemonic.strip_prefix("OpType")
    }

    /// Looks up an operand by name.
    #[must_use]
    pub fn operand(&self, name: &str) -> Option<&'static OperandSchema> {
        self.operands.iter().find(|operand| operand.name == name)
    }

    /// Returns `true` if the instruction defines a result id.
    #[must_use]
    pub fn has_result(&self) -> bool {
        self.operands
            .iter()
            .any(|operand| operand.kind == OperandKind::IdResult)
    }
}

/// Whether the values of an enumeration are exclusive codes or combinable flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum EnumerationKind {
    /// Mutually exclusive values
    ValueEnum,
    /// Independently combinable bit flags
    BitEnum,
}

/// A named value of an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enumerant {
    /// Name as rendered in disassembly
    pub name: &'static str,
    /// Underlying numeric value (a single bit, or zero, for bit enumerations)
    pub value: u32,
    /// Kinds of the extra operands that follow this enumerant in the instruction
    pub parameters: &'static [OperandKind],
}

/// An enumeration with its enumerants in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerationSchema {
    /// Name of the enumeration, referenced by [`OperandKind::Enumeration`]
    pub name: &'static str,
    /// Value or bit enumeration
    pub kind: EnumerationKind,
    /// Enumerants in declaration order; several may share a value
    pub enumerants: &'static [Enumerant],
}

impl EnumerationSchema {
    /// The first-declared enumerant with the given value.
    #[must_use]
    pub fn enumerant(&self, value: u32) -> Option<&'static Enumerant> {
        self.enumerants
            .iter()
            .find(|enumerant| enumerant.value == value)
    }

    /// The first-declared name for the given value.
    #[must_use]
    pub fn value_name(&self, value: u32) -> Option<&'static str> {
        self.enumerant(value).map(|enumerant| enumerant.name)
    }

    /// The enumerants a value is made of.
    ///
    /// For a value enumeration this is at most the single first-declared enumerant. For a bit
    /// enumeration it is every non-zero flag set in `value`, in declaration order, with each
    /// numeric value contributing once even if aliased; a zero-valued enumerant is only
    /// returned when `value` itself is zero.
    #[must_use]
    pub fn enumerants_of(&self, value: u32) -> Vec<&'static Enumerant> {
        match self.kind {
            EnumerationKind::ValueEnum => self.enumerant(value).into_iter().collect(),
            EnumerationKind::BitEnum => {
                if value == 0 {
                    return self.enumerant(0).into_iter().collect();
                }

                let mut seen = HashSet::new();
                self.enumerants
                    .iter()
                    .filter(|enumerant| {
                        enumerant.value != 0
                            && (value & enumerant.value) == enumerant.value
                            && seen.insert(enumerant.value)
                    })
                    .collect()
            }
        }
    }

    /// Renders a value the way it appears in disassembly.
    ///
    /// Value enumerations render the first-declared name, or the decimal value if no
    /// enumerant matches. Bit enumerations render a comma-joined list of flag names in
    /// declaration order; bits without an enumerant are appended as one hexadecimal value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spirvscope::schema::Schema;
    ///
    /// let control = Schema::core().enumeration("FunctionControl").unwrap();
    /// assert_eq!(control.format_value(0), "None");
    /// assert_eq!(control.format_value(0x3), "Inline,DontInline");
    /// ```
    #[must_use]
    pub fn format_value(&self, value: u32) -> String {
        match self.kind {
            EnumerationKind::ValueEnum => match self.value_name(value) {
                Some(name) => name.to_string(),
                None => value.to_string(),
            },
            EnumerationKind::BitEnum => {
                let enumerants = self.enumerants_of(value);
                let known = enumerants
                    .iter()
                    .fold(0_u32, |mask, enumerant| mask | enumerant.value);

                let mut parts: Vec<String> = enumerants
                    .iter()
                    .map(|enumerant| enumerant.name.to_string())
                    .collect();

                let unknown = value & !known;
                if unknown != 0 {
                    parts.push(format!("0x{unknown:X}"));
                }

                if parts.is_empty() {
                    value.to_string()
                } else {
                    parts.join(",")
                }
            }
        }
    }
}

/// Kind of a composite record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum FieldKind {
    /// An id reference, rendered as `%<n>`
    IdRef,
    /// A literal integer, rendered in decimal
    LiteralInteger,
}

/// One field of a composite record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeField {
    /// Field name
    pub name: &'static str,
    /// Field kind
    pub kind: FieldKind,
}

/// A composite operand kind: a fixed sequence of single-word fields read together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeSchema {
    /// Name of the composite, referenced by [`OperandKind::Composite`]
    pub name: &'static str,
    /// Fields in encoding order
    pub fields: &'static [CompositeField],
}

/// Indexed, immutable view over an instruction grammar.
///
/// A `Schema` never changes after construction and can be shared freely between threads.
pub struct Schema {
    instructions: &'static [InstructionSchema],
    enumerations: &'static [EnumerationSchema],
    composites: &'static [CompositeSchema],
    by_opcode: HashMap<u16, &'static InstructionSchema>,
    by_enumeration: HashMap<&'static str, &'static EnumerationSchema>,
    by_composite: HashMap<&'static str, &'static CompositeSchema>,
}

static CORE_SCHEMA: OnceLock<Schema> = OnceLock::new();

impl Schema {
    /// Builds a schema over the given tables.
    ///
    /// When several instruction entries share an opcode, or several enumerations/composites
    /// share a name, the first one wins.
    #[must_use]
    pub fn new(
        instructions: &'static [InstructionSchema],
        enumerations: &'static [EnumerationSchema],
        composites: &'static [CompositeSchema],
    ) -> Self {
        let mut by_opcode = HashMap::with_capacity(instructions.len());
        for instruction in instructions {
            by_opcode.entry(instruction.opcode).or_insert(instruction);
        }

        let mut by_enumeration = HashMap::with_capacity(enumerations.len());
        for enumeration in enumerations {
            by_enumeration
                .entry(enumeration.name)
                .or_insert(enumeration);
        }

        let mut by_composite = HashMap::with_capacity(composites.len());
        for composite in composites {
            by_composite.entry(composite.name).or_insert(composite);
        }

        Schema {
            instructions,
            enumerations,
            composites,
            by_opcode,
            by_enumeration,
            by_composite,
        }
    }

    /// The embedded SPIR-V core grammar.
    ///
    /// The index is built on first use and shared by every caller afterwards.
    pub fn core() -> &'static Schema {
        CORE_SCHEMA.get_or_init(|| {
            Schema::new(
                instructions::INSTRUCTIONS,
                enumerations::ENUMERATIONS,
                composites::COMPOSITES,
            )
        })
    }

    /// Looks up the schema entry for an opcode.
    #[must_use]
    pub fn instruction(&self, opcode: u16) -> Option<&'static InstructionSchema> {
        self.by_opcode.get(&opcode).copied()
    }

    /// Looks up an enumeration by name.
    #[must_use]
    pub fn enumeration(&self, name: &str) -> Option<&'static EnumerationSchema> {
        self.by_enumeration.get(name).copied()
    }

    /// Looks up a composite record kind by name.
    #[must_use]
    pub fn composite(&self, name: &str) -> Option<&'static CompositeSchema> {
        self.by_composite.get(name).copied()
    }

    /// All instruction entries in declaration order, including aliases.
    #[must_use]
    pub fn instructions(&self) -> &'static [InstructionSchema] {
        self.instructions
    }

    /// All enumerations in declaration order.
    #[must_use]
    pub fn enumerations(&self) -> &'static [EnumerationSchema] {
        self.enumerations
    }

    /// All composite record kinds in declaration order.
    #[must_use]
    pub fn composites(&self) -> &'static [CompositeSchema] {
        self.composites
    }
}

// Helpers to keep the grammar tables readable.

const fn single(name: &'static str, kind: OperandKind) -> OperandSchema {
    OperandSchema::new(name, kind, Quantifier::Single)
}

const fn optional(name: &'static str, kind: OperandKind) -> OperandSchema {
    OperandSchema::new(name, kind, Quantifier::Optional)
}

const fn multiple(name: &'static str, kind: OperandKind) -> OperandSchema {
    OperandSchema::new(name, kind, Quantifier::Multiple)
}

const RESULT: OperandSchema = single(OperandSchema::RESULT_ID, OperandKind::IdResult);
const RESULT_TYPE: OperandSchema = single(OperandSchema::RESULT_TYPE_ID, OperandKind::IdResultType);

const fn id(name: &'static str) -> OperandSchema {
    single(name, OperandKind::IdRef)
}

const fn ids(name: &'static str) -> OperandSchema {
    multiple(name, OperandKind::IdRef)
}

const fn optional_id(name: &'static str) -> OperandSchema {
    optional(name, OperandKind::IdRef)
}

const fn literal(name: &'static str) -> OperandSchema {
    single(name, OperandKind::LiteralInteger)
}

const fn literals(name: &'static str) -> OperandSchema {
    multiple(name, OperandKind::LiteralInteger)
}

const fn string(name: &'static str) -> OperandSchema {
    single(name, OperandKind::LiteralString)
}

const fn optional_string(name: &'static str) -> OperandSchema {
    optional(name, OperandKind::LiteralString)
}

const fn number(name: &'static str) -> OperandSchema {
    single(name, OperandKind::LiteralContextDependentNumber)
}

const fn enumeration(name: &'static str, kind: &'static str) -> OperandSchema {
    single(name, OperandKind::Enumeration(kind))
}

const fn optional_enumeration(name: &'static str, kind: &'static str) -> OperandSchema {
    optional(name, OperandKind::Enumeration(kind))
}

const fn composite_list(name: &'static str, kind: &'static str) -> OperandSchema {
    multiple(name, OperandKind::Composite(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_FLAGS: &[Enumerant] = &[
        Enumerant {
            name: "None",
            value: 0,
            parameters: &[],
        },
        Enumerant {
            name: "A",
            value: 0x1,
            parameters: &[],
        },
        Enumerant {
            name: "AliasOfA",
            value: 0x1,
            parameters: &[],
        },
        Enumerant {
            name: "B",
            value: 0x2,
            parameters: &[],
        },
    ];

    const TEST_VALUES: &[Enumerant] = &[
        Enumerant {
            name: "First",
            value: 3,
            parameters: &[],
        },
        Enumerant {
            name: "Second",
            value: 3,
            parameters: &[],
        },
    ];

    const FLAGS: EnumerationSchema = EnumerationSchema {
        name: "TestFlags",
        kind: EnumerationKind::BitEnum,
        enumerants: TEST_FLAGS,
    };

    const VALUES: EnumerationSchema = EnumerationSchema {
        name: "TestValues",
        kind: EnumerationKind::ValueEnum,
        enumerants: TEST_VALUES,
    };

    #[test]
    fn bit_enum_declared_order() {
        assert_eq!(FLAGS.format_value(0x3), "A,B");
        assert_eq!(FLAGS.format_value(0x2), "B");
    }

    #[test]
    fn bit_enum_zero_and_unknown_bits() {
        assert_eq!(FLAGS.format_value(0), "None");
        assert_eq!(FLAGS.format_value(0x11), "A,0x10");
        assert_eq!(FLAGS.format_value(0x40), "0x40");
    }

    #[test]
    fn bit_enum_zero_without_zero_enumerant() {
        static ONLY_BITS: &[Enumerant] = &[Enumerant {
            name: "X",
            value: 0x4,
            parameters: &[],
        }];
        let flags = EnumerationSchema {
            name: "OnlyBits",
            kind: EnumerationKind::BitEnum,
            enumerants: ONLY_BITS,
        };
        assert_eq!(flags.format_value(0), "0");
        assert_eq!(flags.format_value(4), "X");
    }

    #[test]
    fn value_enum_first_alias_wins() {
        assert_eq!(VALUES.format_value(3), "First");
        assert_eq!(VALUES.format_value(9), "9");
        assert_eq!(VALUES.enumerants_of(3).len(), 1);
    }

    #[test]
    fn core_schema_indexes() {
        let schema = Schema::core();

        let constant = schema.instruction(43).unwrap();
        assert_eq!(constant.mnemonic, "OpConstant");
        assert!(constant.has_result());
        assert!(!constant.is_type_declaration());

        let type_float = schema.instruction(22).unwrap();
        assert!(type_float.is_type_declaration());
        assert_eq!(type_float.declared_type_name(), Some("Float"));
        assert!(type_float.operand("width").is_some());
        assert!(type_float.operand("signedness").is_none());

        assert!(schema.instruction(0xFFFF).is_none());
        assert!(schema.enumeration("Decoration").is_some());
        assert!(schema.composite("PairIdRefIdRef").is_some());
    }

    #[test]
    fn core_schema_opcode_aliases_resolve_to_first_entry() {
        let schema = Schema::core();
        let entries: Vec<_> = schema
            .instructions()
            .iter()
            .filter(|instruction| instruction.opcode == 5632)
            .collect();

        assert_eq!(entries.len(), 2);
        assert_eq!(
            schema.instruction(5632).unwrap().mnemonic,
            "OpDecorateString"
        );
    }

    #[test]
    fn core_schema_covers_synchronization_and_derivatives() {
        let schema = Schema::core();
        let required = [45, 52, 64, 67, 68, 77, 78, 103, 224, 225]
            .into_iter()
            .chain(89..=97)
            .chain(105..=107)
            .chain(149..=152)
            .chain(158..=163)
            .chain(201..=205)
            .chain(207..=215)
            .chain(218..=219)
            .chain(227..=242);
        for opcode in required {
            assert!(schema.instruction(opcode).is_some(), "missing {opcode}");
        }

        let exchange = schema.instruction(230).unwrap();
        assert_eq!(exchange.mnemonic, "OpAtomicCompareExchange");
        assert_eq!(exchange.operands.len(), 8);
        assert!(exchange.operand("unequal_semantics_id").is_some());

        let decoration = schema.enumeration("Decoration").unwrap();
        let names: Vec<_> = decoration.enumerants.iter().map(|e| e.name).collect();
        assert!(names.contains(&"FuncParamAttr"));
        assert!(names.contains(&"FPRoundingMode"));
        assert!(names.contains(&"FPFastMathMode"));
        assert!(names.contains(&"MaxByteOffset"));
    }

    #[test]
    fn core_schema_value_aliases() {
        let schema = Schema::core();
        let decoration = schema.enumeration("Decoration").unwrap();
        assert_eq!(decoration.format_value(5635), "UserSemantic");

        let memory_model = schema.enumeration("MemoryModel").unwrap();
        assert_eq!(memory_model.format_value(3), "Vulkan");
    }

    #[test]
    fn core_schema_references_resolve() {
        let schema = Schema::core();

        let check = |kind: &OperandKind| match kind {
            OperandKind::Enumeration(name) => assert!(
                schema.enumeration(name).is_some(),
                "missing enumeration {name}"
            ),
            OperandKind::Composite(name) => assert!(
                schema.composite(name).is_some(),
                "missing composite {name}"
            ),
            _ => {}
        };

        for instruction in schema.instructions() {
            assert!(instruction.mnemonic.starts_with("Op"));
            for operand in instruction.operands {
                check(&operand.kind);
            }
        }

        for enumeration in schema.enumerations() {
            for enumerant in enumeration.enumerants {
                if enumeration.kind == EnumerationKind::BitEnum {
                    assert!(
                        enumerant.value == 0 || enumerant.value.is_power_of_two(),
                        "{}::{} is not a single flag",
                        enumeration.name,
                        enumerant.name
                    );
                }
                for parameter in enumerant.parameters {
                    check(parameter);
                }
            }
        }
    }

    #[test]
    fn core_schema_operand_layout_rules() {
        for instruction in Schema::core().instructions() {
            let mut seen_multiple = false;
            for operand in instruction.operands {
                assert!(
                    !seen_multiple,
                    "{} has operands after a Multiple operand",
                    instruction.mnemonic
                );
                seen_multiple = operand.quantifier == Quantifier::Multiple;

                if operand.kind == OperandKind::LiteralContextDependentNumber {
                    assert_eq!(operand.quantifier, Quantifier::Single);
                    assert!(instruction.operand(OperandSchema::RESULT_TYPE_ID).is_some());
                }
            }
        }
    }
}
