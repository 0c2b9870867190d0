//! Decoded instructions and their disassembly rendering.
//!
//! An [`Instruction`] is the immutable result of decoding one instruction: its opcode, the
//! schema entry describing it, and one [`Argument`] per decoded operand. Operand values are a
//! closed [`Value`] variant, so every consumer matches exhaustively on what was decoded.
//!
//! # Rendering
//!
//! [`Instruction::to_text`] produces one disassembly line. The mnemonic is right-aligned in a
//! 15 character column together with the `%<id> = ` prefix of instructions that define a
//! result, and each remaining argument follows separated by a single space:
//!
//! ```text
//!           %1 = OpTypeInt 32 1
//!           %2 = OpConstant %1 -1
//!                OpDecorate %3 Location 0
//! ```
//!
//! Context-dependent numbers are re-resolved against the [`TypeRegistry`] at render time.

use crate::{
    disassembler::{RegisteredType, TypeRegistry},
    schema::{
        CompositeSchema, EnumerationSchema, FieldKind, InstructionSchema, OperandKind,
        OperandSchema,
    },
    Result,
};

/// The value of a decoded operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An id (`IdRef`, `IdResult` or `IdResultType`)
    Id(u32),
    /// A 32-bit literal integer
    Integer(u32),
    /// A context-dependent literal: the raw bits, widened to 64, and the type they were read with
    Number {
        /// Raw bits; the upper half is zero for literals of at most 32 bits
        bits: u64,
        /// Type of the literal at the time it was decoded
        ty: RegisteredType,
    },
    /// A literal string
    String(String),
    /// An enumeration value together with its parameters
    Enumerant(EnumValue),
    /// A composite record
    Composite(CompositeValue),
    /// The values of a `Multiple` operand
    List(Vec<Value>),
    /// The value of an `Optional` operand, if present
    Optional(Option<Box<Value>>),
}

/// A decoded enumeration operand.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    /// Enumeration the value belongs to
    pub schema: &'static EnumerationSchema,
    /// Raw value; unknown values are preserved
    pub value: u32,
    /// Parameters of the enumerant(s) named by `value`, in declaration order
    pub parameters: Vec<Value>,
}

/// A decoded composite record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeValue {
    /// Layout of the record
    pub schema: &'static CompositeSchema,
    /// Raw field words, one per field of `schema`
    pub fields: Vec<u32>,
}

/// One decoded operand: the descriptor it was decoded for and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    /// Operand descriptor from the instruction schema
    pub operand: &'static OperandSchema,
    /// Decoded value
    pub value: Value,
}

/// A decoded instruction.
///
/// Instructions with an opcode the schema does not describe only exist when unknown opcodes
/// are preserved; they carry their raw operand words instead of arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    opcode: u16,
    schema: Option<&'static InstructionSchema>,
    arguments: Vec<Argument>,
    words: Vec<u32>,
}

impl Instruction {
    /// Creates an instruction described by `schema`.
    pub(crate) fn new(schema: &'static InstructionSchema, arguments: Vec<Argument>) -> Self {
        Instruction {
            opcode: schema.opcode,
            schema: Some(schema),
            arguments,
            words: Vec::new(),
        }
    }

    /// Creates an instruction the schema does not describe.
    pub(crate) fn unknown(opcode: u16, words: Vec<u32>) -> Self {
        Instruction {
            opcode,
            schema: None,
            arguments: Vec::new(),
            words,
        }
    }

    /// Numeric opcode.
    #[must_use]
    pub fn opcode(&self) -> u16 {
        self.opcode
    }

    /// Schema entry the instruction was decoded with, `None` for preserved unknown opcodes.
    #[must_use]
    pub fn schema(&self) -> Option<&'static InstructionSchema> {
        self.schema
    }

    /// Mnemonic, `None` for preserved unknown opcodes.
    #[must_use]
    pub fn mnemonic(&self) -> Option<&'static str> {
        self.schema.map(|schema| schema.mnemonic)
    }

    /// Decoded arguments in operand order.
    #[must_use]
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// Raw operand words of a preserved unknown instruction; empty otherwise.
    #[must_use]
    pub fn raw_words(&self) -> &[u32] {
        &self.words
    }

    /// Looks up an argument by operand name.
    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments
            .iter()
            .find(|argument| argument.operand.name == name)
            .map(|argument| &argument.value)
    }

    /// The id this instruction defines, if any.
    #[must_use]
    pub fn result_id(&self) -> Option<u32> {
        self.id_of_kind(OperandKind::IdResult)
    }

    /// The id of the type of this instruction's result, if any.
    #[must_use]
    pub fn result_type_id(&self) -> Option<u32> {
        self.id_of_kind(OperandKind::IdResultType)
    }

    fn id_of_kind(&self, kind: OperandKind) -> Option<u32> {
        self.arguments
            .iter()
            .find(|argument| argument.operand.kind == kind)
            .and_then(|argument| match argument.value {
                Value::Id(id) => Some(id),
                _ => None,
            })
    }

    /// Renders the instruction as one disassembly line, without a trailing newline.
    ///
    /// # Errors
    /// Returns [`crate::Error::UnknownResultType`] if a context-dependent number refers to a
    /// type missing from `registry`, or [`crate::Error::UnsupportedNumericWidth`] if its
    /// numeric type has a width other than 32 or 64.
    pub fn to_text(&self, registry: &TypeRegistry) -> Result<String> {
        let Some(schema) = self.schema else {
            let mut line = format!("{:>15}OpUnknown({})", "", self.opcode);
            for word in &self.words {
                line.push(' ');
                line.push_str(&word.to_string());
            }
            return Ok(line);
        };

        let prefix = match self.result_id() {
            Some(id) => format!("%{id} = "),
            None => String::new(),
        };

        let mut line = format!("{:>15}{}", prefix, schema.mnemonic);
        for argument in &self.arguments {
            if argument.operand.kind == OperandKind::IdResult {
                continue;
            }
            self.render_value(&mut line, &argument.value, registry)?;
        }

        Ok(line)
    }

    fn render_value(
        &self,
        line: &mut String,
        value: &Value,
        registry: &TypeRegistry,
    ) -> Result<()> {
        match value {
            Value::Id(id) => push_argument(line, &format!("%{id}")),
            Value::Integer(integer) => push_argument(line, &integer.to_string()),
            Value::Number { bits, .. } => {
                let type_id = self.result_type_id().ok_or_else(|| {
                    malformed_error!(
                        "Context-dependent literal in opcode {} without a result type",
                        self.opcode
                    )
                })?;
                let ty = registry.resolve(type_id)?;
                push_argument(line, &ty.format_literal(*bits)?);
            }
            Value::String(text) => push_argument(line, &format!("\"{text}\"")),
            Value::Enumerant(enumerant) => {
                push_argument(line, &enumerant.schema.format_value(enumerant.value));
                for parameter in &enumerant.parameters {
                    self.render_value(line, parameter, registry)?;
                }
            }
            Value::Composite(composite) => {
                for (field, word) in composite.schema.fields.iter().zip(&composite.fields) {
                    match field.kind {
                        FieldKind::IdRef => push_argument(line, &format!("%{word}")),
                        FieldKind::LiteralInteger => push_argument(line, &word.to_string()),
                    }
                }
            }
            Value::List(values) => {
                for value in values {
                    self.render_value(line, value, registry)?;
                }
            }
            Value::Optional(Some(value)) => self.render_value(line, value, registry)?,
            Value::Optional(None) => {}
        }

        Ok(())
    }
}

fn push_argument(line: &mut String, text: &str) {
    line.push(' ');
    line.push_str(text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{disassembler::TypeKind, schema::Schema, Error};

    fn argument(schema: &'static InstructionSchema, name: &str, value: Value) -> Argument {
        Argument {
            operand: schema.operand(name).unwrap(),
            value,
        }
    }

    #[test]
    fn render_without_result() {
        let schema = Schema::core().instruction(5).unwrap();
        let instruction = Instruction::new(
            schema,
            vec![
                argument(schema, "target_id", Value::Id(4)),
                argument(schema, "name", Value::String("main".to_string())),
            ],
        );

        assert_eq!(
            instruction.to_text(&TypeRegistry::new()).unwrap(),
            "               OpName %4 \"main\""
        );
        assert_eq!(instruction.result_id(), None);
        assert_eq!(instruction.mnemonic(), Some("OpName"));
    }

    #[test]
    fn render_with_result() {
        let schema = Schema::core().instruction(21).unwrap();
        let instruction = Instruction::new(
            schema,
            vec![
                argument(schema, "result_id", Value::Id(1)),
                argument(schema, "width", Value::Integer(32)),
                argument(schema, "signedness", Value::Integer(1)),
            ],
        );

        assert_eq!(
            instruction.to_text(&TypeRegistry::new()).unwrap(),
            "          %1 = OpTypeInt 32 1"
        );
        assert_eq!(instruction.result_id(), Some(1));
        assert_eq!(instruction.argument("width"), Some(&Value::Integer(32)));
    }

    #[test]
    fn render_number_through_registry() {
        let schema = Schema::core().instruction(43).unwrap();
        let ty = RegisteredType::new(TypeKind::Int, 32, true);
        let instruction = Instruction::new(
            schema,
            vec![
                argument(schema, "result_type_id", Value::Id(1)),
                argument(schema, "result_id", Value::Id(2)),
                argument(
                    schema,
                    "value",
                    Value::Number {
                        bits: 0xFFFF_FFFF,
                        ty,
                    },
                ),
            ],
        );

        let mut registry = TypeRegistry::new();
        assert!(matches!(
            instruction.to_text(&registry),
            Err(Error::UnknownResultType(1))
        ));

        registry.register(1, ty);
        assert_eq!(
            instruction.to_text(&registry).unwrap(),
            "          %2 = OpConstant %1 -1"
        );
        assert_eq!(instruction.result_type_id(), Some(1));
    }

    #[test]
    fn render_unsupported_width() {
        let schema = Schema::core().instruction(43).unwrap();
        let ty = RegisteredType::new(TypeKind::Float, 16, false);
        let instruction = Instruction::new(
            schema,
            vec![
                argument(schema, "result_type_id", Value::Id(1)),
                argument(schema, "result_id", Value::Id(2)),
                argument(schema, "value", Value::Number { bits: 0x3C00, ty }),
            ],
        );

        let mut registry = TypeRegistry::new();
        registry.register(1, ty);
        assert!(matches!(
            instruction.to_text(&registry),
            Err(Error::UnsupportedNumericWidth { width: 16, .. })
        ));
    }

    #[test]
    fn render_enumerant_parameters_and_optional() {
        let core = Schema::core();
        let schema = core.instruction(71).unwrap();
        let instruction = Instruction::new(
            schema,
            vec![
                argument(schema, "target_id", Value::Id(3)),
                argument(
                    schema,
                    "decoration",
                    Value::Enumerant(EnumValue {
                        schema: core.enumeration("Decoration").unwrap(),
                        value: 11,
                        parameters: vec![Value::Enumerant(EnumValue {
                            schema: core.enumeration("BuiltIn").unwrap(),
                            value: 0,
                            parameters: Vec::new(),
                        })],
                    }),
                ),
            ],
        );
        assert_eq!(
            instruction.to_text(&TypeRegistry::new()).unwrap(),
            "               OpDecorate %3 BuiltIn Position"
        );

        let load = core.instruction(61).unwrap();
        let instruction = Instruction::new(
            load,
            vec![
                argument(load, "result_type_id", Value::Id(1)),
                argument(load, "result_id", Value::Id(5)),
                argument(load, "pointer_id", Value::Id(4)),
                argument(load, "memory_access", Value::Optional(None)),
            ],
        );
        assert_eq!(
            instruction.to_text(&TypeRegistry::new()).unwrap(),
            "          %5 = OpLoad %1 %4"
        );
    }

    #[test]
    fn render_composite_list() {
        let core = Schema::core();
        let schema = core.instruction(251).unwrap();
        let pair = core.composite("PairLiteralIntegerIdRef").unwrap();
        let instruction = Instruction::new(
            schema,
            vec![
                argument(schema, "selector_id", Value::Id(7)),
                argument(schema, "default_id", Value::Id(8)),
                argument(
                    schema,
                    "targets",
                    Value::List(vec![
                        Value::Composite(CompositeValue {
                            schema: pair,
                            fields: vec![1, 9],
                        }),
                        Value::Composite(CompositeValue {
                            schema: pair,
                            fields: vec![2, 10],
                        }),
                    ]),
                ),
            ],
        );

        assert_eq!(
            instruction.to_text(&TypeRegistry::new()).unwrap(),
            "               OpSwitch %7 %8 1 %9 2 %10"
        );
    }

    #[test]
    fn render_unknown() {
        let instruction = Instruction::unknown(4000, vec![1, 2]);
        assert_eq!(instruction.mnemonic(), None);
        assert_eq!(instruction.raw_words(), &[1, 2]);
        assert_eq!(
            instruction.to_text(&TypeRegistry::new()).unwrap(),
            "               OpUnknown(4000) 1 2"
        );
    }
}
