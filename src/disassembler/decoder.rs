//! Schema-driven instruction decoding.
//!
//! The [`Decoder`] turns the instruction stream of a module into [`Instruction`]s, one pass and
//! no backtracking. Each instruction is decoded by walking the operand descriptors of its
//! [`InstructionSchema`] in order:
//!
//! - `Single` operands read exactly one value
//! - `Optional` operands read one value only if the instruction has words left
//! - `Multiple` operands read values until the instruction has no words left
//!
//! Context-dependent literals take their width from the type the instruction's
//! `result_type_id` names, which must already be in the [`TypeRegistry`]. Type declarations
//! (`OpType*`) add to that registry as they are decoded.
//!
//! # Examples
//!
//! ```rust
//! use spirvscope::{disassembler::Decoder, DecoderConfig, Parser, Schema};
//!
//! // OpTypeInt %1 32 1, then OpConstant %1 %2 -1
//! let words: [u32; 8] = [0x0004_0015, 1, 32, 1, 0x0004_002B, 1, 2, 0xFFFF_FFFF];
//! let bytes: Vec<u8> = words.iter().flat_map(|word| word.to_le_bytes()).collect();
//!
//! let mut parser = Parser::new(&bytes);
//! let (instructions, types) =
//!     Decoder::new(Schema::core(), DecoderConfig::default()).decode_stream(&mut parser)?;
//!
//! assert_eq!(instructions.len(), 2);
//! assert_eq!(instructions[1].to_text(&types)?, "          %2 = OpConstant %1 -1");
//! # Ok::<(), spirvscope::Error>(())
//! ```

use log::{trace, warn};

use crate::{
    config::DecoderConfig,
    disassembler::{
        Argument, CompositeValue, EnumValue, Instruction, InstructionStream, RegisteredType,
        TypeKind, TypeRegistry, Value,
    },
    file::parser::Parser,
    schema::{InstructionSchema, OperandKind, OperandSchema, Quantifier, Schema},
    Error, Result,
};

/// Splits an instruction header word into `(opcode, word_count)`.
#[must_use]
pub fn split_header(word: u32) -> (u16, u32) {
    #[allow(clippy::cast_possible_truncation)]
    let opcode = (word & 0xFFFF) as u16;
    (opcode, word >> 16)
}

/// Decodes instructions against a schema, accumulating declared types.
pub struct Decoder {
    schema: &'static Schema,
    config: DecoderConfig,
    types: TypeRegistry,
}

impl Decoder {
    /// Creates a decoder with an empty type registry.
    #[must_use]
    pub fn new(schema: &'static Schema, config: DecoderConfig) -> Self {
        Decoder {
            schema,
            config,
            types: TypeRegistry::new(),
        }
    }

    /// Types declared by the instructions decoded so far.
    #[must_use]
    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// Decodes every remaining instruction of `parser`.
    ///
    /// Stops cleanly only when no bytes are left where the next instruction header would start.
    ///
    /// # Errors
    /// Propagates the first error of [`Decoder::decode_instruction`]; nothing decoded so far is
    /// returned in that case.
    pub fn decode_stream(
        mut self,
        parser: &mut Parser,
    ) -> Result<(Vec<Instruction>, TypeRegistry)> {
        let mut instructions = Vec::new();
        while let Some(instruction) = self.decode_instruction(parser)? {
            instructions.push(instruction);
        }

        Ok((instructions, self.types))
    }

    /// Decodes the next instruction of `parser`.
    ///
    /// Returns `Ok(None)` if the parser is exhausted exactly at an instruction boundary.
    ///
    /// # Errors
    /// - [`Error::StreamExhausted`] if the bytes end inside the instruction or its header
    /// - [`Error::InvalidInstructionLength`] if the header announces zero words
    /// - [`Error::UnknownOpcode`] if the schema has no entry and unknown opcodes are not kept
    /// - [`Error::UnknownResultType`] if a context-dependent literal names an undeclared type
    /// - [`Error::TrailingWords`] and [`Error::DuplicateType`] under the strict policies
    /// - [`Error::Malformed`] for corrupt operand content
    pub fn decode_instruction(&mut self, parser: &mut Parser) -> Result<Option<Instruction>> {
        if !parser.has_more_data() {
            return Ok(None);
        }

        let offset = parser.pos();
        let header = parser.read_word().map_err(Error::into_stream_error)?;
        let (opcode, word_count) = split_header(header);
        if word_count == 0 {
            return Err(Error::InvalidInstructionLength { opcode });
        }

        let mut stream = InstructionStream::new(parser, word_count - 1);

        let Some(schema) = self.schema.instruction(opcode) else {
            if !self.config.preserve_unknown_opcodes {
                return Err(Error::UnknownOpcode(opcode));
            }

            warn!("Keeping unknown opcode {opcode} at offset {offset:#x} as raw words");
            let words = stream.read_remaining()?;
            return Ok(Some(Instruction::unknown(opcode, words)));
        };

        let mut arguments: Vec<Argument> = Vec::with_capacity(schema.operands.len());
        for operand in schema.operands {
            let value = match operand.quantifier {
                Quantifier::Single => self.decode_value(&mut stream, operand.kind, &arguments)?,
                Quantifier::Optional => {
                    if stream.remaining() > 0 {
                        let value = self.decode_value(&mut stream, operand.kind, &arguments)?;
                        Value::Optional(Some(Box::new(value)))
                    } else {
                        Value::Optional(None)
                    }
                }
                Quantifier::Multiple => {
                    let mut values = Vec::new();
                    while stream.remaining() > 0 {
                        values.push(self.decode_value(&mut stream, operand.kind, &arguments)?);
                    }
                    Value::List(values)
                }
            };

            arguments.push(Argument { operand, value });
        }

        let trailing = stream.remaining();
        if trailing > 0 {
            if self.config.reject_trailing_words {
                return Err(Error::TrailingWords {
                    opcode,
                    count: trailing,
                });
            }

            warn!(
                "Skipping {trailing} trailing word(s) of {} at offset {offset:#x}",
                schema.mnemonic
            );
            stream.read_remaining()?;
        }

        let instruction = Instruction::new(schema, arguments);
        self.register_type(schema, &instruction)?;

        trace!("{offset:#08x}: {} ({word_count} words)", schema.mnemonic);
        Ok(Some(instruction))
    }

    fn decode_value(
        &self,
        stream: &mut InstructionStream,
        kind: OperandKind,
        arguments: &[Argument],
    ) -> Result<Value> {
        let value = match kind {
            OperandKind::IdRef | OperandKind::IdResult | OperandKind::IdResultType => {
                Value::Id(stream.read_word()?)
            }
            OperandKind::LiteralInteger => Value::Integer(stream.read_word()?),
            OperandKind::LiteralString => Value::String(stream.read_string()?),
            OperandKind::LiteralContextDependentNumber => {
                let type_id = result_type_id(arguments).ok_or_else(|| {
                    malformed_error!("Context-dependent literal without a preceding result type")
                })?;
                let ty = self.types.resolve(type_id)?;

                let bits = if ty.literal_words() == 2 {
                    stream.read_double_word()?
                } else {
                    u64::from(stream.read_word()?)
                };

                Value::Number { bits, ty }
            }
            OperandKind::Enumeration(name) => {
                let Some(enumeration) = self.schema.enumeration(name) else {
                    return Err(malformed_error!(
                        "Schema references unknown enumeration {}",
                        name
                    ));
                };

                let value: u32 = stream.read_enum()?;
                let mut parameters = Vec::new();
                for enumerant in enumeration.enumerants_of(value) {
                    for parameter in enumerant.parameters {
                        parameters.push(self.decode_value(stream, *parameter, arguments)?);
                    }
                }

                Value::Enumerant(EnumValue {
                    schema: enumeration,
                    value,
                    parameters,
                })
            }
            OperandKind::Composite(name) => {
                let Some(composite) = self.schema.composite(name) else {
                    return Err(malformed_error!(
                        "Schema references unknown composite {}",
                        name
                    ));
                };

                let mut fields = Vec::with_capacity(composite.fields.len());
                for _ in composite.fields {
                    fields.push(stream.read_word()?);
                }

                Value::Composite(CompositeValue {
                    schema: composite,
                    fields,
                })
            }
        };

        Ok(value)
    }

    fn register_type(
        &mut self,
        schema: &InstructionSchema,
        instruction: &Instruction,
    ) -> Result<()> {
        let Some(type_name) = schema.declared_type_name() else {
            return Ok(());
        };
        let Some(id) = instruction.result_id() else {
            return Ok(());
        };

        let integer = |name| match instruction.argument(name) {
            Some(Value::Integer(value)) => Some(*value),
            _ => None,
        };

        let ty = RegisteredType::new(
            TypeKind::from_type_name(type_name),
            integer("width").unwrap_or(0),
            integer("signedness") == Some(1),
        );

        if self.config.reject_duplicate_types {
            return self.types.register_unique(id, ty);
        }

        if let Some(previous) = self.types.register(id, ty) {
            if previous != ty {
                warn!("Type %{id} redeclared as {ty:?}, overwriting {previous:?}");
            }
        }

        Ok(())
    }
}

fn result_type_id(arguments: &[Argument]) -> Option<u32> {
    arguments
        .iter()
        .find(|argument| argument.operand.name == OperandSchema::RESULT_TYPE_ID)
        .and_then(|argument| match argument.value {
            Value::Id(id) => Some(id),
            _ => None,
        })
}
