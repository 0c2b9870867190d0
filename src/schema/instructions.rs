//! Core instruction table.

use super::{
    composite_list, enumeration, id, ids, literal, literals, number, optional_enumeration,
    optional_id, optional_string, string, InstructionSchema, OperandSchema, RESULT, RESULT_TYPE,
};

macro_rules! instruction {
    ($opcode:literal, $mnemonic:literal $(, $operand:expr)* $(,)?) => {
        InstructionSchema {
            opcode: $opcode,
            mnemonic: $mnemonic,
            operands: &[$($operand),*],
        }
    };
}

const OPERAND: OperandSchema = id("operand");
const OPERAND_1: OperandSchema = id("operand_1");
const OPERAND_2: OperandSchema = id("operand_2");
const POINTER: OperandSchema = id("pointer_id");
const MEMORY_SCOPE: OperandSchema = id("memory_scope_id");
const SEMANTICS: OperandSchema = id("semantics_id");
const VALUE: OperandSchema = id("value_id");
const SAMPLED_IMAGE: OperandSchema = id("sampled_image_id");
const COORDINATE: OperandSchema = id("coordinate_id");
const DREF: OperandSchema = id("dref_id");
const IMAGE_OPERANDS: OperandSchema = optional_enumeration("image_operands", "ImageOperands");
const EXPLICIT_IMAGE_OPERANDS: OperandSchema = enumeration("image_operands", "ImageOperands");

/// Binary operation with a typed result, e.g. `OpIAdd`.
macro_rules! binary {
    ($opcode:literal, $mnemonic:literal) => {
        instruction!($opcode, $mnemonic, RESULT_TYPE, RESULT, OPERAND_1, OPERAND_2)
    };
}

/// Unary operation with a typed result, e.g. `OpSNegate`.
macro_rules! unary {
    ($opcode:literal, $mnemonic:literal, $operand:expr) => {
        instruction!($opcode, $mnemonic, RESULT_TYPE, RESULT, $operand)
    };
}

/// Atomic read-modify-write with a value operand, e.g. `OpAtomicIAdd`.
macro_rules! atomic {
    ($opcode:literal, $mnemonic:literal) => {
        instruction!(
            $opcode,
            $mnemonic,
            RESULT_TYPE,
            RESULT,
            POINTER,
            MEMORY_SCOPE,
            SEMANTICS,
            VALUE,
        )
    };
}

pub(super) static INSTRUCTIONS: &[InstructionSchema] = &[
    // Miscellaneous and debug
    instruction!(0, "OpNop"),
    instruction!(1, "OpUndef", RESULT_TYPE, RESULT),
    instruction!(2, "OpSourceContinued", string("continued_source")),
    instruction!(
        3,
        "OpSource",
        enumeration("source_language", "SourceLanguage"),
        literal("version"),
        optional_id("file_id"),
        optional_string("source"),
    ),
    instruction!(4, "OpSourceExtension", string("extension")),
    instruction!(5, "OpName", id("target_id"), string("name")),
    instruction!(
        6,
        "OpMemberName",
        id("type_id"),
        literal("member"),
        string("name")
    ),
    instruction!(7, "OpString", RESULT, string("string")),
    instruction!(
        8,
        "OpLine",
        id("file_id"),
        literal("line"),
        literal("column"),
    ),
    // Extensions and mode setting
    instruction!(10, "OpExtension", string("name")),
    instruction!(11, "OpExtInstImport", RESULT, string("name")),
    instruction!(
        12,
        "OpExtInst",
        RESULT_TYPE,
        RESULT,
        id("set_id"),
        literal("instruction"),
        ids("operand_ids"),
    ),
    instruction!(
        14,
        "OpMemoryModel",
        enumeration("addressing_model", "AddressingModel"),
        enumeration("memory_model", "MemoryModel"),
    ),
    instruction!(
        15,
        "OpEntryPoint",
        enumeration("execution_model", "ExecutionModel"),
        id("entry_point_id"),
        string("name"),
        ids("interface_ids"),
    ),
    instruction!(
        16,
        "OpExecutionMode",
        id("entry_point_id"),
        enumeration("mode", "ExecutionMode"),
    ),
    instruction!(17, "OpCapability", enumeration("capability", "Capability")),
    // Type declarations
    instruction!(19, "OpTypeVoid", RESULT),
    instruction!(20, "OpTypeBool", RESULT),
    instruction!(
        21,
        "OpTypeInt",
        RESULT,
        literal("width"),
        literal("signedness"),
    ),
    instruction!(22, "OpTypeFloat", RESULT, literal("width")),
    instruction!(
        23,
        "OpTypeVector",
        RESULT,
        id("component_type_id"),
        literal("component_count"),
    ),
    instruction!(
        24,
        "OpTypeMatrix",
        RESULT,
        id("column_type_id"),
        literal("column_count"),
    ),
    instruction!(
        25,
        "OpTypeImage",
        RESULT,
        id("sampled_type_id"),
        enumeration("dim", "Dim"),
        literal("depth"),
        literal("arrayed"),
        literal("ms"),
        literal("sampled"),
        enumeration("image_format", "ImageFormat"),
        optional_enumeration("access_qualifier", "AccessQualifier"),
    ),
    instruction!(26, "OpTypeSampler", RESULT),
    instruction!(27, "OpTypeSampledImage", RESULT, id("image_type_id")),
    instruction!(
        28,
        "OpTypeArray",
        RESULT,
        id("element_type_id"),
        id("length_id")
    ),
    instruction!(29, "OpTypeRuntimeArray", RESULT, id("element_type_id")),
    instruction!(30, "OpTypeStruct", RESULT, ids("member_type_ids")),
    instruction!(31, "OpTypeOpaque", RESULT, string("name")),
    instruction!(
        32,
        "OpTypePointer",
        RESULT,
        enumeration("storage_class", "StorageClass"),
        id("type_id"),
    ),
    instruction!(
        33,
        "OpTypeFunction",
        RESULT,
        id("return_type_id"),
        ids("parameter_type_ids"),
    ),
    instruction!(34, "OpTypeEvent", RESULT),
    instruction!(35, "OpTypeDeviceEvent", RESULT),
    instruction!(36, "OpTypeReserveId", RESULT),
    instruction!(37, "OpTypeQueue", RESULT),
    instruction!(
        38,
        "OpTypePipe",
        RESULT,
        enumeration("qualifier", "AccessQualifier"),
    ),
    instruction!(
        39,
        "OpTypeForwardPointer",
        id("pointer_type_id"),
        enumeration("storage_class", "StorageClass"),
    ),
    // Constants
    instruction!(41, "OpConstantTrue", RESULT_TYPE, RESULT),
    instruction!(42, "OpConstantFalse", RESULT_TYPE, RESULT),
    instruction!(43, "OpConstant", RESULT_TYPE, RESULT, number("value")),
    instruction!(
        44,
        "OpConstantComposite",
        RESULT_TYPE,
        RESULT,
        ids("constituent_ids")
    ),
    instruction!(
        45,
        "OpConstantSampler",
        RESULT_TYPE,
        RESULT,
        enumeration("sampler_addressing_mode", "SamplerAddressingMode"),
        literal("param"),
        enumeration("sampler_filter_mode", "SamplerFilterMode"),
    ),
    instruction!(46, "OpConstantNull", RESULT_TYPE, RESULT),
    instruction!(48, "OpSpecConstantTrue", RESULT_TYPE, RESULT),
    instruction!(49, "OpSpecConstantFalse", RESULT_TYPE, RESULT),
    instruction!(50, "OpSpecConstant", RESULT_TYPE, RESULT, number("value")),
    instruction!(
        51,
        "OpSpecConstantComposite",
        RESULT_TYPE,
        RESULT,
        ids("constituent_ids"),
    ),
    instruction!(
        52,
        "OpSpecConstantOp",
        RESULT_TYPE,
        RESULT,
        literal("opcode"),
        ids("operand_ids"),
    ),
    // Functions
    instruction!(
        54,
        "OpFunction",
        RESULT_TYPE,
        RESULT,
        enumeration("function_control", "FunctionControl"),
        id("function_type_id"),
    ),
    instruction!(55, "OpFunctionParameter", RESULT_TYPE, RESULT),
    instruction!(56, "OpFunctionEnd"),
    instruction!(
        57,
        "OpFunctionCall",
        RESULT_TYPE,
        RESULT,
        id("function_id"),
        ids("argument_ids"),
    ),
    // Memory
    instruction!(
        59,
        "OpVariable",
        RESULT_TYPE,
        RESULT,
        enumeration("storage_class", "StorageClass"),
        optional_id("initializer_id"),
    ),
    instruction!(
        60,
        "OpImageTexelPointer",
        RESULT_TYPE,
        RESULT,
        id("image_id"),
        COORDINATE,
        id("sample_id"),
    ),
    instruction!(
        61,
        "OpLoad",
        RESULT_TYPE,
        RESULT,
        id("pointer_id"),
        optional_enumeration("memory_access", "MemoryAccess"),
    ),
    instruction!(
        62,
        "OpStore",
        id("pointer_id"),
        id("object_id"),
        optional_enumeration("memory_access", "MemoryAccess"),
    ),
    instruction!(
        63,
        "OpCopyMemory",
        id("target_id"),
        id("source_id"),
        optional_enumeration("memory_access", "MemoryAccess"),
    ),
    instruction!(
        64,
        "OpCopyMemorySized",
        id("target_id"),
        id("source_id"),
        id("size_id"),
        optional_enumeration("memory_access", "MemoryAccess"),
    ),
    instruction!(
        65,
        "OpAccessChain",
        RESULT_TYPE,
        RESULT,
        id("base_id"),
        ids("index_ids"),
    ),
    instruction!(
        66,
        "OpInBoundsAccessChain",
        RESULT_TYPE,
        RESULT,
        id("base_id"),
        ids("index_ids"),
    ),
    instruction!(
        67,
        "OpPtrAccessChain",
        RESULT_TYPE,
        RESULT,
        id("base_id"),
        id("element_id"),
        ids("index_ids"),
    ),
    instruction!(
        68,
        "OpArrayLength",
        RESULT_TYPE,
        RESULT,
        id("structure_id"),
        literal("array_member"),
    ),
    unary!(69, "OpGenericPtrMemSemantics", POINTER),
    instruction!(
        70,
        "OpInBoundsPtrAccessChain",
        RESULT_TYPE,
        RESULT,
        id("base_id"),
        id("element_id"),
        ids("index_ids"),
    ),
    // Annotations
    instruction!(
        71,
        "OpDecorate",
        id("target_id"),
        enumeration("decoration", "Decoration")
    ),
    instruction!(
        72,
        "OpMemberDecorate",
        id("structure_type_id"),
        literal("member"),
        enumeration("decoration", "Decoration"),
    ),
    instruction!(73, "OpDecorationGroup", RESULT),
    instruction!(
        74,
        "OpGroupDecorate",
        id("decoration_group_id"),
        ids("target_ids"),
    ),
    instruction!(
        75,
        "OpGroupMemberDecorate",
        id("decoration_group_id"),
        composite_list("targets", "PairIdRefLiteralInteger"),
    ),
    instruction!(
        77,
        "OpVectorExtractDynamic",
        RESULT_TYPE,
        RESULT,
        id("vector_id"),
        id("index_id"),
    ),
    instruction!(
        78,
        "OpVectorInsertDynamic",
        RESULT_TYPE,
        RESULT,
        id("vector_id"),
        id("component_id"),
        id("index_id"),
    ),
    // Composites
    instruction!(
        79,
        "OpVectorShuffle",
        RESULT_TYPE,
        RESULT,
        id("vector_1_id"),
        id("vector_2_id"),
        literals("components"),
    ),
    instruction!(
        80,
        "OpCompositeConstruct",
        RESULT_TYPE,
        RESULT,
        ids("constituent_ids"),
    ),
    instruction!(
        81,
        "OpCompositeExtract",
        RESULT_TYPE,
        RESULT,
        id("composite_id"),
        literals("indexes"),
    ),
    instruction!(
        82,
        "OpCompositeInsert",
        RESULT_TYPE,
        RESULT,
        id("object_id"),
        id("composite_id"),
        literals("indexes"),
    ),
    unary!(83, "OpCopyObject", OPERAND),
    unary!(84, "OpTranspose", id("matrix_id")),
    // Images
    instruction!(
        86,
        "OpSampledImage",
        RESULT_TYPE,
        RESULT,
        id("image_id"),
        id("sampler_id"),
    ),
    instruction!(
        87,
        "OpImageSampleImplicitLod",
        RESULT_TYPE,
        RESULT,
        id("sampled_image_id"),
        id("coordinate_id"),
        optional_enumeration("image_operands", "ImageOperands"),
    ),
    instruction!(
        88,
        "OpImageSampleExplicitLod",
        RESULT_TYPE,
        RESULT,
        id("sampled_image_id"),
        id("coordinate_id"),
        enumeration("image_operands", "ImageOperands"),
    ),
    instruction!(
        89,
        "OpImageSampleDrefImplicitLod",
        RESULT_TYPE,
        RESULT,
        SAMPLED_IMAGE,
        COORDINATE,
        DREF,
        IMAGE_OPERANDS,
    ),
    instruction!(
        90,
        "OpImageSampleDrefExplicitLod",
        RESULT_TYPE,
        RESULT,
        SAMPLED_IMAGE,
        COORDINATE,
        DREF,
        EXPLICIT_IMAGE_OPERANDS,
    ),
    instruction!(
        91,
        "OpImageSampleProjImplicitLod",
        RESULT_TYPE,
        RESULT,
        SAMPLED_IMAGE,
        COORDINATE,
        IMAGE_OPERANDS,
    ),
    instruction!(
        92,
        "OpImageSampleProjExplicitLod",
        RESULT_TYPE,
        RESULT,
        SAMPLED_IMAGE,
        COORDINATE,
        EXPLICIT_IMAGE_OPERANDS,
    ),
    instruction!(
        93,
        "OpImageSampleProjDrefImplicitLod",
        RESULT_TYPE,
        RESULT,
        SAMPLED_IMAGE,
        COORDINATE,
        DREF,
        IMAGE_OPERANDS,
    ),
    instruction!(
        94,
        "OpImageSampleProjDrefExplicitLod",
        RESULT_TYPE,
        RESULT,
        SAMPLED_IMAGE,
        COORDINATE,
        DREF,
        EXPLICIT_IMAGE_OPERANDS,
    ),
    instruction!(
        95,
        "OpImageFetch",
        RESULT_TYPE,
        RESULT,
        id("image_id"),
        id("coordinate_id"),
        optional_enumeration("image_operands", "ImageOperands"),
    ),
    instruction!(
        96,
        "OpImageGather",
        RESULT_TYPE,
        RESULT,
        SAMPLED_IMAGE,
        COORDINATE,
        id("component_id"),
        IMAGE_OPERANDS,
    ),
    instruction!(
        97,
        "OpImageDrefGather",
        RESULT_TYPE,
        RESULT,
        SAMPLED_IMAGE,
        COORDINATE,
        DREF,
        IMAGE_OPERANDS,
    ),
    instruction!(
        98,
        "OpImageRead",
        RESULT_TYPE,
        RESULT,
        id("image_id"),
        id("coordinate_id"),
        optional_enumeration("image_operands", "ImageOperands"),
    ),
    instruction!(
        99,
        "OpImageWrite",
        id("image_id"),
        id("coordinate_id"),
        id("texel_id"),
        optional_enumeration("image_operands", "ImageOperands"),
    ),
    unary!(100, "OpImage", id("sampled_image_id")),
    unary!(101, "OpImageQueryFormat", id("image_id")),
    unary!(102, "OpImageQueryOrder", id("image_id")),
    instruction!(
        103,
        "OpImageQuerySizeLod",
        RESULT_TYPE,
        RESULT,
        id("image_id"),
        id("level_of_detail_id"),
    ),
    unary!(104, "OpImageQuerySize", id("image_id")),
    instruction!(
        105,
        "OpImageQueryLod",
        RESULT_TYPE,
        RESULT,
        SAMPLED_IMAGE,
        COORDINATE,
    ),
    unary!(106, "OpImageQueryLevels", id("image_id")),
    unary!(107, "OpImageQuerySamples", id("image_id")),
    // Conversions
    unary!(109, "OpConvertFToU", id("float_value_id")),
    unary!(110, "OpConvertFToS", id("float_value_id")),
    unary!(111, "OpConvertSToF", id("signed_value_id")),
    unary!(112, "OpConvertUToF", id("unsigned_value_id")),
    unary!(113, "OpUConvert", id("unsigned_value_id")),
    unary!(114, "OpSConvert", id("signed_value_id")),
    unary!(115, "OpFConvert", id("float_value_id")),
    unary!(116, "OpConvertPtrToU", POINTER),
    unary!(117, "OpSatConvertSToU", id("signed_value_id")),
    unary!(118, "OpSatConvertUToS", id("unsigned_value_id")),
    unary!(119, "OpConvertUToPtr", id("integer_value_id")),
    unary!(121, "OpPtrCastToGeneric", POINTER),
    unary!(122, "OpGenericCastToPtr", POINTER),
    instruction!(
        123,
        "OpGenericCastToPtrExplicit",
        RESULT_TYPE,
        RESULT,
        POINTER,
        enumeration("storage", "StorageClass"),
    ),
    unary!(124, "OpBitcast", OPERAND),
    // Arithmetic
    unary!(126, "OpSNegate", OPERAND),
    unary!(127, "OpFNegate", OPERAND),
    binary!(128, "OpIAdd"),
    binary!(129, "OpFAdd"),
    binary!(130, "OpISub"),
    binary!(131, "OpFSub"),
    binary!(132, "OpIMul"),
    binary!(133, "OpFMul"),
    binary!(134, "OpUDiv"),
    binary!(135, "OpSDiv"),
    binary!(136, "OpFDiv"),
    binary!(137, "OpUMod"),
    binary!(138, "OpSRem"),
    binary!(139, "OpSMod"),
    binary!(140, "OpFRem"),
    binary!(141, "OpFMod"),
    instruction!(
        142,
        "OpVectorTimesScalar",
        RESULT_TYPE,
        RESULT,
        id("vector_id"),
        id("scalar_id"),
    ),
    instruction!(
        143,
        "OpMatrixTimesScalar",
        RESULT_TYPE,
        RESULT,
        id("matrix_id"),
        id("scalar_id"),
    ),
    instruction!(
        144,
        "OpVectorTimesMatrix",
        RESULT_TYPE,
        RESULT,
        id("vector_id"),
        id("matrix_id"),
    ),
    instruction!(
        145,
        "OpMatrixTimesVector",
        RESULT_TYPE,
        RESULT,
        id("matrix_id"),
        id("vector_id"),
    ),
    instruction!(
        146,
        "OpMatrixTimesMatrix",
        RESULT_TYPE,
        RESULT,
        id("left_matrix_id"),
        id("right_matrix_id"),
    ),
    instruction!(
        147,
        "OpOuterProduct",
        RESULT_TYPE,
        RESULT,
        id("vector_1_id"),
        id("vector_2_id"),
    ),
    instruction!(
        148,
        "OpDot",
        RESULT_TYPE,
        RESULT,
        id("vector_1_id"),
        id("vector_2_id"),
    ),
    binary!(149, "OpIAddCarry"),
    binary!(150, "OpISubBorrow"),
    binary!(151, "OpUMulExtended"),
    binary!(152, "OpSMulExtended"),
    // Relational and logical
    unary!(154, "OpAny", id("vector_id")),
    unary!(155, "OpAll", id("vector_id")),
    unary!(156, "OpIsNan", id("x_id")),
    unary!(157, "OpIsInf", id("x_id")),
    unary!(158, "OpIsFinite", id("x_id")),
    unary!(159, "OpIsNormal", id("x_id")),
    unary!(160, "OpSignBitSet", id("x_id")),
    instruction!(
        161,
        "OpLessOrGreater",
        RESULT_TYPE,
        RESULT,
        id("x_id"),
        id("y_id"),
    ),
    instruction!(
        162,
        "OpOrdered",
        RESULT_TYPE,
        RESULT,
        id("x_id"),
        id("y_id"),
    ),
    instruction!(
        163,
        "OpUnordered",
        RESULT_TYPE,
        RESULT,
        id("x_id"),
        id("y_id"),
    ),
    binary!(164, "OpLogicalEqual"),
    binary!(165, "OpLogicalNotEqual"),
    binary!(166, "OpLogicalOr"),
    binary!(167, "OpLogicalAnd"),
    unary!(168, "OpLogicalNot", OPERAND),
    instruction!(
        169,
        "OpSelect",
        RESULT_TYPE,
        RESULT,
        id("condition_id"),
        id("object_1_id"),
        id("object_2_id"),
    ),
    binary!(170, "OpIEqual"),
    binary!(171, "OpINotEqual"),
    binary!(172, "OpUGreaterThan"),
    binary!(173, "OpSGreaterThan"),
    binary!(174, "OpUGreaterThanEqual"),
    binary!(175, "OpSGreaterThanEqual"),
    binary!(176, "OpULessThan"),
    binary!(177, "OpSLessThan"),
    binary!(178, "OpULessThanEqual"),
    binary!(179, "OpSLessThanEqual"),
    binary!(180, "OpFOrdEqual"),
    binary!(181, "OpFUnordEqual"),
    binary!(182, "OpFOrdNotEqual"),
    binary!(183, "OpFUnordNotEqual"),
    binary!(184, "OpFOrdLessThan"),
    binary!(185, "OpFUnordLessThan"),
    binary!(186, "OpFOrdGreaterThan"),
    binary!(187, "OpFUnordGreaterThan"),
    binary!(188, "OpFOrdLessThanEqual"),
    binary!(189, "OpFUnordLessThanEqual"),
    binary!(190, "OpFOrdGreaterThanEqual"),
    binary!(191, "OpFUnordGreaterThanEqual"),
    // Bit
    instruction!(
        194,
        "OpShiftRightLogical",
        RESULT_TYPE,
        RESULT,
        id("base_id"),
        id("shift_id"),
    ),
    instruction!(
        195,
        "OpShiftRightArithmetic",
        RESULT_TYPE,
        RESULT,
        id("base_id"),
        id("shift_id"),
    ),
    instruction!(
        196,
        "OpShiftLeftLogical",
        RESULT_TYPE,
        RESULT,
        id("base_id"),
        id("shift_id"),
    ),
    binary!(197, "OpBitwiseOr"),
    binary!(198, "OpBitwiseXor"),
    binary!(199, "OpBitwiseAnd"),
    unary!(200, "OpNot", OPERAND),
    instruction!(
        201,
        "OpBitFieldInsert",
        RESULT_TYPE,
        RESULT,
        id("base_id"),
        id("insert_id"),
        id("offset_id"),
        id("count_id"),
    ),
    instruction!(
        202,
        "OpBitFieldSExtract",
        RESULT_TYPE,
        RESULT,
        id("base_id"),
        id("offset_id"),
        id("count_id"),
    ),
    instruction!(
        203,
        "OpBitFieldUExtract",
        RESULT_TYPE,
        RESULT,
        id("base_id"),
        id("offset_id"),
        id("count_id"),
    ),
    unary!(204, "OpBitReverse", id("base_id")),
    unary!(205, "OpBitCount", id("base_id")),
    // Derivatives
    unary!(207, "OpDPdx", id("p_id")),
    unary!(208, "OpDPdy", id("p_id")),
    unary!(209, "OpFwidth", id("p_id")),
    unary!(210, "OpDPdxFine", id("p_id")),
    unary!(211, "OpDPdyFine", id("p_id")),
    unary!(212, "OpFwidthFine", id("p_id")),
    unary!(213, "OpDPdxCoarse", id("p_id")),
    unary!(214, "OpDPdyCoarse", id("p_id")),
    unary!(215, "OpFwidthCoarse", id("p_id")),
    // Primitives
    instruction!(218, "OpEmitVertex"),
    instruction!(219, "OpEndPrimitive"),
    instruction!(220, "OpEmitStreamVertex", id("stream_id")),
    instruction!(221, "OpEndStreamPrimitive", id("stream_id")),
    // Barriers
    instruction!(
        224,
        "OpControlBarrier",
        id("execution_scope_id"),
        MEMORY_SCOPE,
        SEMANTICS,
    ),
    instruction!(225, "OpMemoryBarrier", MEMORY_SCOPE, SEMANTICS),
    // Atomics
    instruction!(
        227,
        "OpAtomicLoad",
        RESULT_TYPE,
        RESULT,
        POINTER,
        MEMORY_SCOPE,
        SEMANTICS,
    ),
    instruction!(
        228,
        "OpAtomicStore",
        POINTER,
        MEMORY_SCOPE,
        SEMANTICS,
        VALUE,
    ),
    atomic!(229, "OpAtomicExchange"),
    instruction!(
        230,
        "OpAtomicCompareExchange",
        RESULT_TYPE,
        RESULT,
        POINTER,
        MEMORY_SCOPE,
        id("equal_semantics_id"),
        id("unequal_semantics_id"),
        VALUE,
        id("comparator_id"),
    ),
    instruction!(
        231,
        "OpAtomicCompareExchangeWeak",
        RESULT_TYPE,
        RESULT,
        POINTER,
        MEMORY_SCOPE,
        id("equal_semantics_id"),
        id("unequal_semantics_id"),
        VALUE,
        id("comparator_id"),
    ),
    instruction!(
        232,
        "OpAtomicIIncrement",
        RESULT_TYPE,
        RESULT,
        POINTER,
        MEMORY_SCOPE,
        SEMANTICS,
    ),
    instruction!(
        233,
        "OpAtomicIDecrement",
        RESULT_TYPE,
        RESULT,
        POINTER,
        MEMORY_SCOPE,
        SEMANTICS,
    ),
    atomic!(234, "OpAtomicIAdd"),
    atomic!(235, "OpAtomicISub"),
    atomic!(236, "OpAtomicSMin"),
    atomic!(237, "OpAtomicUMin"),
    atomic!(238, "OpAtomicSMax"),
    atomic!(239, "OpAtomicUMax"),
    atomic!(240, "OpAtomicAnd"),
    atomic!(241, "OpAtomicOr"),
    atomic!(242, "OpAtomicXor"),
    // Control flow
    instruction!(
        245,
        "OpPhi",
        RESULT_TYPE,
        RESULT,
        composite_list("variable_parents", "PairIdRefIdRef"),
    ),
    instruction!(
        246,
        "OpLoopMerge",
        id("merge_block_id"),
        id("continue_target_id"),
        enumeration("loop_control", "LoopControl"),
    ),
    instruction!(
        247,
        "OpSelectionMerge",
        id("merge_block_id"),
        enumeration("selection_control", "SelectionControl"),
    ),
    instruction!(248, "OpLabel", RESULT),
    instruction!(249, "OpBranch", id("target_label_id")),
    instruction!(
        250,
        "OpBranchConditional",
        id("condition_id"),
        id("true_label_id"),
        id("false_label_id"),
        literals("branch_weights"),
    ),
    instruction!(
        251,
        "OpSwitch",
        id("selector_id"),
        id("default_id"),
        composite_list("targets", "PairLiteralIntegerIdRef"),
    ),
    instruction!(252, "OpKill"),
    instruction!(253, "OpReturn"),
    instruction!(254, "OpReturnValue", id("value_id")),
    instruction!(255, "OpUnreachable"),
    instruction!(317, "OpNoLine"),
    // String decorations, with their vendor aliases
    instruction!(
        5632,
        "OpDecorateString",
        id("target_id"),
        enumeration("decoration", "Decoration"),
    ),
    instruction!(
        5632,
        "OpDecorateStringGOOGLE",
        id("target_id"),
        enumeration("decoration", "Decoration"),
    ),
    instruction!(
        5633,
        "OpMemberDecorateString",
        id("struct_type_id"),
        literal("member"),
        enumeration("decoration", "Decoration"),
    ),
    instruction!(
        5633,
        "OpMemberDecorateStringGOOGLE",
        id("struct_type_id"),
        literal("member"),
        enumeration("decoration", "Decoration"),
    ),
];
