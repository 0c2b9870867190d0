//! Core enumeration tables.
//!
//! Enumerants are listed in declaration order. Aliases share a value with an earlier entry
//! and are never used for rendering.

use super::{
    Enumerant, EnumerationKind::BitEnum, EnumerationKind::ValueEnum, EnumerationSchema,
    OperandKind,
};

macro_rules! enumerants {
    ($($name:literal = $value:expr $(=> [$($parameter:expr),* $(,)?])?),* $(,)?) => {
        &[$(Enumerant {
            name: $name,
            value: $value,
            parameters: &[$($($parameter),*)?],
        }),*]
    };
}

const LITERAL: OperandKind = OperandKind::LiteralInteger;
const ID: OperandKind = OperandKind::IdRef;

const SOURCE_LANGUAGE: &[Enumerant] = enumerants![
    "Unknown" = 0,
    "ESSL" = 1,
    "GLSL" = 2,
    "OpenCL_C" = 3,
    "OpenCL_CPP" = 4,
    "HLSL" = 5,
];

const EXECUTION_MODEL: &[Enumerant] = enumerants![
    "Vertex" = 0,
    "TessellationControl" = 1,
    "TessellationEvaluation" = 2,
    "Geometry" = 3,
    "Fragment" = 4,
    "GLCompute" = 5,
    "Kernel" = 6,
];

const ADDRESSING_MODEL: &[Enumerant] = enumerants![
    "Logical" = 0,
    "Physical32" = 1,
    "Physical64" = 2,
];

const MEMORY_MODEL: &[Enumerant] = enumerants![
    "Simple" = 0,
    "GLSL450" = 1,
    "OpenCL" = 2,
    "Vulkan" = 3,
    "VulkanKHR" = 3,
];

const EXECUTION_MODE: &[Enumerant] = enumerants![
    "Invocations" = 0 => [LITERAL],
    "SpacingEqual" = 1,
    "SpacingFractionalEven" = 2,
    "SpacingFractionalOdd" = 3,
    "VertexOrderCw" = 4,
    "VertexOrderCcw" = 5,
    "PixelCenterInteger" = 6,
    "OriginUpperLeft" = 7,
    "OriginLowerLeft" = 8,
    "EarlyFragmentTests" = 9,
    "PointMode" = 10,
    "Xfb" = 11,
    "DepthReplacing" = 12,
    "DepthGreater" = 14,
    "DepthLess" = 15,
    "DepthUnchanged" = 16,
    "LocalSize" = 17 => [LITERAL, LITERAL, LITERAL],
    "LocalSizeHint" = 18 => [LITERAL, LITERAL, LITERAL],
    "InputPoints" = 19,
    "InputLines" = 20,
    "InputLinesAdjacency" = 21,
    "Triangles" = 22,
    "InputTrianglesAdjacency" = 23,
    "Quads" = 24,
    "Isolines" = 25,
    "OutputVertices" = 26 => [LITERAL],
    "OutputPoints" = 27,
    "OutputLineStrip" = 28,
    "OutputTriangleStrip" = 29,
    "VecTypeHint" = 30 => [LITERAL],
    "ContractionOff" = 31,
];

const STORAGE_CLASS: &[Enumerant] = enumerants![
    "UniformConstant" = 0,
    "Input" = 1,
    "Uniform" = 2,
    "Output" = 3,
    "Workgroup" = 4,
    "CrossWorkgroup" = 5,
    "Private" = 6,
    "Function" = 7,
    "Generic" = 8,
    "PushConstant" = 9,
    "AtomicCounter" = 10,
    "Image" = 11,
    "StorageBuffer" = 12,
];

const DIM: &[Enumerant] = enumerants![
    "1D" = 0,
    "2D" = 1,
    "3D" = 2,
    "Cube" = 3,
    "Rect" = 4,
    "Buffer" = 5,
    "SubpassData" = 6,
];

const IMAGE_FORMAT: &[Enumerant] = enumerants![
    "Unknown" = 0,
    "Rgba32f" = 1,
    "Rgba16f" = 2,
    "R32f" = 3,
    "Rgba8" = 4,
    "Rgba8Snorm" = 5,
    "Rg32f" = 6,
    "Rg16f" = 7,
    "R11fG11fB10f" = 8,
    "R16f" = 9,
    "Rgba16" = 10,
    "Rgb10A2" = 11,
    "Rg16" = 12,
    "Rg8" = 13,
    "R16" = 14,
    "R8" = 15,
    "Rgba16Snorm" = 16,
    "Rg16Snorm" = 17,
    "Rg8Snorm" = 18,
    "R16Snorm" = 19,
    "R8Snorm" = 20,
    "Rgba32i" = 21,
    "Rgba16i" = 22,
    "Rgba8i" = 23,
    "R32i" = 24,
    "Rg32i" = 25,
    "Rg16i" = 26,
    "Rg8i" = 27,
    "R16i" = 28,
    "R8i" = 29,
    "Rgba32ui" = 30,
    "Rgba16ui" = 31,
    "Rgba8ui" = 32,
    "R32ui" = 33,
    "Rgb10a2ui" = 34,
    "Rg32ui" = 35,
    "Rg16ui" = 36,
    "Rg8ui" = 37,
    "R16ui" = 38,
    "R8ui" = 39,
];

const ACCESS_QUALIFIER: &[Enumerant] = enumerants![
    "ReadOnly" = 0,
    "WriteOnly" = 1,
    "ReadWrite" = 2,
];

const SAMPLER_ADDRESSING_MODE: &[Enumerant] = enumerants![
    "None" = 0,
    "ClampToEdge" = 1,
    "Clamp" = 2,
    "Repeat" = 3,
    "RepeatMirrored" = 4,
];

const SAMPLER_FILTER_MODE: &[Enumerant] = enumerants!["Nearest" = 0, "Linear" = 1];

const FUNCTION_PARAMETER_ATTRIBUTE: &[Enumerant] = enumerants![
    "Zext" = 0,
    "Sext" = 1,
    "ByVal" = 2,
    "Sret" = 3,
    "NoAlias" = 4,
    "NoCapture" = 5,
    "NoWrite" = 6,
    "NoReadWrite" = 7,
];

const FP_ROUNDING_MODE: &[Enumerant] = enumerants!["RTE" = 0, "RTZ" = 1, "RTP" = 2, "RTN" = 3];

const FP_FAST_MATH_MODE: &[Enumerant] = enumerants![
    "None" = 0x0,
    "NotNaN" = 0x1,
    "NotInf" = 0x2,
    "NSZ" = 0x4,
    "AllowRecip" = 0x8,
    "Fast" = 0x10,
];

const FUNCTION_CONTROL: &[Enumerant] = enumerants![
    "None" = 0x0,
    "Inline" = 0x1,
    "DontInline" = 0x2,
    "Pure" = 0x4,
    "Const" = 0x8,
];

const SELECTION_CONTROL: &[Enumerant] = enumerants![
    "None" = 0x0,
    "Flatten" = 0x1,
    "DontFlatten" = 0x2,
];

const LOOP_CONTROL: &[Enumerant] = enumerants![
    "None" = 0x0,
    "Unroll" = 0x1,
    "DontUnroll" = 0x2,
    "DependencyInfinite" = 0x4,
    "DependencyLength" = 0x8 => [LITERAL],
];

const MEMORY_ACCESS: &[Enumerant] = enumerants![
    "None" = 0x0,
    "Volatile" = 0x1,
    "Aligned" = 0x2 => [LITERAL],
    "Nontemporal" = 0x4,
];

const IMAGE_OPERANDS: &[Enumerant] = enumerants![
    "None" = 0x0,
    "Bias" = 0x1 => [ID],
    "Lod" = 0x2 => [ID],
    "Grad" = 0x4 => [ID, ID],
    "ConstOffset" = 0x8 => [ID],
    "Offset" = 0x10 => [ID],
    "ConstOffsets" = 0x20 => [ID],
    "Sample" = 0x40 => [ID],
    "MinLod" = 0x80 => [ID],
];

const DECORATION: &[Enumerant] = enumerants![
    "RelaxedPrecision" = 0,
    "SpecId" = 1 => [LITERAL],
    "Block" = 2,
    "BufferBlock" = 3,
    "RowMajor" = 4,
    "ColMajor" = 5,
    "ArrayStride" = 6 => [LITERAL],
    "MatrixStride" = 7 => [LITERAL],
    "GLSLShared" = 8,
    "GLSLPacked" = 9,
    "CPacked" = 10,
    "BuiltIn" = 11 => [OperandKind::Enumeration("BuiltIn")],
    "NoPerspective" = 13,
    "Flat" = 14,
    "Patch" = 15,
    "Centroid" = 16,
    "Sample" = 17,
    "Invariant" = 18,
    "Restrict" = 19,
    "Aliased" = 20,
    "Volatile" = 21,
    "Constant" = 22,
    "Coherent" = 23,
    "NonWritable" = 24,
    "NonReadable" = 25,
    "Uniform" = 26,
    "UniformId" = 27 => [ID],
    "SaturatedConversion" = 28,
    "Stream" = 29 => [LITERAL],
    "Location" = 30 => [LITERAL],
    "Component" = 31 => [LITERAL],
    "Index" = 32 => [LITERAL],
    "Binding" = 33 => [LITERAL],
    "DescriptorSet" = 34 => [LITERAL],
    "Offset" = 35 => [LITERAL],
    "XfbBuffer" = 36 => [LITERAL],
    "XfbStride" = 37 => [LITERAL],
    "FuncParamAttr" = 38 => [OperandKind::Enumeration("FunctionParameterAttribute")],
    "FPRoundingMode" = 39 => [OperandKind::Enumeration("FPRoundingMode")],
    "FPFastMathMode" = 40 => [OperandKind::Enumeration("FPFastMathMode")],
    "LinkageAttributes" = 41 => [
        OperandKind::LiteralString,
        OperandKind::Enumeration("LinkageType"),
    ],
    "NoContraction" = 42,
    "InputAttachmentIndex" = 43 => [LITERAL],
    "Alignment" = 44 => [LITERAL],
    "MaxByteOffset" = 45 => [LITERAL],
    "AlignmentId" = 46 => [ID],
    "MaxByteOffsetId" = 47 => [ID],
    "NoSignedWrap" = 4469,
    "NoUnsignedWrap" = 4470,
    "CounterBuffer" = 5634 => [ID],
    "HlslCounterBufferGOOGLE" = 5634 => [ID],
    "UserSemantic" = 5635 => [OperandKind::LiteralString],
    "HlslSemanticGOOGLE" = 5635 => [OperandKind::LiteralString],
];

const LINKAGE_TYPE: &[Enumerant] = enumerants!["Export" = 0, "Import" = 1];

const BUILT_IN: &[Enumerant] = enumerants![
    "Position" = 0,
    "PointSize" = 1,
    "ClipDistance" = 3,
    "CullDistance" = 4,
    "VertexId" = 5,
    "InstanceId" = 6,
    "PrimitiveId" = 7,
    "InvocationId" = 8,
    "Layer" = 9,
    "ViewportIndex" = 10,
    "TessLevelOuter" = 11,
    "TessLevelInner" = 12,
    "TessCoord" = 13,
    "PatchVertices" = 14,
    "FragCoord" = 15,
    "PointCoord" = 16,
    "FrontFacing" = 17,
    "SampleId" = 18,
    "SamplePosition" = 19,
    "SampleMask" = 20,
    "FragDepth" = 22,
    "HelperInvocation" = 23,
    "NumWorkgroups" = 24,
    "WorkgroupSize" = 25,
    "WorkgroupId" = 26,
    "LocalInvocationId" = 27,
    "GlobalInvocationId" = 28,
    "LocalInvocationIndex" = 29,
    "WorkDim" = 30,
    "GlobalSize" = 31,
    "EnqueuedWorkgroupSize" = 32,
    "GlobalOffset" = 33,
    "GlobalLinearId" = 34,
    "SubgroupSize" = 36,
    "SubgroupMaxSize" = 37,
    "NumSubgroups" = 38,
    "NumEnqueuedSubgroups" = 39,
    "SubgroupId" = 40,
    "SubgroupLocalInvocationId" = 41,
    "VertexIndex" = 42,
    "InstanceIndex" = 43,
];

const CAPABILITY: &[Enumerant] = enumerants![
    "Matrix" = 0,
    "Shader" = 1,
    "Geometry" = 2,
    "Tessellation" = 3,
    "Addresses" = 4,
    "Linkage" = 5,
    "Kernel" = 6,
    "Vector16" = 7,
    "Float16Buffer" = 8,
    "Float16" = 9,
    "Float64" = 10,
    "Int64" = 11,
    "Int64Atomics" = 12,
    "ImageBasic" = 13,
    "ImageReadWrite" = 14,
    "ImageMipmap" = 15,
    "Pipes" = 17,
    "Groups" = 18,
    "DeviceEnqueue" = 19,
    "LiteralSampler" = 20,
    "AtomicStorage" = 21,
    "Int16" = 22,
    "TessellationPointSize" = 23,
    "GeometryPointSize" = 24,
    "ImageGatherExtended" = 25,
    "StorageImageMultisample" = 27,
    "UniformBufferArrayDynamicIndexing" = 28,
    "SampledImageArrayDynamicIndexing" = 29,
    "StorageBufferArrayDynamicIndexing" = 30,
    "StorageImageArrayDynamicIndexing" = 31,
    "ClipDistance" = 32,
    "CullDistance" = 33,
    "ImageCubeArray" = 34,
    "SampleRateShading" = 35,
    "ImageRect" = 36,
    "SampledRect" = 37,
    "GenericPointer" = 38,
    "Int8" = 39,
    "InputAttachment" = 40,
    "SparseResidency" = 41,
    "MinLod" = 42,
    "Sampled1D" = 43,
    "Image1D" = 44,
    "SampledCubeArray" = 45,
    "SampledBuffer" = 46,
    "ImageBuffer" = 47,
    "ImageMSArray" = 48,
    "StorageImageExtendedFormats" = 49,
    "ImageQuery" = 50,
    "DerivativeControl" = 51,
    "InterpolationFunction" = 52,
    "TransformFeedback" = 53,
    "GeometryStreams" = 54,
    "StorageImageReadWithoutFormat" = 55,
    "StorageImageWriteWithoutFormat" = 56,
    "MultiViewport" = 57,
];

macro_rules! enumeration {
    ($name:literal, $kind:expr, $enumerants:expr) => {
        EnumerationSchema {
            name: $name,
            kind: $kind,
            enumerants: $enumerants,
        }
    };
}

pub(super) static ENUMERATIONS: &[EnumerationSchema] = &[
    enumeration!("SourceLanguage", ValueEnum, SOURCE_LANGUAGE),
    enumeration!("ExecutionModel", ValueEnum, EXECUTION_MODEL),
    enumeration!("AddressingModel", ValueEnum, ADDRESSING_MODEL),
    enumeration!("MemoryModel", ValueEnum, MEMORY_MODEL),
    enumeration!("ExecutionMode", ValueEnum, EXECUTION_MODE),
    enumeration!("StorageClass", ValueEnum, STORAGE_CLASS),
    enumeration!("Dim", ValueEnum, DIM),
    enumeration!("ImageFormat", ValueEnum, IMAGE_FORMAT),
    enumeration!("AccessQualifier", ValueEnum, ACCESS_QUALIFIER),
    enumeration!("SamplerAddressingMode", ValueEnum, SAMPLER_ADDRESSING_MODE),
    enumeration!("SamplerFilterMode", ValueEnum, SAMPLER_FILTER_MODE),
    enumeration!(
        "FunctionParameterAttribute",
        ValueEnum,
        FUNCTION_PARAMETER_ATTRIBUTE
    ),
    enumeration!("FPRoundingMode", ValueEnum, FP_ROUNDING_MODE),
    enumeration!("FPFastMathMode", BitEnum, FP_FAST_MATH_MODE),
    enumeration!("FunctionControl", BitEnum, FUNCTION_CONTROL),
    enumeration!("SelectionControl", BitEnum, SELECTION_CONTROL),
    enumeration!("LoopControl", BitEnum, LOOP_CONTROL),
    enumeration!("MemoryAccess", BitEnum, MEMORY_ACCESS),
    enumeration!("ImageOperands", BitEnum, IMAGE_OPERANDS),
    enumeration!("Decoration", ValueEnum, DECORATION),
    enumeration!("LinkageType", ValueEnum, LINKAGE_TYPE),
    enumeration!("BuiltIn", ValueEnum, BUILT_IN),
    enumeration!("Capability", ValueEnum, CAPABILITY),
];
