//! Core composite record kinds.

use super::{CompositeField, CompositeSchema, FieldKind};

pub(super) static COMPOSITES: &[CompositeSchema] = &[
    CompositeSchema {
        name: "PairLiteralIntegerIdRef",
        fields: &[
            CompositeField {
                name: "literal",
                kind: FieldKind::LiteralInteger,
            },
            CompositeField {
                name: "id",
                kind: FieldKind::IdRef,
            },
        ],
    },
    CompositeSchema {
        name: "PairIdRefLiteralInteger",
        fields: &[
            CompositeField {
                name: "id",
                kind: FieldKind::IdRef,
            },
            CompositeField {
                name: "literal",
                kind: FieldKind::LiteralInteger,
            },
        ],
    },
    CompositeSchema {
        name: "PairIdRefIdRef",
        fields: &[
            CompositeField {
                name: "id_1",
                kind: FieldKind::IdRef,
            },
            CompositeField {
                name: "id_2",
                kind: FieldKind::IdRef,
            },
        ],
    },
];
