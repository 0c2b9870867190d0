use serde::Serialize;
use spirvscope::{
    schema::{OperandKind, OperandSchema, Quantifier},
    Schema,
};

use crate::{
    app::GlobalOptions,
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
struct OpcodeEntry {
    opcode: u16,
    mnemonic: &'static str,
    operands: Vec<String>,
}

fn kind_name(kind: OperandKind) -> &'static str {
    match kind {
        OperandKind::IdRef => "IdRef",
        OperandKind::IdResult => "IdResult",
        OperandKind::IdResultType => "IdResultType",
        OperandKind::LiteralInteger => "LiteralInteger",
        OperandKind::LiteralString => "LiteralString",
        OperandKind::LiteralContextDependentNumber => "LiteralContextDependentNumber",
        OperandKind::Enumeration(name) | OperandKind::Composite(name) => name,
    }
}

fn describe(operand: &OperandSchema) -> String {
    let suffix = match operand.quantifier {
        Quantifier::Single => "",
        Quantifier::Optional => "?",
        Quantifier::Multiple => "*",
    };
    format!("{}: {}{suffix}", operand.name, kind_name(operand.kind))
}

pub fn run(opts: &GlobalOptions) -> anyhow::Result<()> {
    let entries: Vec<OpcodeEntry> = Schema::core()
        .instructions()
        .iter()
        .map(|instruction| OpcodeEntry {
            opcode: instruction.opcode,
            mnemonic: instruction.mnemonic,
            operands: instruction.operands.iter().map(describe).collect(),
        })
        .collect();

    print_output(&entries, opts, |entries| {
        let mut tw = TabWriter::new(&[
            ("Opcode", Align::Right),
            ("Mnemonic", Align::Left),
            ("Operands", Align::Left),
        ]);
        for entry in entries {
            tw.row(vec![
                entry.opcode.to_string(),
                entry.mnemonic.to_string(),
                entry.operands.join(", "),
            ]);
        }
        tw.print();
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operand_descriptions() {
        let store = Schema::core().instruction(62).unwrap();
        let described: Vec<String> = store.operands.iter().map(describe).collect();
        assert_eq!(described.last().unwrap(), "memory_access: MemoryAccess?");
    }
}
