//! Whitespace instruction names used as keys of an assembly mnemonic table.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One of the 24 Whitespace instructions, spelled in lowercase in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Instruction {
    Push,
    Dup,
    Copy,
    Swap,
    Drop,
    Slide,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Store,
    Retrieve,
    Label,
    Call,
    Jmp,
    Jz,
    Jn,
    Ret,
    End,
    Printc,
    Printi,
    Readc,
    Readi,
}

/// Error for a mnemonic table key that names no instruction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("illegal instruction: {0}")]
pub struct IllegalInstruction(pub String);

impl Instruction {
    pub const ALL: [Instruction; 24] = [
        Instruction::Push,
        Instruction::Dup,
        Instruction::Copy,
        Instruction::Swap,
        Instruction::Drop,
        Instruction::Slide,
        Instruction::Add,
        Instruction::Sub,
        Instruction::Mul,
        Instruction::Div,
        Instruction::Mod,
        Instruction::Store,
        Instruction::Retrieve,
        Instruction::Label,
        Instruction::Call,
        Instruction::Jmp,
        Instruction::Jz,
        Instruction::Jn,
        Instruction::Ret,
        Instruction::End,
        Instruction::Printc,
        Instruction::Printi,
        Instruction::Readc,
        Instruction::Readi,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Instruction::Push => "push",
            Instruction::Dup => "dup",
            Instruction::Copy => "copy",
            Instruction::Swap => "swap",
            Instruction::Drop => "drop",
            Instruction::Slide => "slide",
            Instruction::Add => "add",
            Instruction::Sub => "sub",
            Instruction::Mul => "mul",
            Instruction::Div => "div",
            Instruction::Mod => "mod",
            Instruction::Store => "store",
            Instruction::Retrieve => "retrieve",
            Instruction::Label => "label",
            Instruction::Call => "call",
            Instruction::Jmp => "jmp",
            Instruction::Jz => "jz",
            Instruction::Jn => "jn",
            Instruction::Ret => "ret",
            Instruction::End => "end",
            Instruction::Printc => "printc",
            Instruction::Printi => "printi",
            Instruction::Readc => "readc",
            Instruction::Readi => "readi",
        }
    }
}

impl FromStr for Instruction {
    type Err = IllegalInstruction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Instruction::ALL
            .iter()
            .copied()
            .find(|inst| inst.as_str() == s)
            .ok_or_else(|| IllegalInstruction(s.to_string()))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Instruction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Instruction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
