//! Code generation state for one pass.

use rustc_hash::FxHashMap;

use crate::{Address, Instruction};

/// Slot table, counters and output of a single generation pass.
///
/// Addresses are handed out in first-assignment order and never reused.
/// Label ids come from one counter shared by every construct.
#[derive(Debug, Default)]
pub struct CodegenContext {
    slots: FxHashMap<String, Address>,
    next_address: Address,
    label_counter: u32,
    instructions: Vec<Instruction>,
}

impl CodegenContext {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn emit(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Address of an already assigned variable.
    #[inline]
    pub fn slot(&self, name: &str) -> Option<Address> {
        self.slots.get(name).copied()
    }

    /// Address for `name`, allocating the next free one on first use.
    pub fn slot_or_allocate(&mut self, name: &str) -> Address {
        if let Some(addr) = self.slot(name) {
            return addr;
        }
        let addr = self.next_address;
        self.next_address += 1;
        self.slots.insert(name.to_string(), addr);
        addr
    }

    /// Next label id.
    pub fn fresh_label_id(&mut self) -> u32 {
        let id = self.label_counter;
        self.label_counter += 1;
        id
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn into_instructions(self) -> Vec<Instruction> {
        self.instructions
    }

    /// Number of distinct variables seen so far.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}
