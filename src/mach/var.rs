use super::Val;
use num_traits::Zero;
use std::collections::BTreeMap;

/// ## Variable memory
///
/// One scalar slot per variable letter `a`..`z`, zero at construction.

#[derive(Debug)]
pub struct Var {
    vars: [Val; 26],
}

impl Var {
    pub fn new() -> Var {
        Var {
            vars: std::array::from_fn(|_| Val::zero()),
        }
    }

    pub fn fetch(&self, name: char) -> Val {
        self.vars[Var::slot(name)].clone()
    }

    pub fn store(&mut self, name: char, value: Val) {
        self.vars[Var::slot(name)] = value;
    }

    fn slot(name: char) -> usize {
        debug_assert!(name.is_ascii_lowercase());
        (name as u8 - b'a') as usize
    }
}

impl Default for Var {
    fn default() -> Var {
        Var::new()
    }
}

/// ## Indexed memory
///
/// The sparse address space behind `letter[expression]`. Cells are
/// created on first write and read as zero until then. A separate
/// address space from the scalar variables.

#[derive(Debug, Default)]
pub struct Memory {
    cells: BTreeMap<Val, Val>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory::default()
    }

    pub fn fetch(&self, index: &Val) -> Val {
        match self.cells.get(index) {
            Some(value) => value.clone(),
            None => Val::zero(),
        }
    }

    pub fn store(&mut self, index: Val, value: Val) {
        self.cells.insert(index, value);
    }
}
