//! Host-visible parameters: typed cells, named groups, and synchronous
//! change notification.
//!
//! The firmware side declares [`ParamCell`]s and binds them into a
//! [`ParamGroup`]; the host link layer reads and writes entries by name. A
//! write lands in the cell first, then runs the entry's [`ParamHandler`] in
//! the writer's context. The transport is expected to serialize writes per
//! variable, so a handler is never re-entered concurrently for the same
//! entry.

use core::cell::Cell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use heapless::Vec;

use crate::{Error, Result};

/// Host access level of a parameter entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The host may only read the value.
    ReadOnly,
    /// The host may read and write the value.
    ReadWrite,
}

/// A typed value crossing the registry boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamValue {
    /// Unsigned byte.
    U8(u8),
    /// Signed byte.
    I8(i8),
    /// Unsigned 16-bit.
    U16(u16),
}

/// Receives change notification after a successful host write.
pub trait ParamHandler: Sync {
    /// Runs synchronously in the writer's context, after the value is
    /// stored.
    fn on_update(&self);
}

/// Interior-mutable storage for one parameter value.
///
/// Readable and writable from any context; each access is a short critical
/// section.
pub struct ParamCell<T: Copy> {
    value: Mutex<CriticalSectionRawMutex, Cell<T>>,
}

impl<T: Copy> ParamCell<T> {
    /// Cell holding `initial`.
    #[must_use]
    pub const fn new(initial: T) -> Self {
        Self {
            value: Mutex::new(Cell::new(initial)),
        }
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.value.lock(Cell::get)
    }

    /// Replace the value.
    ///
    /// Does not notify handlers; notification belongs to the group write
    /// path.
    pub fn store(&self, value: T) {
        self.value.lock(|cell| cell.set(value));
    }
}

#[derive(Clone, Copy)]
enum Slot<'a> {
    U8(&'a ParamCell<u8>),
    I8(&'a ParamCell<i8>),
    U16(&'a ParamCell<u16>),
}

/// One named, typed entry bound into a [`ParamGroup`].
pub struct ParamEntry<'a> {
    name: &'static str,
    access: Access,
    slot: Slot<'a>,
    handler: Option<&'a dyn ParamHandler>,
}

impl<'a> ParamEntry<'a> {
    /// Unsigned-byte entry.
    #[must_use]
    pub fn u8(name: &'static str, access: Access, cell: &'a ParamCell<u8>) -> Self {
        Self {
            name,
            access,
            slot: Slot::U8(cell),
            handler: None,
        }
    }

    /// Signed-byte entry.
    #[must_use]
    pub fn i8(name: &'static str, access: Access, cell: &'a ParamCell<i8>) -> Self {
        Self {
            name,
            access,
            slot: Slot::I8(cell),
            handler: None,
        }
    }

    /// Unsigned 16-bit entry.
    #[must_use]
    pub fn u16(name: &'static str, access: Access, cell: &'a ParamCell<u16>) -> Self {
        Self {
            name,
            access,
            slot: Slot::U16(cell),
            handler: None,
        }
    }

    /// Attach a change handler, run after each successful host write.
    #[must_use]
    pub fn with_handler(mut self, handler: &'a dyn ParamHandler) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Entry name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Entry access level.
    #[must_use]
    pub fn access(&self) -> Access {
        self.access
    }

    fn read(&self) -> ParamValue {
        match self.slot {
            Slot::U8(cell) => ParamValue::U8(cell.get()),
            Slot::I8(cell) => ParamValue::I8(cell.get()),
            Slot::U16(cell) => ParamValue::U16(cell.get()),
        }
    }

    fn write(&self, value: ParamValue) -> Result<()> {
        if self.access == Access::ReadOnly {
            return Err(Error::ParamReadOnly);
        }
        match (self.slot, value) {
            (Slot::U8(cell), ParamValue::U8(v)) => cell.store(v),
            (Slot::I8(cell), ParamValue::I8(v)) => cell.store(v),
            (Slot::U16(cell), ParamValue::U16(v)) => cell.store(v),
            _ => return Err(Error::ParamTypeMismatch),
        }
        if let Some(handler) = self.handler {
            handler.on_update();
        }
        Ok(())
    }
}

/// A named group of parameter entries with lookup by name.
pub struct ParamGroup<'a, const N: usize> {
    name: &'static str,
    entries: Vec<ParamEntry<'a>, N>,
}

impl<'a, const N: usize> ParamGroup<'a, N> {
    /// Empty group.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    /// Group name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no entry is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bind an entry.
    ///
    /// # Errors
    ///
    /// [`Error::ParamAlreadyDeclared`] on a duplicate name,
    /// [`Error::ParamGroupFull`] when capacity is exhausted.
    pub fn add(&mut self, entry: ParamEntry<'a>) -> Result<()> {
        if self.entries.iter().any(|e| e.name == entry.name) {
            return Err(Error::ParamAlreadyDeclared { name: entry.name });
        }
        self.entries.push(entry).map_err(|_| Error::ParamGroupFull)
    }

    /// Read an entry by name.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownParam`] when no entry has that name.
    pub fn read(&self, name: &str) -> Result<ParamValue> {
        Ok(self.find(name)?.read())
    }

    /// Write an entry by name, then run its change handler.
    ///
    /// The handler executes synchronously in the caller's context. The
    /// transport must not overlap writes to the same entry.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownParam`], [`Error::ParamReadOnly`], or
    /// [`Error::ParamTypeMismatch`].
    pub fn write(&self, name: &str, value: ParamValue) -> Result<()> {
        self.find(name)?.write(value)
    }

    fn find(&self, name: &str) -> Result<&ParamEntry<'a>> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .ok_or(Error::UnknownParam)
    }
}
