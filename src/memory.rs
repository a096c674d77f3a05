//! In-memory host for native builds and tests.
//!
//! DESIGN
//! ======
//! Storage and the system signal are shared between a host and the hosts
//! produced by [`MemoryHost::reload`], while each reload gets a fresh document
//! root. That mirrors a browser: `localStorage` and the OS setting outlive a
//! page view, the `<html>` element does not.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::host::{DocumentRoot, HostError, PreferenceStore, StorageOp, SystemAppearance};

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

#[derive(Debug, Default)]
struct MemoryStorage {
    entries: HashMap<String, String>,
    unavailable: bool,
    read_only: bool,
}

/// Host whose storage, system signal and document root live in memory.
#[derive(Debug, Clone)]
pub struct MemoryHost {
    storage: Rc<RefCell<MemoryStorage>>,
    /// `None` when the media query is unavailable.
    prefers_dark: Rc<Cell<Option<bool>>>,
    /// `None` when there is no root element.
    root: Rc<RefCell<Option<String>>>,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self {
            storage: Rc::default(),
            prefers_dark: Rc::new(Cell::new(Some(false))),
            root: Rc::new(RefCell::new(Some(String::new()))),
        }
    }
}

impl MemoryHost {
    /// Empty storage, a light system preference and an unclassified root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Builders ---

    #[must_use]
    pub fn with_system_dark(self, prefers_dark: bool) -> Self {
        self.prefers_dark.set(Some(prefers_dark));
        self
    }

    /// Make the dark-appearance query fail.
    #[must_use]
    pub fn without_media_query(self) -> Self {
        self.prefers_dark.set(None);
        self
    }

    #[must_use]
    pub fn with_stored(self, key: &str, value: &str) -> Self {
        self.storage.borrow_mut().entries.insert(key.to_owned(), value.to_owned());
        self
    }

    /// Make every storage call fail, as with disabled site data.
    #[must_use]
    pub fn without_storage(self) -> Self {
        self.storage.borrow_mut().unavailable = true;
        self
    }

    /// Allow reads but fail writes and removals, as with an exhausted quota.
    #[must_use]
    pub fn with_read_only_storage(self) -> Self {
        self.storage.borrow_mut().read_only = true;
        self
    }

    #[must_use]
    pub fn with_root_class(self, class_name: &str) -> Self {
        *self.root.borrow_mut() = Some(class_name.to_owned());
        self
    }

    #[must_use]
    pub fn without_root(self) -> Self {
        *self.root.borrow_mut() = None;
        self
    }

    // --- Live changes ---

    /// Change the system signal, as when the OS switches appearance.
    pub fn set_system_dark(&self, prefers_dark: bool) {
        self.prefers_dark.set(Some(prefers_dark));
    }

    /// A new page view: same storage and system signal, fresh root element.
    #[must_use]
    pub fn reload(&self) -> Self {
        Self {
            storage: Rc::clone(&self.storage),
            prefers_dark: Rc::clone(&self.prefers_dark),
            root: Rc::new(RefCell::new(Some(String::new()))),
        }
    }

    // --- Inspection ---

    /// Raw stored value under `key`, bypassing availability flags.
    #[must_use]
    pub fn stored(&self, key: &str) -> Option<String> {
        self.storage.borrow().entries.get(key).cloned()
    }

    /// Raw root class attribute, `None` without a root element.
    #[must_use]
    pub fn root_class(&self) -> Option<String> {
        self.root.borrow().clone()
    }
}

impl PreferenceStore for MemoryHost {
    fn load(&self, key: &str) -> Result<Option<String>, HostError> {
        let storage = self.storage.borrow();
        if storage.unavailable {
            return Err(HostError::StorageUnavailable);
        }
        Ok(storage.entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), HostError> {
        let mut storage = self.storage.borrow_mut();
        if storage.unavailable {
            return Err(HostError::StorageUnavailable);
        }
        if storage.read_only {
            return Err(HostError::Storage { op: StorageOp::Write, reason: "quota exceeded".into() });
        }
        storage.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), HostError> {
        let mut storage = self.storage.borrow_mut();
        if storage.unavailable {
            return Err(HostError::StorageUnavailable);
        }
        if storage.read_only {
            return Err(HostError::Storage { op: StorageOp::Remove, reason: "read-only".into() });
        }
        storage.entries.remove(key);
        Ok(())
    }
}

impl SystemAppearance for MemoryHost {
    fn prefers_dark(&self, _query: &str) -> Result<bool, HostError> {
        self.prefers_dark.get().ok_or(HostError::MediaQueryUnavailable)
    }
}

impl DocumentRoot for MemoryHost {
    fn class_name(&self) -> Result<String, HostError> {
        self.root.borrow().clone().ok_or(HostError::NoDocumentRoot)
    }

    fn set_class_name(&self, class_name: &str) -> Result<(), HostError> {
        match self.root.borrow_mut().as_mut() {
            Some(root) => {
                class_name.clone_into(root);
                Ok(())
            }
            None => Err(HostError::NoDocumentRoot),
        }
    }
}
