// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{Error, Result};
use crate::store::Storage;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::rc::Rc;
use tracing::debug;
use uuid::Uuid;

/// A persisted entity addressed by a string identifier.
pub trait Record: Clone + Serialize + DeserializeOwned {
    fn id(&self) -> &str;
}

/// Owns one insertion-ordered collection and writes it back in full under
/// its key after every change. A change only becomes visible once the write
/// succeeded.
pub struct Repository<T: Record> {
    key: &'static str,
    items: Vec<T>,
    storage: Rc<dyn Storage>,
}

impl<T: Record> Repository<T> {
    /// Reads the collection stored under `key`; a missing key means empty.
    pub fn load(key: &'static str, storage: Rc<dyn Storage>) -> Result<Self> {
        let items: Vec<T> = match storage.read(key)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| Error::Corrupt {
                key: key.to_string(),
                source,
            })?,
            None => Vec::new(),
        };
        debug!(key, count = items.len(), "collection loaded");
        Ok(Self {
            key,
            items,
            storage,
        })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends the record produced by `build` under a fresh identifier.
    pub fn insert(&mut self, build: impl FnOnce(String) -> T) -> Result<T> {
        let record = build(self.fresh_id());
        let mut next = self.items.clone();
        next.push(record.clone());
        self.commit(next)?;
        debug!(key = self.key, id = record.id(), "record added");
        Ok(record)
    }

    /// Removes the record with `id`. Returns `false` and leaves the
    /// collection untouched when nothing matches.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        if self.get(id).is_none() {
            debug!(key = self.key, id, "delete: no such record");
            return Ok(false);
        }
        let next: Vec<T> = self
            .items
            .iter()
            .filter(|item| item.id() != id)
            .cloned()
            .collect();
        self.commit(next)?;
        debug!(key = self.key, id, "record deleted");
        Ok(true)
    }

    /// Applies `change` to the record with `id`, keeping its position.
    pub fn update(&mut self, id: &str, change: impl FnOnce(&mut T)) -> Result<bool> {
        let Some(pos) = self.items.iter().position(|item| item.id() == id) else {
            debug!(key = self.key, id, "update: no such record");
            return Ok(false);
        };
        let mut next = self.items.clone();
        change(&mut next[pos]);
        self.commit(next)?;
        debug!(key = self.key, id, "record updated");
        Ok(true)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().simple().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn commit(&mut self, next: Vec<T>) -> Result<()> {
        let raw = serde_json::to_string(&next).map_err(Error::Encode)?;
        self.storage.write(self.key, &raw)?;
        self.items = next;
        Ok(())
    }
}
