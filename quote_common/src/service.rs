//! The five quote handlers.
//!
//! `QuoteService` owns the store and the id generator and exposes one method per
//! operation. Handlers are synchronous and in-memory; callers that dispatch requests
//! concurrently must serialize access (the server keeps the service behind a mutex).

use std::collections::HashSet;

use log::{debug, warn};

use crate::id::{IdGenerator, IdStrategy};
use crate::quote::{Created, Quote, QuoteData, QuoteFields, QuoteList};
use crate::result::Result;
use crate::store::QuoteStore;

/// Store plus id generator, with the list/create/get/update/delete handlers.
pub struct QuoteService {
    store: QuoteStore,
    ids: Box<dyn IdGenerator>,
    issued: HashSet<String>,
}

impl QuoteService {
    /// Service over `store` handing out ids from `ids`.
    pub fn new(store: QuoteStore, ids: Box<dyn IdGenerator>) -> Self {
        let issued = store.list_all().iter().map(|q| q.id.clone()).collect();
        Self { store, ids, issued }
    }

    /// Empty store, sequential ids.
    pub fn in_memory() -> Self {
        Self::new(QuoteStore::new(), IdStrategy::Sequential.build())
    }

    /// Read-only access to the underlying store.
    pub fn store(&self) -> &QuoteStore {
        &self.store
    }

    /// `GET /quotes`
    pub fn list(&self) -> QuoteList {
        QuoteList {
            quotes: self.store.list_all().to_vec(),
        }
    }

    /// `POST /quotes`
    pub fn create(&mut self, fields: QuoteFields) -> Created {
        let id = self.fresh_id();
        self.store.append(Quote::new(id.clone(), fields));
        debug!("Created quote {}", id);
        Created { id }
    }

    /// `GET /quotes/:id`
    pub fn get_one(&self, id: &str) -> Result<QuoteData> {
        let quote = self.store.find_by_id(id).inspect_err(|_| {
            warn!("Quote {} not found", id);
        })?;
        Ok(QuoteData { data: quote.clone() })
    }

    /// `PUT /quotes/:id`
    pub fn update_one(&mut self, id: &str, fields: QuoteFields) -> Result<QuoteData> {
        let quote = self.store.replace_fields(id, fields).inspect_err(|_| {
            warn!("Update of unknown quote {}", id);
        })?;
        debug!("Updated quote {}", id);
        Ok(QuoteData { data: quote.clone() })
    }

    /// `DELETE /quotes/:id`
    pub fn delete_one(&mut self, id: &str) -> Result<()> {
        self.store.remove_by_id(id).inspect_err(|_| {
            warn!("Delete of unknown quote {}", id);
        })?;
        debug!("Deleted quote {}", id);
        Ok(())
    }

    // Every id ever held by this service, seeded or created, stays reserved after delete.
    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.next_id();
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }
}
