//! Photo gallery: images stored inline as data URIs, newest batch first.

use super::generate_id;
use crate::config::PlannerConfig;
use crate::storage::{self, KeyValueStore};
use log::{error, info};
use shared::Photo;
use std::collections::HashSet;
use std::rc::Rc;

pub struct PhotoService {
    store: Rc<dyn KeyValueStore>,
    storage_key: String,
    photos: Vec<Photo>,
}

impl PhotoService {
    pub fn load(store: Rc<dyn KeyValueStore>, config: &PlannerConfig) -> Self {
        let storage_key = config.storage_keys.photos.clone();
        let photos = storage::load_or_default(store.as_ref(), &storage_key);
        Self { store, storage_key, photos }
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Prepend one batch of decoded images, keeping their selection order.
    ///
    /// The whole batch lands in a single update and a single write. Empty
    /// payloads are skipped. Returns the number of photos added.
    pub fn add_batch(&mut self, images: Vec<String>) -> usize {
        let mut taken: HashSet<String> = self.photos.iter().map(|p| p.id.clone()).collect();

        let batch: Vec<Photo> = images
            .into_iter()
            .filter(|data| !data.is_empty())
            .map(|image_data| {
                let id = generate_id(|candidate| taken.contains(candidate));
                taken.insert(id.clone());
                Photo { id, image_data }
            })
            .collect();

        let added = batch.len();
        if added == 0 {
            return 0;
        }

        info!("🖼️ Adding {} photo(s)", added);
        self.photos.splice(0..0, batch);
        self.persist();
        added
    }

    /// Returns false if no photo has this id
    pub fn remove_photo(&mut self, id: &str) -> bool {
        let before = self.photos.len();
        self.photos.retain(|p| p.id != id);
        if self.photos.len() == before {
            return false;
        }
        info!("🗑️ Removed photo {}", id);
        self.persist();
        true
    }

    fn persist(&self) {
        if let Err(e) = storage::save(self.store.as_ref(), &self.storage_key, &self.photos) {
            error!("Failed to persist photos: {:#}", e);
        }
    }
}
